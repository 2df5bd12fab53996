use crate::GridInt;

/// Game parameters, fixed at construction. Must pass `validate` before a
/// game is created, so the placement loops never run against an infeasible
/// layout.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub rows: GridInt,
    pub cols: GridInt,
    pub obstacle_count: usize,
    pub initial_snake_len: usize,
    pub max_snake_len: usize,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.rows < 7 || self.cols < 7 {
            return Err("Board must be at least 7x7".to_string());
        }
        if self.rows > 100 || self.cols > 100 {
            return Err("Board dimensions must be at most 100".to_string());
        }
        if self.initial_snake_len < 2 {
            return Err("Initial snake length must be at least 2".to_string());
        }
        if self.initial_snake_len > self.cols as usize - 2 {
            return Err(format!(
                "Initial snake length {} does not fit in a {}-column board",
                self.initial_snake_len, self.cols
            ));
        }
        if self.max_snake_len < self.initial_snake_len {
            return Err("Max snake length must be at least the initial length".to_string());
        }
        if self.max_snake_len > self.interior_area() {
            return Err("Max snake length cannot exceed the interior area".to_string());
        }
        // Keep at least half the interior free so rejection sampling stays
        // well inside its attempt cap.
        if self.obstacle_count + self.initial_snake_len + 1 > self.interior_area() / 2 {
            return Err(format!(
                "{} obstacles leave too little free space on a {}x{} board",
                self.obstacle_count, self.rows, self.cols
            ));
        }
        Ok(())
    }

    pub fn interior_area(&self) -> usize {
        (self.rows as usize - 2) * (self.cols as usize - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> GameConfig {
        GameConfig {
            rows: 30,
            cols: 30,
            obstacle_count: 20,
            initial_snake_len: 5,
            max_snake_len: 200,
        }
    }

    #[test]
    fn test_canonical_config_is_valid() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_board_too_small() {
        let config = GameConfig { rows: 4, ..base() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_many_obstacles() {
        let config = GameConfig {
            obstacle_count: 500,
            ..base()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_snake_longer_than_a_row() {
        let config = GameConfig {
            initial_snake_len: 29,
            max_snake_len: 300,
            ..base()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_below_initial_length() {
        let config = GameConfig {
            max_snake_len: 4,
            ..base()
        };
        assert!(config.validate().is_err());
    }
}
