use std::str::FromStr;

/// A named difficulty preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "medium" | "normal" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            _ => Err(()),
        }
    }
}

/// Search depth paired with the chance of playing a random move instead.
///
/// `depth` must be at least 1; `random_factor` is read as a probability
/// in `[0, 1]`. The pair is fixed for the lifetime of a search call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub depth: usize,
    pub random_factor: f64,
}

impl Difficulty {
    pub fn from_level(level: Level) -> Self {
        match level {
            Level::Easy => Self {
                depth: 2,
                random_factor: 0.4,
            },
            Level::Medium => Self {
                depth: 4,
                random_factor: 0.2,
            },
            Level::Hard => Self {
                depth: 6,
                random_factor: 0.0,
            },
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::from_level(Level::Medium)
    }
}
