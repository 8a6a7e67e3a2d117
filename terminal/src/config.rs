use std::fmt;
use std::num::IntErrorKind;

use thiserror::Error;

/// Largest board edge. Cursor rows and columns are 16-bit and written one-based,
/// and the cursor is parked on the row below the board after a run.
pub const MAX_DIMENSION: i64 = u16::MAX as i64 - 1;

/// One of the three values asked for before a run.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Field {
    Height,
    Width,
    Generations,
}

impl Field {
    pub fn prompt(self) -> &'static str {
        match self {
            Field::Height => "board height?",
            Field::Width => "board width?",
            Field::Generations => "how many generations?",
        }
    }

    fn min(self) -> i64 {
        match self {
            Field::Height | Field::Width => 1,
            Field::Generations => 0,
        }
    }

    fn max(self) -> i64 {
        match self {
            Field::Height | Field::Width => MAX_DIMENSION,
            Field::Generations => i64::MAX - 1,
        }
    }

    /// Parse a line typed by the user into a value within this field's range.
    pub fn parse(self, input: &str) -> Result<i64, ConfigError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Empty { field: self });
        }
        let value: i64 = trimmed.parse().map_err(|err: std::num::ParseIntError| match err.kind() {
            IntErrorKind::PosOverflow => ConfigError::TooLarge {
                field: self,
                max: self.max(),
            },
            IntErrorKind::NegOverflow => ConfigError::TooSmall {
                field: self,
                min: self.min(),
            },
            _ => ConfigError::NotANumber {
                field: self,
                input: trimmed.to_owned(),
            },
        })?;
        if value < self.min() {
            return Err(ConfigError::TooSmall {
                field: self,
                min: self.min(),
            });
        }
        if value > self.max() {
            return Err(ConfigError::TooLarge {
                field: self,
                max: self.max(),
            });
        }
        Ok(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Height => "board height",
            Field::Width => "board width",
            Field::Generations => "generation count",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} is required")]
    Empty { field: Field },
    #[error("{field} must be a whole number, got {input:?}")]
    NotANumber { field: Field, input: String },
    #[error("{field} must be at least {min}")]
    TooSmall { field: Field, min: i64 },
    #[error("{field} must be at most {max}")]
    TooLarge { field: Field, max: i64 },
}

/// Validated parameters of a single run.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Highest generation index; the run performs `generations + 1` steps.
    pub generations: u64,
}

impl Config {
    pub fn parse(height: &str, width: &str, generations: &str) -> Result<Self, ConfigError> {
        let height = Field::Height.parse(height)?;
        let width = Field::Width.parse(width)?;
        let generations = Field::Generations.parse(generations)?;
        Ok(Config::from_values(height, width, generations))
    }

    /// Build from values already checked by [`Field::parse`].
    pub(crate) fn from_values(height: i64, width: i64, generations: i64) -> Self {
        Config {
            width: width as usize,
            height: height as usize,
            generations: generations as u64,
        }
    }
}
