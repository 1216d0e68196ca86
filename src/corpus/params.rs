//! Aggregation parameters and their validation.
//!
//! Validation is up-front and fatal: a bad grid size or alphabet is
//! rejected before any sample is read.

use serde::Deserialize;

/// Knobs for one corpus build.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CorpusParams {
    /// Partition rows/columns; feature vectors get `grid_size`² bits.
    pub grid_size: usize,
    /// Crop surrounding whitespace before partitioning.
    pub crop: bool,
    /// Closed label alphabet; samples outside it are skipped.
    pub labels: String,
}

impl Default for CorpusParams {
    fn default() -> Self {
        Self {
            grid_size: 20,
            crop: true,
            labels: "0123456789".to_string(),
        }
    }
}

impl CorpusParams {
    pub fn alphabet(&self) -> Vec<char> {
        self.labels.chars().collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize {
                grid_size: self.grid_size,
            });
        }
        let alphabet = self.alphabet();
        if alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        for (i, &label) in alphabet.iter().enumerate() {
            if alphabet[..i].contains(&label) {
                return Err(ConfigError::DuplicateLabel { label });
            }
        }
        Ok(())
    }
}

/// Fatal configuration problems, reported before any work begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidGridSize { grid_size: usize },
    EmptyAlphabet,
    DuplicateLabel { label: char },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidGridSize { grid_size } => {
                write!(f, "grid size must be positive (got {grid_size})")
            }
            ConfigError::EmptyAlphabet => write!(f, "label alphabet is empty"),
            ConfigError::DuplicateLabel { label } => {
                write!(f, "label '{label}' appears twice in the alphabet")
            }
        }
    }
}
