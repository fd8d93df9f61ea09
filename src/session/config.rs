//! Display options for an interactive session.
//!
//! Loaded from JSON (every field optional) and then overridden by
//! command-line flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("reading {}: {}", .path.display(), .source)]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid configuration object.
    #[error("parsing {}: {}", .path.display(), .source)]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

/// What the session prints before each prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Print the score board.
    pub show_score: bool,

    /// Print how many pins are standing.
    pub show_pins_left: bool,

    /// Print the list of legal next rolls.
    pub show_possible_rolls: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_score: true,
            show_pins_left: true,
            show_possible_rolls: true,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the score board is printed.
    #[must_use]
    pub fn with_score(mut self, show: bool) -> Self {
        self.show_score = show;
        self
    }

    /// Set whether the standing pin count is printed.
    #[must_use]
    pub fn with_pins_left(mut self, show: bool) -> Self {
        self.show_pins_left = show;
        self
    }

    /// Set whether the legal next rolls are printed.
    #[must_use]
    pub fn with_possible_rolls(mut self, show: bool) -> Self {
        self.show_possible_rolls = show;
        self
    }

    /// Parse a JSON configuration.
    ///
    /// Only a JSON object is accepted; arrays and scalars are rejected.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        serde_json::from_value(serde_json::Value::Object(object))
    }

    /// Read a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
