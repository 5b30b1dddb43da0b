//! Project configuration loaded from `ams.json`.
//!
//! Every key is optional; missing keys take their defaults and unknown keys
//! are rejected so typos surface instead of being ignored.

use std::fs;
use std::path::{Path, PathBuf};

use ams_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

/// Compiler settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Parse every flattened line with the command grammar.
    pub validate: bool,
    /// Refuse to write output when any line fails validation.
    pub fail_on_invalid: bool,
    /// Extension used for derived output paths, without the dot.
    pub extension: String,
    /// Use ANSI colors in diagnostics.
    pub color: bool,
    /// Print the macro tree before compiling.
    pub show_tree: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validate: false,
            fail_on_invalid: false,
            extension: "mcfunction".to_string(),
            color: true,
            show_tree: false,
        }
    }
}

impl Config {
    /// Default configuration file name.
    pub const FILE_NAME: &'static str = "ams.json";

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed JSON, wrongly typed values,
    /// unknown keys, or an empty extension.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(|e| Error::config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration
    /// error if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path.display(), &e))?;
        Self::from_json(&text)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), config_message(&e))))
    }

    /// Loads `ams.json` from `dir` if present, otherwise returns defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Derives the output path for an input file.
    #[must_use]
    pub fn output_path(&self, input: &Path) -> PathBuf {
        input.with_extension(self.extension.trim_start_matches('.'))
    }

    fn check(&self) -> Result<()> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(Error::config("extension must not be empty"));
        }
        if extension.contains(['/', '\\']) {
            return Err(Error::config(format!(
                "extension '{}' must not contain a path separator",
                self.extension
            )));
        }
        Ok(())
    }
}

fn config_message(error: &Error) -> String {
    match &error.kind {
        ams_foundation::ErrorKind::Config(message) => message.clone(),
        _ => error.to_string(),
    }
}
