//! Invocation parameters and their validation.
//!
//! The three required parameters (target locale, `;`-joined source roots,
//! mode) are validated as a set before any file I/O: a malformed locale,
//! an empty source path or an unrecognized mode stops the run.

use std::path::PathBuf;
use std::str::FromStr;

use icu_locale::Locale;

use crate::error::{PropsError, Result};

/// Direction of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write translation files from the documentation model
    Export,
    /// Read edited translation files back into the source tree
    Import,
}

impl FromStr for Mode {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self> {
        // Case-insensitive, matching the original option handling
        match s.to_lowercase().as_str() {
            "export" => Ok(Mode::Export),
            "import" => Ok(Mode::Import),
            _ => Err(PropsError::InvalidMode {
                given: s.to_string(),
            }),
        }
    }
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub locale: String,
    /// Source roots searched for existing translations, in order
    pub source_roots: Vec<PathBuf>,
    pub mode: Mode,
}

impl Config {
    /// Validate the raw parameter values and build a configuration.
    ///
    /// # Errors
    /// - Locale that does not parse as a language code
    /// - Source path with no usable roots
    /// - Mode outside [import|export]
    pub fn new(locale: &str, sourcepath: &str, mode: &str) -> Result<Self> {
        locale
            .parse::<Locale>()
            .map_err(|e| PropsError::InvalidLocale {
                locale: locale.to_string(),
                reason: e.to_string(),
            })?;

        let source_roots: Vec<PathBuf> = sourcepath
            .split(';')
            .filter(|part| !part.trim().is_empty())
            .map(PathBuf::from)
            .collect();
        if source_roots.is_empty() {
            return Err(PropsError::EmptySourcePath);
        }

        Ok(Config {
            locale: locale.to_string(),
            source_roots,
            mode: mode.parse()?,
        })
    }
}
