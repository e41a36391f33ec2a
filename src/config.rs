//! Runtime configuration.
//!
//! Holds the default sample rate and where encoded clips are stored when
//! no explicit output path is given.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::audio::SampleRate;

/// Runtime configuration for the audio tool.
///
/// Loaded from environment variables at startup; command-line flags
/// override individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AudioConfig {
    /// Sample rate assumed for incoming PCM when none is given.
    pub sample_rate: SampleRate,

    /// Directory for clips written under their content id.
    /// If None, uses the platform-specific default data location.
    pub output_dir: Option<PathBuf>,
}

impl AudioConfig {
    /// Creates an AudioConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an AudioConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `SPRACH_SAMPLE_RATE` - Default PCM sample rate in Hz
    /// - `SPRACH_OUTPUT_DIR` - Directory for content-addressed clips
    ///
    /// Falls back to defaults for unset or invalid variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(rate_str) = lookup("SPRACH_SAMPLE_RATE") {
            match SampleRate::parse(&rate_str) {
                Ok(rate) => config.sample_rate = rate,
                Err(e) => tracing::warn!("ignoring SPRACH_SAMPLE_RATE: {}", e.message),
            }
        }

        if let Some(dir) = lookup("SPRACH_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                config.output_dir = Some(PathBuf::from(dir));
            }
        }

        config
    }

    /// Returns the effective output directory, using platform defaults if not specified.
    pub fn effective_output_dir(&self) -> PathBuf {
        if let Some(ref path) = self.output_dir {
            path.clone()
        } else {
            default_output_dir()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if let Some(ref dir) = self.output_dir {
            if dir.is_file() {
                return Some(format!("output_dir is a file: {}", dir.display()));
            }
        }

        None
    }
}

/// Returns the platform-specific default clip directory.
///
/// Uses the `directories` crate to find appropriate locations:
/// - macOS: ~/Library/Application Support/sprachkurs/clips
/// - Linux: ~/.local/share/sprachkurs/clips
/// - Windows: C:\Users\<user>\AppData\Roaming\sprachkurs\data\clips
fn default_output_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "sprachkurs") {
        proj_dirs.data_dir().join("clips")
    } else {
        // Fallback to current directory
        PathBuf::from("./clips")
    }
}
