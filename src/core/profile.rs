//! Core domain: persisted player profile.
//!
//! The profile accumulates play statistics across sessions. It is cleared
//! only through the explicit [`PlayerProfile::clear`] call, never as part
//! of character setup.

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for profile persistence failures.
#[derive(Debug)]
pub struct ProfileError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Profile file {}: {}", self.file, self.message)
    }
}

/// Where the profile lives on disk.
#[derive(Resource, Debug, Clone)]
pub struct ProfilePath(pub PathBuf);

impl Default for ProfilePath {
    fn default() -> Self {
        Self(PathBuf::from("profile.ron"))
    }
}

/// Persisted, accumulated play statistics.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub landings: u64,
    pub crouches: u64,
}

impl PlayerProfile {
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let contents = fs::read_to_string(path).map_err(|e| ProfileError {
            file: path.display().to_string(),
            message: format!("IO error: {}", e),
        })?;

        Options::default().from_str(&contents).map_err(|e| ProfileError {
            file: path.display().to_string(),
            message: format!("Parse error: {}", e),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ProfileError {
                file: path.display().to_string(),
                message: format!("Serialize error: {}", e),
            })?;

        fs::write(path, contents).map_err(|e| ProfileError {
            file: path.display().to_string(),
            message: format!("IO error: {}", e),
        })
    }

    /// Reset all persisted values and remove the backing file.
    pub fn clear(&mut self, path: &Path) -> Result<(), ProfileError> {
        *self = Self::default();

        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ProfileError {
                file: path.display().to_string(),
                message: format!("IO error: {}", e),
            }),
        }
    }
}
