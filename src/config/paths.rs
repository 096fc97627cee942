// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! output_root/
//!   GradleProject/            (android output)
//!   XcodeProject/             (ios output)
//!   Standalone/               (desktop output)
//!   Assets/Resources/BuildInfo.txt
//!   EnvironmentVariables.tmp
//!   BuildTest.txt
//! ```
//!
//! Relative file paths are resolved against `output_root`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::plan::types::BuildTarget;

/// Output and report locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root that relative paths are resolved against.
    pub output_root: PathBuf,
    /// Build info file written before a build.
    pub build_info: PathBuf,
    /// Environment variable dump.
    pub env_dump: PathBuf,
    /// Invocation diagnostics report.
    pub diagnostics: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            build_info: PathBuf::from("Assets/Resources/BuildInfo.txt"),
            env_dump: PathBuf::from("EnvironmentVariables.tmp"),
            diagnostics: PathBuf::from("BuildTest.txt"),
        }
    }
}

impl PathsConfig {
    /// Checks that every file path is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for the first empty path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let files = [
            ("build_info", &self.build_info),
            ("env_dump", &self.env_dump),
            ("diagnostics", &self.diagnostics),
        ];
        for (key, path) in files {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::MissingKey {
                    section: "paths".to_string(),
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolves `path` against `output_root` unless it is absolute.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.output_root.join(path)
        }
    }

    #[must_use]
    pub fn build_info_path(&self) -> PathBuf {
        self.resolve(&self.build_info)
    }

    #[must_use]
    pub fn env_dump_path(&self) -> PathBuf {
        self.resolve(&self.env_dump)
    }

    #[must_use]
    pub fn diagnostics_path(&self) -> PathBuf {
        self.resolve(&self.diagnostics)
    }

    /// Where `target`'s player output goes.
    #[must_use]
    pub fn target_output(&self, target: BuildTarget) -> PathBuf {
        self.output_root.join(target.default_output())
    }
}
