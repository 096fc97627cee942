// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for ubuild.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PlayerConfig, PathsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::plan::types::IosArchitecture;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log file writes instead of performing them.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Player settings as currently configured in the project.
///
/// These stand in for values the engine would report; parameters resolved
/// from CI override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Bundle version used when `APP_VERSION` is not supplied.
    pub bundle_version: String,
    /// iOS architecture index (0=ARMv7, 1=ARM64, 2=Universal).
    pub ios_architecture: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            bundle_version: "0.1".to_string(),
            ios_architecture: 1,
        }
    }
}

impl PlayerConfig {
    #[must_use]
    pub const fn ios_architecture(&self) -> IosArchitecture {
        IosArchitecture::from_index(self.ios_architecture)
    }
}
