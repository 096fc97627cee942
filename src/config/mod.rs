// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for ubuild.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ubuild.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. UBUILD_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! UBUILD_GLOBAL__DRY=true               → global.dry = true
//! UBUILD_PLAYER__BUNDLE_VERSION=1.4     → player.bundle_version = "1.4"
//! UBUILD_PATHS__OUTPUT_ROOT=/ci/project → paths.output_root = "/ci/project"
//! ```
//!
//! Sections and keys are separated by a double underscore so that keys can
//! keep their own underscores.
//!
//! Build parameters themselves (`APP_VERSION`, `BUILD_NUMBER`, ...) are not
//! configuration; they are read by [`crate::params`].

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GlobalConfig, PlayerConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Current player settings.
    pub player: PlayerConfig,
    /// Output and report paths.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ubuild::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("ci/ubuild.toml")
    ///     .add_toml_file_optional("ubuild.toml")
    ///     .with_env_prefix("UBUILD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a required path is empty.
    pub fn validate(&self) -> Result<()> {
        self.paths.validate()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_player_options(&mut options);
        self.format_paths_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(|| "(none)".to_string(), |p| p.display().to_string()),
        );
    }

    fn format_player_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "player.bundle_version".into(),
            self.player.bundle_version.clone(),
        );
        options.insert(
            "player.ios_architecture".into(),
            self.player.ios_architecture().name().to_string(),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Path| p.display().to_string();

        options.insert("paths.output_root".into(), fmt(&self.paths.output_root));
        options.insert("paths.build_info".into(), fmt(&self.paths.build_info));
        options.insert("paths.env_dump".into(), fmt(&self.paths.env_dump));
        options.insert("paths.diagnostics".into(), fmt(&self.paths.diagnostics));
    }
}
