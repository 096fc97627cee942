// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        ← Additional config files (can repeat)
//! --dry             ← Log file writes instead of performing them
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (falls back to --log-level)
//! --log-file FILE   ← Also log to FILE
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > UBUILD_* > --ini > ubuild.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(
        short = 'i',
        long = "ini",
        value_name = "FILE",
        action = clap::ArgAction::Append,
        global = true
    )]
    pub inis: Vec<PathBuf>,

    /// Logs file writes (build info, reports) instead of performing them.
    #[arg(long, global = true)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6),
        global = true
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(
        long = "file-log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=6),
        global = true
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'player.bundle_version=1.2'.
    /// Can be specified multiple times.
    #[arg(
        short = 's',
        long = "set",
        value_name = "OPTION",
        action = clap::ArgAction::Append,
        global = true
    )]
    pub options: Vec<String>,

    /// Disables loading ubuild.toml from the current directory.
    #[arg(long = "no-default-inis", global = true)]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a `--set` entry that is not
    /// `KEY=VALUE` with a non-empty key.
    pub fn to_config_overrides(&self) -> Result<Vec<(String, String)>, ConfigError> {
        let mut overrides = self
            .options
            .iter()
            .map(|option| parse_set_option(option))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level".into(), level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level".into(), level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file".into(), path.display().to_string()));
        }

        if self.dry {
            overrides.push(("global.dry".into(), "true".into()));
        }

        Ok(overrides)
    }
}

fn parse_set_option(option: &str) -> Result<(String, String), ConfigError> {
    match option.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "set".to_string(),
            message: format!("expected KEY=VALUE, got '{option}'"),
        }),
    }
}
