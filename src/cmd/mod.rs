// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config, params, plan, report
//! ```

pub mod config;
pub mod params;
pub mod plan;
pub mod report;

use tracing::debug;

use crate::cli::params::SourceArgs;
use crate::config::Config;
use crate::params::build_params::supplied_keys;
use crate::params::{BuildParams, CommandLineSource, EnvSource};

/// Resolves parameters from `--command-line` if given, else the environment.
#[must_use]
pub fn resolve_params(args: &SourceArgs, config: &Config) -> BuildParams {
    let current = config.player.bundle_version.as_str();
    match &args.command_line {
        Some(line) => {
            let source = CommandLineSource::new(line.as_str());
            debug!(supplied = ?supplied_keys(&source), "reading parameters from command line");
            BuildParams::resolve(&source, current)
        }
        None => {
            let source = EnvSource::capture();
            debug!(supplied = ?supplied_keys(&source), "reading parameters from environment");
            BuildParams::resolve(&source, current)
        }
    }
}
