// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for commands that resolve build parameters.
//!
//! ```text
//! (default)               read parameters from the environment
//! --command-line "LINE"   read parameters from LINE (-KEY VALUE ...)
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::plan::types::BuildTarget;

/// Where build parameters are read from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Raw command line to read '-KEY VALUE' parameters from, instead of
    /// environment variables.
    #[arg(long = "command-line", value_name = "LINE", allow_hyphen_values = true)]
    pub command_line: Option<String>,
}

/// Arguments for the `params` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Prints JSON instead of aligned lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `symbols` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SymbolsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Prints one symbol per line instead of the ';'-joined string.
    #[arg(long)]
    pub list: bool,
}

/// Arguments for the `plan` command.
#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Target platform: android, ios or standalone.
    #[arg(value_name = "TARGET")]
    pub target: BuildTarget,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Prints the plan as JSON.
    #[arg(long, conflicts_with = "settings")]
    pub json: bool,

    /// Prints the settings the plan applies, in order.
    #[arg(long)]
    pub settings: bool,
}

/// Arguments for the `build-info` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildInfoArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output file, overrides paths.build_info.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvArgs {
    /// Output file, overrides paths.env_dump (or paths.diagnostics).
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Writes the full invocation report (arguments, environment, command line).
    #[arg(long)]
    pub diagnostics: bool,
}
