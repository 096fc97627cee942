// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for ubuild using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! ubuild [global options] <command>
//! version
//! options
//! inis
//! params     [--command-line LINE] [--json]
//! symbols    [--command-line LINE] [--list]
//! plan       <android|ios|standalone> [--command-line LINE] [--json|--settings]
//! build-info [--command-line LINE] [-o FILE]
//! env        [-o FILE] [--diagnostics]
//! ```

pub mod global;
pub mod params;


use crate::cli::global::GlobalOptions;
use crate::cli::params::{BuildInfoArgs, EnvArgs, ParamsArgs, PlanArgs, SymbolsArgs};
use clap::{Parser, Subcommand};

/// Player Build Parameter Resolver
///
/// Resolves CI build parameters into player build plans.
#[derive(Debug, Parser)]
#[command(
    name = "ubuild",
    author,
    version,
    about = "Player Build Parameter Resolver",
    long_about = "ubuild Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves build parameters from environment variables or a raw\n\
                  '-KEY VALUE' command line and derives per-target player build\n\
                  plans from them. See `ubuild <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, ubuild loads `ubuild.toml` from the current directory\n\
                  if it exists. Additional files can be specified with --ini, those\n\
                  are loaded after it and override it. UBUILD_<SECTION>__<KEY>\n\
                  environment variables override files. Use --no-default-inis to\n\
                  only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by ubuild.
    Inis,

    /// Resolves and prints every build parameter.
    Params(ParamsArgs),

    /// Prints the composed scripting define symbols.
    Symbols(SymbolsArgs),

    /// Derives the player build plan for a target.
    Plan(PlanArgs),

    /// Writes the build info file.
    #[command(name = "build-info")]
    BuildInfo(BuildInfoArgs),

    /// Dumps environment variables or a diagnostics report.
    Env(EnvArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
