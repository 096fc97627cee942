// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `params` and `symbols` commands.

use tracing::info;

use super::resolve_params;
use crate::cli::params::{ParamsArgs, SymbolsArgs};
use crate::config::Config;
use crate::error::Result;
use crate::symbols;

/// Prints every resolved parameter.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_params_command(args: &ParamsArgs, config: &Config) -> Result<()> {
    let params = resolve_params(&args.source, config);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        for line in params.format_lines() {
            println!("{line}");
        }
    }
    Ok(())
}

/// Prints the define symbols a build would apply.
pub fn run_symbols_command(args: &SymbolsArgs, config: &Config) {
    let params = resolve_params(&args.source, config);
    let composed = symbols::compose(&params);
    info!(version = params.version(), "composed define symbols");

    if args.list {
        for symbol in symbols::split_symbols(&composed) {
            println!("{symbol}");
        }
    } else {
        println!("{composed}");
    }
}
