// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `build-info` and `env` commands.

use tracing::info;

use super::resolve_params;
use crate::build_info::{BuildInfo, format_diagnostics, format_env_dump, write_report};
use crate::cli::params::{BuildInfoArgs, EnvArgs};
use crate::config::Config;
use crate::core::env::current_env;
use crate::error::Result;

/// Writes the build info file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn run_build_info_command(args: &BuildInfoArgs, config: &Config) -> Result<()> {
    let params = resolve_params(&args.source, config);
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| config.paths.build_info_path());
    BuildInfo::from_params(&params)
        .write(&path, config.global.dry)
        .await?;
    Ok(())
}

/// Writes the environment dump, or the diagnostics report.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let env = current_env();
    let (path, content) = if args.diagnostics {
        let process_args: Vec<String> = std::env::args().collect();
        let command_line = process_args.join(" ");
        (
            config.paths.diagnostics_path(),
            format_diagnostics(&process_args, &env, &command_line),
        )
    } else {
        (config.paths.env_dump_path(), format_env_dump(&env))
    };
    let path = args.output.clone().unwrap_or(path);

    info!(path = %path.display(), variables = env.len(), "writing environment report");
    write_report(&path, &content, config.global.dry).await?;
    Ok(())
}
