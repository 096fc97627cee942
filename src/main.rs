// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Params | Symbols | Plan | BuildInfo | Env | Options | Inis
//! ```

use std::process::ExitCode;

use ubuild::cli::global::GlobalOptions;
use ubuild::cli::{self, Command};
use ubuild::cmd::config::{run_inis_command, run_options_command};
use ubuild::cmd::params::{run_params_command, run_symbols_command};
use ubuild::cmd::plan::run_plan_command;
use ubuild::cmd::report::{run_build_info_command, run_env_command};
use ubuild::config::Config;
use ubuild::config::loader::ConfigLoader;
use ubuild::error::bail_out;
use ubuild::logging::init_logging;
use ubuild::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_CONFIG_FILE: &str = "ubuild.toml";
const ENV_PREFIX: &str = "UBUILD";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    // Logging falls back to CLI options alone if the config fails to load.
    let config = load_config(&cli.global);

    let log_config = build_log_config(&cli.global, config.as_ref().ok());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config).await
}

fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .or_else(|| config.map(|c| c.global.output_log_level))
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .or_else(|| config.map(|c| c.global.file_log_level))
        .unwrap_or(console_level);

    let log_file = global
        .log_file
        .clone()
        .or_else(|| config.and_then(|c| c.global.log_file.clone()));

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file.map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: ubuild::error::Result<Config>) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(command) => match config {
            Ok(config) => run_with_config(command, &config).await,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                Err(e)
            }
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(bail_out("no command specified").into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_with_config(command: &Command, config: &Config) -> ubuild::error::Result<()> {
    match command {
        Command::Options => {
            run_options_command(config);
            Ok(())
        }
        Command::Params(args) => run_params_command(args, config),
        Command::Symbols(args) => {
            run_symbols_command(args, config);
            Ok(())
        }
        Command::Plan(args) => run_plan_command(args, config),
        Command::BuildInfo(args) => run_build_info_command(args, config).await,
        Command::Env(args) => run_env_command(args, config).await,
        Command::Version | Command::Inis => Ok(()),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> ubuild::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides()? {
        loader = loader.set(&key, value)?;
    }
    loader.build()
}
