// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use std::path::PathBuf;

use clap::Parser;
use ubuild::cli::global::GlobalOptions;
use ubuild::cli::{Cli, Command};
use ubuild::plan::types::BuildTarget;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["ubuild", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["ubuild", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Parameter Commands
// =============================================================================

#[test]
fn cli_params_defaults_to_environment() {
    let cli = Cli::try_parse_from(["ubuild", "params"]).unwrap();
    let Some(Command::Params(args)) = cli.command else {
        panic!("expected params command");
    };
    assert!(args.source.command_line.is_none());
    assert!(!args.json);
}

#[test]
fn cli_symbols_with_command_line() {
    let cli = Cli::try_parse_from([
        "ubuild",
        "symbols",
        "--list",
        "--command-line=-APP_VERSION 2.0 -DEFINE_SYMBOLS \"A;B\"",
    ])
    .unwrap();
    let Some(Command::Symbols(args)) = cli.command else {
        panic!("expected symbols command");
    };
    assert!(args.list);
    assert_eq!(
        args.source.command_line.as_deref(),
        Some("-APP_VERSION 2.0 -DEFINE_SYMBOLS \"A;B\"")
    );
}

// =============================================================================
// Plan Command
// =============================================================================

#[test]
fn cli_plan_all_targets() {
    for (name, target) in [
        ("android", BuildTarget::Android),
        ("ios", BuildTarget::Ios),
        ("standalone", BuildTarget::Standalone),
        ("windows", BuildTarget::Standalone),
    ] {
        let cli = Cli::try_parse_from(["ubuild", "plan", name]).unwrap();
        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.target, target, "target name {name}");
    }
}

#[test]
fn cli_plan_requires_target() {
    assert!(Cli::try_parse_from(["ubuild", "plan"]).is_err());
}

#[test]
fn cli_plan_json() {
    let cli = Cli::try_parse_from([
        "ubuild",
        "plan",
        "android",
        "--json",
        "--command-line",
        "-IL2CPP false",
    ])
    .unwrap();
    let Some(Command::Plan(args)) = cli.command else {
        panic!("expected plan command");
    };
    assert!(args.json);
    assert!(!args.settings);
    assert_eq!(args.source.command_line.as_deref(), Some("-IL2CPP false"));
}

// =============================================================================
// Report Commands
// =============================================================================

#[test]
fn cli_build_info_output() {
    let cli = Cli::try_parse_from(["ubuild", "build-info", "--output", "info.txt"]).unwrap();
    let Some(Command::BuildInfo(args)) = cli.command else {
        panic!("expected build-info command");
    };
    assert_eq!(args.output, Some(PathBuf::from("info.txt")));
}

#[test]
fn cli_env_output() {
    let cli = Cli::try_parse_from(["ubuild", "env", "-o", "env.txt"]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert_eq!(args.output, Some(PathBuf::from("env.txt")));
    assert!(!args.diagnostics);
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_after_command() {
    let cli = Cli::try_parse_from([
        "ubuild",
        "options",
        "--no-default-inis",
        "--log-file",
        "ubuild.log",
        "--file-log-level",
        "6",
    ])
    .unwrap();
    assert!(cli.global.no_default_inis);
    assert_eq!(cli.global.log_file, Some(PathBuf::from("ubuild.log")));
    assert_eq!(cli.global.file_log_level, Some(6));
    assert_eq!(cli.global.log_level, None);
}

#[test]
fn cli_set_options_repeat() {
    let cli = Cli::try_parse_from([
        "ubuild",
        "-s",
        "player.bundle_version=3.1",
        "--set",
        "paths.output_root=/ci/project",
        "options",
    ])
    .unwrap();
    assert_eq!(
        cli.global.options,
        ["player.bundle_version=3.1", "paths.output_root=/ci/project"]
    );
}

#[test]
fn cli_file_log_level_falls_back_to_log_level() {
    let global = GlobalOptions {
        log_level: Some(2),
        ..GlobalOptions::default()
    };
    let overrides = global.to_config_overrides().unwrap();
    assert!(overrides.contains(&("global.file_log_level".to_string(), "2".to_string())));
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["ubuild", "build"]).is_err());
}
