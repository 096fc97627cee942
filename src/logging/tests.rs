// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7"
    );
}

#[test]
fn test_log_level_from_u8() {
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
    assert_eq!(LogLevel::from_u8(9), None);
    assert_eq!(u8::from(LogLevel::TRACE), 5);
}

#[test]
fn test_filter_strings_scope_to_crate() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_snapshot!(
        filters.join(" | "),
        @"off | error | warn | warn,ubuild=info | warn,ubuild=debug | warn,ubuild=trace | trace"
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_timestamps());
    assert!(!config.show_target());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .with_log_file("logs/ubuild.log".to_string())
        .with_show_timestamps(true)
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some("logs/ubuild.log"));
    assert!(config.show_timestamps());
}

#[test]
fn test_log_level_serde_as_number() {
    assert_eq!(LogLevel::default(), LogLevel::INFO);
    assert_eq!(serde_json::to_string(&LogLevel::DEBUG).unwrap(), "4");
    let level: LogLevel = serde_json::from_str("6").unwrap();
    assert_eq!(level, LogLevel::DUMP);
    let err = serde_json::from_str::<LogLevel>("7").unwrap_err();
    assert!(err.to_string().contains("log level must be 0-6"), "{err}");
}
