// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use super::build_params::supplied_keys;
use super::source::{parse_bool, parse_int};
use super::{BuildParams, CommandLineSource, EnvSource, ParameterSource, keys};

#[test]
fn test_command_line_first_word_only() {
    let source = CommandLineSource::new(r#"-FOO "bar baz" -QUX 1"#);
    assert_eq!(source.get("FOO"), Some("bar"));
    assert_eq!(source.get("QUX"), Some("1"));
    assert_eq!(source.get("MISSING"), None);
}

#[test]
fn test_command_line_unquoted_value_before_next_flag() {
    let source = CommandLineSource::new("Unity -batchmode -APP_VERSION 1.2.3 -BUILD_NUMBER @42");
    assert_eq!(source.get("APP_VERSION"), Some("1.2.3"));
    assert_eq!(source.get("BUILD_NUMBER"), Some("@42"));
    assert_eq!(source.integer("BUILD_NUMBER", 1), 42);
}

#[test]
fn test_command_line_requires_token_boundary() {
    // "-XFOO" and "-FOOBAR" must not satisfy a lookup for FOO.
    let source = CommandLineSource::new("-XFOO a -FOOBAR b");
    assert_eq!(source.get("FOO"), None);
    assert_eq!(source.get("FOOBAR"), Some("b"));
}

#[test]
fn test_command_line_name_is_literal() {
    let source = CommandLineSource::new("-A.B 1 -AXB 2");
    assert_eq!(source.get("A.B"), Some("1"));
    assert_eq!(source.get("A+"), None);
}

#[test]
fn test_command_line_from_args() {
    let source = CommandLineSource::from_args(["-buildTarget", "Android", "-IL2CPP", "false"]);
    assert_eq!(source.line(), "-buildTarget Android -IL2CPP false");
    assert!(!source.boolean(keys::IL2CPP, true));
}

#[test]
fn test_env_source_empty_value_is_present() {
    let source = EnvSource::from_pairs([("DEFINE_SYMBOLS", "")]);
    assert_eq!(source.get("DEFINE_SYMBOLS"), Some(""));
    assert_eq!(source.get("JOB_DEFINE_SYMBOLS"), None);
}

#[test]
fn test_env_source_from_map() {
    let map = BTreeMap::from([
        (keys::VERSION.to_string(), "2.0".to_string()),
        (keys::BUILD_NUMBER.to_string(), "@8".to_string()),
    ]);
    let params = BuildParams::resolve(&EnvSource::from_map(map), "0.1");
    assert_eq!(params.version(), "2.0");
    assert_eq!(params.build_number(), 8);
}

#[test]
fn test_parse_bool_lenient_case_and_space() {
    assert_eq!(parse_bool("True"), Some(true));
    assert_eq!(parse_bool(" false "), Some(false));
    assert_eq!(parse_bool("yes"), None);
    assert_eq!(parse_bool("1"), None);
    assert_eq!(parse_bool(""), None);
}

#[test]
fn test_parse_int_strips_at_signs() {
    assert_eq!(parse_int("@42"), Some(42));
    assert_eq!(parse_int("@4@2@"), Some(42));
    assert_eq!(parse_int("-7"), Some(-7));
    assert_eq!(parse_int(" 12 "), Some(12));
    assert_eq!(parse_int("12a"), None);
    assert_eq!(parse_int("@"), None);
    assert_eq!(parse_int("99999999999"), None);
}

#[test]
fn test_typed_accessors_fall_back() {
    let source = EnvSource::from_pairs([("B", "maybe"), ("I", "lots"), ("S", "text")]);
    assert!(source.boolean("B", true));
    assert!(!source.boolean("MISSING", false));
    assert_eq!(source.integer("I", 9), 9);
    assert_eq!(source.integer("MISSING", -1), -1);
    assert_eq!(source.string("S", "x"), "text");
    assert_eq!(source.string("MISSING", "x"), "x");
}

#[test]
fn test_resolve_empty_source_uses_defaults() {
    let params = BuildParams::resolve(&EnvSource::default(), "0.9.1");
    assert_eq!(params, BuildParams::builder().version("0.9.1").build());
    assert_eq!(params.bundle_version_code(), 1);
    assert_eq!(params.build_number(), 1);
    assert!(params.use_il2cpp());
    assert!(!params.is_development_build());
    assert_eq!(params.define_symbols(), "");
}

#[test]
fn test_resolve_malformed_values_never_fail() {
    let source = EnvSource::from_pairs([
        (keys::ANDROID_BUNDLE_VERSION_CODE, "abc"),
        (keys::BUILD_NUMBER, "1.5"),
        (keys::IL2CPP, "nope"),
        (keys::DEVELOPMENT, "TRUE"),
    ]);
    let params = BuildParams::resolve(&source, "");
    assert_eq!(params.bundle_version_code(), 1);
    assert_eq!(params.build_number(), 1);
    assert!(params.use_il2cpp());
    assert!(params.is_development_build());
}

#[test]
fn test_resolve_trims_symbols_only() {
    let source = EnvSource::from_pairs([
        (keys::DEFINE_SYMBOLS, "  A;B  "),
        (keys::JOB_DEFINE_SYMBOLS, "\tC\n"),
        (keys::GIT_COMMIT, " abc "),
    ]);
    let params = BuildParams::resolve(&source, "");
    assert_eq!(params.define_symbols(), "A;B");
    assert_eq!(params.job_define_symbols(), "C");
    assert_eq!(params.git_commit(), " abc ");
}

#[test]
fn test_env_and_command_line_agree() {
    let env = EnvSource::from_pairs([
        (keys::VERSION, "2.4.0"),
        (keys::ANDROID_BUNDLE_VERSION_CODE, "@204"),
        (keys::DEFINE_SYMBOLS, "FEATURE_X"),
        (keys::BUILD_APP_BUNDLE, "true"),
        (keys::IL2CPP, "false"),
        (keys::GIT_COMMIT, "0123456789abcdef"),
        (keys::BUILD_NUMBER, "77"),
    ]);
    let cli = CommandLineSource::new(
        "-APP_VERSION 2.4.0 -ANDROID_BUNDLE_VERSION_CODE @204 -DEFINE_SYMBOLS \"FEATURE_X\" \
         -buildAppBundle true -IL2CPP false -GIT_COMMIT 0123456789abcdef -BUILD_NUMBER 77",
    );

    let from_env = BuildParams::resolve(&env, "1.0");
    let from_cli = BuildParams::resolve(&cli, "1.0");
    assert_eq!(from_env, from_cli);
    assert_eq!(from_cli.bundle_version_code(), 204);
    assert!(!from_cli.use_il2cpp());
}

#[test]
fn test_command_line_missing_build_number_defaults_to_one() {
    let params = BuildParams::resolve(&CommandLineSource::new("-APP_VERSION 3.0"), "");
    assert_eq!(params.build_number(), 1);
}

#[test]
fn test_supplied_keys() {
    let source = CommandLineSource::new("-IL2CPP true -prodMode false");
    assert_eq!(supplied_keys(&source), [keys::PRODUCTION_MODE, keys::IL2CPP]);
}

#[test]
fn test_format_lines_alignment() {
    let params = BuildParams::builder().version("1.0").build();
    let lines = params.format_lines();
    assert_eq!(lines.len(), keys::ALL.len());
    insta::assert_snapshot!(lines[0], @"APP_VERSION                 = 1.0");
    insta::assert_snapshot!(lines[13], @"IL2CPP                      = true");
}
