// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, FsError, UbuildError, UbuildResult, bail_out};
use std::path::Path;

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "player".to_string(),
        key: "bundle_version".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'bundle_version' in section '[player]'"
    );
}

#[test]
fn test_fs_error_wraps_path() {
    let err = FsError::io(
        Path::new("out/BuildInfo.txt"),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    let top: UbuildError = err.into();
    insta::assert_snapshot!(
        top.to_string(),
        @"filesystem error: I/O error on 'out/BuildInfo.txt': denied"
    );
}

#[test]
fn test_bail_out_message() {
    insta::assert_snapshot!(bail_out("no target").to_string(), @"fatal error: no target");
}

#[test]
fn test_ubuild_error_size() {
    // Bailed is a Box<str>, 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<UbuildError>();
    assert!(size <= 24, "UbuildError is {size} bytes, expected <= 24");
}

#[test]
fn test_ubuild_result_size() {
    let size = std::mem::size_of::<UbuildResult<()>>();
    assert!(size <= 24, "UbuildResult<()> is {size} bytes, expected <= 24");
}
