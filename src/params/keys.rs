// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parameter names as they appear in CI environments and command lines.

pub const VERSION: &str = "APP_VERSION";
pub const GIT_COMMIT: &str = "GIT_COMMIT";
pub const BUILD_NUMBER: &str = "BUILD_NUMBER";

// Job parameters
pub const BUILD_SCRIPT_ONLY: &str = "BUILD_SCRIPT_ONLY";
pub const DEVELOPMENT: &str = "BUILD_DEVELOPMENT";
pub const BUILD_ASSET_BUNDLE: &str = "ASSET_BUNDLE_BUILD";
pub const CLEAN_PLAYER_CONTENT: &str = "CLEAN_PLAYER_CONTENT";
pub const USE_APK_EXPANSION_FILES: &str = "useAPKExpansionFiles";
pub const BUILD_APP_BUNDLE: &str = "buildAppBundle";
pub const JOB_DEFINE_SYMBOLS: &str = "JOB_DEFINE_SYMBOLS";
pub const PRODUCTION_MODE: &str = "prodMode";

// Global properties
pub const DEFINE_SYMBOLS: &str = "DEFINE_SYMBOLS";
pub const ANDROID_BUNDLE_VERSION_CODE: &str = "ANDROID_BUNDLE_VERSION_CODE";
pub const IL2CPP: &str = "IL2CPP";
pub const PROVISIONING_PROFILE_ID: &str = "PROVISION_UUID_DISTRIBUTION";

/// Every key read by [`BuildParams::resolve`](super::BuildParams::resolve).
pub const ALL: [&str; 15] = [
    VERSION,
    ANDROID_BUNDLE_VERSION_CODE,
    DEFINE_SYMBOLS,
    JOB_DEFINE_SYMBOLS,
    PRODUCTION_MODE,
    BUILD_SCRIPT_ONLY,
    DEVELOPMENT,
    BUILD_ASSET_BUNDLE,
    CLEAN_PLAYER_CONTENT,
    USE_APK_EXPANSION_FILES,
    BUILD_APP_BUNDLE,
    PROVISIONING_PROFILE_ID,
    GIT_COMMIT,
    IL2CPP,
    BUILD_NUMBER,
];
