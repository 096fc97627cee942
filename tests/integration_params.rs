// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for parameter resolution through to build plans.
//!
//! Drives the same path a CI job does: raw parameters, resolved parameters,
//! define symbols, per-target plan, build info file.

use std::fs;

use tempfile::TempDir;
use ubuild::build_info::BuildInfo;
use ubuild::params::{BuildParams, CommandLineSource, EnvSource, keys};
use ubuild::plan::sink::SettingsRecord;
use ubuild::plan::types::{BuildOptions, BuildTarget};
use ubuild::plan::{BuildPlan, PlanContext, PlatformSettings};
use ubuild::symbols;

const RELEASE_LINE: &str = "Unity -quit -batchmode -executeMethod Builder.Build \
    -APP_VERSION 1.4.2 -DEFINE_SYMBOLS \"STORE_GOOGLE\" -JOB_DEFINE_SYMBOLS \"CI\" \
    -prodMode true -buildAppBundle true -GIT_COMMIT 9f8e7d6c5b4a3210 -BUILD_NUMBER @318";

// =============================================================================
// Release build from a command line
// =============================================================================

#[test]
fn release_android_plan() {
    let params = BuildParams::resolve(&CommandLineSource::new(RELEASE_LINE), "0.1");
    let plan = BuildPlan::new(BuildTarget::Android, &params, PlanContext::default());

    assert!(plan.production_mode);
    assert!(plan.options.is_empty());
    assert_eq!(
        plan.define_symbols,
        "STORE_GOOGLE;CI;APP_VERSION_1_4_2;APP_VERSION_1_4_OR_NEWER;"
    );
    let PlatformSettings::Android(android) = &plan.platform else {
        panic!("expected android settings");
    };
    assert_eq!(android.bundle_version_code, 10402);
    assert!(android.build_app_bundle);
    assert_eq!(plan.build_info.content(), "9f8e7d6c 318");

    let mut record = SettingsRecord::new();
    plan.apply_to(&mut record);
    insta::assert_snapshot!(record.format_lines().join("\n"), @r"
    splash_screen.show_logo         = false
    scripting_define_symbols        = STORE_GOOGLE;CI;APP_VERSION_1_4_2;APP_VERSION_1_4_OR_NEWER;
    bundle_version                  = 1.4.2
    android.export_project          = true
    android.bundle_version_code     = 10402
    android.use_apk_expansion_files = false
    android.build_app_bundle        = true
    scripting_backend               = IL2CPP
    android.target_architectures    = ARMV7 | ARM64
    build_options                   = None
    ");
}

#[test]
fn development_ios_plan_from_environment() {
    let env = EnvSource::from_pairs([
        (keys::VERSION, "1.4"),
        (keys::DEVELOPMENT, "True"),
        (keys::PROVISIONING_PROFILE_ID, "profile-uuid"),
    ]);
    let params = BuildParams::resolve(&env, "0.1");
    let context = PlanContext {
        output_exists: true,
        ..PlanContext::default()
    };
    let plan = BuildPlan::new(BuildTarget::Ios, &params, context);

    assert_eq!(
        plan.options,
        BuildOptions::DEVELOPMENT
            | BuildOptions::CONNECT_WITH_PROFILER
            | BuildOptions::ACCEPT_EXTERNAL_MODIFICATIONS_TO_PLAYER
    );
    let PlatformSettings::Ios(ios) = &plan.platform else {
        panic!("expected ios settings");
    };
    assert_eq!(ios.provision_profile_id, "profile-uuid");
    assert_eq!(ios.target_os_version, "10.0");

    let mut record = SettingsRecord::new();
    plan.apply_to(&mut record);
    assert_eq!(record.get("ios.sdk"), Some("device"));
    assert_eq!(record.get("status_bar_hidden"), Some("true"));
    assert_eq!(record.get("scripting_backend"), None);
}

#[test]
fn missing_version_uses_current_bundle_version() {
    let params = BuildParams::resolve(&EnvSource::default(), "3.7.1");
    assert_eq!(
        symbols::compose(&params),
        "APP_VERSION_3_7_1;APP_VERSION_3_7_OR_NEWER;"
    );
    assert_eq!(BuildInfo::from_params(&params).content(), "1");
}

// =============================================================================
// Build info file
// =============================================================================

#[tokio::test]
async fn build_info_written_under_output_root() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Assets/Resources/BuildInfo.txt");
    let params = BuildParams::resolve(&CommandLineSource::new(RELEASE_LINE), "");

    BuildInfo::from_params(&params)
        .write(&path, false)
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "9f8e7d6c 318");
}

#[tokio::test]
async fn build_info_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("BuildInfo.txt");
    let params = BuildParams::builder().build_number(5).build();

    BuildInfo::from_params(&params)
        .write(&path, true)
        .await
        .unwrap();

    assert!(!path.exists());
}
