// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-target player build plans.
//!
//! # Derivation
//!
//! ```text
//! BuildParams + BuildTarget + PlanContext
//!        |
//!        v
//!   BuildPlan::new()
//!   - options      script-only / development (+profiler) / append (iOS)
//!   - symbols      symbols::compose()
//!   - backend      IL2CPP | Mono2x     (not applied on iOS)
//!   - platform     Android: bundle code, ABIs, APK expansion, app bundle
//!                  iOS:     SDK, min OS, status bar, provisioning
//!   - content      clean / build player content (mobile only)
//!        |
//!        v
//!   apply_to(&mut impl SettingsSink)
//! ```

pub mod sink;
pub mod types;


use serde::Serialize;
use tracing::warn;

use crate::build_info::BuildInfo;
use crate::params::BuildParams;
use crate::symbols;
use sink::SettingsSink;
use types::{
    AndroidArchitecture, BuildOptions, BuildTarget, IosArchitecture, ScriptingBackend,
    serialize_flag_names,
};

/// Minimum iOS version players are built for.
pub const IOS_TARGET_OS_VERSION: &str = "10.0";

/// Facts about the workspace that influence a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanContext {
    /// The target's output project already exists on disk.
    pub output_exists: bool,
    /// iOS architecture currently configured in player settings.
    pub ios_architecture: IosArchitecture,
}

impl Default for PlanContext {
    fn default() -> Self {
        Self {
            output_exists: false,
            ios_architecture: IosArchitecture::Arm64,
        }
    }
}

/// Asset content steps to run before the player build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentSteps {
    pub clean_player_content: bool,
    pub build_player_content: bool,
}

/// Android-only settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AndroidSettings {
    pub bundle_version_code: i32,
    #[serde(serialize_with = "serialize_flag_names")]
    pub architectures: AndroidArchitecture,
    pub use_apk_expansion_files: bool,
    pub build_app_bundle: bool,
    pub export_as_android_project: bool,
}

/// iOS-only settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IosSettings {
    pub target_os_version: &'static str,
    pub device_sdk: bool,
    pub status_bar_hidden: bool,
    pub provision_profile_id: String,
    #[serde(skip)]
    pub architecture: IosArchitecture,
}

/// Target-specific part of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformSettings {
    Android(AndroidSettings),
    Ios(IosSettings),
    Standalone,
}

/// Everything a build invoker applies for one target, as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub target: BuildTarget,
    pub output: String,
    #[serde(serialize_with = "serialize_flag_names")]
    pub options: BuildOptions,
    pub define_symbols: String,
    pub bundle_version: String,
    pub scripting_backend: Option<ScriptingBackend>,
    pub show_splash_logo: bool,
    pub production_mode: bool,
    pub content: ContentSteps,
    pub platform: PlatformSettings,
    pub build_info: BuildInfo,
}

impl BuildPlan {
    /// Derives the plan for `target` from resolved parameters.
    #[must_use]
    pub fn new(target: BuildTarget, params: &BuildParams, context: PlanContext) -> Self {
        let mut options = BuildOptions::empty();
        if params.is_build_script_only() {
            options |= BuildOptions::BUILD_SCRIPTS_ONLY;
        }
        if params.is_development_build() {
            options |= BuildOptions::DEVELOPMENT | BuildOptions::CONNECT_WITH_PROFILER;
        }
        if target == BuildTarget::Ios && context.output_exists {
            options |= BuildOptions::ACCEPT_EXTERNAL_MODIFICATIONS_TO_PLAYER;
        }

        let backend = ScriptingBackend::from_il2cpp(params.use_il2cpp());

        let platform = match target {
            BuildTarget::Android => PlatformSettings::Android(AndroidSettings {
                bundle_version_code: android_bundle_version_code(params),
                architectures: backend.android_architectures(),
                use_apk_expansion_files: params.use_apk_expansion_files(),
                build_app_bundle: params.build_app_bundle(),
                export_as_android_project: true,
            }),
            BuildTarget::Ios => PlatformSettings::Ios(IosSettings {
                target_os_version: IOS_TARGET_OS_VERSION,
                device_sdk: true,
                status_bar_hidden: true,
                provision_profile_id: params.provision_profile_id().to_owned(),
                architecture: context.ios_architecture,
            }),
            BuildTarget::Standalone => PlatformSettings::Standalone,
        };

        let content = if target == BuildTarget::Standalone {
            ContentSteps::default()
        } else {
            ContentSteps {
                clean_player_content: params.is_build_asset_bundle()
                    && params.is_clean_player_content(),
                build_player_content: params.is_build_asset_bundle(),
            }
        };

        Self {
            target,
            output: target.default_output().to_owned(),
            options,
            define_symbols: symbols::compose(params),
            bundle_version: params.version().to_owned(),
            scripting_backend: (target != BuildTarget::Ios).then_some(backend),
            show_splash_logo: false,
            production_mode: params.is_production_mode(),
            content,
            platform,
            build_info: BuildInfo::from_params(params),
        }
    }

    /// Pushes every setting into `sink`, in the order a build applies them.
    ///
    /// An empty define symbol string is not applied, leaving whatever the
    /// project already has.
    pub fn apply_to(&self, sink: &mut impl SettingsSink) {
        sink.set("splash_screen.show_logo", self.show_splash_logo.to_string());
        if !self.define_symbols.is_empty() {
            sink.set("scripting_define_symbols", self.define_symbols.clone());
        }
        sink.set("bundle_version", self.bundle_version.clone());

        match &self.platform {
            PlatformSettings::Android(android) => {
                sink.set(
                    "android.export_project",
                    android.export_as_android_project.to_string(),
                );
                sink.set(
                    "android.bundle_version_code",
                    android.bundle_version_code.to_string(),
                );
                sink.set(
                    "android.use_apk_expansion_files",
                    android.use_apk_expansion_files.to_string(),
                );
                sink.set(
                    "android.build_app_bundle",
                    android.build_app_bundle.to_string(),
                );
            }
            PlatformSettings::Ios(ios) => {
                let sdk = if ios.device_sdk { "device" } else { "simulator" };
                sink.set("ios.sdk", sdk.to_owned());
                sink.set("ios.target_os_version", ios.target_os_version.to_owned());
                sink.set("status_bar_hidden", ios.status_bar_hidden.to_string());
            }
            PlatformSettings::Standalone => {}
        }

        if let Some(backend) = self.scripting_backend {
            sink.set("scripting_backend", backend.to_string());
        }
        if let PlatformSettings::Android(android) = &self.platform {
            sink.set(
                "android.target_architectures",
                flag_names(android.architectures),
            );
        }
        sink.set("build_options", flag_names(self.options));
    }

    /// Human-readable summary logged before a build starts.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Target File Name: {}", self.output),
            format!("BuildTargetGroup: {}", self.target.target_group()),
            format!("BuildTarget: {}", self.target.build_target()),
            format!("BuildOptions: {}", flag_names(self.options)),
        ];
        if let Some(backend) = self.scripting_backend {
            lines.push(format!("Scripting Backend: {backend}"));
        }
        match &self.platform {
            PlatformSettings::Android(android) => {
                lines.push(format!(
                    "Target Architectures: {}",
                    flag_names(android.architectures)
                ));
            }
            PlatformSettings::Ios(ios) => {
                lines.push(format!("Architecture: {}", ios.architecture.name()));
                lines.push(format!("Target OS Version: {}", ios.target_os_version));
            }
            PlatformSettings::Standalone => {}
        }
        lines.push(format!(
            "Define Symbols: {}",
            symbols::split_symbols(&self.define_symbols)
                .collect::<Vec<_>>()
                .join(", ")
        ));
        lines
    }
}

/// Android version code derived from the version string.
///
/// Every `.` becomes `0` (`1.2.3` -> `10203`). If the result is not an
/// integer the resolved `ANDROID_BUNDLE_VERSION_CODE` is used instead.
#[must_use]
pub fn android_bundle_version_code(params: &BuildParams) -> i32 {
    let digits = params.version().replace('.', "0");
    digits.parse().unwrap_or_else(|_| {
        warn!(
            candidate = %digits,
            fallback = params.bundle_version_code(),
            "couldn't derive bundle version code from version, using fallback"
        );
        params.bundle_version_code()
    })
}

/// `A | B` style listing of set flags, `None` when empty.
fn flag_names<F: bitflags::Flags>(flags: F) -> String {
    let names: Vec<_> = flags.iter_names().map(|(name, _)| name).collect();
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(" | ")
    }
}
