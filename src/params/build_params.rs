// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolved build parameters.
//!
//! # Defaults
//!
//! ```text
//! APP_VERSION                  -> current bundle version (injected)
//! ANDROID_BUNDLE_VERSION_CODE  -> 1
//! DEFINE_SYMBOLS               -> ""   (trimmed)
//! JOB_DEFINE_SYMBOLS           -> ""   (trimmed)
//! IL2CPP                       -> true
//! BUILD_NUMBER                 -> 1
//! other flags                  -> false, other strings -> ""
//! ```

use bon::Builder;
use serde::Serialize;
use tracing::trace;

use super::keys;
use super::source::ParameterSource;

/// A fully resolved, immutable snapshot of every build parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[builder(on(String, into))]
pub struct BuildParams {
    #[builder(default)]
    version: String,
    #[builder(default = 1)]
    bundle_version_code: i32,
    #[builder(default)]
    define_symbols: String,
    #[builder(default)]
    job_define_symbols: String,
    #[builder(default)]
    is_production_mode: bool,
    #[builder(default)]
    is_build_script_only: bool,
    #[builder(default)]
    is_development_build: bool,
    #[builder(default)]
    is_build_asset_bundle: bool,
    #[builder(default)]
    is_clean_player_content: bool,
    #[builder(default)]
    use_apk_expansion_files: bool,
    #[builder(default)]
    build_app_bundle: bool,
    #[builder(default = true)]
    use_il2cpp: bool,
    #[builder(default)]
    provision_profile_id: String,
    #[builder(default)]
    git_commit: String,
    #[builder(default = 1)]
    build_number: i32,
}

impl BuildParams {
    /// Resolves every parameter from `source`.
    ///
    /// `current_bundle_version` is the version the player settings already
    /// carry; it is used when the source has no `APP_VERSION`. Never fails.
    pub fn resolve(source: &impl ParameterSource, current_bundle_version: &str) -> Self {
        let params = Self {
            version: source.string(keys::VERSION, current_bundle_version),
            bundle_version_code: source.integer(keys::ANDROID_BUNDLE_VERSION_CODE, 1),
            define_symbols: source.string(keys::DEFINE_SYMBOLS, "").trim().to_owned(),
            job_define_symbols: source
                .string(keys::JOB_DEFINE_SYMBOLS, "")
                .trim()
                .to_owned(),
            is_production_mode: source.boolean(keys::PRODUCTION_MODE, false),
            is_build_script_only: source.boolean(keys::BUILD_SCRIPT_ONLY, false),
            is_development_build: source.boolean(keys::DEVELOPMENT, false),
            is_build_asset_bundle: source.boolean(keys::BUILD_ASSET_BUNDLE, false),
            is_clean_player_content: source.boolean(keys::CLEAN_PLAYER_CONTENT, false),
            use_apk_expansion_files: source.boolean(keys::USE_APK_EXPANSION_FILES, false),
            build_app_bundle: source.boolean(keys::BUILD_APP_BUNDLE, false),
            use_il2cpp: source.boolean(keys::IL2CPP, true),
            provision_profile_id: source.string(keys::PROVISIONING_PROFILE_ID, ""),
            git_commit: source.string(keys::GIT_COMMIT, ""),
            build_number: source.integer(keys::BUILD_NUMBER, 1),
        };
        trace!(?params, "resolved build parameters");
        params
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub const fn bundle_version_code(&self) -> i32 {
        self.bundle_version_code
    }

    #[must_use]
    pub fn define_symbols(&self) -> &str {
        &self.define_symbols
    }

    #[must_use]
    pub fn job_define_symbols(&self) -> &str {
        &self.job_define_symbols
    }

    #[must_use]
    pub const fn is_production_mode(&self) -> bool {
        self.is_production_mode
    }

    #[must_use]
    pub const fn is_build_script_only(&self) -> bool {
        self.is_build_script_only
    }

    #[must_use]
    pub const fn is_development_build(&self) -> bool {
        self.is_development_build
    }

    #[must_use]
    pub const fn is_build_asset_bundle(&self) -> bool {
        self.is_build_asset_bundle
    }

    #[must_use]
    pub const fn is_clean_player_content(&self) -> bool {
        self.is_clean_player_content
    }

    #[must_use]
    pub const fn use_apk_expansion_files(&self) -> bool {
        self.use_apk_expansion_files
    }

    #[must_use]
    pub const fn build_app_bundle(&self) -> bool {
        self.build_app_bundle
    }

    #[must_use]
    pub const fn use_il2cpp(&self) -> bool {
        self.use_il2cpp
    }

    #[must_use]
    pub fn provision_profile_id(&self) -> &str {
        &self.provision_profile_id
    }

    #[must_use]
    pub fn git_commit(&self) -> &str {
        &self.git_commit
    }

    #[must_use]
    pub const fn build_number(&self) -> i32 {
        self.build_number
    }

    /// Lists `key = value` lines for display, in resolution order.
    #[must_use]
    pub fn format_lines(&self) -> Vec<String> {
        let entries = [
            (keys::VERSION, self.version.clone()),
            (
                keys::ANDROID_BUNDLE_VERSION_CODE,
                self.bundle_version_code.to_string(),
            ),
            (keys::DEFINE_SYMBOLS, self.define_symbols.clone()),
            (keys::JOB_DEFINE_SYMBOLS, self.job_define_symbols.clone()),
            (keys::PRODUCTION_MODE, self.is_production_mode.to_string()),
            (keys::BUILD_SCRIPT_ONLY, self.is_build_script_only.to_string()),
            (keys::DEVELOPMENT, self.is_development_build.to_string()),
            (keys::BUILD_ASSET_BUNDLE, self.is_build_asset_bundle.to_string()),
            (
                keys::CLEAN_PLAYER_CONTENT,
                self.is_clean_player_content.to_string(),
            ),
            (
                keys::USE_APK_EXPANSION_FILES,
                self.use_apk_expansion_files.to_string(),
            ),
            (keys::BUILD_APP_BUNDLE, self.build_app_bundle.to_string()),
            (keys::PROVISIONING_PROFILE_ID, self.provision_profile_id.clone()),
            (keys::GIT_COMMIT, self.git_commit.clone()),
            (keys::IL2CPP, self.use_il2cpp.to_string()),
            (keys::BUILD_NUMBER, self.build_number.to_string()),
        ];

        let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        entries
            .into_iter()
            .map(|(key, value)| format!("{key:<width$} = {value}"))
            .collect()
    }
}

/// Returns the known parameter keys that `source` actually supplies.
pub fn supplied_keys(source: &impl ParameterSource) -> Vec<&'static str> {
    keys::ALL
        .into_iter()
        .filter(|key| source.get(key).is_some())
        .collect()
}
