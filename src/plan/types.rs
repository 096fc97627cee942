// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Target, option and architecture types for player build plans.
//!
//! ```text
//! BuildTarget:          Android | Ios | Standalone
//! BuildOptions:         SCRIPTS_ONLY | DEVELOPMENT | CONNECT_WITH_PROFILER
//!                       | ACCEPT_EXTERNAL_MODIFICATIONS
//! ScriptingBackend:     Il2Cpp | Mono
//! AndroidArchitecture:  ARMV7 | ARM64
//! IosArchitecture:      0=ARMv7 1=ARM64 2=Universal
//! ```

use bitflags::bitflags;
use serde::{Serialize, Serializer};

use crate::error::ConfigError;

/// Platform a player is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    Android,
    Ios,
    Standalone,
}

impl BuildTarget {
    /// Engine build target group name.
    #[must_use]
    pub const fn target_group(self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::Standalone => "Standalone",
        }
    }

    /// Engine build target name.
    #[must_use]
    pub const fn build_target(self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::Standalone => "StandaloneWindows",
        }
    }

    /// Output location relative to the project, one per target.
    #[must_use]
    pub const fn default_output(self) -> &'static str {
        match self {
            Self::Android => "GradleProject",
            Self::Ios => "XcodeProject",
            Self::Standalone => "Standalone",
        }
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.target_group())
    }
}

impl std::str::FromStr for BuildTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "standalone" | "pc" | "windows" => Ok(Self::Standalone),
            _ => Err(ConfigError::InvalidValue {
                section: "plan".to_string(),
                key: "target".to_string(),
                message: format!("expected 'android', 'ios', or 'standalone', got '{s}'"),
            }),
        }
    }
}

bitflags! {
    /// Flags passed to the player build.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BuildOptions: u32 {
        /// Recompile scripts only, reusing the previous player.
        const BUILD_SCRIPTS_ONLY = 0x01;

        /// Development player.
        const DEVELOPMENT = 0x02;

        /// Auto-connect the profiler on launch.
        const CONNECT_WITH_PROFILER = 0x04;

        /// Append to an existing native project instead of replacing it.
        const ACCEPT_EXTERNAL_MODIFICATIONS_TO_PLAYER = 0x08;
    }
}

bitflags! {
    /// Android CPU architectures.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AndroidArchitecture: u8 {
        const ARMV7 = 0x01;
        const ARM64 = 0x02;
    }
}

/// Serializes a bitflags value as the list of its set flag names.
pub(super) fn serialize_flag_names<S, F>(flags: &F, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    F: bitflags::Flags,
{
    serializer.collect_seq(flags.iter_names().map(|(name, _)| name))
}

/// Script compilation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScriptingBackend {
    #[serde(rename = "IL2CPP")]
    Il2Cpp,
    #[serde(rename = "Mono2x")]
    Mono,
}

impl ScriptingBackend {
    #[must_use]
    pub const fn from_il2cpp(use_il2cpp: bool) -> Self {
        if use_il2cpp { Self::Il2Cpp } else { Self::Mono }
    }

    /// Android ABIs the backend can target.
    #[must_use]
    pub const fn android_architectures(self) -> AndroidArchitecture {
        match self {
            Self::Il2Cpp => AndroidArchitecture::ARMV7.union(AndroidArchitecture::ARM64),
            Self::Mono => AndroidArchitecture::ARMV7,
        }
    }
}

impl std::fmt::Display for ScriptingBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Il2Cpp => write!(f, "IL2CPP"),
            Self::Mono => write!(f, "Mono2x"),
        }
    }
}

/// iOS architecture as stored in player settings (0, 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IosArchitecture {
    ArmV7,
    Arm64,
    Universal,
    Unknown,
}

impl IosArchitecture {
    #[must_use]
    pub const fn from_index(index: i32) -> Self {
        match index {
            0 => Self::ArmV7,
            1 => Self::Arm64,
            2 => Self::Universal,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArmV7 => "ARMv7",
            Self::Arm64 => "ARM64",
            Self::Universal => "Universal",
            Self::Unknown => "Unknown Architecture",
        }
    }
}
