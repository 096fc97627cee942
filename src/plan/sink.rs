// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Receivers for the settings a build plan applies.
//!
//! The plan never touches engine state itself. Whatever performs the build
//! implements [`SettingsSink`] and receives each setting in order.

use serde::Serialize;

/// Receives player settings in the order they must be applied.
pub trait SettingsSink {
    fn set(&mut self, key: &'static str, value: String);
}

/// A sink that records settings, keeping application order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SettingsRecord {
    entries: Vec<(&'static str, String)>,
}

impl SettingsRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formats entries as aligned `key = value` lines.
    #[must_use]
    pub fn format_lines(&self) -> Vec<String> {
        let width = self.entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        self.entries
            .iter()
            .map(|(key, value)| format!("{key:<width$} = {value}"))
            .collect()
    }
}

impl SettingsSink for SettingsRecord {
    fn set(&mut self, key: &'static str, value: String) {
        self.entries.push((key, value));
    }
}
