// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key type for environment snapshots.
//!
//! ```text
//! EnvKey: case-insensitive on Windows (PATH == Path == path)
//!         exact match on other hosts
//! ```

use std::cmp::Ordering;

/// Environment variable name compared the way the host compares them.
#[derive(Debug, Clone, Eq)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    const fn case_insensitive() -> bool {
        cfg!(windows)
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> Ordering {
        if Self::case_insensitive() {
            let lhs = self.0.bytes().map(|b| b.to_ascii_lowercase());
            let rhs = other.0.bytes().map(|b| b.to_ascii_lowercase());
            lhs.cmp(rhs)
        } else {
            self.0.cmp(&other.0)
        }
    }
}
