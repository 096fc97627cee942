// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable snapshots.
//!
//! # Architecture
//!
//! ```text
//! Env (shared BTreeMap<EnvKey, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! Ops: get/set/iter/to_map
//! ```
//!
//! - **Host key semantics**: case-insensitive on Windows, exact elsewhere
//! - **Snapshot**: captured once, never re-reads the process environment
//! - **Cheap clones**: clones share data until modified

pub mod container;
pub mod types;


/// Captures the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    container::Env::from_map(vars)
}
