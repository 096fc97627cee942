// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripting define symbol composition.
//!
//! # Composition Order
//!
//! ```text
//! DEFINE_SYMBOLS       "A"      -> "A;"
//! JOB_DEFINE_SYMBOLS   "B;"     -> "B;"
//! version define       "1.2.3"  -> "APP_VERSION_1_2_3;"
//! or-newer define      1.2      -> "APP_VERSION_1_2_OR_NEWER;"
//!                                  ---------------------------
//!                                  "A;B;APP_VERSION_1_2_3;APP_VERSION_1_2_OR_NEWER;"
//! ```
//!
//! Duplicates are kept; the compiler ignores repeated defines.

pub mod version;


use tracing::debug;

use crate::params::BuildParams;
use version::AppVersion;

/// Composes the final define symbol string for `params`.
#[must_use]
pub fn compose(params: &BuildParams) -> String {
    let version = params.version();
    let version_symbol = if version.is_empty() {
        String::new()
    } else {
        version_define(version)
    };
    let newer_symbol = version_newer_define(version).unwrap_or_default();

    combine_symbols(
        params.define_symbols(),
        params.job_define_symbols(),
        &version_symbol,
        &newer_symbol,
    )
}

/// Joins symbol groups with `;`, skipping empty ones.
///
/// The first two groups may already end with `;`. Every appended group ends
/// with exactly the separator it brought plus one if it had none.
#[must_use]
pub fn combine_symbols(
    define_symbols: &str,
    job_define_symbols: &str,
    version_symbol: &str,
    newer_symbol: &str,
) -> String {
    let mut out = String::new();

    for group in [define_symbols, job_define_symbols] {
        if !group.is_empty() {
            out.push_str(group);
            if !group.ends_with(';') {
                out.push(';');
            }
        }
    }

    for symbol in [version_symbol, newer_symbol] {
        if !symbol.is_empty() {
            out.push_str(symbol);
            out.push(';');
        }
    }

    out
}

/// `APP_VERSION_` followed by the version with dots turned into underscores.
#[must_use]
pub fn version_define(version: &str) -> String {
    format!("APP_VERSION_{}", version.replace('.', "_"))
}

/// `APP_VERSION_<major>_<minor>_OR_NEWER`, or `None` if `version` is not a
/// dotted numeric version.
#[must_use]
pub fn version_newer_define(version: &str) -> Option<String> {
    match version.parse::<AppVersion>() {
        Ok(parsed) => Some(format!(
            "APP_VERSION_{}_{}_OR_NEWER",
            parsed.major, parsed.minor
        )),
        Err(e) => {
            debug!(version, error = %e, "skipping or-newer define");
            None
        }
    }
}

/// Iterates the non-empty entries of a `;`-separated symbol string.
pub fn split_symbols(symbols: &str) -> impl Iterator<Item = &str> {
    symbols.split(';').map(str::trim).filter(|s| !s.is_empty())
}
