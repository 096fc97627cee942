// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key/value parameter sources.
//!
//! # Command-Line Convention
//!
//! ```text
//! -KEY "VALUE" / -KEY VALUE
//!
//! -APP_VERSION 1.2.3 -BUILD_NUMBER @42
//!   APP_VERSION  -> "1.2.3"
//!   BUILD_NUMBER -> "@42"   (integer accessor strips '@')
//!
//! -FOO "bar baz" -QUX 1
//!   FOO -> "bar"            (only the first word is kept)
//!   QUX -> "1"
//! ```

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use crate::core::env::container::Env;
use crate::core::env::current_env;

/// A read-only lookup of build parameters.
///
/// Implementors only provide [`get`](Self::get); the typed accessors never
/// fail and fall back to the caller's default on a missing key or a value
/// that does not parse.
pub trait ParameterSource {
    /// Returns the raw value for `key`, or `None` if the key is absent.
    ///
    /// A key present with an empty value returns `Some("")`.
    fn get(&self, key: &str) -> Option<&str>;

    /// Returns the value for `key`, or `default` if absent.
    fn string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_owned()
    }

    /// Returns `key` parsed as `true`/`false` (case-insensitive), or `default`.
    fn boolean(&self, key: &str, default: bool) -> bool {
        self.get(key).map_or(default, |raw| {
            parse_bool(raw).unwrap_or_else(|| {
                debug!(key, value = raw, default, "not a boolean, using default");
                default
            })
        })
    }

    /// Returns `key` parsed as an integer after stripping `@`, or `default`.
    fn integer(&self, key: &str, default: i32) -> i32 {
        self.get(key).map_or(default, |raw| {
            parse_int(raw).unwrap_or_else(|| {
                debug!(key, value = raw, default, "not an integer, using default");
                default
            })
        })
    }
}

/// Parses a boolean the lenient way CI tools write them (`True`, ` false `).
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parses a signed 32-bit integer, ignoring any `@` characters.
///
/// Some CI template engines leave `@` markers around substituted values.
#[must_use]
pub fn parse_int(raw: &str) -> Option<i32> {
    let cleaned: String = raw.chars().filter(|&c| c != '@').collect();
    cleaned.trim().parse().ok()
}

// --- Environment ---

/// Parameters read from a snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    env: Env,
}

impl EnvSource {
    /// Snapshots the current process environment.
    #[must_use]
    pub fn capture() -> Self {
        Self { env: current_env() }
    }

    /// Builds a source from an already collected map.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            env: Env::from_map(vars),
        }
    }

    /// Builds a source from `(key, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            env: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The underlying snapshot.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }
}

impl ParameterSource for EnvSource {
    fn get(&self, key: &str) -> Option<&str> {
        self.env.get(key)
    }
}

// --- Command line ---

/// Parameters parsed on demand from a single raw command-line string.
#[derive(Debug, Clone, Default)]
pub struct CommandLineSource {
    line: String,
}

impl CommandLineSource {
    #[must_use]
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// Joins process arguments with single spaces, as a shell would show them.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = args
            .into_iter()
            .map(|a| a.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(" ");
        Self { line }
    }

    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    fn pattern(name: &str) -> Option<Regex> {
        let pattern = format!(r#"(?:^| )-{} "?([^"]+)"?(?: -)?"#, regex::escape(name));
        match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                debug!(key = name, error = %e, "failed to build parameter pattern");
                None
            }
        }
    }
}

impl ParameterSource for CommandLineSource {
    /// Finds `-name value` and returns the first space-delimited word of the
    /// value. Text after a space inside the value, quoted or not, is dropped.
    fn get(&self, key: &str) -> Option<&str> {
        let captures = Self::pattern(key)?.captures(&self.line)?;
        let value = captures.get(1)?.as_str();
        value.split(' ').next()
    }
}
