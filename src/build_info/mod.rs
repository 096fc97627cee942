// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build metadata and environment reports.
//!
//! ```text
//! BuildInfo.txt          "<commit[..8]> <build number>"  or  "<build number>"
//! EnvironmentVariables   "KEY = VALUE" per line, sorted
//! BuildTest.txt          #Command Line Args / #Environment Variables / #CommandLine
//! ```

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use tokio::fs;
use tracing::{debug, info};

use crate::core::env::container::Env;
use crate::error::{FsError, UbuildResult};
use crate::params::BuildParams;

/// Commit id characters kept in the build info file.
pub const SHORT_COMMIT_LEN: usize = 8;

/// Identifies the commit and CI build a player came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub commit_id: String,
    pub build_number: i32,
}

impl BuildInfo {
    #[must_use]
    pub fn from_params(params: &BuildParams) -> Self {
        Self {
            commit_id: params.git_commit().to_owned(),
            build_number: params.build_number(),
        }
    }

    /// First [`SHORT_COMMIT_LEN`] characters of the commit id.
    #[must_use]
    pub fn short_commit(&self) -> &str {
        self.commit_id
            .char_indices()
            .nth(SHORT_COMMIT_LEN)
            .map_or(self.commit_id.as_str(), |(end, _)| &self.commit_id[..end])
    }

    /// File content, without a trailing newline.
    #[must_use]
    pub fn content(&self) -> String {
        if self.commit_id.is_empty() {
            self.build_number.to_string()
        } else {
            format!("{} {}", self.short_commit(), self.build_number)
        }
    }

    /// Writes [`content`](Self::content) to `path`.
    ///
    /// # Errors
    ///
    /// Returns an `FsError` if the parent directory or file cannot be written.
    pub async fn write(&self, path: &Path, dry_run: bool) -> UbuildResult<()> {
        info!(
            commit = %self.commit_id,
            build_number = self.build_number,
            "saving build info"
        );
        write_report(path, &self.content(), dry_run).await
    }
}

/// `KEY = VALUE` lines for every variable, in key order.
#[must_use]
pub fn format_env_dump(env: &Env) -> String {
    let mut out = String::new();
    for (key, value) in env.iter() {
        let _ = writeln!(out, "{key} = {value}");
    }
    out
}

/// Diagnostic report of how the process was invoked.
#[must_use]
pub fn format_diagnostics(args: &[String], env: &Env, command_line: &str) -> String {
    let mut out = String::from("#Command Line Args\n");
    if !args.is_empty() {
        for arg in args {
            let _ = writeln!(out, "{arg}");
        }
        out.push('\n');
    }
    out.push('\n');

    out.push_str("#Environment Variables\n");
    if !env.is_empty() {
        for (key, value) in env.iter() {
            let _ = writeln!(out, "{key}:{value}");
        }
        out.push('\n');
    }
    out.push('\n');

    out.push_str("#CommandLine\n");
    let _ = writeln!(out, "{command_line}");
    out
}

/// Writes `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an `FsError` if the parent directory or file cannot be written.
pub async fn write_report(path: &Path, content: &str, dry_run: bool) -> UbuildResult<()> {
    if dry_run {
        info!(path = %path.display(), bytes = content.len(), "[dry] would write file");
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| FsError::io(parent, e))?;
    }

    fs::write(path, content)
        .await
        .map_err(|e| FsError::io(path, e))?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}
