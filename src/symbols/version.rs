// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotted numeric application versions.
//!
//! ```text
//! major.minor[.patch[.build]]   2-4 components, each 0..=i32::MAX
//! "1.2"      ok
//! "1.2.3.4"  ok
//! "1"        too few components
//! " 1.+2 "  ok (1.2, each component is trimmed)
//! "1.2-rc"   invalid component
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Failure to read a string as a dotted numeric version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("version is empty")]
    Empty,

    #[error("expected 2 to 4 components, found {0}")]
    ComponentCount(usize),

    #[error("component {index} ('{text}') is not a non-negative integer")]
    InvalidComponent { index: usize, text: String },
}

/// A parsed `major.minor[.patch[.build]]` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
    pub build: Option<u32>,
}

impl AppVersion {
    fn component(index: usize, text: &str) -> Result<u32, VersionParseError> {
        let invalid = || VersionParseError::InvalidComponent {
            index,
            text: text.to_owned(),
        };
        // Surrounding whitespace and one leading '+' are allowed per component.
        let trimmed = text.trim_matches(|c: char| matches!(c, ' ' | '\t'..='\r'));
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // Components are capped at i32::MAX to match engine version fields.
        let value: u32 = digits.parse().map_err(|_| invalid())?;
        if i32::try_from(value).is_err() {
            return Err(invalid());
        }
        Ok(value)
    }
}

impl FromStr for AppVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(VersionParseError::ComponentCount(parts.len()));
        }

        let mut numbers = parts
            .iter()
            .enumerate()
            .map(|(i, text)| Self::component(i, text))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter();

        // parts.len() >= 2 was checked above
        let major = numbers.next().unwrap_or_default();
        let minor = numbers.next().unwrap_or_default();
        Ok(Self {
            major,
            minor,
            patch: numbers.next(),
            build: numbers.next(),
        })
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(patch) = self.patch {
            write!(f, ".{patch}")?;
            if let Some(build) = self.build {
                write!(f, ".{build}")?;
            }
        }
        Ok(())
    }
}
