// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build parameter resolution.
//!
//! ```text
//! EnvSource (snapshot) ----+
//!                          +--> ParameterSource::{string, boolean, integer}
//! CommandLineSource -------+              |
//!   -KEY "VALUE" / -KEY VALUE             v
//!                               BuildParams::resolve() --> BuildParams
//!                               (total: every field defaults)
//! ```
//!
//! Resolution never fails. An absent key and an unparsable value both fall
//! back to the field default, so a cosmetic misconfiguration in a CI job
//! cannot abort the build.

pub mod build_params;
pub mod keys;
pub mod source;

pub use build_params::BuildParams;
pub use source::{CommandLineSource, EnvSource, ParameterSource};

#[cfg(test)]
mod tests;
