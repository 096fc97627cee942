// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment handling.
//!
//! ```text
//!   core
//!    |
//!    v
//!   env
//!    |
//!   Env (snapshot, host key rules)
//! ```

pub mod env;
