// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        params / plan / report
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            |
//!     env vars / -KEY VALUE  v
//!          --------->     params  --> BuildParams
//!                            |
//!                +-----------+-----------+
//!                v           v           v
//!             symbols       plan     build_info
//!            defines    per-target   BuildInfo.txt
//!                       BuildPlan    env reports
//!
//!   +-----------------------------------------+
//!   |  core   env snapshot                    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod build_info;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod params;
pub mod plan;
pub mod symbols;
