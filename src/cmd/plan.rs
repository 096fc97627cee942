// ubuild: Player Build Parameter Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `plan` command.

use tracing::{debug, info};

use super::resolve_params;
use crate::cli::params::PlanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::plan::sink::SettingsRecord;
use crate::plan::{BuildPlan, PlanContext};

/// Derives and prints the plan for `args.target`.
///
/// Prints the summary by default, the applied settings with `--settings`,
/// or the whole plan with `--json`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_plan_command(args: &PlanArgs, config: &Config) -> Result<()> {
    let params = resolve_params(&args.source, config);
    let output = config.paths.target_output(args.target);
    let context = PlanContext {
        output_exists: output.exists(),
        ios_architecture: config.player.ios_architecture(),
    };
    debug!(
        target = %args.target,
        output = %output.display(),
        output_exists = context.output_exists,
        "deriving build plan"
    );

    let plan = BuildPlan::new(args.target, &params, context);
    info!(target = %args.target, "build plan ready");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else if args.settings {
        let mut record = SettingsRecord::new();
        plan.apply_to(&mut record);
        for line in record.format_lines() {
            println!("{line}");
        }
    } else {
        for line in plan.summary() {
            println!("{line}");
        }
    }
    Ok(())
}
