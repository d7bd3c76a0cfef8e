// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level orchestration: lock, bootstrap a configuration, stage
//! every translator's actions for it in one transaction, and hand the
//! resulting generation to the runner. Condensed from `main.c`'s
//! twelve-phase `main()` down to the phases that still apply once
//! sysrepo's live subscription plumbing is out of scope: single
//! instance enforcement, fail-secure config load, and one whole-config
//! activation.

use crate::bootstrap::{self, BootstrapOutcome};
use crate::config::Config;
use crate::error::LifecycleError;
use crate::lockfile::PidLock;
use crate::translators;
use tracing::info;

pub struct RunOutcome {
    pub bootstrap: BootstrapOutcome,
    pub actions_run: usize,
    pub actions_failed: usize,
}

pub fn run(config: Config) -> Result<RunOutcome, LifecycleError> {
    let _lock = match &config.pid_file {
        Some(path) => Some(PidLock::acquire(path)?),
        None => None,
    };

    std::fs::create_dir_all(&config.scratch_root)?;

    let (document, outcome) = bootstrap::load(&config)?;
    info!(?outcome, "configuration bootstrapped");

    let mut dispatcher = translators::build(&config)?;
    let tree = document.to_config_tree();
    dispatcher.on_update(&tree)?;

    let diff_entries = tree.diff_entries();
    dispatcher.on_change(&tree, &diff_entries)?;

    let mut summary = confd_runner::RunSummary::default();
    {
        let summary = &mut summary;
        dispatcher.on_done(move |layout, generation| {
            let result = confd_runner::run(layout, generation)?;
            *summary = result;
            Ok(())
        })?;
    }

    info!(actions_run = summary.actions_run, actions_failed = summary.actions_failed, "generation activated");
    Ok(RunOutcome { bootstrap: outcome, actions_run: summary.actions_run, actions_failed: summary.actions_failed })
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
