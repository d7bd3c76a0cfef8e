// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `confd` binary entry point. Unlike `main.c`'s `daemon_init`, this
//! never double-forks: the workspace forbids `unsafe` code outright,
//! fork() cannot be expressed without it, and under a modern
//! supervisor (`finit`, systemd) a service is expected to stay in the
//! foreground and let the supervisor track its one pid. `-n` and
//! `-d` both mean "don't detach"; neither flag has anything left to
//! do differently at that level.

use clap::Parser;
use confd_daemon::{Cli, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_cli(cli);
    confd_daemon::logging::init(config.verbosity);

    match confd_daemon::run(config) {
        Ok(outcome) => {
            tracing::info!(
                bootstrap = ?outcome.bootstrap,
                actions_run = outcome.actions_run,
                actions_failed = outcome.actions_failed,
                "confd startup complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "confd failed to start");
            ExitCode::FAILURE
        }
    }
}
