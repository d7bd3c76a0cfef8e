// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log initialization. Debug mode logs to stderr at the requested
//! verbosity; daemonized mode still goes to stderr, since `main.c`'s
//! own convention is to let the supervising init system capture it
//! rather than open a dedicated log file.

use crate::cli::Verbosity;
use crate::env;
use tracing_subscriber::EnvFilter;

pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::new(env::log_filter(verbosity.filter_directive()));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    if let Err(err) = subscriber.try_init() {
        eprintln!("confd: logging already initialized: {err}");
    }
}
