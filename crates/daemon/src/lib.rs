// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `confd` daemon: wires every per-module translator from
//! `confd-translate` into a `confd-dispatch::Dispatcher`, bootstraps a
//! configuration the way `main.c` does (startup, falling back to
//! factory-default, falling back again to a failure-config), and hands
//! the resulting generation to `confd-runner`.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod adapters;
mod banner;
mod bootstrap;
mod cli;
mod config;
mod env;
mod error;
mod lifecycle;
mod lockfile;
pub mod logging;
mod translators;

pub use bootstrap::BootstrapOutcome;
pub use cli::{Cli, Verbosity};
pub use config::Config;
pub use error::LifecycleError;
pub use lifecycle::{run, RunOutcome};
