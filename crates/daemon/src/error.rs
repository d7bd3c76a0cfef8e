// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that can abort the daemon's startup sequence. Bootstrap
//! failures are handled (not necessarily fatal — see `bootstrap.rs`'s
//! fail-secure fallback chain); everything else here is fatal and the
//! process exits non-zero.

use confd_dagger::DaggerError;
use confd_dispatch::TranslateError;
use confd_runner::RunnerError;
use confd_wire::WireError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("failed to acquire pid lock at {path}: {source}")]
    LockFailed { path: std::path::PathBuf, #[source] source: std::io::Error },

    #[error("another confd instance is already running (pid file {0} is locked)")]
    AlreadyRunning(std::path::PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Dagger(#[from] DaggerError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    /// No usable configuration could be loaded at all, even after
    /// falling back to the factory and failure configs — the last
    /// resort short of refusing to come up.
    #[error("bootstrap exhausted every fallback configuration: {0}")]
    Bootstrap(String),
}
