// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use confd_shell::SpawnError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    /// Opening a persistent batch pipe, or writing the final `current`
    /// pointer, failed — the one case the runner cannot just log and
    /// move past.
    #[error("fatal runner failure: {0}")]
    Fatal(#[source] Box<RunnerError>),

    #[error("failed to spawn batch pipe: {0}")]
    Spawn(#[from] SpawnError),

    #[error("failed to read action directory {path}: {source}")]
    ReadDir { path: PathBuf, #[source] source: std::io::Error },

    #[error("scratch-area I/O error: {0}")]
    Io(#[from] std::io::Error),
}
