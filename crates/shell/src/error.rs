// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("failed to spawn {program}: {source}")]
    Spawn { program: String, #[source] source: std::io::Error },

    #[error("failed to write to {program}'s stdin: {source}")]
    WriteStdin { program: String, #[source] source: std::io::Error },

    #[error("failed to wait for {program}: {source}")]
    Wait { program: String, #[source] source: std::io::Error },

    #[error("failed to write {path}: {source}")]
    AtomicWrite { path: PathBuf, #[source] source: std::io::Error },
}
