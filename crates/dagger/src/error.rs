// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use confd_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaggerError {
    #[error("transaction already in progress under {path}")]
    TransactionInProgress { path: PathBuf },

    #[error("no current generation exists yet")]
    NoCurrentGeneration,

    #[error(transparent)]
    InvalidAddressing(#[from] CoreError),

    #[error("generation activation failed: {0}")]
    Activation(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("scratch-area I/O error: {0}")]
    Io(#[from] std::io::Error),
}
