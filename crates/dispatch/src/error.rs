// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use confd_dagger::DaggerError;
use thiserror::Error;

/// Errors a translator (or the dispatcher itself) can raise while
/// staging a transaction. Any of these raised from `on_change`
/// transitions the whole transaction to ABORT.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("rejected by translator: {0}")]
    Validation(String),

    #[error("failed to stage action: {0}")]
    Staging(String),

    #[error("no transaction is open")]
    NoOpenTransaction,

    #[error(transparent)]
    Dagger(#[from] DaggerError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
