// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed config document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    #[error("failed to read config document: {0}")]
    Io(#[source] std::io::Error),

    #[error("config document has no top-level object")]
    NotAnObject,
}
