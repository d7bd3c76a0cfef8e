// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation errors shared across the data model.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("entity name {name:?} exceeds {max} bytes for kind {kind}")]
    NameTooLong { name: String, kind: &'static str, max: usize },

    #[error("entity name {name:?} is empty")]
    EmptyName { name: String },

    #[error("priority {0} is out of range, must be 0..=99")]
    PriorityOutOfRange(u16),

    #[error("script name {0:?} has no recognized extension")]
    UnknownScriptExt(String),
}
