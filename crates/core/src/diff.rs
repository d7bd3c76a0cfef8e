// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-leaf diff annotations derived from the annotated configuration
//! tree, and the lazy iterator translators consume them through.

use crate::value::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffOp {
    Create,
    Delete,
    Replace,
    None,
}

/// A single leaf's diff annotation. Modification is true only when the
/// value actually changed non-defaultly — a leaf whose default value
/// was materialized, or whose value is unchanged, does not count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub path: String,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    pub op: DiffOp,
    pub was_default: bool,
    pub is_default: bool,
}

impl DiffEntry {
    pub fn modified(&self) -> bool {
        self.op != DiffOp::None && self.old_value != self.new_value && !self.is_default
    }
}

/// A lazy, borrowed sequence of [`DiffEntry`] values for exactly one
/// transaction. Entries are produced on demand from the annotated tree
/// and must not be retained past the callback that received them — the
/// borrow enforces this at compile time rather than by convention.
pub struct DiffIter<'txn> {
    entries: std::slice::Iter<'txn, DiffEntry>,
}

impl<'txn> DiffIter<'txn> {
    pub fn new(entries: &'txn [DiffEntry]) -> Self {
        Self { entries: entries.iter() }
    }

    /// Entries whose path starts with the given XPath-like prefix.
    pub fn under(self, prefix: &'txn str) -> impl Iterator<Item = &'txn DiffEntry> + 'txn {
        self.entries.filter(move |e| e.path.starts_with(prefix))
    }
}

impl<'txn> Iterator for DiffIter<'txn> {
    type Item = &'txn DiffEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
