// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test builders for constructing trees and diff entries without
//! repeating the verbose [`TreeNode`] nesting in every test.

use crate::diff::{DiffEntry, DiffOp};
use crate::tree::TreeNode;
use crate::value::Value;

/// Build a container node from `(name, child)` pairs.
pub fn container(children: impl IntoIterator<Item = (&'static str, TreeNode)>) -> TreeNode {
    let mut node = TreeNode::container();
    for (name, child) in children {
        node = node.with_child(name, child);
    }
    node
}

/// Build a [`DiffEntry`] for a real, non-default change.
pub fn changed_entry(path: &str, old: Option<Value>, new: Option<Value>, op: DiffOp) -> DiffEntry {
    DiffEntry { path: path.to_string(), old_value: old, new_value: new, op, was_default: false, is_default: false }
}

/// Build a [`DiffEntry`] representing a default-value materialization
/// (must never be reported as `modified()`).
pub fn default_entry(path: &str, value: Value) -> DiffEntry {
    DiffEntry {
        path: path.to_string(),
        old_value: None,
        new_value: Some(value),
        op: DiffOp::Create,
        was_default: false,
        is_default: true,
    }
}
