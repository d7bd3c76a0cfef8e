// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The schema-typed configuration tree.
//!
//! The real datastore hands translators a fully-merged post-change
//! tree annotated with
//! per-node diff operations. We model just enough of that shape to
//! build and query it: a path-keyed tree of nodes, each either a leaf
//! value or a container of children, each carrying a diff annotation
//! and a "this value is schema-default" flag.

use crate::diff::{DiffEntry, DiffOp};
use crate::value::Value;
use std::collections::BTreeMap;

/// One node in the configuration tree.
#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    pub value: Option<Value>,
    pub children: BTreeMap<String, TreeNode>,
    pub op: DiffOp,
    pub is_default: bool,
}

impl TreeNode {
    pub fn leaf(value: impl Into<Value>) -> Self {
        Self { value: Some(value.into()), ..Default::default() }
    }

    pub fn leaf_with_op(value: impl Into<Value>, op: DiffOp) -> Self {
        Self { value: Some(value.into()), op, ..Default::default() }
    }

    pub fn container() -> Self {
        Self::default()
    }

    pub fn with_child(mut self, name: impl Into<String>, child: TreeNode) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    pub fn default_leaf(value: impl Into<Value>) -> Self {
        Self { value: Some(value.into()), is_default: true, ..Default::default() }
    }
}

/// Owned by the datastore for the duration of a transaction;
/// translators borrow `&ConfigTree` through their callback parameters.
#[derive(Debug, Clone, Default)]
pub struct ConfigTree {
    root: TreeNode,
}

fn split_path(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect()
}

impl ConfigTree {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Look up a node by slash-separated path, e.g. `/interfaces/eth0/mtu`.
    pub fn get(&self, path: &str) -> Option<&TreeNode> {
        let mut node = &self.root;
        for segment in split_path(path) {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|n| n.value.as_ref()).and_then(Value::as_str)
    }

    /// Direct children of a container path, as `(name, node)` pairs in
    /// stable (lexical) order.
    pub fn children(&self, path: &str) -> Vec<(&str, &TreeNode)> {
        match self.get(path) {
            Some(node) => node.children.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            None => Vec::new(),
        }
    }

    /// Flatten the whole tree into diff entries, depth-first, each
    /// entry's path being the full slash-joined path from the root.
    /// This is the tree-walking counterpart of the datastore's own
    /// change-iterator.
    pub fn diff_entries(&self) -> Vec<DiffEntry> {
        let mut out = Vec::new();
        Self::collect(&self.root, String::new(), &mut out);
        out
    }

    fn collect(node: &TreeNode, path: String, out: &mut Vec<DiffEntry>) {
        if node.value.is_some() || node.op != DiffOp::None {
            out.push(DiffEntry {
                path: path.clone(),
                old_value: None,
                new_value: node.value.clone(),
                op: node.op,
                was_default: false,
                is_default: node.is_default,
            });
        }
        for (name, child) in &node.children {
            let child_path = format!("{path}/{name}");
            Self::collect(child, child_path, out);
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
