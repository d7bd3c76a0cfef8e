// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The JSON document format shared by factory, startup, running and
//! failure configuration. There is exactly one shape; which file it
//! was loaded from only changes how `confd-daemon` picked it at
//! bootstrap, not how it's parsed.

use crate::error::WireError;
use confd_core::{ConfigTree, DiffOp, TreeNode, Value as TreeValue};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    top: Value,
}

impl ConfigDocument {
    pub fn from_str(text: &str) -> Result<Self, WireError> {
        let top: Value = serde_json::from_str(text).map_err(WireError::MalformedDocument)?;
        if !top.is_object() {
            return Err(WireError::NotAnObject);
        }
        Ok(Self { top })
    }

    pub fn from_file(path: &Path) -> Result<Self, WireError> {
        let text = std::fs::read_to_string(path).map_err(WireError::Io)?;
        Self::from_str(&text)
    }

    pub fn empty() -> Self {
        Self { top: serde_json::json!({}) }
    }

    /// The parsed top-level object. Translators read their own subtree
    /// out of this via [`ConfigDocument::get`], they never hold onto
    /// the whole document.
    pub fn top(&self) -> &Value {
        &self.top
    }

    pub fn get(&self, pointer: &str) -> Option<&Value> {
        self.top.pointer(pointer)
    }

    pub fn to_pretty_string(&self) -> Result<String, WireError> {
        serde_json::to_string_pretty(&self.top).map_err(WireError::MalformedDocument)
    }

    /// Convert this document into a [`ConfigTree`] with every leaf
    /// annotated `DiffOp::Create` — the shape the datastore hands
    /// translators the first time a config is loaded into an empty
    /// running datastore, where the diff is all-create by definition.
    pub fn to_config_tree(&self) -> ConfigTree {
        ConfigTree::new(json_to_node(&self.top))
    }
}

fn json_to_node(value: &Value) -> TreeNode {
    match value {
        Value::Object(map) => {
            let mut node = TreeNode::container();
            for (key, child) in map {
                node.children.insert(key.clone(), json_to_node(child));
            }
            node
        }
        Value::Array(items) if items.iter().all(is_scalar) => {
            TreeNode::leaf_with_op(TreeValue::List(items.iter().filter_map(json_scalar).collect()), DiffOp::Create)
        }
        Value::Array(items) => {
            let mut node = TreeNode::container();
            for (index, child) in items.iter().enumerate() {
                node.children.insert(index.to_string(), json_to_node(child));
            }
            node
        }
        Value::Null => TreeNode::container(),
        scalar => match json_scalar(scalar) {
            Some(value) => TreeNode::leaf_with_op(value, DiffOp::Create),
            None => TreeNode::container(),
        },
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

fn json_scalar(value: &Value) -> Option<TreeValue> {
    match value {
        Value::String(s) => Some(TreeValue::Str(s.clone())),
        Value::Bool(b) => Some(TreeValue::Bool(*b)),
        Value::Number(n) => n.as_i64().map(TreeValue::Int),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
