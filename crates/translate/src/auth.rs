// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/system/authentication` -> local user accounts and their
//! authorized SSH keys. The real edits go through an augeas-style
//! tree so `/etc/passwd`, `/etc/shadow` and
//! `~/.ssh/authorized_keys` stay syntactically valid even for
//! hand-edited files; that lens abstraction is the only thing this
//! translator depends on, and a production `AugeasTree` is out of
//! scope here — supplied by the process wiring these translators up.

use confd_core::{ConfigTree, DiffIter, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};

const XPATH: &str = "/system/authentication";

/// A narrow view of an augeas-backed configuration tree: set a path to
/// a value, and commit the accumulated edits to disk.
pub trait AugeasTree: Send {
    fn set(&mut self, path: &str, value: &str) -> Result<(), TranslateError>;
    fn remove(&mut self, path: &str) -> Result<(), TranslateError>;
    fn save(&mut self) -> Result<(), TranslateError>;
}

pub struct AuthTranslator {
    tree: Box<dyn AugeasTree>,
}

impl AuthTranslator {
    pub fn new(tree: Box<dyn AugeasTree>) -> Self {
        Self { tree }
    }

    fn entity(&self) -> Entity {
        Entity { kind: EntityKind::System, name: "authentication".into(), parent_kind: None }
    }
}

impl Translator for AuthTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(20)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }

        for (user, node) in tree.children(&format!("{XPATH}/user")) {
            let base = format!("passwd[name='{user}']");
            if node.op == confd_core::DiffOp::Delete {
                self.tree.remove(&base)?;
                continue;
            }
            if let Some(password) = node.children.get("password").and_then(|n| n.value.as_ref()).and_then(|v| v.as_str()) {
                self.tree.set(&format!("{base}/password"), password)?;
            }
            for (_, key_node) in tree.children(&format!("{XPATH}/user/{user}/authorized-key")) {
                if let Some(key) = key_node.value.as_ref().and_then(|v| v.as_str()) {
                    self.tree.set(&format!("{base}/authorized-key"), key)?;
                }
            }
        }
        self.tree.save()?;
        txn.add_node(&self.entity())
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
