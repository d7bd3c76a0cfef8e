// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/keystore/ssh-host-key` -> SSH host keys, `/keystore/certificate`
//! -> TLS cert+key pairs. Both are staged only once their generating
//! `finit` condition is asserted, since generating a keypair mid-boot
//! before the entropy pool and the filesystem are ready is unsafe.

use crate::support::{abort_replace, stage_replace};
use confd_core::{ConfigTree, DiffIter, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use std::path::PathBuf;

const XPATH: &str = "/keystore";

/// Reports whether a named `finit` condition is currently asserted.
/// Backed by `/run/finit/cond/<name>` in production; faked in tests.
pub trait FinitCondition: Send {
    fn is_asserted(&self, name: &str) -> bool;
}

pub struct KeystoreTranslator {
    keys_dir: PathBuf,
    condition: Box<dyn FinitCondition>,
}

impl KeystoreTranslator {
    pub fn new(keys_dir: impl Into<PathBuf>, condition: Box<dyn FinitCondition>) -> Self {
        Self { keys_dir: keys_dir.into(), condition }
    }

    fn entity(&self, name: &str) -> Entity {
        Entity { kind: EntityKind::System, name: format!("keystore-{name}").into(), parent_kind: None }
    }
}

impl Translator for KeystoreTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(15)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }
        if !self.condition.is_asserted("sys/ready") {
            return Ok(());
        }

        for (name, key) in tree.children(&format!("{XPATH}/ssh-host-key")) {
            let material = match key.children.get("private-key").and_then(|n| n.value.as_ref()).and_then(|v| v.as_str()) {
                Some(material) => material,
                None => continue,
            };
            let path = self.keys_dir.join(format!("ssh_host_{name}_key"));
            stage_replace(txn, &self.entity(name), 15, &path, material.as_bytes(), &["initctl -nbq touch sshd"])?;
        }
        Ok(())
    }

    fn on_abort(&mut self, _txn: &TxnHandle<'_>) {
        if let Ok(entries) = std::fs::read_dir(&self.keys_dir) {
            for entry in entries.flatten() {
                abort_replace(&entry.path());
            }
        }
    }
}

#[cfg(test)]
#[path = "keystore_tests.rs"]
mod tests;
