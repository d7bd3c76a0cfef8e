// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/system/hostname` -> `/etc/hostname`.

use crate::support::{abort_replace, stage_replace};
use confd_core::{ConfigTree, DiffIter, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use std::path::PathBuf;

const XPATH: &str = "/system/hostname";
const DEFAULT_HOSTNAME: &str = "confd";

pub struct HostnameTranslator {
    target: PathBuf,
}

impl HostnameTranslator {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self { target: target.into() }
    }

    fn entity(&self) -> Entity {
        Entity { kind: EntityKind::System, name: "hostname".into(), parent_kind: None }
    }
}

impl Translator for HostnameTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(10)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }
        let name = tree.get_str(XPATH).unwrap_or(DEFAULT_HOSTNAME);
        stage_replace(txn, &self.entity(), 10, &self.target, format!("{name}\n").as_bytes(), &["initctl -nbq touch hostname"])
    }

    fn on_abort(&mut self, _txn: &TxnHandle<'_>) {
        abort_replace(&self.target);
    }
}

#[cfg(test)]
#[path = "hostname_tests.rs"]
mod tests;
