// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/system/ntp` -> chrony configuration (`chrony.d/confd.conf`).

use crate::support::{abort_replace, stage_remove, stage_replace};
use confd_core::{ConfigTree, DiffIter, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use std::path::PathBuf;

const XPATH: &str = "/system/ntp";

pub struct NtpTranslator {
    chrony_conf: PathBuf,
}

impl NtpTranslator {
    pub fn new(chrony_conf: impl Into<PathBuf>) -> Self {
        Self { chrony_conf: chrony_conf.into() }
    }

    fn entity(&self) -> Entity {
        Entity { kind: EntityKind::System, name: "ntp".into(), parent_kind: None }
    }
}

impl Translator for NtpTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(40)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }

        let enabled = tree
            .get(&format!("{XPATH}/enabled"))
            .and_then(|n| n.value.as_ref())
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        let servers: Vec<&str> = tree
            .children(&format!("{XPATH}/server"))
            .into_iter()
            .filter_map(|(_, node)| node.value.as_ref().and_then(|v| v.as_str()))
            .collect();

        if !enabled || servers.is_empty() {
            return stage_remove(txn, &self.entity(), 40, &self.chrony_conf, &["initctl -nbq touch chronyd"]);
        }

        let mut body = String::new();
        for server in &servers {
            body.push_str("server ");
            body.push_str(server);
            body.push_str(" iburst\n");
        }
        stage_replace(txn, &self.entity(), 40, &self.chrony_conf, body.as_bytes(), &["initctl -nbq touch chronyd"])
    }

    fn on_abort(&mut self, _txn: &TxnHandle<'_>) {
        abort_replace(&self.chrony_conf);
    }
}

#[cfg(test)]
#[path = "ntp_tests.rs"]
mod tests;
