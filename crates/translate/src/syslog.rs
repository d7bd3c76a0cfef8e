// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/system/syslog/action` -> `syslog.d/<action>.conf` action files.

use crate::support::{abort_replace, stage_remove, stage_replace};
use confd_core::{ConfigTree, DiffIter, DiffOp, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use std::path::PathBuf;

const XPATH: &str = "/system/syslog/action";

pub struct SyslogTranslator {
    config_dir: PathBuf,
}

impl SyslogTranslator {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self { config_dir: config_dir.into() }
    }

    fn entity(&self, action: &str) -> Entity {
        Entity::new(EntityKind::SyslogAction, action).unwrap_or(Entity { kind: EntityKind::SyslogAction, name: "invalid".into(), parent_kind: None })
    }
}

impl Translator for SyslogTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(80)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }

        for (name, action) in tree.children(XPATH) {
            let entity = self.entity(name);
            let path = self.config_dir.join(format!("{name}.conf"));

            if action.op == DiffOp::Delete {
                stage_remove(txn, &entity, 80, &path, &["initctl -nbq touch syslogd"])?;
                continue;
            }

            let facility = action.children.get("facility").and_then(|n| n.value.as_ref()).and_then(|v| v.as_str()).unwrap_or("*");
            let destination = action.children.get("destination").and_then(|n| n.value.as_ref()).and_then(|v| v.as_str()).unwrap_or("/var/log/messages");
            let body = format!("{facility}.*\t{destination}\n");
            stage_replace(txn, &entity, 80, &path, body.as_bytes(), &["initctl -nbq touch syslogd"])?;
        }
        Ok(())
    }

    fn on_abort(&mut self, _txn: &TxnHandle<'_>) {
        if let Ok(entries) = std::fs::read_dir(&self.config_dir) {
            for entry in entries.flatten() {
                abort_replace(&entry.path());
            }
        }
    }
}

#[cfg(test)]
#[path = "syslog_tests.rs"]
mod tests;
