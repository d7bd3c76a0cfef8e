// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/dhcp-server/subnet` -> one `dnsmasq.d` fragment per subnet.

use crate::support::{abort_replace, stage_remove, stage_replace};
use confd_core::{ConfigTree, DiffIter, DiffOp, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use std::path::PathBuf;

const XPATH: &str = "/dhcp-server/subnet";

pub struct DhcpServerTranslator {
    fragment_dir: PathBuf,
}

impl DhcpServerTranslator {
    pub fn new(fragment_dir: impl Into<PathBuf>) -> Self {
        Self { fragment_dir: fragment_dir.into() }
    }

    fn fragment_path(&self, subnet: &str) -> PathBuf {
        self.fragment_dir.join(format!("{subnet}.conf"))
    }

    fn entity(&self, subnet: &str) -> Entity {
        Entity::new(EntityKind::DhcpSubnet, subnet).unwrap_or(Entity { kind: EntityKind::DhcpSubnet, name: "invalid".into(), parent_kind: None })
    }
}

impl Translator for DhcpServerTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(45)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }

        for (name, subnet) in tree.children(XPATH) {
            let entity = self.entity(name);
            let path = self.fragment_path(name);

            if subnet.op == DiffOp::Delete {
                stage_remove(txn, &entity, 45, &path, &["initctl -nbq touch dnsmasq"])?;
                continue;
            }

            let range_start = subnet.children.get("range-start").and_then(|n| n.value.as_ref()).and_then(|v| v.as_str()).unwrap_or("");
            let range_end = subnet.children.get("range-end").and_then(|n| n.value.as_ref()).and_then(|v| v.as_str()).unwrap_or("");
            let lease_time = subnet.children.get("lease-time").and_then(|n| n.value.as_ref()).and_then(|v| v.as_int()).unwrap_or(3600);

            let body = format!("dhcp-range={name},{range_start},{range_end},{lease_time}s\n");
            stage_replace(txn, &entity, 45, &path, body.as_bytes(), &["initctl -nbq touch dnsmasq"])?;
        }
        Ok(())
    }

    fn on_abort(&mut self, _txn: &TxnHandle<'_>) {
        if let Ok(entries) = std::fs::read_dir(&self.fragment_dir) {
            for entry in entries.flatten() {
                abort_replace(&entry.path());
            }
        }
    }
}

#[cfg(test)]
#[path = "dhcp_server_tests.rs"]
mod tests;
