// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/interfaces/interface/ipv4/dhcp-client` -> a per-interface
//! supervisor config consumed by the DHCP client service.

use crate::support::{abort_replace, stage_remove, stage_replace};
use confd_core::{ConfigTree, DiffIter, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use std::path::PathBuf;

const XPATH: &str = "/interfaces/interface";

pub struct DhcpClientTranslator {
    config_dir: PathBuf,
}

impl DhcpClientTranslator {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self { config_dir: config_dir.into() }
    }

    fn config_path(&self, ifname: &str) -> PathBuf {
        self.config_dir.join(format!("{ifname}.conf"))
    }

    fn entity(&self, ifname: &str) -> Entity {
        Entity { kind: EntityKind::System, name: format!("dhcp-client-{ifname}").into(), parent_kind: None }
    }
}

impl Translator for DhcpClientTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(35)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if !diff.under(XPATH).any(|e| e.path.contains("dhcp-client")) {
            return Ok(());
        }

        for (ifname, iface) in tree.children(XPATH) {
            let enabled = iface
                .children
                .get("ipv4")
                .and_then(|ipv4| ipv4.children.get("dhcp-client"))
                .and_then(|dhcp| dhcp.children.get("enabled"))
                .and_then(|n| n.value.as_ref())
                .and_then(|v| v.as_bool())
                .unwrap_or(false);

            let path = self.config_path(ifname);
            let entity = self.entity(ifname);
            if enabled {
                stage_replace(txn, &entity, 35, &path, format!("interface {ifname}\n").as_bytes(), &["initctl -nbq touch dhcpcd"])?;
            } else if path.exists() {
                stage_remove(txn, &entity, 35, &path, &["initctl -nbq touch dhcpcd"])?;
            }
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
#[path = "dhcp_client_tests.rs"]
mod tests;
