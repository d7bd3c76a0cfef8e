// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/firewall/zone` -> firewalld zone/service/policy XML, staged
//! under `/etc/firewalld+` and rolled atomically to `/etc/firewalld`
//! only once the whole generation lands: a whole-directory variant of
//! [`crate::support::stage_replace`], since firewalld configuration is
//! a tree of files, not one.

use confd_core::{ConfigTree, DiffIter, DiffOp, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use confd_shell::quote_for_script;
use std::io::Write;
use std::path::PathBuf;

const XPATH: &str = "/firewall/zone";

pub struct FirewallTranslator {
    staging_root: PathBuf,
    live_root: PathBuf,
}

impl FirewallTranslator {
    pub fn new(staging_root: impl Into<PathBuf>, live_root: impl Into<PathBuf>) -> Self {
        Self { staging_root: staging_root.into(), live_root: live_root.into() }
    }

    fn entity(&self, zone: &str) -> Entity {
        Entity::new(EntityKind::FirewallZone, zone).unwrap_or(Entity { kind: EntityKind::FirewallZone, name: "invalid".into(), parent_kind: None })
    }
}

impl Translator for FirewallTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(70)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }

        for (name, zone) in tree.children(XPATH) {
            let entity = self.entity(name);
            if zone.op == DiffOp::Delete {
                txn.add_node(&entity)?;
                continue;
            }

            let target = self.staging_root.join(format!("zones/{name}.xml"));
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let target_interface = zone.children.get("interface").and_then(|n| n.value.as_ref()).and_then(|v| v.as_str()).unwrap_or("");
            let body = format!(
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<zone>\n  <short>{name}</short>\n  <interface name=\"{target_interface}\"/>\n</zone>\n"
            );
            std::fs::write(&target, body)?;
            txn.add_node(&entity)?;
        }

        // The whole staged tree is rolled into place by one action,
        // after every zone's fragment has been written above.
        let root_entity = Entity { kind: EntityKind::FirewallZone, name: "all".into(), parent_kind: None };
        let mut file = txn.open_init(&root_entity, 70, "commit.sh")?;
        writeln!(
            file,
            "rm -rf {0} && mv -f {1} {0}",
            quote_for_script(&self.live_root.to_string_lossy()),
            quote_for_script(&self.staging_root.to_string_lossy())
        )?;
        txn.signal_reload("initctl -nbq touch firewalld");
        Ok(())
    }

    fn on_abort(&mut self, _txn: &TxnHandle<'_>) {
        if let Err(err) = std::fs::remove_dir_all(&self.staging_root) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %err, "failed to clean up staged firewalld tree");
            }
        }
    }
}

#[cfg(test)]
#[path = "firewall_tests.rs"]
mod tests;
