// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Translator` implementation: walks `/interfaces/interface`,
//! decides Create / Modify / MustDeleteModify / Delete per interface,
//! and emits the matching `ip`/`bridge` actions plus dependency edges.

use super::config::{must_delete, IfaceConfig};
use super::kind::{infer_kind, IfaceKind, PhysicalInterfaceProbe};
use confd_core::{ConfigTree, DiffEntry, DiffIter, DiffOp, Entity, EntityKind, Priority, TreeNode};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use std::collections::HashMap;
use std::io::Write;

const XPATH: &str = "/interfaces/interface";

fn str_leaf(node: &TreeNode, name: &str) -> Option<String> {
    node.children.get(name)?.value.as_ref()?.as_str().map(str::to_string)
}

fn int_leaf(node: &TreeNode, name: &str) -> Option<i64> {
    node.children.get(name)?.value.as_ref()?.as_int()
}

fn bool_leaf(node: &TreeNode, name: &str) -> Option<bool> {
    node.children.get(name)?.value.as_ref()?.as_bool()
}

fn explicit_kind(node: &TreeNode) -> Option<IfaceKind> {
    match str_leaf(node, "type")?.as_str() {
        "ethernet" => Some(IfaceKind::Ethernet),
        "loopback" => Some(IfaceKind::Loopback),
        "bridge" => Some(IfaceKind::Bridge),
        "lag" => Some(IfaceKind::Lag),
        "vlan" => Some(IfaceKind::Vlan),
        "veth" => Some(IfaceKind::Veth),
        "vxlan" => Some(IfaceKind::Vxlan),
        "gre" => Some(IfaceKind::Gre),
        "gretap" => Some(IfaceKind::GreTap),
        "dummy" => Some(IfaceKind::Dummy),
        "wifi" => Some(IfaceKind::Wifi),
        "wireguard" => Some(IfaceKind::WireGuard),
        _ => None,
    }
}

fn config_from_node(name: &str, node: &TreeNode, probe: &dyn PhysicalInterfaceProbe) -> IfaceConfig {
    let addresses = node
        .children
        .get("ipv4")
        .and_then(|ipv4| ipv4.children.get("address"))
        .map(|addrs| addrs.children.values().filter_map(|n| n.value.as_ref().and_then(|v| v.as_str()).map(str::to_string)).collect())
        .unwrap_or_default();

    IfaceConfig {
        kind: infer_kind(name, explicit_kind(node), probe),
        enabled: bool_leaf(node, "enabled").unwrap_or(true),
        phys_address: str_leaf(node, "phys-address"),
        lower: str_leaf(node, "lower-layer-if"),
        vlan_id: node.children.get("vlan").and_then(|v| int_leaf(v, "id")),
        lag_mode: node.children.get("lag").and_then(|v| str_leaf(v, "mode")),
        veth_peer: node.children.get("veth").and_then(|v| str_leaf(v, "peer")),
        vxlan_vni: node.children.get("vxlan").and_then(|v| int_leaf(v, "vni")),
        vxlan_remote: node.children.get("vxlan").and_then(|v| str_leaf(v, "remote")),
        gre_local: node.children.get("gre").and_then(|v| str_leaf(v, "local")),
        gre_remote: node.children.get("gre").and_then(|v| str_leaf(v, "remote")),
        wifi_mode: node.children.get("wifi").and_then(|v| str_leaf(v, "mode")),
        addresses,
    }
}

pub struct IfaceTranslator {
    probe: Box<dyn PhysicalInterfaceProbe>,
}

impl IfaceTranslator {
    pub fn new(probe: Box<dyn PhysicalInterfaceProbe>) -> Self {
        Self { probe }
    }

    fn entity(&self, name: &str) -> Entity {
        Entity::new(EntityKind::Interface, name).unwrap_or(Entity { kind: EntityKind::Interface, name: "invalid".into(), parent_kind: None })
    }

    /// Build the "before" config from the diff's recorded `old_value`s
    /// for this interface's leaves, falling back to the current (new)
    /// value for any leaf the diff didn't touch.
    fn previous_node(&self, name: &str, node: &TreeNode, entries_by_path: &HashMap<&str, &DiffEntry>) -> TreeNode {
        let mut previous = node.clone();
        for (path, entry) in entries_by_path {
            if !path.starts_with(&format!("/interfaces/interface/{name}/")) {
                continue;
            }
            if let Some(segment) = path.rsplit('/').next() {
                if let Some(old) = &entry.old_value {
                    previous.children.insert(segment.to_string(), TreeNode::leaf(old.clone()));
                } else {
                    previous.children.remove(segment);
                }
            }
        }
        previous
    }

    fn emit_create(&self, txn: &TxnHandle<'_>, name: &str, new: &IfaceConfig) -> Result<(), TranslateError> {
        let entity = self.entity(name);
        let mut file = txn.open_init(&entity, 20, "link.ip")?;

        let kind_word = match new.kind {
            Some(IfaceKind::Bridge) => "bridge",
            Some(IfaceKind::Lag) => "bond",
            Some(IfaceKind::Vlan) => "vlan",
            Some(IfaceKind::Veth) => "veth",
            Some(IfaceKind::Vxlan) => "vxlan",
            Some(IfaceKind::Gre) => "gre",
            Some(IfaceKind::GreTap) => "gretap",
            Some(IfaceKind::Dummy) => "dummy",
            _ => "dummy",
        };

        match new.kind {
            Some(IfaceKind::Veth) => {
                let peer = new.veth_peer.as_deref().unwrap_or("");
                writeln!(file, "link add {name} type veth peer {peer}")?;
            }
            Some(IfaceKind::Vlan) => {
                let lower = new.lower.as_deref().unwrap_or("");
                let id = new.vlan_id.unwrap_or(0);
                writeln!(file, "link add link {lower} name {name} type vlan id {id}")?;
                txn.add_dep(&entity, &self.entity(lower))?;
            }
            Some(IfaceKind::Vxlan) => {
                let vni = new.vxlan_vni.unwrap_or(0);
                let remote = new.vxlan_remote.as_deref().unwrap_or("");
                writeln!(file, "link add {name} type vxlan id {vni} remote {remote} dstport 4789")?;
            }
            Some(IfaceKind::Gre) | Some(IfaceKind::GreTap) => {
                let local = new.gre_local.as_deref().unwrap_or("");
                let remote = new.gre_remote.as_deref().unwrap_or("");
                writeln!(file, "link add {name} type {kind_word} local {local} remote {remote}")?;
            }
            _ => {
                writeln!(file, "link add {name} type {kind_word}")?;
            }
        }

        if let Some(addr) = &new.phys_address {
            writeln!(file, "link set {name} address {addr}")?;
        }
        if new.kind != Some(IfaceKind::Vlan) {
            if let Some(bridge) = &new.lower {
                let mut master_file = txn.open_init(&entity, 22, "master.ip")?;
                writeln!(master_file, "link set {name} master {bridge}")?;
            }
        }
        for address in &new.addresses {
            let mut ip_file = txn.open_init(&entity, 25, "addr.ip")?;
            writeln!(ip_file, "addr add {address} dev {name}")?;
        }
        if new.enabled {
            let mut up_file = txn.open_init(&entity, 30, "up.ip")?;
            writeln!(up_file, "link set {name} up")?;
        }
        Ok(())
    }

    fn emit_teardown(&self, txn: &TxnHandle<'_>, name: &str) -> Result<(), TranslateError> {
        let entity = self.entity(name);
        let mut file = txn.open_current_exit(&entity, 20, "teardown.ip")?;
        writeln!(file, "link del {name}")?;
        Ok(())
    }

    /// In-place change that doesn't need a destroy-and-recreate: a
    /// bridge/LAG port moving to a new master, or the enabled flag
    /// flipping.
    fn emit_modify(&self, txn: &TxnHandle<'_>, name: &str, old: &IfaceConfig, new: &IfaceConfig) -> Result<(), TranslateError> {
        let entity = self.entity(name);
        if new.kind != Some(IfaceKind::Vlan) && old.lower != new.lower {
            if old.lower.is_some() {
                let mut file = txn.open_current_exit(&entity, 20, "nomaster.ip")?;
                writeln!(file, "link set {name} nomaster")?;
            }
            if let Some(bridge) = &new.lower {
                let mut file = txn.open_init(&entity, 22, "master.ip")?;
                writeln!(file, "link set {name} master {bridge}")?;
            }
        }
        if old.enabled != new.enabled {
            let mut file = txn.open_init(&entity, 30, "up.ip")?;
            writeln!(file, "link set {name} {}", if new.enabled { "up" } else { "down" })?;
        }
        Ok(())
    }
}

impl Translator for IfaceTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(0)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        let entries: Vec<&DiffEntry> = diff.under(XPATH).collect();
        if entries.is_empty() {
            return Ok(());
        }
        let entries_by_path: HashMap<&str, &DiffEntry> = entries.iter().map(|e| (e.path.as_str(), *e)).collect();

        let touched: Vec<&str> = entries
            .iter()
            .filter_map(|e| e.path.strip_prefix(&format!("{XPATH}/")).and_then(|rest| rest.split('/').next()))
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut skipped_veth_peers = std::collections::HashSet::new();

        for name in touched {
            let deleted = entries_by_path.values().any(|e| e.path == format!("{XPATH}/{name}") && e.op == DiffOp::Delete);
            if deleted {
                self.emit_teardown(txn, name)?;
                continue;
            }

            let node = match tree.get(&format!("{XPATH}/{name}")) {
                Some(node) => node,
                None => continue,
            };
            let new_config = config_from_node(name, node, self.probe.as_ref());
            let previous_node = self.previous_node(name, node, &entries_by_path);
            let old_config = config_from_node(name, &previous_node, self.probe.as_ref());

            if new_config.kind == Some(IfaceKind::Veth) {
                if let Some(peer) = &new_config.veth_peer {
                    if skipped_veth_peers.contains(peer.as_str()) {
                        continue;
                    }
                    if peer.as_str() < name {
                        // The lexicographically earlier peer is primary;
                        // the other end is skipped so only one `link add
                        // ... type veth peer ...` gets emitted.
                        txn.skip(&self.entity(name))?;
                        skipped_veth_peers.insert(name.to_string());
                        continue;
                    }
                }
            }

            if old_config.kind.is_none() {
                self.emit_create(txn, name, &new_config)?;
            } else if must_delete(&old_config, &new_config) {
                self.emit_teardown(txn, name)?;
                self.emit_create(txn, name, &new_config)?;
            } else {
                self.emit_modify(txn, name, &old_config, &new_config)?;
            }

            if let Some(bridge) = &new_config.lower {
                if new_config.kind != Some(IfaceKind::Vlan) {
                    txn.add_dep(&self.entity(name), &self.entity(bridge))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;
