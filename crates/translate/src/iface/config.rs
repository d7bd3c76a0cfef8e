// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A flattened view of one interface's schema-relevant leaves, plus
//! the must-delete decision ported from `netdag_must_del`: some
//! parameter changes can't be applied in place to a live kernel
//! object and need the interface torn down and recreated instead of
//! merely reconfigured.

use super::kind::IfaceKind;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IfaceConfig {
    pub kind: Option<IfaceKind>,
    pub enabled: bool,
    pub phys_address: Option<String>,
    /// The lower-layer interface a VLAN, bridge-port or LAG-port sits
    /// on top of.
    pub lower: Option<String>,
    pub vlan_id: Option<i64>,
    pub lag_mode: Option<String>,
    pub veth_peer: Option<String>,
    pub vxlan_vni: Option<i64>,
    pub vxlan_remote: Option<String>,
    pub gre_local: Option<String>,
    pub gre_remote: Option<String>,
    /// `"station"` or `"ap"`.
    pub wifi_mode: Option<String>,
    pub addresses: Vec<String>,
}

/// Whether moving from `old` to `new` requires deleting and
/// recreating the kernel object rather than an in-place `ip link set`.
pub fn must_delete(old: &IfaceConfig, new: &IfaceConfig) -> bool {
    if old.kind != new.kind {
        return true;
    }
    if new.phys_address.is_some() && old.phys_address != new.phys_address {
        return true;
    }
    match new.kind {
        Some(IfaceKind::Lag) => old.lag_mode != new.lag_mode,
        Some(IfaceKind::Vlan) => old.vlan_id != new.vlan_id || old.lower != new.lower,
        Some(IfaceKind::Veth) => old.veth_peer != new.veth_peer,
        Some(IfaceKind::Vxlan) => old.vxlan_vni != new.vxlan_vni || old.vxlan_remote != new.vxlan_remote,
        Some(IfaceKind::Gre) | Some(IfaceKind::GreTap) => old.gre_local != new.gre_local || old.gre_remote != new.gre_remote,
        Some(IfaceKind::Wifi) => old.wifi_mode != new.wifi_mode,
        _ => false,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
