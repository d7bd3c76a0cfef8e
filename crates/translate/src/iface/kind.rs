// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interface-kind inference, ported from the name-pattern chain
//! (`ifchange_cand_infer_type`) that decides a candidate interface's
//! kind when the schema's own `type` leaf is left unset.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IfaceKind {
    Ethernet,
    Loopback,
    Bridge,
    Lag,
    Vlan,
    Veth,
    Vxlan,
    Gre,
    GreTap,
    Dummy,
    Wifi,
    WireGuard,
}

/// Probes the kernel for whether a name with no recognized naming
/// pattern is backed by real hardware (`ip -d -j link show` reporting
/// `link_type: ether` with a `parentbus`). Faked in tests; the real
/// implementation shells out and is out of scope for this crate.
pub trait PhysicalInterfaceProbe: Send {
    fn is_physical(&self, name: &str) -> bool;
}

/// A probe that never finds a physical match — useful as a
/// placeholder where no kernel is actually reachable.
pub struct NoPhysicalInterfaces;

impl PhysicalInterfaceProbe for NoPhysicalInterfaces {
    fn is_physical(&self, _name: &str) -> bool {
        false
    }
}

fn strip_numeric_suffix<'a>(name: &'a str, prefix: &str) -> bool {
    match name.strip_prefix(prefix) {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

fn is_vlan_by_dot_notation(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((lower, suffix)) => !lower.is_empty() && !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// Infer a candidate interface's kind. An explicit schema `type` leaf
/// always wins; only an unset `explicit` falls through to the
/// name-pattern chain, tried in the same order the original inference
/// table does (most specific prefixes before the broader fallbacks).
pub fn infer_kind(name: &str, explicit: Option<IfaceKind>, probe: &dyn PhysicalInterfaceProbe) -> Option<IfaceKind> {
    if let Some(kind) = explicit {
        return Some(kind);
    }

    if name == "lo" {
        return Some(IfaceKind::Loopback);
    }
    if strip_numeric_suffix(name, "wifi") {
        return Some(IfaceKind::Wifi);
    }
    if strip_numeric_suffix(name, "br") || strip_numeric_suffix(name, "docker") || strip_numeric_suffix(name, "podman") {
        return Some(IfaceKind::Bridge);
    }
    if strip_numeric_suffix(name, "bond") || strip_numeric_suffix(name, "lag") {
        return Some(IfaceKind::Lag);
    }
    if name.starts_with("veth") && name.len() > "veth".len() {
        return Some(IfaceKind::Veth);
    }
    if strip_numeric_suffix(name, "vlan") || is_vlan_by_dot_notation(name) {
        return Some(IfaceKind::Vlan);
    }
    if strip_numeric_suffix(name, "gretap") {
        return Some(IfaceKind::GreTap);
    }
    if strip_numeric_suffix(name, "gre") {
        return Some(IfaceKind::Gre);
    }
    if strip_numeric_suffix(name, "vxlan") {
        return Some(IfaceKind::Vxlan);
    }
    if strip_numeric_suffix(name, "dummy") {
        return Some(IfaceKind::Dummy);
    }
    if probe.is_physical(name) {
        return Some(IfaceKind::Ethernet);
    }
    None
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
