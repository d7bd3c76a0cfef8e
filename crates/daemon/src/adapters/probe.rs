// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shells out to `ip -d -j link show` to tell a physical interface
//! from a software one — the production counterpart
//! `confd_translate::PhysicalInterfaceProbe` describes but doesn't
//! supply.

use confd_translate::PhysicalInterfaceProbe;

pub struct IpLinkProbe {
    ip_path: String,
}

impl IpLinkProbe {
    pub fn new() -> Self {
        Self { ip_path: "/sbin/ip".to_string() }
    }
}

impl Default for IpLinkProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicalInterfaceProbe for IpLinkProbe {
    fn is_physical(&self, name: &str) -> bool {
        let outcome = match confd_shell::run(&self.ip_path, &["-d", "-j", "link", "show", "dev", name]) {
            Ok(outcome) if outcome.success() => outcome,
            _ => return false,
        };
        is_ether_with_parentbus(&outcome.stdout)
    }
}

/// `ip -d -j link show dev <name>` prints a one-element JSON array; a
/// physical NIC reports `link_type: "ether"` and carries a
/// `parentbus` entry pointing at the bus it's attached to. Software
/// interfaces (veth, bridges, vlans, ...) report `ether` too but never
/// have a `parentbus`.
fn is_ether_with_parentbus(stdout: &str) -> bool {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(stdout) else {
        return false;
    };
    let Some(entry) = value.as_array().and_then(|entries| entries.first()) else {
        return false;
    };
    let is_ether = entry.get("link_type").and_then(|v| v.as_str()) == Some("ether");
    is_ether && entry.get("parentbus").is_some()
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
