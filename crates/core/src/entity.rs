// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Managed entities — the addressable subjects of translation
//! (network interfaces, firewall zones, DHCP subnets, syslog actions,
//! containers, ...). Identity is the `(kind, name)` pair.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Upper bound on entity names for kinds that map onto kernel objects
/// (network interfaces use `IFNAMSIZ - 1` on Linux).
pub const MAX_INTERFACE_NAME_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Interface,
    FirewallZone,
    DhcpSubnet,
    SyslogAction,
    Container,
    /// Single-instance system services addressed by name rather than
    /// by a schema list key: hostname, time zone, NTP, DNS, local
    /// auth, DHCP client, keystore.
    System,
}

crate::simple_display! {
    EntityKind {
        Interface => "interface",
        FirewallZone => "firewall-zone",
        DhcpSubnet => "dhcp-subnet",
        SyslogAction => "syslog-action",
        Container => "container",
        System => "system",
    }
}

impl EntityKind {
    /// Whether this kind is name-length-bounded like a kernel interface.
    fn is_length_bounded(self) -> bool {
        matches!(self, EntityKind::Interface)
    }
}

/// An addressable configuration subject, identified by `(kind, name)`.
///
/// `parent_kind` records an optional owning kind (e.g. a bridge-port
/// interface's parent is itself `Interface`, but a DHCP subnet's
/// conceptual parent might be a `DhcpSubnet` pool) — translators use
/// it to decide inference defaults, it is not used for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub name: SmolStr,
    pub parent_kind: Option<EntityKind>,
}

impl Entity {
    pub fn new(kind: EntityKind, name: impl Into<SmolStr>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::EmptyName { name: name.to_string() });
        }
        if kind.is_length_bounded() && name.len() > MAX_INTERFACE_NAME_LEN {
            return Err(CoreError::NameTooLong {
                name: name.to_string(),
                kind: "interface",
                max: MAX_INTERFACE_NAME_LEN,
            });
        }
        Ok(Self { kind, name, parent_kind: None })
    }

    pub fn with_parent(mut self, parent_kind: EntityKind) -> Self {
        self.parent_kind = Some(parent_kind);
        self
    }

    /// Directory-safe identifier used as the entity's dagger node name.
    /// Interfaces are addressed by their bare name; other kinds are
    /// namespaced by kind to avoid collisions across categories.
    pub fn node_name(&self) -> String {
        match self.kind {
            EntityKind::Interface => self.name.to_string(),
            other => format!("{other}:{}", self.name),
        }
    }

    /// The inverse of [`Entity::node_name`] — used by the generation
    /// runner to recover an `Entity` from a `dag/` directory entry. A
    /// name with no recognized `kind:` prefix is an interface.
    pub fn from_node_name(node_name: &str) -> Self {
        match node_name.split_once(':') {
            Some(("firewall-zone", name)) => Self { kind: EntityKind::FirewallZone, name: name.into(), parent_kind: None },
            Some(("dhcp-subnet", name)) => Self { kind: EntityKind::DhcpSubnet, name: name.into(), parent_kind: None },
            Some(("syslog-action", name)) => Self { kind: EntityKind::SyslogAction, name: name.into(), parent_kind: None },
            Some(("container", name)) => Self { kind: EntityKind::Container, name: name.into(), parent_kind: None },
            Some(("system", name)) => Self { kind: EntityKind::System, name: name.into(), parent_kind: None },
            _ => Self { kind: EntityKind::Interface, name: node_name.into(), parent_kind: None },
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
