// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn interface_name_within_bound_is_accepted() {
    let e = Entity::new(EntityKind::Interface, "bridge0123").unwrap();
    assert_eq!(e.name, "bridge0123");
}

#[test]
fn interface_name_over_bound_is_rejected() {
    let err = Entity::new(EntityKind::Interface, "this-name-is-too-long").unwrap_err();
    assert!(matches!(err, CoreError::NameTooLong { .. }));
}

#[test]
fn non_interface_kind_is_not_length_bounded() {
    let e = Entity::new(EntityKind::FirewallZone, "an-extremely-long-zone-name-indeed").unwrap();
    assert_eq!(e.kind, EntityKind::FirewallZone);
}

#[test]
fn empty_name_is_rejected() {
    assert!(matches!(
        Entity::new(EntityKind::Interface, "").unwrap_err(),
        CoreError::EmptyName { .. }
    ));
}

#[test]
fn node_name_namespaces_non_interface_kinds() {
    let zone = Entity::new(EntityKind::FirewallZone, "home").unwrap();
    assert_eq!(zone.node_name(), "firewall-zone:home");
    let iface = Entity::new(EntityKind::Interface, "eth0").unwrap();
    assert_eq!(iface.node_name(), "eth0");
}

#[test]
fn display_is_kind_colon_name() {
    let e = Entity::new(EntityKind::Interface, "eth0").unwrap();
    assert_eq!(e.to_string(), "interface:eth0");
}

#[test]
fn from_node_name_round_trips_through_node_name() {
    let zone = Entity::new(EntityKind::FirewallZone, "home").unwrap();
    assert_eq!(Entity::from_node_name(&zone.node_name()), zone);
    let iface = Entity::new(EntityKind::Interface, "eth0").unwrap();
    assert_eq!(Entity::from_node_name(&iface.node_name()), iface);
}

#[test]
fn from_node_name_without_a_prefix_is_an_interface() {
    let e = Entity::from_node_name("eth0");
    assert_eq!(e.kind, EntityKind::Interface);
    assert_eq!(e.name, "eth0");
}
