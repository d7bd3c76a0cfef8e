// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Two subnets touched in one transaction must collapse into one
//! `initctl` reload of the downstream daemon, staged once at DONE —
//! not once per entity.

use confd_core::test_support::{changed_entry, container};
use confd_core::{ActionPhase, ConfigTree, DiffOp, Entity, EntityKind, TreeNode, Value};
use confd_dispatch::Dispatcher;
use confd_translate::DhcpServerTranslator;
use confd_wire::ScratchLayout;
use tempfile::tempdir;

fn two_subnet_tree() -> ConfigTree {
    ConfigTree::new(container([(
        "dhcp-server",
        container([(
            "subnet",
            container([
                (
                    "lan",
                    container([
                        ("range-start", TreeNode::leaf("192.0.2.10")),
                        ("range-end", TreeNode::leaf("192.0.2.200")),
                        ("lease-time", TreeNode::leaf(7200i64)),
                    ]),
                ),
                (
                    "guest",
                    container([
                        ("range-start", TreeNode::leaf("192.0.3.10")),
                        ("range-end", TreeNode::leaf("192.0.3.200")),
                        ("lease-time", TreeNode::leaf(3600i64)),
                    ]),
                ),
            ]),
        )]),
    )]))
}

#[test]
fn touching_two_subnets_in_one_transaction_reloads_dnsmasq_exactly_once() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));

    let mut dispatcher = Dispatcher::new(layout.root());
    dispatcher.register(Box::new(DhcpServerTranslator::new(dir.path().join("dnsmasq.d"))));

    let tree = two_subnet_tree();
    let diff = vec![
        changed_entry("/dhcp-server/subnet/lan/range-start", None, Some(Value::from("192.0.2.10")), DiffOp::Create),
        changed_entry("/dhcp-server/subnet/guest/range-start", None, Some(Value::from("192.0.3.10")), DiffOp::Create),
    ];

    dispatcher.on_update(&tree).unwrap();
    dispatcher.on_change(&tree, &diff).unwrap();
    dispatcher.on_done(|_layout, _gen| Ok(())).unwrap();

    let reload_entity = Entity { kind: EntityKind::System, name: "reload".into(), parent_kind: None };
    let reload_script = layout.action_dir(confd_core::Generation::FIRST, ActionPhase::Init, &reload_entity).join("99-reload.sh");
    let contents = std::fs::read_to_string(reload_script).unwrap();

    let touch_count = contents.lines().filter(|line| line.contains("touch dnsmasq")).count();
    assert_eq!(touch_count, 1, "two subnets touching the same daemon must collapse into one reload:\n{contents}");
}
