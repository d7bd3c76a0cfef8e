// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exercises a real `Dispatcher` + `IfaceTranslator` through one
//! transaction and checks the generation/dependency invariants that
//! only show up once dagger, dispatch, and a translator run together.

use confd_core::test_support::{changed_entry, container};
use confd_core::{ConfigTree, DiffOp, Entity, EntityKind, Value};
use confd_dispatch::Dispatcher;
use confd_runner::{topo_order, Direction};
use confd_translate::{IfaceTranslator, PhysicalInterfaceProbe};
use confd_wire::ScratchLayout;
use tempfile::tempdir;

struct NeverPhysical;

impl PhysicalInterfaceProbe for NeverPhysical {
    fn is_physical(&self, _name: &str) -> bool {
        false
    }
}

fn vlan_on_physical_tree() -> ConfigTree {
    ConfigTree::new(container([(
        "interfaces",
        container([(
            "interface",
            container([
                ("eth0", container([("type", confd_core::TreeNode::leaf("ethernet")), ("enabled", confd_core::TreeNode::leaf(true))])),
                (
                    "eth0.100",
                    container([
                        ("type", confd_core::TreeNode::leaf("vlan")),
                        ("lower-layer-if", confd_core::TreeNode::leaf("eth0")),
                        ("vlan", container([("id", confd_core::TreeNode::leaf(100i64))])),
                        ("enabled", confd_core::TreeNode::leaf(true)),
                    ]),
                ),
            ]),
        )]),
    )]))
}

#[test]
fn a_successful_transaction_advances_the_generation_exactly_once_and_releases_next() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));

    let mut dispatcher = Dispatcher::new(layout.root());
    dispatcher.register(Box::new(IfaceTranslator::new(Box::new(NeverPhysical))));

    let tree = vlan_on_physical_tree();
    let diff = vec![
        changed_entry("/interfaces/interface/eth0/type", None, Some(Value::from("ethernet")), DiffOp::Create),
        changed_entry("/interfaces/interface/eth0.100/type", None, Some(Value::from("vlan")), DiffOp::Create),
    ];

    dispatcher.on_update(&tree).unwrap();
    dispatcher.on_change(&tree, &diff).unwrap();
    dispatcher.on_done(|_layout, _gen| Ok(())).unwrap();

    // Property 1: `current` advanced by exactly one.
    let current = std::fs::read_to_string(layout.current_file()).unwrap();
    assert_eq!(current.trim(), "1");

    // Property 2: nothing is left holding the `next` sentinel.
    assert!(!layout.next_file().exists());
    assert!(!dispatcher.is_transaction_open());
}

#[test]
fn an_aborted_transaction_leaves_current_untouched_and_removes_the_generation_dir() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));

    struct AlwaysFails;
    impl confd_dispatch::Translator for AlwaysFails {
        fn xpath(&self) -> &str {
            "/interfaces/interface"
        }
        fn priority(&self) -> confd_core::Priority {
            confd_core::Priority::fixed(0)
        }
        fn on_change(&mut self, _txn: &confd_dispatch::TxnHandle<'_>, _tree: &ConfigTree, _diff: confd_core::DiffIter<'_>) -> Result<(), confd_dispatch::TranslateError> {
            Err(confd_dispatch::TranslateError::Validation("synthetic failure".into()))
        }
    }

    let mut dispatcher = Dispatcher::new(layout.root());
    dispatcher.register(Box::new(AlwaysFails));

    let tree = vlan_on_physical_tree();
    let diff = vec![changed_entry("/interfaces/interface/eth0/type", None, Some(Value::from("ethernet")), DiffOp::Create)];

    dispatcher.on_update(&tree).unwrap();
    let result = dispatcher.on_change(&tree, &diff);
    assert!(result.is_err());

    assert!(!layout.current_file().exists());
    assert!(!layout.generation_dir(confd_core::Generation::FIRST).exists());
}

#[test]
fn init_order_runs_the_lower_layer_interface_before_its_vlan() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));

    let mut dispatcher = Dispatcher::new(layout.root());
    dispatcher.register(Box::new(IfaceTranslator::new(Box::new(NeverPhysical))));

    let tree = vlan_on_physical_tree();
    let diff = vec![
        changed_entry("/interfaces/interface/eth0/type", None, Some(Value::from("ethernet")), DiffOp::Create),
        changed_entry("/interfaces/interface/eth0.100/type", None, Some(Value::from("vlan")), DiffOp::Create),
    ];

    dispatcher.on_update(&tree).unwrap();
    dispatcher.on_change(&tree, &diff).unwrap();
    dispatcher.on_done(|_layout, _gen| Ok(())).unwrap();

    let generation = confd_core::Generation::FIRST;
    let dag_dir = layout.dag_dir(generation);
    let init_order = topo_order(&dag_dir, Direction::BottomUp).unwrap();

    let eth0 = Entity::new(EntityKind::Interface, "eth0").unwrap();
    let vlan = Entity::new(EntityKind::Interface, "eth0.100").unwrap();
    let eth0_pos = init_order.iter().position(|e| e == &eth0).unwrap();
    let vlan_pos = init_order.iter().position(|e| e == &vlan).unwrap();
    assert!(eth0_pos < vlan_pos, "eth0 must come before its VLAN in init order");
}
