// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use confd_core::test_support::{changed_entry, container};
use confd_core::{DiffOp, TreeNode, Value};
use confd_dagger::Dagger;
use confd_wire::ScratchLayout;
use tempfile::tempdir;

#[test]
fn enabling_dhcp_client_stages_a_per_interface_config() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let dagger = Dagger::claim(layout).unwrap();
    let handle = TxnHandle::for_testing(dagger.next(), &dagger);

    let tree = ConfigTree::new(container([(
        "interfaces",
        container([(
            "interface",
            container([(
                "eth0",
                container([("ipv4", container([("dhcp-client", container([("enabled", TreeNode::leaf(true))]))]))]),
            )]),
        )]),
    )]));
    let diff = vec![changed_entry(
        "/interfaces/interface/eth0/ipv4/dhcp-client/enabled",
        Some(Value::from(false)),
        Some(Value::from(true)),
        DiffOp::Replace,
    )];

    let config_dir = dir.path().join("dhcpcd.d");
    let mut t = DhcpClientTranslator::new(&config_dir);
    t.on_change(&handle, &tree, DiffIter::new(&diff)).unwrap();

    let staged = std::fs::read_to_string(config_dir.join("eth0.conf.next")).unwrap();
    assert_eq!(staged, "interface eth0\n");
}
