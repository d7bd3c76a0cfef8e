// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use confd_core::test_support::{changed_entry, container};
use confd_core::{TreeNode, Value};
use confd_dagger::Dagger;
use confd_wire::ScratchLayout;
use tempfile::tempdir;

#[test]
fn subnet_stages_a_dhcp_range_fragment() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let dagger = Dagger::claim(layout).unwrap();
    let handle = TxnHandle::for_testing(dagger.next(), &dagger);

    let tree = ConfigTree::new(container([(
        "dhcp-server",
        container([(
            "subnet",
            container([(
                "lan",
                container([
                    ("range-start", TreeNode::leaf("192.0.2.10")),
                    ("range-end", TreeNode::leaf("192.0.2.200")),
                    ("lease-time", TreeNode::leaf(7200i64)),
                ]),
            )]),
        )]),
    )]));
    let diff = vec![changed_entry("/dhcp-server/subnet/lan/range-start", None, Some(Value::from("192.0.2.10")), DiffOp::Create)];

    let fragments = dir.path().join("dnsmasq.d");
    let mut t = DhcpServerTranslator::new(&fragments);
    t.on_change(&handle, &tree, DiffIter::new(&diff)).unwrap();

    let staged = std::fs::read_to_string(fragments.join("lan.conf.next")).unwrap();
    assert_eq!(staged, "dhcp-range=lan,192.0.2.10,192.0.2.200,7200s\n");
}
