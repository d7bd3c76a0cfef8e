// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use confd_core::test_support::{changed_entry, container};
use confd_core::{DiffOp, TreeNode, Value};
use confd_dagger::Dagger;
use confd_wire::ScratchLayout;
use tempfile::tempdir;

#[test]
fn unrelated_change_is_a_no_op() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let dagger = Dagger::claim(layout).unwrap();
    let handle = TxnHandle::for_testing(dagger.next(), &dagger);

    let tree = ConfigTree::new(TreeNode::container());
    let diff = vec![changed_entry("/system/ntp/enabled", Some(Value::from(false)), Some(Value::from(true)), DiffOp::Replace)];

    let mut t = HostnameTranslator::new(dir.path().join("hostname"));
    t.on_change(&handle, &tree, DiffIter::new(&diff)).unwrap();

    assert!(!dir.path().join("hostname.next").exists());
}

#[test]
fn hostname_change_stages_the_new_value() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let dagger = Dagger::claim(layout).unwrap();
    let handle = TxnHandle::for_testing(dagger.next(), &dagger);

    let tree = ConfigTree::new(container([("system", container([("hostname", TreeNode::leaf("router7"))]))]));
    let diff = vec![changed_entry("/system/hostname", Some(Value::from("old")), Some(Value::from("router7")), DiffOp::Replace)];

    let target = dir.path().join("hostname");
    let mut t = HostnameTranslator::new(&target);
    t.on_change(&handle, &tree, DiffIter::new(&diff)).unwrap();

    let staged = std::fs::read_to_string(target.with_file_name("hostname.next")).unwrap();
    assert_eq!(staged, "router7\n");
}

#[test]
fn abort_removes_the_staged_file() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("hostname");
    std::fs::write(target.with_file_name("hostname.next"), "router7\n").unwrap();

    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let dagger = Dagger::claim(layout).unwrap();
    let handle = TxnHandle::for_testing(dagger.next(), &dagger);

    let mut t = HostnameTranslator::new(&target);
    t.on_abort(&handle);

    assert!(!target.with_file_name("hostname.next").exists());
}
