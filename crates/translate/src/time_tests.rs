// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use confd_core::test_support::{changed_entry, container};
use confd_core::{DiffOp, TreeNode, Value};
use confd_dagger::Dagger;
use confd_wire::ScratchLayout;
use tempfile::tempdir;

#[test]
fn timezone_change_stages_file_and_symlink_action() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let dagger = Dagger::claim(layout).unwrap();
    let handle = TxnHandle::for_testing(dagger.next(), &dagger);

    let tree = ConfigTree::new(container([("system", container([("clock", container([("timezone", TreeNode::leaf("Europe/Stockholm"))]))]))]));
    let diff = vec![changed_entry(XPATH, Some(Value::from("UTC")), Some(Value::from("Europe/Stockholm")), DiffOp::Replace)];

    let tz_file = dir.path().join("timezone");
    let localtime = dir.path().join("localtime");
    let mut t = TimeTranslator::new(&tz_file, &localtime, "/usr/share/zoneinfo");
    t.on_change(&handle, &tree, DiffIter::new(&diff)).unwrap();

    assert_eq!(std::fs::read_to_string(tz_file.with_file_name("timezone.next")).unwrap(), "Europe/Stockholm\n");

    let action_dir = dagger.layout().action_dir(dagger.next(), confd_core::ActionPhase::Init, &t.entity());
    let symlink_action = std::fs::read_to_string(action_dir.join("12-symlink.sh")).unwrap();
    assert!(symlink_action.contains("Europe/Stockholm"));
}
