// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn entry(path: &str, op: DiffOp, old: Option<&str>, new: Option<&str>, is_default: bool) -> DiffEntry {
    DiffEntry {
        path: path.to_string(),
        old_value: old.map(Value::from),
        new_value: new.map(Value::from),
        op,
        was_default: false,
        is_default,
    }
}

#[test]
fn unchanged_value_is_not_modified() {
    let e = entry("/if/eth0/mtu", DiffOp::Replace, Some("1500"), Some("1500"), false);
    assert!(!e.modified());
}

#[test]
fn default_materialization_is_not_modified() {
    let e = entry("/if/eth0/mtu", DiffOp::Create, None, Some("1500"), true);
    assert!(!e.modified());
}

#[test]
fn real_change_is_modified() {
    let e = entry("/if/eth0/mtu", DiffOp::Replace, Some("1500"), Some("9000"), false);
    assert!(e.modified());
}

#[test]
fn none_op_is_never_modified() {
    let e = entry("/if/eth0/name", DiffOp::None, Some("eth0"), Some("eth0"), false);
    assert!(!e.modified());
}

#[test]
fn diff_iter_filters_by_prefix() {
    let entries = vec![
        entry("/if/eth0/mtu", DiffOp::Replace, Some("1500"), Some("9000"), false),
        entry("/dhcp/subnet0/lease", DiffOp::Create, None, Some("3600"), false),
    ];
    let under: Vec<_> = DiffIter::new(&entries).under("/if/").collect();
    assert_eq!(under.len(), 1);
    assert_eq!(under[0].path, "/if/eth0/mtu");
}
