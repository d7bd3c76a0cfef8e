// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn str_roundtrips_through_accessor() {
    let v: Value = "eth0".into();
    assert_eq!(v.as_str(), Some("eth0"));
    assert_eq!(v.as_int(), None);
}

#[test]
fn int_and_bool_accessors() {
    let i: Value = 10i64.into();
    assert_eq!(i.as_int(), Some(10));
    let b: Value = true.into();
    assert_eq!(b.as_bool(), Some(true));
}

#[test]
fn list_accessor() {
    let v = Value::List(vec!["a".into(), "b".into()]);
    let items = v.as_list().unwrap();
    assert_eq!(items.len(), 2);
}

#[test]
fn serde_roundtrip_is_untagged() {
    let v: Value = "192.168.1.1".into();
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "\"192.168.1.1\"");
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
