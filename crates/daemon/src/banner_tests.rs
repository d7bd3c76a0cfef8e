// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn appends_the_message_to_every_file() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("banner");
    let b = dir.path().join("issue");
    append(&[&a, &b], "CRITICAL ERROR: something broke");

    assert!(std::fs::read_to_string(&a).unwrap().contains("CRITICAL ERROR"));
    assert!(std::fs::read_to_string(&b).unwrap().contains("CRITICAL ERROR"));
}

#[test]
fn a_missing_parent_directory_is_skipped_without_panicking() {
    let missing = std::path::PathBuf::from("/no/such/dir/banner");
    append(&[missing], "message");
}
