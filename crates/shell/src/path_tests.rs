// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn atomic_write_creates_file_with_requested_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("10-eth0.ip");
    atomic_write(&path, b"#!/sbin/ip -batch\n\nlink set eth0 up\n", 0o774).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "#!/sbin/ip -batch\n\nlink set eth0 up\n");
}

#[test]
fn atomic_write_leaves_no_staging_file_behind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("skip");
    atomic_write(&path, b"", 0o644).unwrap();
    assert!(!path.with_extension("next").exists());
}

#[test]
fn atomic_write_replaces_existing_file_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("current");
    atomic_write(&path, b"old", 0o644).unwrap();
    atomic_write(&path, b"new", 0o644).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn quote_for_script_wraps_plain_value() {
    assert_eq!(quote_for_script("eth0"), "'eth0'");
}

#[test]
fn quote_for_script_escapes_embedded_single_quote() {
    assert_eq!(quote_for_script("it's"), "'it'\\''s'");
}

#[test]
fn quote_for_script_neutralizes_shell_metacharacters() {
    let quoted = quote_for_script("$(rm -rf /); echo pwned");
    assert_eq!(quoted, "'$(rm -rf /); echo pwned'");
}
