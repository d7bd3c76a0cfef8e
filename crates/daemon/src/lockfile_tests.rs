// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn acquiring_writes_our_own_pid() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("confd.pid");
    let lock = PidLock::acquire(&path).unwrap();
    let contents = std::fs::read_to_string(lock.path()).unwrap();
    assert_eq!(contents.trim(), std::process::id().to_string());
}

#[test]
fn dropping_the_lock_removes_the_pid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("confd.pid");
    let lock = PidLock::acquire(&path).unwrap();
    drop(lock);
    assert!(!path.exists());
}

#[test]
fn a_second_acquire_on_the_same_path_is_refused() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("confd.pid");
    let _held = PidLock::acquire(&path).unwrap();
    let err = PidLock::acquire(&path).unwrap_err();
    assert!(matches!(err, LifecycleError::AlreadyRunning(_)));
}
