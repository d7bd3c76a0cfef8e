// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn an_unasserted_condition_reports_false() {
    let dir = tempdir().unwrap();
    let condition = FileFinitCondition::new(dir.path());
    assert!(!condition.is_asserted("sys/ready"));
}

#[test]
fn a_touched_flag_file_reports_true() {
    let dir = tempdir().unwrap();
    let flag = dir.path().join("sys");
    std::fs::create_dir_all(&flag).unwrap();
    std::fs::write(flag.join("ready"), b"").unwrap();
    let condition = FileFinitCondition::new(dir.path());
    assert!(condition.is_asserted("sys/ready"));
}
