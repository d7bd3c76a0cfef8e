// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::cli::Verbosity;
use crate::config::TranslatorPaths;
use tempfile::tempdir;

fn test_config(root: &std::path::Path) -> Config {
    Config {
        debug: true,
        foreground: true,
        pid_file: Some(root.join("confd.pid")),
        fatal_plugin_fail: false,
        factory_config: root.join("factory-config.cfg"),
        startup_config: root.join("startup-config.cfg"),
        failure_config: root.join("failure-config.cfg"),
        timeout_seconds: 60,
        verbosity: Verbosity::Debug,
        scratch_root: root.join("scratch"),
        banner_files: vec![root.join("banner")],
        paths: TranslatorPaths::default(),
    }
}

#[test]
fn a_fully_exhausted_bootstrap_chain_is_a_lifecycle_error() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path());

    let err = run(config).unwrap_err();

    assert!(matches!(err, LifecycleError::Bootstrap(_)));
}

#[test]
fn the_pid_file_is_released_even_when_bootstrap_fails() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path());
    let pid_file = config.pid_file.clone().unwrap();

    let _ = run(config);

    assert!(!pid_file.exists());
}
