// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use confd_wire::ScratchLayout;
use std::fs;
use tempfile::tempdir;

#[test]
fn dropping_an_unfinished_transaction_abandons_it() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let next_gen = {
        let txn = Transaction::claim(layout.clone()).unwrap();
        txn.dagger().next()
    };

    assert!(!layout.generation_dir(next_gen).exists());
    assert!(!layout.next_file().exists());
}

#[test]
fn evolving_a_transaction_does_not_abandon_on_drop() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let txn = Transaction::claim(layout.clone()).unwrap();

    txn.evolve(|_layout, _gen| Ok(())).unwrap();

    assert_eq!(fs::read_to_string(layout.current_file()).unwrap().trim(), "1");
}

#[test]
fn explicitly_abandoning_releases_the_lock() {
    let dir = tempdir().unwrap();
    let layout = ScratchLayout::new(dir.path().join("scratch"));
    let txn = Transaction::claim(layout.clone()).unwrap();

    txn.abandon().unwrap();

    assert!(!layout.next_file().exists());
    // a fresh claim must now succeed
    Transaction::claim(layout).unwrap();
}
