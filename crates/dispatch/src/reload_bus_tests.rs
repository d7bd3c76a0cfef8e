// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn repeated_signals_for_the_same_command_coalesce() {
    let mut bus = ReloadBus::new();
    bus.signal("initctl -nbq touch chronyd");
    bus.signal("initctl -nbq touch chronyd");
    bus.signal("initctl -nbq touch named");

    let mut drained = bus.drain();
    drained.sort_unstable();
    assert_eq!(drained, vec!["initctl -nbq touch chronyd", "initctl -nbq touch named"]);
}

#[test]
fn draining_clears_the_bus() {
    let mut bus = ReloadBus::new();
    bus.signal("initctl -nbq touch chronyd");
    bus.drain();
    assert!(bus.is_empty());
}
