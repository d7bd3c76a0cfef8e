// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped umask: restores the process umask on drop so a narrowed mask
//! used while staging a sensitive file (e.g. a keystore secret) never
//! leaks into unrelated code paths.

use nix::sys::stat::{umask, Mode};

pub struct ScopedUmask {
    previous: Mode,
}

impl ScopedUmask {
    /// Set the process umask to `mask`, returning a guard that restores
    /// the previous umask when dropped.
    pub fn set(mask: Mode) -> Self {
        let previous = umask(mask);
        Self { previous }
    }
}

impl Drop for ScopedUmask {
    fn drop(&mut self) {
        umask(self.previous);
    }
}

#[cfg(test)]
#[path = "umask_tests.rs"]
mod tests;
