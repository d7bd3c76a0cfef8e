// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared staging helper for the single-file translators: write the
//! replacement bytes to `<path>.next` while the transaction is still
//! being built, and defer the promoting rename to an `init` action the
//! runner only executes once the generation actually lands. Any
//! `reload` commands are routed through the transaction's reload bus
//! instead of being embedded in the commit script, so repeated
//! "touch the same daemon" requests from different entities collapse
//! into one command. `on_abort` just deletes the `.next` file — the
//! committed file is never touched unless the whole transaction
//! commits.

use confd_core::Entity;
use confd_dispatch::{TranslateError, TxnHandle};
use confd_shell::quote_for_script;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn staging_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".next");
    target.with_file_name(name)
}

/// Stage `contents` for atomic replacement of `target`, queue the
/// promoting rename as an `init` shell action, and signal `reload` on
/// the transaction's reload bus to run once, after every translator
/// has staged its changes.
pub fn stage_replace(
    txn: &TxnHandle<'_>,
    entity: &Entity,
    priority: u16,
    target: &Path,
    contents: &[u8],
    reload: &[&'static str],
) -> Result<(), TranslateError> {
    let next = staging_path(target);
    if let Some(parent) = next.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&next, contents)?;

    let mut file = txn.open_init(entity, priority, "commit.sh")?;
    writeln!(
        file,
        "mv -f {} {}",
        quote_for_script(&next.to_string_lossy()),
        quote_for_script(&target.to_string_lossy())
    )?;
    for cmd in reload {
        txn.signal_reload(cmd);
    }
    Ok(())
}

/// Stage the removal of `target` itself (rather than a replacement) —
/// used when a module's configuration is deleted outright.
pub fn stage_remove(
    txn: &TxnHandle<'_>,
    entity: &Entity,
    priority: u16,
    target: &Path,
    reload: &[&'static str],
) -> Result<(), TranslateError> {
    let mut file = txn.open_init(entity, priority, "commit.sh")?;
    writeln!(file, "rm -f {}", quote_for_script(&target.to_string_lossy()))?;
    for cmd in reload {
        txn.signal_reload(cmd);
    }
    Ok(())
}

/// Undo a not-yet-committed [`stage_replace`]: remove the staged
/// `.next` file, if any.
pub fn abort_replace(target: &Path) {
    let _ = fs::remove_file(staging_path(target));
}

#[cfg(test)]
#[path = "support_tests.rs"]
mod tests;
