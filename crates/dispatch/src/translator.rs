// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::TranslateError;
use crate::txn_handle::TxnHandle;
use confd_core::{ConfigTree, DiffIter, Priority};

/// One module's share of the translation job: turn datastore diffs
/// for its own subtree into staged action files. Registered in a
/// fixed priority order (see [`crate::Dispatcher::register`]) that
/// mirrors the upstream subscription order — interfaces first, then
/// DHCP and other services, firewall, containers last.
///
/// Runs entirely synchronously: the dispatcher does not yield between
/// translators, and a slow `on_change` stalls every other module's
/// transaction along with it. That's intentional — see the crate
/// documentation.
pub trait Translator: Send {
    /// The subtree this translator subscribes to, for logging only.
    fn xpath(&self) -> &str;

    /// Fixed dispatch-ordering priority. Lower runs earlier.
    fn priority(&self) -> Priority;

    /// Validation pass: the candidate tree is available but nothing
    /// has committed. Most translators have nothing to check here.
    fn on_update(&mut self, _txn: &TxnHandle<'_>, _tree: &ConfigTree) -> Result<(), TranslateError> {
        Ok(())
    }

    /// Stage actions for this transaction's diff. Any error aborts
    /// the whole transaction, not just this translator's share of it.
    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError>;

    /// Called on every registered translator when any translator's
    /// `on_change` failed. Default is a no-op; translators that
    /// opened files or took other side effects during `on_change`
    /// don't need to undo them here — the dagger transaction itself
    /// is abandoned by the dispatcher.
    fn on_abort(&mut self, _txn: &TxnHandle<'_>) {}
}
