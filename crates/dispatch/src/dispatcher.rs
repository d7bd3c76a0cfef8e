// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dispatch engine itself: `Idle -> (UPDATE)* -> CHANGE(+n) ->
//! DONE|ABORT -> Idle`, one open generation at a time, every
//! registered translator run in place, synchronously, on the calling
//! thread. There is no scheduler and no yielding mid-callback — a
//! slow translator stalls the whole engine, by design.

use crate::error::TranslateError;
use crate::reload_bus::ReloadBus;
use crate::translator::Translator;
use crate::txn_handle::TxnHandle;
use confd_core::{ActionPhase, ConfigTree, DiffEntry, DiffIter, Entity, EntityKind, Generation, TxnState};
use confd_dagger::Transaction;
use confd_wire::ScratchLayout;
use parking_lot::Mutex;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// The entity a transaction's coalesced reload commands are staged
/// against — not a real configuration node, just an anchor for the one
/// combined action file `on_done` writes.
fn reload_entity() -> Entity {
    Entity { kind: EntityKind::System, name: "reload".into(), parent_kind: None }
}

pub struct Dispatcher {
    translators: Vec<Box<dyn Translator>>,
    state: TxnState,
    scratch_root: PathBuf,
    transaction: Option<Transaction>,
    reload_bus: Arc<Mutex<ReloadBus>>,
}

impl Dispatcher {
    pub fn new(scratch_root: impl Into<PathBuf>) -> Self {
        Self {
            translators: Vec::new(),
            state: TxnState::new(),
            scratch_root: scratch_root.into(),
            transaction: None,
            reload_bus: Arc::new(Mutex::new(ReloadBus::new())),
        }
    }

    /// Register a translator. Kept sorted by priority so callers don't
    /// need to register them in exactly subscription order — ties are
    /// broken by registration order, matching how sysrepo orders
    /// same-priority subscribers.
    pub fn register(&mut self, translator: Box<dyn Translator>) {
        let priority = translator.priority();
        let position = self.translators.iter().position(|t| t.priority() > priority).unwrap_or(self.translators.len());
        self.translators.insert(position, translator);
    }

    pub fn len(&self) -> usize {
        self.translators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    pub fn is_transaction_open(&self) -> bool {
        self.transaction.is_some()
    }

    pub fn on_update(&mut self, tree: &ConfigTree) -> Result<(), TranslateError> {
        self.ensure_transaction()?;
        let handle = self.txn_handle()?;
        for translator in &mut self.translators {
            translator.on_update(&handle, tree)?;
        }
        Ok(())
    }

    /// Run every translator's `on_change` against one module's diff.
    /// Any failure aborts the whole transaction — the generation
    /// being built is discarded and every translator is notified.
    pub fn on_change(&mut self, tree: &ConfigTree, diff_entries: &[DiffEntry]) -> Result<(), TranslateError> {
        self.ensure_transaction()?;
        self.state.on_change();
        let result = self.run_change(tree, diff_entries);
        if result.is_err() {
            self.on_abort();
        }
        result
    }

    fn run_change(&mut self, tree: &ConfigTree, diff_entries: &[DiffEntry]) -> Result<(), TranslateError> {
        let handle = self.txn_handle()?;
        for translator in &mut self.translators {
            translator.on_change(&handle, tree, DiffIter::new(diff_entries))?;
        }
        Ok(())
    }

    /// Called once per module's DONE notification. Only the call that
    /// brings the pending count to zero actually evolves the
    /// generation — `activate` is the generation runner. Whatever
    /// reload commands were signalled across the whole transaction are
    /// coalesced into one combined action file before the generation
    /// evolves, so two translators touching the same daemon run it
    /// exactly once.
    pub fn on_done(
        &mut self,
        activate: impl FnOnce(&ScratchLayout, Generation) -> Result<(), Box<dyn std::error::Error + Send + Sync>>,
    ) -> Result<(), TranslateError> {
        if !self.state.on_done() {
            return Ok(());
        }
        if let Some(txn) = self.transaction.take() {
            self.stage_reload_commands(&txn)?;
            txn.evolve(activate)?;
        }
        Ok(())
    }

    fn stage_reload_commands(&self, txn: &Transaction) -> Result<(), TranslateError> {
        let commands = self.reload_bus.lock().drain();
        if commands.is_empty() {
            return Ok(());
        }
        let entity = reload_entity();
        txn.dagger().add_node(&entity)?;
        let mut file = txn.dagger().open_next(ActionPhase::Init, &entity, confd_core::Priority::MAX as u16, "reload.sh")?;
        for command in commands {
            writeln!(file, "{command}")?;
        }
        Ok(())
    }

    pub fn on_abort(&mut self) {
        if let Some(txn) = self.transaction.take() {
            {
                let handle = self.handle_for(&txn);
                for translator in &mut self.translators {
                    translator.on_abort(&handle);
                }
            }
            self.reload_bus.lock().drain();
            if let Err(err) = txn.abandon() {
                warn!(error = %err, "failed to abandon transaction");
            }
        }
        self.state.on_abort();
    }

    fn ensure_transaction(&mut self) -> Result<(), TranslateError> {
        if self.transaction.is_none() {
            let layout = ScratchLayout::new(self.scratch_root.clone());
            self.transaction = Some(Transaction::claim(layout)?);
        }
        Ok(())
    }

    fn txn_handle(&self) -> Result<TxnHandle<'_>, TranslateError> {
        let txn = self.transaction.as_ref().ok_or(TranslateError::NoOpenTransaction)?;
        Ok(self.handle_for(txn))
    }

    fn handle_for<'txn>(&self, txn: &'txn Transaction) -> TxnHandle<'txn> {
        TxnHandle { generation: txn.dagger().next(), dagger: txn.dagger(), reload_bus: Arc::clone(&self.reload_bus) }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
