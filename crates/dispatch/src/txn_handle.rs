// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The only view of the dagger a translator ever gets: a generation
//! number plus a narrow set of staging operations. Translators never
//! see `confd_dagger::Dagger` directly, so they cannot evolve or
//! abandon a transaction out from under the dispatcher.

use crate::error::TranslateError;
use crate::reload_bus::ReloadBus;
use confd_core::{ActionPhase, Entity, Generation};
use confd_dagger::Dagger;
use parking_lot::Mutex;
use std::fs::File;
use std::sync::Arc;

pub struct TxnHandle<'txn> {
    pub(crate) generation: Generation,
    pub(crate) dagger: &'txn Dagger,
    pub(crate) reload_bus: Arc<Mutex<ReloadBus>>,
}

impl<'txn> TxnHandle<'txn> {
    /// Build a handle directly from a claimed [`Dagger`], bypassing the
    /// [`crate::Dispatcher`] — for translator crates' own tests, which
    /// need a handle without running a whole dispatch cycle. The reload
    /// bus it carries is a fresh, private one: tests that care about
    /// coalescing exercise [`ReloadBus`] directly instead.
    #[cfg(any(test, feature = "test-support"))]
    pub fn for_testing(generation: Generation, dagger: &'txn Dagger) -> Self {
        Self { generation, dagger, reload_bus: Arc::new(Mutex::new(ReloadBus::new())) }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Queue `command` to run once at most, coalesced with every other
    /// reload signalled during this transaction and run only once the
    /// generation actually lands.
    pub fn signal_reload(&self, command: &'static str) {
        self.reload_bus.lock().signal(command);
    }

    /// Open (or continue appending to) an `init` action file for
    /// `entity` in the generation being built.
    pub fn open_init(&self, entity: &Entity, priority: u16, script: &str) -> Result<File, TranslateError> {
        Ok(self.dagger.open_next(ActionPhase::Init, entity, priority, script)?)
    }

    /// Open (or continue appending to) an `exit` action file for
    /// `entity` in the generation being built — used to tear down a
    /// freshly-created entity if some later translator aborts.
    pub fn open_exit(&self, entity: &Entity, priority: u16, script: &str) -> Result<File, TranslateError> {
        Ok(self.dagger.open_next(ActionPhase::Exit, entity, priority, script)?)
    }

    /// Open an `exit` action file in the **currently active**
    /// generation — the normal way to stage a teardown step for an
    /// entity that is being deleted or must be deleted-then-recreated.
    pub fn open_current_exit(&self, entity: &Entity, priority: u16, script: &str) -> Result<File, TranslateError> {
        Ok(self.dagger.open_current(ActionPhase::Exit, entity, priority, script)?)
    }

    pub fn add_dep(&self, dependent: &Entity, dependee: &Entity) -> Result<(), TranslateError> {
        Ok(self.dagger.add_dep(dependent, dependee)?)
    }

    pub fn add_node(&self, entity: &Entity) -> Result<(), TranslateError> {
        Ok(self.dagger.add_node(entity)?)
    }

    /// Mark `entity` to be skipped by the runner in the generation
    /// being built.
    pub fn skip(&self, entity: &Entity) -> Result<(), TranslateError> {
        Ok(self.dagger.skip(entity)?)
    }

    pub fn should_skip_current(&self, entity: &Entity) -> bool {
        self.dagger.should_skip_current(entity)
    }
}
