// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! RAII wrapper around [`Dagger`]: a transaction claimed and never
//! explicitly evolved or abandoned is abandoned automatically when
//! dropped, so a translator panic or early return can never leave a
//! half-built generation holding the `next` lock forever.

use crate::dagger::Dagger;
use crate::error::DaggerError;
use confd_wire::ScratchLayout;
use tracing::warn;

pub struct Transaction {
    dagger: Dagger,
    finished: bool,
}

impl Transaction {
    pub fn claim(layout: ScratchLayout) -> Result<Self, DaggerError> {
        Ok(Self { dagger: Dagger::claim(layout)?, finished: false })
    }

    pub fn dagger(&self) -> &Dagger {
        &self.dagger
    }

    pub fn dagger_mut(&mut self) -> &mut Dagger {
        &mut self.dagger
    }

    pub fn evolve(
        mut self,
        activate: impl FnOnce(&ScratchLayout, confd_core::Generation) -> Result<(), Box<dyn std::error::Error + Send + Sync>>,
    ) -> Result<(), DaggerError> {
        let result = self.dagger.evolve(activate);
        self.finished = true;
        result
    }

    pub fn abandon(mut self) -> Result<(), DaggerError> {
        let result = self.dagger.abandon();
        self.finished = true;
        result
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.finished {
            if let Err(err) = self.dagger.abandon() {
                warn!(error = %err, "failed to abandon unfinished transaction on drop");
            }
        }
    }
}

#[cfg(test)]
#[path = "transaction_tests.rs"]
mod tests;
