// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/containers/container` -> per-container service-supervisor
//! recipes, enqueued through a `JobQueue` rather than run in-line —
//! pulling, starting and stopping a container is slow and shouldn't
//! stall the synchronous dispatch loop any more than necessary, so
//! the actual work is handed off.

use confd_core::{ConfigTree, DiffIter, DiffOp, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};

const XPATH: &str = "/containers/container";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerJob {
    Start,
    Stop,
    Restart,
}

/// Where container lifecycle jobs get enqueued. A concrete
/// implementation backed by a real supervisor is out of scope here.
pub trait JobQueue: Send {
    fn enqueue(&mut self, container: &str, job: ContainerJob) -> Result<(), TranslateError>;
}

pub struct ContainersTranslator {
    queue: Box<dyn JobQueue>,
}

impl ContainersTranslator {
    pub fn new(queue: Box<dyn JobQueue>) -> Self {
        Self { queue }
    }

    fn entity(&self, name: &str) -> Entity {
        Entity::new(EntityKind::Container, name).unwrap_or(Entity { kind: EntityKind::Container, name: "invalid".into(), parent_kind: None })
    }
}

impl Translator for ContainersTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(95)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }

        for (name, node) in tree.children(XPATH) {
            let entity = self.entity(name);
            let job = match node.op {
                DiffOp::Delete => ContainerJob::Stop,
                DiffOp::Create => ContainerJob::Start,
                _ => ContainerJob::Restart,
            };
            self.queue.enqueue(name, job)?;
            txn.add_node(&entity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "containers_tests.rs"]
mod tests;
