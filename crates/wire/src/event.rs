// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The datastore's change-notification protocol: the four event kinds
//! a subscription callback is invoked with, and the tuple of context
//! that comes along with each invocation.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The phase of a datastore transaction a callback is being invoked
/// for. Mirrors sysrepo's `sr_event_t` as seen by a change subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatastoreEvent {
    /// Validation pass: the candidate tree is available, nothing has
    /// committed yet. A translator may reject the transaction here.
    Update,
    /// The transaction is committing; diff entries are available for
    /// every subscribed module. Translators stage actions now.
    Change,
    /// The transaction has committed. Staged actions are activated.
    Done,
    /// The transaction was rejected by some other subscriber. Any
    /// work staged during `Change` must be unwound.
    Abort,
}

/// The full context a change-subscription callback receives, bundled
/// into one value instead of the datastore's raw six-argument
/// callback signature `(session, subscription_id, module_name, xpath,
/// event, request_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    pub session: u64,
    pub subscription_id: u64,
    pub module_name: SmolStr,
    pub xpath: SmolStr,
    pub event: DatastoreEvent,
    pub request_id: u64,
}

impl ChangeNotification {
    pub fn new(
        session: u64,
        subscription_id: u64,
        module_name: impl Into<SmolStr>,
        xpath: impl Into<SmolStr>,
        event: DatastoreEvent,
        request_id: u64,
    ) -> Self {
        Self {
            session,
            subscription_id,
            module_name: module_name.into(),
            xpath: xpath.into(),
            event,
            request_id,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
