// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/system/dns-resolver` -> `/etc/resolv.conf`.

use crate::support::{abort_replace, stage_replace};
use confd_core::{ConfigTree, DiffIter, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use std::path::PathBuf;

const XPATH: &str = "/system/dns-resolver";

pub struct DnsTranslator {
    resolv_conf: PathBuf,
}

impl DnsTranslator {
    pub fn new(resolv_conf: impl Into<PathBuf>) -> Self {
        Self { resolv_conf: resolv_conf.into() }
    }

    fn entity(&self) -> Entity {
        Entity { kind: EntityKind::System, name: "dns-resolver".into(), parent_kind: None }
    }
}

impl Translator for DnsTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(41)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }

        let search: Vec<&str> = tree
            .children(&format!("{XPATH}/search"))
            .into_iter()
            .filter_map(|(_, node)| node.value.as_ref().and_then(|v| v.as_str()))
            .collect();
        let servers: Vec<&str> = tree
            .children(&format!("{XPATH}/server"))
            .into_iter()
            .filter_map(|(_, node)| node.value.as_ref().and_then(|v| v.as_str()))
            .collect();

        let mut body = String::new();
        if !search.is_empty() {
            body.push_str("search ");
            body.push_str(&search.join(" "));
            body.push('\n');
        }
        for server in &servers {
            body.push_str("nameserver ");
            body.push_str(server);
            body.push('\n');
        }
        stage_replace(txn, &self.entity(), 41, &self.resolv_conf, body.as_bytes(), &[])
    }

    fn on_abort(&mut self, _txn: &TxnHandle<'_>) {
        abort_replace(&self.resolv_conf);
    }
}

#[cfg(test)]
#[path = "dns_tests.rs"]
mod tests;
