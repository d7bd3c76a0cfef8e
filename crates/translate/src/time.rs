// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `/system/clock/timezone` -> `/etc/timezone` + `/etc/localtime` symlink.

use crate::support::{abort_replace, stage_replace};
use confd_core::{ConfigTree, DiffIter, Entity, EntityKind, Priority};
use confd_dispatch::{TranslateError, Translator, TxnHandle};
use std::path::PathBuf;

const XPATH: &str = "/system/clock/timezone";
const DEFAULT_TZ: &str = "UTC";

pub struct TimeTranslator {
    timezone_file: PathBuf,
    localtime_link: PathBuf,
    zoneinfo_root: PathBuf,
}

impl TimeTranslator {
    pub fn new(timezone_file: impl Into<PathBuf>, localtime_link: impl Into<PathBuf>, zoneinfo_root: impl Into<PathBuf>) -> Self {
        Self { timezone_file: timezone_file.into(), localtime_link: localtime_link.into(), zoneinfo_root: zoneinfo_root.into() }
    }

    fn entity(&self) -> Entity {
        Entity { kind: EntityKind::System, name: "clock".into(), parent_kind: None }
    }
}

impl Translator for TimeTranslator {
    fn xpath(&self) -> &str {
        XPATH
    }

    fn priority(&self) -> Priority {
        Priority::fixed(11)
    }

    fn on_change(&mut self, txn: &TxnHandle<'_>, tree: &ConfigTree, diff: DiffIter<'_>) -> Result<(), TranslateError> {
        if diff.under(XPATH).next().is_none() {
            return Ok(());
        }
        let tz = tree.get_str(XPATH).unwrap_or(DEFAULT_TZ);
        stage_replace(txn, &self.entity(), 11, &self.timezone_file, format!("{tz}\n").as_bytes(), &[])?;

        let zoneinfo = self.zoneinfo_root.join(tz);
        let mut file = txn.open_init(&self.entity(), 12, "symlink.sh")?;
        use std::io::Write;
        writeln!(
            file,
            "ln -sf {} {}",
            confd_shell::quote_for_script(&zoneinfo.to_string_lossy()),
            confd_shell::quote_for_script(&self.localtime_link.to_string_lossy())
        )?;
        Ok(())
    }

    fn on_abort(&mut self, _txn: &TxnHandle<'_>) {
        abort_replace(&self.timezone_file);
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
