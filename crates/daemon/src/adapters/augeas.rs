// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A deliberately simplified stand-in for an augeas-backed
//! configuration tree: real augeas bindings are out of scope for a
//! from-scratch reimplementation (see `DESIGN.md`), so this keeps a
//! flat `path = value` map in memory and persists it as sorted
//! `key=value` lines instead of editing `/etc/passwd`/`/etc/shadow`
//! directly.

use confd_dispatch::TranslateError;
use confd_translate::AugeasTree;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

pub struct FlatFileAugeasTree {
    backing_file: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FlatFileAugeasTree {
    pub fn open(backing_file: impl Into<PathBuf>) -> Result<Self, TranslateError> {
        let backing_file = backing_file.into();
        let entries = match std::fs::read_to_string(&backing_file) {
            Ok(text) => parse(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { backing_file, entries })
    }
}

fn parse(text: &str) -> BTreeMap<String, String> {
    text.lines().filter_map(|line| line.split_once('=')).map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

impl AugeasTree for FlatFileAugeasTree {
    fn set(&mut self, path: &str, value: &str) -> Result<(), TranslateError> {
        self.entries.insert(path.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, path: &str) -> Result<(), TranslateError> {
        self.entries.retain(|key, _| key != path && !key.starts_with(&format!("{path}/")));
        Ok(())
    }

    fn save(&mut self) -> Result<(), TranslateError> {
        if let Some(parent) = self.backing_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(&self.backing_file)?;
        for (key, value) in &self.entries {
            writeln!(file, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "augeas_tests.rs"]
mod tests;
