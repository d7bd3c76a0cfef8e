// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append a failure notice to the configured login banners, mirroring
//! `main.c`'s `banner_append`: best-effort, missing files are simply
//! skipped rather than treated as an error.

use std::path::Path;

pub fn append(files: &[impl AsRef<Path>], message: &str) {
    for path in files {
        let path = path.as_ref();
        match std::fs::OpenOptions::new().append(true).create(true).open(path) {
            Ok(mut file) => {
                use std::io::Write;
                if let Err(err) = writeln!(file, "\n{message}") {
                    tracing::warn!(path = %path.display(), error = %err, "failed to append to banner file");
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to open banner file");
            }
        }
    }
}

#[cfg(test)]
#[path = "banner_tests.rs"]
mod tests;
