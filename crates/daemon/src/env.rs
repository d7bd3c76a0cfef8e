// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;

/// Root of the generational scratch area: `CONFD_SCRATCH_ROOT`, or
/// `/var/lib/confd` in production.
pub fn scratch_root() -> PathBuf {
    std::env::var("CONFD_SCRATCH_ROOT").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("/var/lib/confd"))
}

/// Colon-separated list of banner files to append a failure notice to
/// on a fail-secure bootstrap: `CONFD_BANNER_FILES`, or the standard
/// `/etc/banner`, `/etc/issue`, `/etc/issue.net` trio.
pub fn banner_files() -> Vec<PathBuf> {
    match std::env::var("CONFD_BANNER_FILES") {
        Ok(list) => list.split(':').filter(|s| !s.is_empty()).map(PathBuf::from).collect(),
        Err(_) => vec![PathBuf::from("/etc/banner"), PathBuf::from("/etc/issue"), PathBuf::from("/etc/issue.net")],
    }
}

/// `CONFD_LOG`, falling back to a verbosity-derived directive.
pub fn log_filter(fallback: &str) -> String {
    std::env::var("CONFD_LOG").unwrap_or_else(|_| fallback.to_string())
}
