// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-instance enforcement via an exclusively-locked PID file,
//! the same mechanism `main.c`'s `open_pidfile`/`write_pidfile` use:
//! hold an `flock` for the process lifetime, write our own pid once
//! the lock is held, and let the OS release it if we ever die
//! without cleaning up.

use crate::error::LifecycleError;
use fs2::FileExt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct PidLock {
    path: PathBuf,
    file: File,
}

impl PidLock {
    pub fn acquire(path: &Path) -> Result<Self, LifecycleError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new().write(true).create(true).truncate(false).open(path)?;
        file.try_lock_exclusive().map_err(|source| {
            if source.kind() == std::io::ErrorKind::WouldBlock {
                LifecycleError::AlreadyRunning(path.to_path_buf())
            } else {
                LifecycleError::LockFailed { path: path.to_path_buf(), source }
            }
        })?;

        let mut file = file;
        file.set_len(0)?;
        writeln!(file, "{}", std::process::id())?;

        Ok(Self { path: path.to_path_buf(), file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PidLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to remove pid file on shutdown");
            }
        }
    }
}

#[cfg(test)]
#[path = "lockfile_tests.rs"]
mod tests;
