// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `system()`/`popen()` on formatted strings, replaced: a single
//! helper that takes a pre-built argv list and returns a captured
//! outcome. Never interpolates untrusted strings into a shell line.

use crate::error::SpawnError;
use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// The result of running one command to completion.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawn `program` with `args`, wait for it to finish, and capture its
/// output. `program` and each element of `args` are passed to the
/// kernel as discrete argv entries — there is no shell in the middle to
/// misinterpret metacharacters.
pub fn run(program: impl AsRef<OsStr>, args: &[impl AsRef<OsStr>]) -> Result<Outcome, SpawnError> {
    let program = program.as_ref();
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| SpawnError::Spawn { program: program.to_string_lossy().into_owned(), source })?;

    Ok(Outcome {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
#[path = "spawn_tests.rs"]
mod tests;
