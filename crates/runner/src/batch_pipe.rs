// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A long-lived `ip -batch -` / `bridge -batch -` child process fed
//! line-by-line through its stdin, closed and reaped once at the end
//! of a run — the batched counterpart to `confd_shell::spawn::run`'s
//! one-shot `Command`.

use confd_shell::SpawnError;
use std::io::Write;
use std::process::{Child, ChildStdin, Command, Stdio};

pub struct BatchPipe {
    program: String,
    child: Child,
    stdin: ChildStdin,
}

impl BatchPipe {
    /// Spawn `program` with `args` and keep its stdin open for
    /// subsequent [`BatchPipe::feed`] calls.
    pub fn open(program: &str, args: &[&str]) -> Result<Self, SpawnError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SpawnError::Spawn { program: program.to_string(), source })?;
        let stdin = child.stdin.take().ok_or_else(|| SpawnError::Spawn {
            program: program.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "child did not inherit a stdin pipe"),
        })?;
        Ok(Self { program: program.to_string(), child, stdin })
    }

    /// Write one action file's full contents into the pipe.
    pub fn feed(&mut self, contents: &[u8]) -> Result<(), SpawnError> {
        self.stdin
            .write_all(contents)
            .map_err(|source| SpawnError::WriteStdin { program: self.program.clone(), source })
    }

    /// Close stdin and wait for the batch processor to finish,
    /// returning its final exit code.
    pub fn finish(mut self) -> Result<i32, SpawnError> {
        drop(self.stdin);
        let output = self
            .child
            .wait_with_output()
            .map_err(|source| SpawnError::Wait { program: self.program.clone(), source })?;
        Ok(output.status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
#[path = "batch_pipe_tests.rs"]
mod tests;
