// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maps an action file's `ScriptExt` to the argv that runs it. The
//! runner uses this to decide whether a file is streamed into a
//! long-lived batch pipe (`ip`, `bridge`) or spawned directly
//! (`sh`, `sysctl`).

use confd_core::ScriptExt;

/// The base command a script of this extension is executed with. For
/// `Ip`/`Bridge` this is the batch-mode pipe command; the runner feeds
/// the file's contents into that pipe's stdin rather than invoking it
/// per file. For `Sh`/`Sysctl` each file is its own process, run with
/// this argv plus the file path appended.
pub fn interpreter_for(ext: ScriptExt) -> &'static [&'static str] {
    match ext {
        ScriptExt::Sh => &["/bin/sh"],
        ScriptExt::Ip => &["/sbin/ip", "-batch", "-"],
        ScriptExt::Bridge => &["/sbin/bridge", "-batch", "-"],
        ScriptExt::Sysctl => &["/sbin/sysctl", "-p"],
    }
}

#[cfg(test)]
#[path = "interpreter_tests.rs"]
mod tests;
