// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action file addressing: phase, priority and interpreter extension.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPhase {
    Init,
    Exit,
}

crate::simple_display! {
    ActionPhase {
        Init => "init",
        Exit => "exit",
    }
}

/// A priority within `[0, 99]`. Lower runs earlier within one phase on
/// one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Priority(u8);

impl Priority {
    pub const MAX: u8 = 99;

    pub fn new(value: u16) -> Result<Self, CoreError> {
        if value > Self::MAX as u16 {
            return Err(CoreError::PriorityOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// A priority from a fixed, in-range compile-time constant, for
    /// translators whose dispatch priority is a literal. Out-of-range
    /// input is a programmer error, clamped rather than propagated as
    /// a `Result` callers would have no meaningful way to handle.
    pub const fn fixed(value: u8) -> Self {
        debug_assert!(value <= Self::MAX);
        Self(if value > Self::MAX { Self::MAX } else { value })
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Render as the two-digit zero-padded prefix used in file names.
    pub fn file_prefix(self) -> String {
        format!("{:02}", self.0)
    }
}

/// The interpreter an action file is executed by, inferred from its
/// filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptExt {
    Sh,
    Ip,
    Bridge,
    Sysctl,
}

impl ScriptExt {
    pub fn from_script_name(name: &str) -> Option<Self> {
        let ext = name.rsplit_once('.').map(|(_, e)| e)?;
        match ext {
            "sh" => Some(ScriptExt::Sh),
            "ip" => Some(ScriptExt::Ip),
            "bridge" => Some(ScriptExt::Bridge),
            "sysctl" => Some(ScriptExt::Sysctl),
            _ => None,
        }
    }

    /// The shebang line written when a fresh action file is created.
    pub fn shebang(self) -> &'static str {
        match self {
            ScriptExt::Sh => "#!/bin/sh\n\n",
            ScriptExt::Ip => "#!/sbin/ip -batch\n\n",
            ScriptExt::Bridge => "#!/sbin/bridge -batch\n\n",
            ScriptExt::Sysctl => "#!/sbin/sysctl -p\n\n",
        }
    }

    /// The filename extension (without the leading dot) an action file
    /// of this kind is addressed by.
    pub fn extension(self) -> &'static str {
        match self {
            ScriptExt::Sh => "sh",
            ScriptExt::Ip => "ip",
            ScriptExt::Bridge => "bridge",
            ScriptExt::Sysctl => "sysctl",
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
