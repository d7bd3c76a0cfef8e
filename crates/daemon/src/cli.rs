// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface for the `confd` binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Verbosity {
    None,
    Error,
    Warning,
    Info,
    Debug,
}

impl Verbosity {
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::None => "off",
            Verbosity::Error => "error",
            Verbosity::Warning => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// `confd [-d] [-n] [-p pidfile] [-f] [-F factory-config] [-S startup-config]
/// [-E failure-config] [-t timeout] [-v level]`
#[derive(Debug, Clone, Parser)]
#[command(name = "confd", about = "Configuration management daemon")]
pub struct Cli {
    /// Debug mode: not daemonized, logs to stderr.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Run in foreground without forking.
    #[arg(short = 'n', long = "foreground")]
    pub foreground: bool,

    /// Create a PID file at the given path.
    #[arg(short = 'p', long = "pid-file")]
    pub pid_file: Option<PathBuf>,

    /// Terminate startup if any translator fails to register.
    #[arg(short = 'f', long = "fatal-plugin-fail")]
    pub fatal_plugin_fail: bool,

    #[arg(short = 'F', long = "factory-config", default_value = "/etc/factory-config.cfg")]
    pub factory_config: PathBuf,

    #[arg(short = 'S', long = "startup-config", default_value = "/cfg/startup-config.cfg")]
    pub startup_config: PathBuf,

    #[arg(short = 'E', long = "failure-config", default_value = "/etc/failure-config.cfg")]
    pub failure_config: PathBuf,

    #[arg(short = 't', long = "timeout-seconds", default_value_t = 60)]
    pub timeout_seconds: u64,

    #[arg(short = 'v', long = "verbosity", default_value = "error")]
    pub verbosity: Verbosity,
}
