// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved daemon configuration: the CLI flags plus every filesystem
//! path a translator needs, gathered in one place so `lifecycle.rs`
//! doesn't have to thread `Cli` through the whole startup sequence.

use crate::cli::{Cli, Verbosity};
use crate::env;
use std::path::PathBuf;

/// Filesystem targets handed to the translators this daemon wires up.
/// None of these are configurable from the command line — they mirror
/// the fixed locations the rest of the OS expects these files at.
#[derive(Debug, Clone)]
pub struct TranslatorPaths {
    pub dhcp_client_dir: PathBuf,
    pub dhcp_server_dir: PathBuf,
    pub resolv_conf: PathBuf,
    pub firewall_staging: PathBuf,
    pub firewall_live: PathBuf,
    pub hostname_target: PathBuf,
    pub ntp_conf: PathBuf,
    pub syslog_dir: PathBuf,
    pub timezone_file: PathBuf,
    pub localtime_link: PathBuf,
    pub zoneinfo_root: PathBuf,
    pub ssh_keys_dir: PathBuf,
    pub containers_queue_dir: PathBuf,
    pub finit_cond_dir: PathBuf,
}

impl Default for TranslatorPaths {
    fn default() -> Self {
        Self {
            dhcp_client_dir: PathBuf::from("/etc/dhcp/dhclient.conf.d"),
            dhcp_server_dir: PathBuf::from("/etc/kea/kea-dhcp4.conf.d"),
            resolv_conf: PathBuf::from("/etc/resolv.conf"),
            firewall_staging: PathBuf::from("/run/confd/nftables.staging"),
            firewall_live: PathBuf::from("/etc/nftables.d"),
            hostname_target: PathBuf::from("/etc/hostname"),
            ntp_conf: PathBuf::from("/etc/chrony/chrony.conf"),
            syslog_dir: PathBuf::from("/etc/rsyslog.d"),
            timezone_file: PathBuf::from("/etc/timezone"),
            localtime_link: PathBuf::from("/etc/localtime"),
            zoneinfo_root: PathBuf::from("/usr/share/zoneinfo"),
            ssh_keys_dir: PathBuf::from("/etc/ssh"),
            containers_queue_dir: PathBuf::from("/run/confd/container-jobs"),
            finit_cond_dir: PathBuf::from("/run/finit/cond"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub debug: bool,
    pub foreground: bool,
    pub pid_file: Option<PathBuf>,
    pub fatal_plugin_fail: bool,
    pub factory_config: PathBuf,
    pub startup_config: PathBuf,
    pub failure_config: PathBuf,
    pub timeout_seconds: u64,
    pub verbosity: Verbosity,
    pub scratch_root: PathBuf,
    pub banner_files: Vec<PathBuf>,
    pub paths: TranslatorPaths,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            debug: cli.debug,
            foreground: cli.foreground || cli.debug,
            pid_file: cli.pid_file,
            fatal_plugin_fail: cli.fatal_plugin_fail,
            factory_config: cli.factory_config,
            startup_config: cli.startup_config,
            failure_config: cli.failure_config,
            timeout_seconds: cli.timeout_seconds,
            verbosity: cli.verbosity,
            scratch_root: env::scratch_root(),
            banner_files: env::banner_files(),
            paths: TranslatorPaths::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
