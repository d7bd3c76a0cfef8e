// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builds a [`Dispatcher`] with every per-module translator
//! registered against the paths resolved in [`crate::config::Config`].

use crate::adapters::{FileFinitCondition, FileJobQueue, FlatFileAugeasTree, IpLinkProbe};
use crate::config::Config;
use crate::error::LifecycleError;
use confd_dispatch::Dispatcher;
use confd_translate::{
    AuthTranslator, ContainersTranslator, DhcpClientTranslator, DhcpServerTranslator, DnsTranslator, FirewallTranslator,
    HostnameTranslator, IfaceTranslator, KeystoreTranslator, NtpTranslator, SyslogTranslator, TimeTranslator,
};

pub fn build(config: &Config) -> Result<Dispatcher, LifecycleError> {
    let mut dispatcher = Dispatcher::new(config.scratch_root.clone());
    let paths = &config.paths;

    dispatcher.register(Box::new(IfaceTranslator::new(Box::new(IpLinkProbe::new()))));
    dispatcher.register(Box::new(DhcpClientTranslator::new(paths.dhcp_client_dir.clone())));
    dispatcher.register(Box::new(DhcpServerTranslator::new(paths.dhcp_server_dir.clone())));
    dispatcher.register(Box::new(DnsTranslator::new(paths.resolv_conf.clone())));
    dispatcher.register(Box::new(HostnameTranslator::new(paths.hostname_target.clone())));
    dispatcher.register(Box::new(NtpTranslator::new(paths.ntp_conf.clone())));
    dispatcher.register(Box::new(SyslogTranslator::new(paths.syslog_dir.clone())));
    dispatcher.register(Box::new(TimeTranslator::new(paths.timezone_file.clone(), paths.localtime_link.clone(), paths.zoneinfo_root.clone())));
    dispatcher.register(Box::new(AuthTranslator::new(Box::new(FlatFileAugeasTree::open(paths.ssh_keys_dir.join("confd-auth.flat"))?))));
    dispatcher.register(Box::new(KeystoreTranslator::new(paths.ssh_keys_dir.clone(), Box::new(FileFinitCondition::new(paths.finit_cond_dir.clone())))));
    dispatcher.register(Box::new(FirewallTranslator::new(paths.firewall_staging.clone(), paths.firewall_live.clone())));
    dispatcher.register(Box::new(ContainersTranslator::new(Box::new(FileJobQueue::new(paths.containers_queue_dir.clone())))));

    Ok(dispatcher)
}

#[cfg(test)]
#[path = "translators_tests.rs"]
mod tests;
