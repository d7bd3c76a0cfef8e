// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-module translators: each implements `confd_dispatch::Translator`
//! for one slice of the configuration tree and turns its diff into
//! staged dagger actions.
//!
//! The interface translator (`iface`) is the largest by a wide margin
//! — network interfaces carry the most structure and the most
//! teardown-before-recreate subtlety. Everything else follows one
//! shape: early-exit if nothing under the module's subtree changed,
//! stage a replacement config file plus a reload signal on
//! create/modify, stage an unconfigure step on delete.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod auth;
mod containers;
mod dhcp_client;
mod dhcp_server;
mod dns;
mod firewall;
mod hostname;
mod iface;
mod keystore;
mod ntp;
mod support;
mod syslog;
mod time;

pub use auth::{AugeasTree, AuthTranslator};
pub use containers::{ContainerJob, ContainersTranslator, JobQueue};
pub use dhcp_client::DhcpClientTranslator;
pub use dhcp_server::DhcpServerTranslator;
pub use dns::DnsTranslator;
pub use firewall::FirewallTranslator;
pub use hostname::HostnameTranslator;
pub use iface::{IfaceConfig, IfaceKind, IfaceTranslator, PhysicalInterfaceProbe};
pub use keystore::{FinitCondition, KeystoreTranslator};
pub use ntp::NtpTranslator;
pub use syslog::SyslogTranslator;
pub use time::TimeTranslator;
