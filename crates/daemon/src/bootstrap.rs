// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fail-secure config loading, ported from `main.c`'s
//! `bootstrap_config`/`handle_startup_failure`: prefer the
//! startup-config, fall back to the factory default on any load
//! failure, and fall back again to the failure-config if even that
//! doesn't parse. Banners record which path was taken so an operator
//! logging in sees why.

use crate::banner;
use crate::config::Config;
use crate::error::LifecycleError;
use confd_wire::ConfigDocument;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The startup-config loaded cleanly.
    Startup,
    /// Startup-config failed; running on the factory default instead.
    FactoryDefault,
    /// Factory default also failed; running on the failure-config.
    Failure,
}

pub fn load(config: &Config) -> Result<(ConfigDocument, BootstrapOutcome), LifecycleError> {
    match ConfigDocument::from_file(&config.startup_config) {
        Ok(doc) => {
            info!(path = %config.startup_config.display(), "loaded startup-config");
            return Ok((doc, BootstrapOutcome::Startup));
        }
        Err(err) => {
            error!(path = %config.startup_config.display(), error = %err, "failed loading startup-config, reverting to fail-secure mode");
        }
    }

    match ConfigDocument::from_file(&config.factory_config) {
        Ok(doc) => {
            banner::append(&config.banner_files, "ERROR: Corrupt startup-config, system has reverted to default login credentials");
            warn!(path = %config.factory_config.display(), "reverted to factory-default config");
            return Ok((doc, BootstrapOutcome::FactoryDefault));
        }
        Err(err) => {
            error!(path = %config.factory_config.display(), error = %err, "failed loading factory-default config");
        }
    }

    match ConfigDocument::from_file(&config.failure_config) {
        Ok(doc) => {
            banner::append(&config.banner_files, "CRITICAL ERROR: Logins are disabled, no credentials available");
            error!(path = %config.failure_config.display(), "running on failure-config, every other source failed to load");
            Ok((doc, BootstrapOutcome::Failure))
        }
        Err(err) => {
            banner::append(&config.banner_files, "CRITICAL ERROR: Logins are disabled, no credentials available");
            Err(LifecycleError::Bootstrap(format!("failure-config at {} also failed: {err}", config.failure_config.display())))
        }
    }
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
