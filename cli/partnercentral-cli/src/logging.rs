// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Log setup shared by the binaries
//!
//! Logs always go to stderr so stdout carries nothing but the JSON document.
//! `RUST_LOG` overrides the defaults below.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Default filter of the fixed samples
pub const SAMPLE_FILTER: &str = "info";

/// Default filter of `pcsell`
pub const QUIET_FILTER: &str = "warn";

/// Filter of `pcsell -v`
pub const VERBOSE_FILTER: &str =
    "warn,pcsell=debug,partnercentral_cli=debug,partnercentral_client=debug,partnercentral_api=debug";

/// Install the global subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init(default_filter: &str) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()
}
