// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration resolution
//!
//! Credentials and region come from a [`ConfigProvider`]. The production
//! provider, [`AmbientConfig`], runs the standard AWS chain:
//!
//! 1. Environment variables (`AWS_ACCESS_KEY_ID`, `AWS_REGION`, ...)
//! 2. Shared config and credentials files (`~/.aws/config`, `~/.aws/credentials`)
//! 3. SSO, web identity, container and instance metadata providers
//!
//! [`StaticConfig`] skips the chain entirely and is meant for tests and local
//! stub servers. Whatever the provider returns is then adjusted by
//! [`Overrides`] and checked by [`resolve`].

use std::time::Duration;

use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::Credentials;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_partnercentralselling::config::Region;
use aws_sdk_partnercentralselling::error::DisplayErrorContext;

use crate::error::ConfigurationError;

/// Region every sample targets; Partner Central Selling is only served there.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Public endpoint of the Partner Central Selling API
pub const DEFAULT_ENDPOINT: &str = "https://partnercentral-selling.us-east-1.api.aws";

/// Source of the base SDK configuration
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn load(&self) -> Result<SdkConfig, ConfigurationError>;
}

/// The default AWS provider chain, optionally pinned to a named profile
#[derive(Debug, Clone, Default)]
pub struct AmbientConfig {
    profile: Option<String>,
}

impl AmbientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read credentials and settings from the named shared-config profile
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

#[async_trait]
impl ConfigProvider for AmbientConfig {
    async fn load(&self) -> Result<SdkConfig, ConfigurationError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = &self.profile {
            tracing::debug!(profile = %profile, "loading AWS configuration from profile");
            loader = loader.profile_name(profile);
        }
        Ok(loader.load().await)
    }
}

/// Fixed credentials and region, bypassing the provider chain
#[derive(Debug, Clone)]
pub struct StaticConfig {
    region: String,
    access_key_id: String,
    secret_access_key: String,
}

impl StaticConfig {
    pub fn new(
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }
}

#[async_trait]
impl ConfigProvider for StaticConfig {
    async fn load(&self) -> Result<SdkConfig, ConfigurationError> {
        let credentials = Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            None,
            None,
            "partnercentral-static",
        );

        Ok(SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(SharedCredentialsProvider::new(credentials))
            .build())
    }
}

/// Fixed values applied on top of the provider's configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replaces whatever region the provider resolved
    pub region: Option<String>,
    /// Replaces whatever endpoint the provider resolved
    pub endpoint_url: Option<String>,
    /// Used only when the provider resolved no endpoint
    pub default_endpoint_url: Option<String>,
    /// Upper bound on a whole operation, retries included
    pub operation_timeout: Option<Duration>,
}

impl Overrides {
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn default_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.default_endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = Some(timeout);
        self
    }

    /// Apply the overrides to a resolved configuration
    pub fn apply(&self, config: SdkConfig) -> SdkConfig {
        let endpoint = match (&self.endpoint_url, config.endpoint_url()) {
            (Some(forced), _) => Some(forced.clone()),
            (None, Some(_)) => None,
            (None, None) => self.default_endpoint_url.clone(),
        };

        let mut builder = config.into_builder();
        if let Some(region) = &self.region {
            builder = builder.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        if let Some(timeout) = self.operation_timeout {
            builder = builder.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            );
        }
        builder.build()
    }
}

/// Load configuration from `provider`, apply `overrides`, and make sure the
/// result has a region and working credentials.
///
/// Credentials are resolved here rather than on the first request so that a
/// missing configuration is reported before any request is built.
pub async fn resolve<P>(provider: &P, overrides: &Overrides) -> Result<SdkConfig, ConfigurationError>
where
    P: ConfigProvider + ?Sized,
{
    let config = overrides.apply(provider.load().await?);

    let region = config.region().ok_or(ConfigurationError::MissingRegion)?;
    let credentials = config
        .credentials_provider()
        .ok_or(ConfigurationError::MissingCredentialsProvider)?;

    credentials
        .provide_credentials()
        .await
        .map_err(|e| ConfigurationError::Credentials(DisplayErrorContext(&e).to_string()))?;

    tracing::debug!(
        region = %region,
        endpoint = config.endpoint_url().unwrap_or("<default>"),
        "resolved AWS configuration"
    );
    Ok(config)
}
