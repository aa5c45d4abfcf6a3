// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for partnercentral-client

use aws_sdk_partnercentralselling::config::http::HttpResponse;
use aws_sdk_partnercentralselling::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_partnercentralselling::operation::RequestId;
use partnercentral_api::RemoteCallError;
use thiserror::Error;

/// The ambient configuration could not be turned into a usable client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Neither the environment, the shared config nor an override named a region
    #[error("No AWS region configured. Set AWS_REGION or pass --region")]
    MissingRegion,

    /// The resolved configuration carries no credentials provider at all
    #[error("No AWS credentials provider configured")]
    MissingCredentialsProvider,

    /// The provider chain ran but produced no credentials
    #[error("Failed to resolve AWS credentials: {0}")]
    Credentials(String),
}

/// Map an SDK failure onto [`RemoteCallError`], keeping code and request id.
pub(crate) fn remote_call_error<E>(
    operation: &'static str,
    err: SdkError<E, HttpResponse>,
) -> RemoteCallError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let message = match err.message() {
        Some(message) => message.to_string(),
        None => DisplayErrorContext(&err).to_string(),
    };

    let mut remote = RemoteCallError::new(operation, message);
    if let Some(code) = err.code() {
        remote = remote.with_code(code);
    }
    if let Some(request_id) = err.request_id() {
        remote = remote.with_request_id(request_id);
    }

    tracing::debug!(operation, error = %remote, "remote call failed");
    remote
}
