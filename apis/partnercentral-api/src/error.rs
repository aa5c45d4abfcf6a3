// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error type for remote operations

use std::fmt;

use thiserror::Error;

/// A remote operation failed.
///
/// Covers everything the service or the transport can report: network
/// failures, authorization, validation, not-found, throttling and timeouts.
/// The error code is carried for diagnostics only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} failed: {}{message}{}", CodePrefix(.code.as_deref()), RequestIdSuffix(.request_id.as_deref()))]
pub struct RemoteCallError {
    /// Operation name, e.g. `GetOpportunity`
    pub operation: &'static str,
    /// Service error code, e.g. `ResourceNotFoundException`
    pub code: Option<String>,
    /// Human-readable message
    pub message: String,
    /// Request id assigned by the service, when one was returned
    pub request_id: Option<String>,
}

impl RemoteCallError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            code: None,
            message: message.into(),
            request_id: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

struct CodePrefix<'a>(Option<&'a str>);

impl fmt::Display for CodePrefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "{code}: "),
            None => Ok(()),
        }
    }
}

struct RequestIdSuffix<'a>(Option<&'a str>);

impl fmt::Display for RequestIdSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, " (request id: {id})"),
            None => Ok(()),
        }
    }
}
