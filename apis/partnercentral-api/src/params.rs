// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Request parameters for the read operations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

// ============================================================================
// Catalog
// ============================================================================

/// The partition a request operates against.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Catalog {
    /// Production data
    #[default]
    #[serde(rename = "AWS")]
    #[strum(serialize = "AWS")]
    Aws,
    /// Testing partition
    Sandbox,
}

impl Catalog {
    /// Wire spelling of the catalog
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

// ============================================================================
// ParticipantType
// ============================================================================

/// Which side of an engagement invitation the caller is on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ParticipantType {
    #[serde(rename = "SENDER")]
    #[strum(serialize = "SENDER")]
    Sender,
    #[serde(rename = "RECEIVER")]
    #[strum(serialize = "RECEIVER")]
    Receiver,
}

impl ParticipantType {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

// ============================================================================
// PageSize
// ============================================================================

/// A `MaxResults` value accepted by the list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PageSize(i32);

impl PageSize {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 100;

    /// Create a page size, rejecting values outside `1..=100`
    pub fn new(value: i32) -> Result<Self, InvalidPageSize> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidPageSize::OutOfRange(i64::from(value)))
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for i32 {
    fn from(size: PageSize) -> i32 {
        size.0
    }
}

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidPageSize::NotANumber(s.to_string()))?;
        i32::try_from(value)
            .map_err(|_| InvalidPageSize::OutOfRange(value))
            .and_then(Self::new)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned for an unusable `MaxResults` value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPageSize {
    #[error("page size must be between 1 and 100, got {0}")]
    OutOfRange(i64),

    #[error("page size must be an integer, got '{0}'")]
    NotANumber(String),
}

// ============================================================================
// Operation parameters
// ============================================================================

/// Parameters for `GetOpportunity`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOpportunityParams {
    pub catalog: Catalog,
    /// Opportunity identifier, e.g. `O1111111`
    pub identifier: String,
}

impl GetOpportunityParams {
    pub fn new(catalog: Catalog, identifier: impl Into<String>) -> Self {
        Self {
            catalog,
            identifier: identifier.into(),
        }
    }
}

/// Parameters for `ListOpportunities`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOpportunitiesParams {
    pub catalog: Catalog,
    /// Upper bound on the number of summaries in the returned page
    pub max_results: Option<PageSize>,
    /// Continuation token from a previous page
    pub next_token: Option<String>,
}

impl ListOpportunitiesParams {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn max_results(mut self, max_results: PageSize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Parameters for `ListSolutions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSolutionsParams {
    pub catalog: Catalog,
    pub max_results: Option<PageSize>,
    pub next_token: Option<String>,
}

impl ListSolutionsParams {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn max_results(mut self, max_results: PageSize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

/// Parameters for `GetAwsOpportunitySummary`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAwsOpportunitySummaryParams {
    pub catalog: Catalog,
    /// The partner opportunity whose AWS summary is wanted, e.g. `O4235295`
    pub related_opportunity_identifier: String,
}

impl GetAwsOpportunitySummaryParams {
    pub fn new(catalog: Catalog, related_opportunity_identifier: impl Into<String>) -> Self {
        Self {
            catalog,
            related_opportunity_identifier: related_opportunity_identifier.into(),
        }
    }
}

/// Parameters for `GetEngagementInvitation`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetEngagementInvitationParams {
    pub catalog: Catalog,
    /// Invitation identifier or ARN
    pub identifier: String,
}

impl GetEngagementInvitationParams {
    pub fn new(catalog: Catalog, identifier: impl Into<String>) -> Self {
        Self {
            catalog,
            identifier: identifier.into(),
        }
    }
}

/// Parameters for `ListEngagementInvitations`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEngagementInvitationsParams {
    pub catalog: Catalog,
    pub max_results: Option<PageSize>,
    pub next_token: Option<String>,
    /// Only invitations the caller sent, or only those it received
    pub participant_type: Option<ParticipantType>,
}

impl ListEngagementInvitationsParams {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn max_results(mut self, max_results: PageSize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    pub fn participant_type(mut self, participant_type: ParticipantType) -> Self {
        self.participant_type = Some(participant_type);
        self
    }
}
