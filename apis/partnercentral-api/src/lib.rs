// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Partner Central Selling API surface
//!
//! **IMPORTANT**: This crate describes a *subset* of the AWS Partner Central
//! Selling API. It only covers the read operations the samples invoke:
//!
//! - `GetOpportunity`
//! - `ListOpportunities`
//! - `ListSolutions`
//! - `GetAwsOpportunitySummary`
//! - `GetEngagementInvitation`
//! - `ListEngagementInvitations`
//!
//! The API itself is served by AWS and reached through the generated SDK in
//! `partnercentral-client`. This crate exists to:
//! 1. Document the exact API surface the samples depend on
//! 2. Provide a serializable record model for printing responses
//! 3. Enable stub implementations of [`PartnerCentralApi`] for testing
//!
//! Reference: https://docs.aws.amazon.com/partner-central/latest/selling-api/

use async_trait::async_trait;

pub mod error;
pub mod pages;
pub mod params;
pub mod types;

pub use error::RemoteCallError;
pub use pages::{collect_engagement_invitations, collect_opportunities, collect_solutions};
pub use params::{
    Catalog, GetAwsOpportunitySummaryParams, GetEngagementInvitationParams, GetOpportunityParams,
    InvalidPageSize, ListEngagementInvitationsParams, ListOpportunitiesParams,
    ListSolutionsParams, PageSize, ParticipantType,
};
pub use types::*;

/// The read operations of the Partner Central Selling API.
///
/// Implemented by `partnercentral_client::SellingClient` against the real
/// service and by in-memory fakes in tests.
#[async_trait]
pub trait PartnerCentralApi: Send + Sync {
    /// Fetch a single opportunity by identifier.
    async fn get_opportunity(
        &self,
        params: &GetOpportunityParams,
    ) -> Result<Opportunity, RemoteCallError>;

    /// Fetch one page of opportunity summaries.
    async fn list_opportunities(
        &self,
        params: &ListOpportunitiesParams,
    ) -> Result<OpportunityPage, RemoteCallError>;

    /// Fetch one page of solutions.
    async fn list_solutions(
        &self,
        params: &ListSolutionsParams,
    ) -> Result<SolutionPage, RemoteCallError>;

    /// Fetch AWS's summary of a partner opportunity.
    async fn get_aws_opportunity_summary(
        &self,
        params: &GetAwsOpportunitySummaryParams,
    ) -> Result<AwsOpportunitySummary, RemoteCallError>;

    /// Fetch a single engagement invitation by identifier or ARN.
    async fn get_engagement_invitation(
        &self,
        params: &GetEngagementInvitationParams,
    ) -> Result<EngagementInvitation, RemoteCallError>;

    /// Fetch one page of engagement invitation summaries.
    async fn list_engagement_invitations(
        &self,
        params: &ListEngagementInvitationsParams,
    ) -> Result<EngagementInvitationPage, RemoteCallError>;
}
