// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Partner Central Selling client
//!
//! Wraps the generated `aws-sdk-partnercentralselling` client behind the
//! [`PartnerCentralApi`] trait so callers see the serializable record model
//! rather than SDK builders and outputs.
//!
//! ```ignore
//! use partnercentral_client::{AmbientConfig, Overrides, SellingClient};
//! use partnercentral_api::{Catalog, GetOpportunityParams, PartnerCentralApi};
//!
//! let overrides = Overrides::default().region("us-east-1");
//! let client = SellingClient::connect(&AmbientConfig::new(), &overrides).await?;
//! let opportunity = client
//!     .get_opportunity(&GetOpportunityParams::new(Catalog::Aws, "O1111111"))
//!     .await?;
//! ```

use async_trait::async_trait;
use partnercentral_api::{
    AwsOpportunitySummary, EngagementInvitation, EngagementInvitationPage,
    GetAwsOpportunitySummaryParams, GetEngagementInvitationParams, GetOpportunityParams,
    ListEngagementInvitationsParams, ListOpportunitiesParams, ListSolutionsParams, Opportunity,
    OpportunityPage, PageSize, PartnerCentralApi, RemoteCallError, SolutionPage,
};

pub mod config;
mod convert;
pub mod error;

pub use config::{
    AmbientConfig, ConfigProvider, DEFAULT_ENDPOINT, DEFAULT_REGION, Overrides, StaticConfig,
    resolve,
};
pub use aws_config::SdkConfig;
pub use error::ConfigurationError;

use error::remote_call_error;

/// Partner Central Selling client
#[derive(Debug, Clone)]
pub struct SellingClient {
    inner: aws_sdk_partnercentralselling::Client,
}

impl SellingClient {
    /// Build a client from an already resolved configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: aws_sdk_partnercentralselling::Client::new(config),
        }
    }

    /// Resolve configuration from `provider` and build a client from it.
    ///
    /// Fails before any request is made when no region or no credentials
    /// can be found.
    pub async fn connect<P>(provider: &P, overrides: &Overrides) -> Result<Self, ConfigurationError>
    where
        P: ConfigProvider + ?Sized,
    {
        let config = resolve(provider, overrides).await?;
        Ok(Self::new(&config))
    }

    /// The underlying SDK client, for operations not covered here
    pub fn inner(&self) -> &aws_sdk_partnercentralselling::Client {
        &self.inner
    }
}

#[async_trait]
impl PartnerCentralApi for SellingClient {
    async fn get_opportunity(
        &self,
        params: &GetOpportunityParams,
    ) -> Result<Opportunity, RemoteCallError> {
        tracing::debug!(
            catalog = %params.catalog,
            identifier = %params.identifier,
            "GetOpportunity"
        );

        let output = self
            .inner
            .get_opportunity()
            .catalog(params.catalog.as_str())
            .identifier(&params.identifier)
            .send()
            .await
            .map_err(|e| remote_call_error("GetOpportunity", e))?;

        Ok(convert::opportunity(output))
    }

    async fn list_opportunities(
        &self,
        params: &ListOpportunitiesParams,
    ) -> Result<OpportunityPage, RemoteCallError> {
        tracing::debug!(
            catalog = %params.catalog,
            max_results = ?params.max_results.map(PageSize::get),
            next_token = ?params.next_token,
            "ListOpportunities"
        );

        let output = self
            .inner
            .list_opportunities()
            .catalog(params.catalog.as_str())
            .set_max_results(params.max_results.map(PageSize::get))
            .set_next_token(params.next_token.clone())
            .send()
            .await
            .map_err(|e| remote_call_error("ListOpportunities", e))?;

        Ok(convert::opportunity_page(output))
    }

    async fn list_solutions(
        &self,
        params: &ListSolutionsParams,
    ) -> Result<SolutionPage, RemoteCallError> {
        tracing::debug!(
            catalog = %params.catalog,
            max_results = ?params.max_results.map(PageSize::get),
            next_token = ?params.next_token,
            "ListSolutions"
        );

        let output = self
            .inner
            .list_solutions()
            .catalog(params.catalog.as_str())
            .set_max_results(params.max_results.map(PageSize::get))
            .set_next_token(params.next_token.clone())
            .send()
            .await
            .map_err(|e| remote_call_error("ListSolutions", e))?;

        Ok(convert::solution_page(output))
    }

    async fn get_aws_opportunity_summary(
        &self,
        params: &GetAwsOpportunitySummaryParams,
    ) -> Result<AwsOpportunitySummary, RemoteCallError> {
        tracing::debug!(
            catalog = %params.catalog,
            related_opportunity_identifier = %params.related_opportunity_identifier,
            "GetAwsOpportunitySummary"
        );

        let output = self
            .inner
            .get_aws_opportunity_summary()
            .catalog(params.catalog.as_str())
            .related_opportunity_identifier(&params.related_opportunity_identifier)
            .send()
            .await
            .map_err(|e| remote_call_error("GetAwsOpportunitySummary", e))?;

        Ok(convert::aws_opportunity_summary(output))
    }

    async fn get_engagement_invitation(
        &self,
        params: &GetEngagementInvitationParams,
    ) -> Result<EngagementInvitation, RemoteCallError> {
        tracing::debug!(
            catalog = %params.catalog,
            identifier = %params.identifier,
            "GetEngagementInvitation"
        );

        let output = self
            .inner
            .get_engagement_invitation()
            .catalog(params.catalog.as_str())
            .identifier(&params.identifier)
            .send()
            .await
            .map_err(|e| remote_call_error("GetEngagementInvitation", e))?;

        Ok(convert::engagement_invitation(output))
    }

    async fn list_engagement_invitations(
        &self,
        params: &ListEngagementInvitationsParams,
    ) -> Result<EngagementInvitationPage, RemoteCallError> {
        tracing::debug!(
            catalog = %params.catalog,
            max_results = ?params.max_results.map(PageSize::get),
            next_token = ?params.next_token,
            participant_type = ?params.participant_type,
            "ListEngagementInvitations"
        );

        let output = self
            .inner
            .list_engagement_invitations()
            .catalog(params.catalog.as_str())
            .set_max_results(params.max_results.map(PageSize::get))
            .set_next_token(params.next_token.clone())
            .set_participant_type(params.participant_type.map(|p| p.as_str().into()))
            .send()
            .await
            .map_err(|e| remote_call_error("ListEngagementInvitations", e))?;

        Ok(convert::engagement_invitation_page(output))
    }
}
