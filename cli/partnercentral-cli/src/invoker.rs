// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Run one read operation and print its result

use std::io::{self, Write};

use partnercentral_api::{
    GetAwsOpportunitySummaryParams, GetEngagementInvitationParams, GetOpportunityParams,
    ListEngagementInvitationsParams, ListOpportunitiesParams, ListSolutionsParams,
    PartnerCentralApi, RemoteCallError, collect_engagement_invitations, collect_opportunities,
    collect_solutions,
};
use partnercentral_client::{ConfigProvider, ConfigurationError, Overrides, SellingClient};
use thiserror::Error;

use crate::output::write_json;

/// Why an invocation produced no output
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    RemoteCall(#[from] RemoteCallError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// The remote read to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    GetOpportunity(GetOpportunityParams),
    ListOpportunities {
        params: ListOpportunitiesParams,
        /// Follow `NextToken` until the listing is exhausted
        all: bool,
    },
    ListSolutions {
        params: ListSolutionsParams,
        all: bool,
    },
    GetAwsOpportunitySummary(GetAwsOpportunitySummaryParams),
    GetEngagementInvitation(GetEngagementInvitationParams),
    ListEngagementInvitations {
        params: ListEngagementInvitationsParams,
        all: bool,
    },
}

impl Operation {
    /// API name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetOpportunity(_) => "GetOpportunity",
            Self::ListOpportunities { .. } => "ListOpportunities",
            Self::ListSolutions { .. } => "ListSolutions",
            Self::GetAwsOpportunitySummary(_) => "GetAwsOpportunitySummary",
            Self::GetEngagementInvitation(_) => "GetEngagementInvitation",
            Self::ListEngagementInvitations { .. } => "ListEngagementInvitations",
        }
    }
}

/// Loads configuration, builds a client and runs one [`Operation`]
pub struct SampleInvoker<P> {
    provider: P,
    overrides: Overrides,
}

impl<P: ConfigProvider> SampleInvoker<P> {
    pub fn new(provider: P, overrides: Overrides) -> Self {
        Self {
            provider,
            overrides,
        }
    }

    /// Resolve configuration and invoke `operation`, printing the response
    /// to `out`.
    pub async fn run<W: Write>(&self, operation: &Operation, out: &mut W) -> Result<(), InvokeError> {
        let client = SellingClient::connect(&self.provider, &self.overrides).await?;
        invoke(&client, operation, out).await
    }
}

/// Invoke `operation` against `api` and write the response as JSON.
///
/// Nothing is written unless the call succeeds and the response serializes
/// in full.
pub async fn invoke<A, W>(api: &A, operation: &Operation, out: &mut W) -> Result<(), InvokeError>
where
    A: PartnerCentralApi + ?Sized,
    W: Write,
{
    tracing::debug!(operation = operation.name(), "invoking");

    match operation {
        Operation::GetOpportunity(params) => {
            let opportunity = api.get_opportunity(params).await?;
            tracing::info!("printing opportunity...");
            write_json(out, &opportunity)?;
        }
        Operation::ListOpportunities { params, all: false } => {
            write_json(out, &api.list_opportunities(params).await?)?;
        }
        Operation::ListOpportunities { params, all: true } => {
            write_json(out, &collect_opportunities(api, params).await?)?;
        }
        Operation::ListSolutions { params, all: false } => {
            write_json(out, &api.list_solutions(params).await?)?;
        }
        Operation::ListSolutions { params, all: true } => {
            write_json(out, &collect_solutions(api, params).await?)?;
        }
        Operation::GetAwsOpportunitySummary(params) => {
            write_json(out, &api.get_aws_opportunity_summary(params).await?)?;
        }
        Operation::GetEngagementInvitation(params) => {
            write_json(out, &api.get_engagement_invitation(params).await?)?;
        }
        Operation::ListEngagementInvitations { params, all: false } => {
            write_json(out, &api.list_engagement_invitations(params).await?)?;
        }
        Operation::ListEngagementInvitations { params, all: true } => {
            write_json(out, &collect_engagement_invitations(api, params).await?)?;
        }
    }
    Ok(())
}
