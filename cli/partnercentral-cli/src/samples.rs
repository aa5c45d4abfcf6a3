// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! The fixed requests made by the sample binaries

use partnercentral_api::{
    Catalog, GetAwsOpportunitySummaryParams, GetEngagementInvitationParams, GetOpportunityParams,
    ListEngagementInvitationsParams, ListOpportunitiesParams, PageSize,
};
use partnercentral_client::{DEFAULT_ENDPOINT, DEFAULT_REGION, Overrides};

use crate::invoker::Operation;

/// Opportunity fetched by `get-opportunity`
pub const SAMPLE_OPPORTUNITY_ID: &str = "O1111111";

/// Catalog every sample but `get-engagement-invitation` queries
pub const SAMPLE_CATALOG: Catalog = Catalog::Aws;

/// `MaxResults` sent by `list-opportunities` and `list-engagement-invitations`
pub const SAMPLE_MAX_RESULTS: i32 = 20;

/// Partner opportunity summarized by `get-aws-opportunity-summary`
pub const SAMPLE_RELATED_OPPORTUNITY_ID: &str = "O4235295";

/// Invitation fetched by `get-engagement-invitation`
pub const SAMPLE_INVITATION_ARN: &str =
    "arn:aws:partnercentral-selling:us-east-1:aws:catalog/Sandbox/engagement-invitation/engi-0000000IS0Qga";

/// The catalog named by [`SAMPLE_INVITATION_ARN`]
pub const SAMPLE_INVITATION_CATALOG: Catalog = Catalog::Sandbox;

/// `GetOpportunity` for [`SAMPLE_OPPORTUNITY_ID`] in `us-east-1`
pub fn get_opportunity() -> (Overrides, Operation) {
    let overrides = Overrides::default().region(DEFAULT_REGION);
    let params = GetOpportunityParams::new(SAMPLE_CATALOG, SAMPLE_OPPORTUNITY_ID);
    (overrides, Operation::GetOpportunity(params))
}

/// One page of `ListOpportunities` against the public endpoint.
///
/// An endpoint already named by the environment (`AWS_ENDPOINT_URL`) takes
/// precedence over the public one.
pub fn list_opportunities() -> (Overrides, Operation) {
    let overrides = Overrides::default()
        .region(DEFAULT_REGION)
        .default_endpoint_url(DEFAULT_ENDPOINT);
    let params = ListOpportunitiesParams {
        catalog: SAMPLE_CATALOG,
        max_results: PageSize::new(SAMPLE_MAX_RESULTS).ok(),
        next_token: None,
    };
    (
        overrides,
        Operation::ListOpportunities { params, all: false },
    )
}

/// `GetAwsOpportunitySummary` for [`SAMPLE_RELATED_OPPORTUNITY_ID`]
pub fn get_aws_opportunity_summary() -> (Overrides, Operation) {
    let overrides = Overrides::default().region(DEFAULT_REGION);
    let params =
        GetAwsOpportunitySummaryParams::new(SAMPLE_CATALOG, SAMPLE_RELATED_OPPORTUNITY_ID);
    (overrides, Operation::GetAwsOpportunitySummary(params))
}

/// `GetEngagementInvitation` for [`SAMPLE_INVITATION_ARN`]
pub fn get_engagement_invitation() -> (Overrides, Operation) {
    let overrides = Overrides::default().region(DEFAULT_REGION);
    let params =
        GetEngagementInvitationParams::new(SAMPLE_INVITATION_CATALOG, SAMPLE_INVITATION_ARN);
    (overrides, Operation::GetEngagementInvitation(params))
}

/// One page of `ListEngagementInvitations`, either side of the invitation
pub fn list_engagement_invitations() -> (Overrides, Operation) {
    let overrides = Overrides::default().region(DEFAULT_REGION);
    let params = ListEngagementInvitationsParams {
        catalog: SAMPLE_CATALOG,
        max_results: PageSize::new(SAMPLE_MAX_RESULTS).ok(),
        next_token: None,
        participant_type: None,
    };
    (
        overrides,
        Operation::ListEngagementInvitations { params, all: false },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_opportunity_literals() {
        let (overrides, operation) = get_opportunity();

        assert_eq!(overrides.region.as_deref(), Some("us-east-1"));
        assert_eq!(overrides.endpoint_url, None);
        assert_eq!(overrides.default_endpoint_url, None);
        assert_eq!(
            operation,
            Operation::GetOpportunity(GetOpportunityParams::new(Catalog::Aws, "O1111111"))
        );
    }

    #[test]
    fn test_list_opportunities_literals() {
        let (overrides, operation) = list_opportunities();

        assert_eq!(overrides.region.as_deref(), Some("us-east-1"));
        assert_eq!(
            overrides.default_endpoint_url.as_deref(),
            Some("https://partnercentral-selling.us-east-1.api.aws")
        );
        match operation {
            Operation::ListOpportunities { params, all } => {
                assert!(!all);
                assert_eq!(params.catalog.as_str(), "AWS");
                assert_eq!(params.max_results.map(PageSize::get), Some(20));
                assert_eq!(params.next_token, None);
            }
            other => panic!("unexpected operation {:?}", other),
        }
    }

    #[test]
    fn test_engagement_sample_literals() {
        let (overrides, operation) = get_aws_opportunity_summary();
        assert_eq!(overrides.region.as_deref(), Some("us-east-1"));
        assert_eq!(
            operation,
            Operation::GetAwsOpportunitySummary(GetAwsOpportunitySummaryParams::new(
                Catalog::Aws,
                "O4235295"
            ))
        );

        let (_, operation) = get_engagement_invitation();
        match operation {
            Operation::GetEngagementInvitation(params) => {
                assert_eq!(params.catalog, Catalog::Sandbox);
                assert!(params.identifier.ends_with("/engagement-invitation/engi-0000000IS0Qga"));
                assert!(params.identifier.contains(":catalog/Sandbox/"));
            }
            other => panic!("unexpected operation {:?}", other),
        }

        let (overrides, operation) = list_engagement_invitations();
        assert_eq!(overrides.default_endpoint_url, None);
        match operation {
            Operation::ListEngagementInvitations { params, all } => {
                assert!(!all);
                assert_eq!(params.catalog, Catalog::Aws);
                assert_eq!(params.max_results.map(PageSize::get), Some(20));
                assert_eq!(params.participant_type, None);
            }
            other => panic!("unexpected operation {:?}", other),
        }
    }
}
