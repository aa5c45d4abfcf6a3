// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Follow `NextToken` across list pages
//!
//! The service returns at most `MaxResults` records per call together with a
//! continuation token. These helpers keep calling until the token runs out
//! and hand back a single page holding every record, with no token.

use crate::{
    EngagementInvitationPage, ListEngagementInvitationsParams, ListOpportunitiesParams,
    ListSolutionsParams, OpportunityPage, PartnerCentralApi, RemoteCallError, SolutionPage,
};

/// Error code reported when the service hands back the token it was just sent
pub const REPEATED_TOKEN_CODE: &str = "RepeatedNextToken";

/// Collect every opportunity summary reachable from `params`.
pub async fn collect_opportunities<A>(
    api: &A,
    params: &ListOpportunitiesParams,
) -> Result<OpportunityPage, RemoteCallError>
where
    A: PartnerCentralApi + ?Sized,
{
    let mut params = params.clone();
    let mut collected = OpportunityPage::default();
    let mut pages = 0usize;

    loop {
        let page = api.list_opportunities(&params).await?;
        pages += 1;
        collected
            .opportunity_summaries
            .extend(page.opportunity_summaries);

        match advance("ListOpportunities", params.next_token.as_deref(), page.next_token)? {
            Some(token) => params.next_token = Some(token),
            None => break,
        }
    }

    tracing::debug!(
        pages,
        records = collected.opportunity_summaries.len(),
        "collected opportunity pages"
    );
    Ok(collected)
}

/// Collect every solution reachable from `params`.
pub async fn collect_solutions<A>(
    api: &A,
    params: &ListSolutionsParams,
) -> Result<SolutionPage, RemoteCallError>
where
    A: PartnerCentralApi + ?Sized,
{
    let mut params = params.clone();
    let mut collected = SolutionPage::default();

    loop {
        let page = api.list_solutions(&params).await?;
        collected.solution_summaries.extend(page.solution_summaries);

        match advance("ListSolutions", params.next_token.as_deref(), page.next_token)? {
            Some(token) => params.next_token = Some(token),
            None => break,
        }
    }

    Ok(collected)
}

/// Collect every engagement invitation summary reachable from `params`.
pub async fn collect_engagement_invitations<A>(
    api: &A,
    params: &ListEngagementInvitationsParams,
) -> Result<EngagementInvitationPage, RemoteCallError>
where
    A: PartnerCentralApi + ?Sized,
{
    let mut params = params.clone();
    let mut collected = EngagementInvitationPage::default();

    loop {
        let page = api.list_engagement_invitations(&params).await?;
        collected
            .engagement_invitation_summaries
            .extend(page.engagement_invitation_summaries);

        match advance(
            "ListEngagementInvitations",
            params.next_token.as_deref(),
            page.next_token,
        )? {
            Some(token) => params.next_token = Some(token),
            None => break,
        }
    }

    Ok(collected)
}

/// Token for the next call, or `None` once the listing is exhausted.
///
/// A returned token equal to the one just sent would never terminate, so it
/// is reported as an error.
fn advance(
    operation: &'static str,
    sent: Option<&str>,
    returned: Option<String>,
) -> Result<Option<String>, RemoteCallError> {
    match returned {
        Some(token) if token.is_empty() => Ok(None),
        Some(token) if sent == Some(token.as_str()) => {
            Err(RemoteCallError::new(
                operation,
                format!("service returned the same NextToken '{token}' twice"),
            )
            .with_code(REPEATED_TOKEN_CODE))
        }
        Some(token) => Ok(Some(token)),
        None => Ok(None),
    }
}
