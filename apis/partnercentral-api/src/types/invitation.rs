// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Engagement invitations (`GetEngagementInvitation` and
//! `ListEngagementInvitations` responses)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opportunity::ExpectedCustomerSpend;

/// An invitation to collaborate on an engagement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EngagementInvitation {
    pub catalog: String,
    /// Invitation identifier, e.g. `engi-0000000IS0Qga`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// `OpportunityInvitation` or `LeadInvitation`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_title: Option<String>,
    /// `ACCEPTED`, `PENDING`, `REJECTED` or `EXPIRED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_aws_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Receiver>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_description: Option<String>,
    /// Companies already taking part in the engagement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_members: Option<Vec<EngagementMemberSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment_context: Option<EnrichmentContext>,
}

/// One page of `ListEngagementInvitations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EngagementInvitationPage {
    pub engagement_invitation_summaries: Vec<EngagementInvitationSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Abbreviated invitation as returned in list pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EngagementInvitationSummary {
    pub catalog: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_aws_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Receiver>,
    /// `SENDER` or `RECEIVER`, from the caller's point of view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_type: Option<String>,
}

/// Who an invitation was sent to
///
/// Serialized as a single-key object, e.g. `{"Account": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Receiver {
    Account(AccountReceiver),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccountReceiver {
    pub aws_account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// What the invitation offers, keyed by payload type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    OpportunityInvitation(OpportunityInvitationPayload),
    LeadInvitation(LeadInvitationPayload),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OpportunityInvitationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_contacts: Option<Vec<SenderContact>>,
    /// Roles the receiver is asked to take, e.g. `Co-Sell Facilitator`
    pub receiver_responsibilities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<EngagementCustomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SenderContact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EngagementCustomer {
    pub industry: String,
    pub company_name: String,
    pub website_url: String,
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProjectDetails {
    pub business_problem: String,
    pub title: String,
    /// `YYYY-MM-DD`
    pub target_completion_date: String,
    pub expected_customer_spend: Vec<ExpectedCustomerSpend>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LeadInvitationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<LeadInvitationCustomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<LeadInvitationInteraction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LeadInvitationCustomer {
    pub company_name: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_maturity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_segment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LeadInvitationInteraction {
    pub source_type: String,
    pub source_id: String,
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usecase: Option<String>,
    pub contact_business_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EngagementMemberSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

/// Prospecting data AWS attached to the invitation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnrichmentContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prospecting_result_aws: Option<InvitationProspectingResultAws>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_insights: Option<LeadInsights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InvitationProspectingResultAws {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<ProspectingResultCustomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<ProspectingInsights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProspectingResultCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_programs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_profile_summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProspectingInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_engagement_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_sub_category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LeadInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_readiness_score: Option<String>,
}
