// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! SDK output types to the serializable record model
//!
//! Every member the SDK exposes is carried over. Enumerations become their
//! wire strings so unknown values added by the service survive unchanged.

use aws_sdk_partnercentralselling::operation::get_aws_opportunity_summary::GetAwsOpportunitySummaryOutput;
use aws_sdk_partnercentralselling::operation::get_engagement_invitation::GetEngagementInvitationOutput;
use aws_sdk_partnercentralselling::operation::get_opportunity::GetOpportunityOutput;
use aws_sdk_partnercentralselling::operation::list_engagement_invitations::ListEngagementInvitationsOutput;
use aws_sdk_partnercentralselling::operation::list_opportunities::ListOpportunitiesOutput;
use aws_sdk_partnercentralselling::operation::list_solutions::ListSolutionsOutput;
use aws_sdk_partnercentralselling::primitives::DateTime;
use aws_sdk_partnercentralselling::types as sdk;
use chrono::Utc;
use partnercentral_api::{
    Account, AccountReceiver, AccountSummary, Address, AddressSummary, AwsOpportunityCustomer,
    AwsOpportunityInsights, AwsOpportunityLifeCycle, AwsOpportunityProject,
    AwsOpportunityRelatedEntities, AwsOpportunitySummary, AwsProductDetails, AwsProductInsights,
    AwsProductOptimization, AwsProductsSpendInsightsBySource, AwsSoftwareRevenue, AwsTeamMember,
    Contact, Customer, CustomerSummary, EngagementCustomer, EngagementInvitation,
    EngagementInvitationPage, EngagementInvitationSummary, EngagementMemberSummary,
    EnrichmentContext, ExpectedContractDuration, ExpectedCustomerSpend,
    InvitationProspectingResultAws, LeadInsights, LeadInvitationCustomer,
    LeadInvitationInteraction, LeadInvitationPayload, LifeCycle, LifeCycleSummary, Marketing,
    MonetaryValue, NextStepsHistory, Opportunity, OpportunityInvitationPayload, OpportunityPage,
    OpportunityQuality, OpportunitySummary, Payload, Project, ProjectDetails, ProjectSummary,
    ProspectingInsights, ProspectingResultCustomer, Receiver, Recommendation,
    RelatedEntityIdentifiers, SenderContact, SoftwareRevenue, Solution, SolutionPage,
};

pub(crate) fn opportunity(output: GetOpportunityOutput) -> Opportunity {
    Opportunity {
        created_date: timestamp(&output.created_date),
        last_modified_date: timestamp(&output.last_modified_date),
        catalog: output.catalog,
        id: output.id,
        arn: output.arn,
        partner_opportunity_identifier: output.partner_opportunity_identifier,
        primary_needs_from_aws: output.primary_needs_from_aws.map(names),
        national_security: output.national_security.map(|v| v.as_str().to_owned()),
        opportunity_type: output.opportunity_type.map(|v| v.as_str().to_owned()),
        customer: output.customer.map(customer),
        project: output.project.map(project),
        marketing: output.marketing.map(marketing),
        software_revenue: output.software_revenue.map(software_revenue),
        life_cycle: output.life_cycle.map(life_cycle),
        opportunity_team: output.opportunity_team.map(contacts),
        related_entity_identifiers: output
            .related_entity_identifiers
            .map(related_entity_identifiers),
    }
}

pub(crate) fn opportunity_page(output: ListOpportunitiesOutput) -> OpportunityPage {
    OpportunityPage {
        opportunity_summaries: output
            .opportunity_summaries
            .into_iter()
            .map(opportunity_summary)
            .collect(),
        next_token: output.next_token,
    }
}

pub(crate) fn solution_page(output: ListSolutionsOutput) -> SolutionPage {
    SolutionPage {
        solution_summaries: output
            .solution_summaries
            .into_iter()
            .map(solution)
            .collect(),
        next_token: output.next_token,
    }
}

// ============================================================================
// Opportunity members
// ============================================================================

fn customer(value: sdk::Customer) -> Customer {
    Customer {
        account: value.account.map(account),
        contacts: value.contacts.map(contacts),
    }
}

fn account(value: sdk::Account) -> Account {
    Account {
        company_name: value.company_name,
        industry: value.industry.map(|v| v.as_str().to_owned()),
        other_industry: value.other_industry,
        website_url: value.website_url,
        aws_account_id: value.aws_account_id,
        address: value.address.map(address),
        duns: value.duns,
    }
}

fn address(value: sdk::Address) -> Address {
    Address {
        street_address: value.street_address,
        city: value.city,
        state_or_region: value.state_or_region,
        postal_code: value.postal_code,
        country_code: value.country_code.map(|v| v.as_str().to_owned()),
    }
}

fn contacts(values: Vec<sdk::Contact>) -> Vec<Contact> {
    values.into_iter().map(contact).collect()
}

fn contact(value: sdk::Contact) -> Contact {
    Contact {
        first_name: value.first_name,
        last_name: value.last_name,
        email: value.email,
        business_title: value.business_title,
        phone: value.phone,
    }
}

fn project(value: sdk::Project) -> Project {
    Project {
        title: value.title,
        delivery_models: value.delivery_models.map(names),
        expected_customer_spend: value.expected_customer_spend.map(expected_customer_spend),
        expected_contract_duration: value
            .expected_contract_duration
            .map(expected_contract_duration),
        apn_programs: value.apn_programs,
        customer_business_problem: value.customer_business_problem,
        customer_use_case: value.customer_use_case,
        related_opportunity_identifier: value.related_opportunity_identifier,
        sales_activities: value.sales_activities.map(names),
        competitor_name: value.competitor_name.map(|v| v.as_str().to_owned()),
        other_competitor_names: value.other_competitor_names,
        other_solution_description: value.other_solution_description,
        additional_comments: value.additional_comments,
        aws_partition: value.aws_partition.map(|v| v.as_str().to_owned()),
    }
}

fn expected_customer_spend(values: Vec<sdk::ExpectedCustomerSpend>) -> Vec<ExpectedCustomerSpend> {
    values
        .into_iter()
        .map(|spend| ExpectedCustomerSpend {
            amount: spend.amount,
            currency_code: spend.currency_code.as_str().to_owned(),
            frequency: spend.frequency.as_str().to_owned(),
            target_company: spend.target_company,
            estimation_url: spend.estimation_url,
        })
        .collect()
}

fn expected_contract_duration(value: sdk::ExpectedContractDuration) -> ExpectedContractDuration {
    ExpectedContractDuration {
        term: value.term.as_str().to_owned(),
        value: value.value,
    }
}

fn monetary_value(value: sdk::MonetaryValue) -> MonetaryValue {
    MonetaryValue {
        amount: value.amount,
        currency_code: value.currency_code.as_str().to_owned(),
    }
}

fn marketing(value: sdk::Marketing) -> Marketing {
    Marketing {
        campaign_name: value.campaign_name,
        source: value.source.map(|v| v.as_str().to_owned()),
        use_cases: value.use_cases,
        channels: value.channels.map(names),
        aws_funding_used: value.aws_funding_used.map(|v| v.as_str().to_owned()),
    }
}

fn software_revenue(value: sdk::SoftwareRevenue) -> SoftwareRevenue {
    SoftwareRevenue {
        delivery_model: value.delivery_model.map(|v| v.as_str().to_owned()),
        value: value.value.map(monetary_value),
        effective_date: value.effective_date,
        expiration_date: value.expiration_date,
    }
}

fn life_cycle(value: sdk::LifeCycle) -> LifeCycle {
    LifeCycle {
        stage: value.stage.map(|v| v.as_str().to_owned()),
        closed_lost_reason: value.closed_lost_reason.map(|v| v.as_str().to_owned()),
        next_steps: value.next_steps,
        target_close_date: value.target_close_date,
        review_status: value.review_status.map(|v| v.as_str().to_owned()),
        review_comments: value.review_comments,
        review_status_reason: value.review_status_reason,
        next_steps_history: value.next_steps_history.map(|history| {
            history
                .into_iter()
                .map(|entry| NextStepsHistory {
                    time: timestamp(&entry.time),
                    value: entry.value,
                })
                .collect()
        }),
    }
}

fn related_entity_identifiers(value: sdk::RelatedEntityIdentifiers) -> RelatedEntityIdentifiers {
    RelatedEntityIdentifiers {
        aws_marketplace_offers: value.aws_marketplace_offers,
        aws_marketplace_offer_sets: value.aws_marketplace_offer_sets,
        solutions: value.solutions,
        aws_products: value.aws_products,
        aws_marketplace_solutions: value.aws_marketplace_solutions,
        aws_marketplace_products: value.aws_marketplace_products,
    }
}

// ============================================================================
// Summaries
// ============================================================================

fn opportunity_summary(value: sdk::OpportunitySummary) -> OpportunitySummary {
    OpportunitySummary {
        created_date: value.created_date.as_ref().and_then(timestamp),
        last_modified_date: value.last_modified_date.as_ref().and_then(timestamp),
        catalog: value.catalog,
        id: value.id,
        arn: value.arn,
        partner_opportunity_identifier: value.partner_opportunity_identifier,
        opportunity_type: value.opportunity_type.map(|v| v.as_str().to_owned()),
        life_cycle: value.life_cycle.map(|lc| LifeCycleSummary {
            stage: lc.stage.map(|v| v.as_str().to_owned()),
            closed_lost_reason: lc.closed_lost_reason.map(|v| v.as_str().to_owned()),
            next_steps: lc.next_steps,
            target_close_date: lc.target_close_date,
            review_status: lc.review_status.map(|v| v.as_str().to_owned()),
            review_comments: lc.review_comments,
            review_status_reason: lc.review_status_reason,
        }),
        customer: value.customer.map(customer_summary),
        project: value.project.map(|p| ProjectSummary {
            delivery_models: p.delivery_models.map(names),
            expected_customer_spend: p.expected_customer_spend.map(expected_customer_spend),
            expected_contract_duration: p
                .expected_contract_duration
                .map(expected_contract_duration),
        }),
    }
}

fn customer_summary(value: sdk::CustomerSummary) -> CustomerSummary {
    CustomerSummary {
        account: value.account.map(|a| AccountSummary {
            company_name: a.company_name,
            industry: a.industry.map(|v| v.as_str().to_owned()),
            other_industry: a.other_industry,
            website_url: a.website_url,
            address: a.address.map(|addr| AddressSummary {
                city: addr.city,
                state_or_region: addr.state_or_region,
                postal_code: addr.postal_code,
                country_code: addr.country_code.map(|v| v.as_str().to_owned()),
            }),
        }),
    }
}

fn solution(value: sdk::SolutionBase) -> Solution {
    Solution {
        created_date: timestamp(&value.created_date),
        catalog: value.catalog,
        id: value.id,
        arn: value.arn,
        name: value.name,
        status: value.status.as_str().to_owned(),
        category: value.category,
        aws_marketplace_solution_arn: value.aws_marketplace_solution_arn,
    }
}

// ============================================================================
// AWS opportunity summary
// ============================================================================

pub(crate) fn aws_opportunity_summary(
    output: GetAwsOpportunitySummaryOutput,
) -> AwsOpportunitySummary {
    AwsOpportunitySummary {
        catalog: output.catalog,
        related_opportunity_id: output.related_opportunity_id,
        origin: output.origin.map(|v| v.as_str().to_owned()),
        involvement_type: output.involvement_type.map(|v| v.as_str().to_owned()),
        involvement_type_change_reason: output
            .involvement_type_change_reason
            .map(|v| v.as_str().to_owned()),
        visibility: output.visibility.map(|v| v.as_str().to_owned()),
        life_cycle: output.life_cycle.map(|lc| AwsOpportunityLifeCycle {
            stage: lc.stage.map(|v| v.as_str().to_owned()),
            closed_lost_reason: lc.closed_lost_reason.map(|v| v.as_str().to_owned()),
            next_steps: lc.next_steps,
            target_close_date: lc.target_close_date,
            next_steps_history: lc.next_steps_history.map(|history| {
                history
                    .into_iter()
                    .map(|entry| NextStepsHistory {
                        time: timestamp(&entry.time),
                        value: entry.value,
                    })
                    .collect()
            }),
        }),
        opportunity_team: output.opportunity_team.map(|team| {
            team.into_iter()
                .map(|member| AwsTeamMember {
                    first_name: member.first_name,
                    last_name: member.last_name,
                    email: member.email,
                    business_title: member.business_title.map(|v| v.as_str().to_owned()),
                })
                .collect()
        }),
        insights: output.insights.map(insights),
        related_entity_ids: output
            .related_entity_ids
            .map(|r| AwsOpportunityRelatedEntities {
                aws_products: r.aws_products,
                solutions: r.solutions,
                aws_marketplace_solutions: r.aws_marketplace_solutions,
                aws_marketplace_products: r.aws_marketplace_products,
            }),
        customer: output.customer.map(|c| AwsOpportunityCustomer {
            contacts: c.contacts.map(contacts),
        }),
        project: output.project.map(|p| AwsOpportunityProject {
            expected_customer_spend: p.expected_customer_spend.map(expected_customer_spend),
            aws_partition: p.aws_partition.map(|v| v.as_str().to_owned()),
        }),
        cosell_motion: output.cosell_motion,
        software_revenue: output.software_revenue.map(|r| AwsSoftwareRevenue {
            value: r.value.map(monetary_value),
            discount: r.discount,
            effective_date: r.effective_date,
            expiration_date: r.expiration_date,
        }),
    }
}

fn insights(value: sdk::AwsOpportunityInsights) -> AwsOpportunityInsights {
    AwsOpportunityInsights {
        next_best_actions: value.next_best_actions,
        engagement_score: value.engagement_score.map(|v| v.as_str().to_owned()),
        aws_products_spend_insights_by_source: value.aws_products_spend_insights_by_source.map(
            |by_source| AwsProductsSpendInsightsBySource {
                partner: by_source.partner.map(product_insights),
                aws: by_source.aws.map(product_insights),
            },
        ),
        opportunity_quality: value.opportunity_quality.map(|q| OpportunityQuality {
            score: q.score,
            trend: q.trend,
        }),
        recommendations: value.recommendations.map(|recommendations| {
            recommendations
                .into_iter()
                .map(|r| Recommendation {
                    details: r.details,
                    attributes: r.attributes.map(|a| a.into_iter().collect()),
                })
                .collect()
        }),
    }
}

fn product_insights(value: sdk::AwsProductInsights) -> AwsProductInsights {
    AwsProductInsights {
        currency_code: value.currency_code.as_str().to_owned(),
        frequency: value.frequency.as_str().to_owned(),
        total_amount: value.total_amount,
        total_optimized_amount: value.total_optimized_amount,
        total_potential_savings_amount: value.total_potential_savings_amount,
        total_amount_by_category: value.total_amount_by_category.into_iter().collect(),
        aws_products: value
            .aws_products
            .into_iter()
            .map(|product| AwsProductDetails {
                product_code: product.product_code,
                service_code: product.service_code,
                categories: product.categories,
                amount: product.amount,
                optimized_amount: product.optimized_amount,
                potential_savings_amount: product.potential_savings_amount,
                optimizations: product
                    .optimizations
                    .into_iter()
                    .map(|o| AwsProductOptimization {
                        description: o.description,
                        savings_amount: o.savings_amount,
                    })
                    .collect(),
            })
            .collect(),
    }
}

// ============================================================================
// Engagement invitations
// ============================================================================

pub(crate) fn engagement_invitation(output: GetEngagementInvitationOutput) -> EngagementInvitation {
    EngagementInvitation {
        invitation_date: output.invitation_date.as_ref().and_then(timestamp),
        expiration_date: output.expiration_date.as_ref().and_then(timestamp),
        catalog: output.catalog,
        id: output.id,
        arn: output.arn,
        payload_type: output.payload_type.map(|v| v.as_str().to_owned()),
        engagement_id: output.engagement_id,
        engagement_title: output.engagement_title,
        status: output.status.map(|v| v.as_str().to_owned()),
        sender_aws_account_id: output.sender_aws_account_id,
        sender_company_name: output.sender_company_name,
        receiver: output.receiver.and_then(receiver),
        rejection_reason: output.rejection_reason,
        payload: output.payload.and_then(payload),
        invitation_message: output.invitation_message,
        engagement_description: output.engagement_description,
        existing_members: output.existing_members.map(|members| {
            members
                .into_iter()
                .map(|m| EngagementMemberSummary {
                    company_name: m.company_name,
                    website_url: m.website_url,
                })
                .collect()
        }),
        enrichment_context: output.enrichment_context.map(enrichment_context),
    }
}

pub(crate) fn engagement_invitation_page(
    output: ListEngagementInvitationsOutput,
) -> EngagementInvitationPage {
    EngagementInvitationPage {
        engagement_invitation_summaries: output
            .engagement_invitation_summaries
            .unwrap_or_default()
            .into_iter()
            .map(engagement_invitation_summary)
            .collect(),
        next_token: output.next_token,
    }
}

fn engagement_invitation_summary(
    value: sdk::EngagementInvitationSummary,
) -> EngagementInvitationSummary {
    EngagementInvitationSummary {
        invitation_date: value.invitation_date.as_ref().and_then(timestamp),
        expiration_date: value.expiration_date.as_ref().and_then(timestamp),
        catalog: value.catalog,
        id: value.id,
        arn: value.arn,
        payload_type: value.payload_type.map(|v| v.as_str().to_owned()),
        engagement_id: value.engagement_id,
        engagement_title: value.engagement_title,
        status: value.status.map(|v| v.as_str().to_owned()),
        sender_aws_account_id: value.sender_aws_account_id,
        sender_company_name: value.sender_company_name,
        receiver: value.receiver.and_then(receiver),
        participant_type: value.participant_type.map(|v| v.as_str().to_owned()),
    }
}

/// Variants added to the service after this SDK release have no model
/// counterpart and are dropped.
fn receiver(value: sdk::Receiver) -> Option<Receiver> {
    match value {
        sdk::Receiver::Account(account) => Some(Receiver::Account(AccountReceiver {
            aws_account_id: account.aws_account_id,
            alias: account.alias,
        })),
        _ => None,
    }
}

fn payload(value: sdk::Payload) -> Option<Payload> {
    match value {
        sdk::Payload::OpportunityInvitation(p) => {
            Some(Payload::OpportunityInvitation(OpportunityInvitationPayload {
                sender_contacts: p.sender_contacts.map(|contacts| {
                    contacts
                        .into_iter()
                        .map(|c| SenderContact {
                            email: c.email,
                            first_name: c.first_name,
                            last_name: c.last_name,
                            business_title: c.business_title,
                            phone: c.phone,
                        })
                        .collect()
                }),
                receiver_responsibilities: names(p.receiver_responsibilities),
                customer: p.customer.map(|c| EngagementCustomer {
                    industry: c.industry.as_str().to_owned(),
                    company_name: c.company_name,
                    website_url: c.website_url,
                    country_code: c.country_code.as_str().to_owned(),
                }),
                project: p.project.map(|d| ProjectDetails {
                    business_problem: d.business_problem,
                    title: d.title,
                    target_completion_date: d.target_completion_date,
                    expected_customer_spend: expected_customer_spend(d.expected_customer_spend),
                }),
            }))
        }
        sdk::Payload::LeadInvitation(p) => Some(Payload::LeadInvitation(LeadInvitationPayload {
            customer: p.customer.map(|c| LeadInvitationCustomer {
                company_name: c.company_name,
                country_code: c.country_code,
                industry: c.industry,
                website_url: c.website_url,
                aws_maturity: c.aws_maturity,
                market_segment: c.market_segment,
            }),
            interaction: p.interaction.map(|i| LeadInvitationInteraction {
                source_type: i.source_type,
                source_id: i.source_id,
                source_name: i.source_name,
                usecase: i.usecase,
                contact_business_title: i.contact_business_title,
            }),
        })),
        _ => None,
    }
}

fn enrichment_context(value: sdk::EnrichmentContext) -> EnrichmentContext {
    EnrichmentContext {
        prospecting_result_aws: value
            .prospecting_result_aws
            .map(|r| InvitationProspectingResultAws {
                customer: r.customer.map(|c| ProspectingResultCustomer {
                    account_name: c.account_name,
                    geo: c.geo,
                    region: c.region,
                    sub_region: c.sub_region,
                    country: c.country.map(|v| v.as_str().to_owned()),
                    industry: c.industry.map(|v| v.as_str().to_owned()),
                    sub_industry: c.sub_industry,
                    segment: c.segment,
                    company_size: c.company_size,
                    eligible_programs: c.eligible_programs,
                    public_profile_summary: c.public_profile_summary,
                }),
                insights: r.insights.map(|i| ProspectingInsights {
                    marketplace_engagement_score: i.marketplace_engagement_score,
                    solution_score: i.solution_score,
                    solution_category: i.solution_category,
                    solution_sub_category: i.solution_sub_category,
                }),
            }),
        lead_insights: value.lead_insights.map(|l| LeadInsights {
            lead_readiness_score: l.lead_readiness_score,
        }),
    }
}

// ============================================================================
// Scalars
// ============================================================================

fn names<T: AsRef<str>>(values: Vec<T>) -> Vec<String> {
    values.iter().map(|v| v.as_ref().to_owned()).collect()
}

fn timestamp(value: &DateTime) -> Option<chrono::DateTime<Utc>> {
    chrono::DateTime::from_timestamp(value.secs(), value.subsec_nanos())
}
