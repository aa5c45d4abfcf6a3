// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Full opportunity record (`GetOpportunity` response)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opportunity as returned by `GetOpportunity`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Opportunity {
    /// Catalog the opportunity belongs to (`AWS` or `Sandbox`)
    pub catalog: String,
    /// Opportunity identifier, e.g. `O1111111`
    pub id: String,
    /// Amazon Resource Name of the opportunity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Partner's own CRM identifier for the opportunity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_opportunity_identifier: Option<String>,
    /// Kinds of help requested from AWS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_needs_from_aws: Option<Vec<String>>,
    /// Whether the opportunity involves national security work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_security: Option<String>,
    /// `Net New Business`, `Flat Renewal` or `Expansion`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing: Option<Marketing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_revenue: Option<SoftwareRevenue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle: Option<LifeCycle>,
    /// Partner contacts working the opportunity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_team: Option<Vec<Contact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_entity_identifiers: Option<RelatedEntityIdentifiers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

/// End customer of an opportunity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
}

/// Customer account details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Account {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Free-form industry when `Industry` is `Other`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Dun & Bradstreet number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duns: Option<String>,
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_or_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO 3166 alpha-2 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// A person attached to a customer or partner team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Project details of an opportunity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_models: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_customer_spend: Option<Vec<ExpectedCustomerSpend>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_contract_duration: Option<ExpectedContractDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apn_programs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_business_problem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_use_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_opportunity_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_activities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_competitor_names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_solution_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
    /// AWS partition the project runs in, e.g. `aws-eusc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_partition: Option<String>,
}

/// How long the customer expects the contract to run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExpectedContractDuration {
    /// Unit of `Value`, currently always `Months`
    pub term: String,
    pub value: String,
}

/// Estimated customer spend on AWS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExpectedCustomerSpend {
    /// Decimal amount as sent by the service, e.g. `"2500.00"`
    pub amount: String,
    pub currency_code: String,
    /// Billing frequency, currently always `Monthly`
    pub frequency: String,
    /// Who receives the spend, e.g. `AWS`
    pub target_company: String,
    /// Link to the pricing calculator estimate behind the amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimation_url: Option<String>,
}

/// Marketing attribution of an opportunity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Marketing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_funding_used: Option<String>,
}

/// Partner software revenue attached to an opportunity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SoftwareRevenue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<MonetaryValue>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonetaryValue {
    pub amount: String,
    pub currency_code: String,
}

/// Sales stage and review state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LifeCycle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_lost_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_close_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_steps_history: Option<Vec<NextStepsHistory>>,
}

/// One entry of the next-steps log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NextStepsHistory {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

/// Entities associated with an opportunity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RelatedEntityIdentifiers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_marketplace_offers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_marketplace_offer_sets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_products: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_marketplace_solutions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_marketplace_products: Option<Vec<String>>,
}
