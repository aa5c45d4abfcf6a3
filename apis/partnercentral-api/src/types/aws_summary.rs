// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! AWS's view of a partner opportunity (`GetAwsOpportunitySummary` response)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::opportunity::{Contact, ExpectedCustomerSpend, MonetaryValue, NextStepsHistory};

/// AWS-side summary of an opportunity the partner shared
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsOpportunitySummary {
    pub catalog: String,
    /// The partner opportunity this summary belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_opportunity_id: Option<String>,
    /// `AWS Referral` or `Partner Referral`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// `For Visibility Only` or `Co-Sell`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub involvement_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub involvement_type_change_reason: Option<String>,
    /// `Full` or `Limited`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_cycle: Option<AwsOpportunityLifeCycle>,
    /// AWS sales people assigned to the opportunity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_team: Option<Vec<AwsTeamMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<AwsOpportunityInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_entity_ids: Option<AwsOpportunityRelatedEntities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<AwsOpportunityCustomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<AwsOpportunityProject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cosell_motion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_revenue: Option<AwsSoftwareRevenue>,
}

/// Sales stage as AWS tracks it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsOpportunityLifeCycle {
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
    pub next_steps_history: Option<Vec<NextStepsHistory>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsTeamMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role on the AWS side, e.g. `AWSAccountOwner`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_title: Option<String>,
}

/// Scores and recommendations AWS derived for the opportunity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsOpportunityInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_best_actions: Option<String>,
    /// `High`, `Medium` or `Low`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_products_spend_insights_by_source: Option<AwsProductsSpendInsightsBySource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_quality: Option<OpportunityQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
}

/// Product spend estimates, split by who produced them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsProductsSpendInsightsBySource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<AwsProductInsights>,
    #[serde(rename = "AWS", skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsProductInsights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsProductInsights {
    pub currency_code: String,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_optimized_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_potential_savings_amount: Option<String>,
    pub total_amount_by_category: BTreeMap<String, String>,
    pub aws_products: Vec<AwsProductDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsProductDetails {
    pub product_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_savings_amount: Option<String>,
    pub optimizations: Vec<AwsProductOptimization>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsProductOptimization {
    pub description: String,
    pub savings_amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OpportunityQuality {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Recommendation {
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsOpportunityRelatedEntities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_products: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_marketplace_solutions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_marketplace_products: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsOpportunityCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsOpportunityProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_customer_spend: Option<Vec<ExpectedCustomerSpend>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_partition: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AwsSoftwareRevenue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<MonetaryValue>,
    /// Discount as a decimal string, e.g. `"10"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aws_source_keeps_upper_case_key() {
        let summary = AwsOpportunitySummary {
            catalog: "AWS".to_string(),
            insights: Some(AwsOpportunityInsights {
                aws_products_spend_insights_by_source: Some(AwsProductsSpendInsightsBySource {
                    aws: Some(AwsProductInsights {
                        currency_code: "USD".to_string(),
                        frequency: "Monthly".to_string(),
                        ..Default::default()
                    }),
                    partner: None,
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&summary).expect("serialize");
        let by_source = &value["Insights"]["AwsProductsSpendInsightsBySource"];
        assert_eq!(by_source["AWS"]["CurrencyCode"], "USD");
        assert!(by_source.get("Aws").is_none());
        assert!(by_source.get("Partner").is_none());
    }

    #[test]
    fn test_parse_wire_response() {
        let summary: AwsOpportunitySummary = serde_json::from_str(
            r#"{
                "Catalog": "Sandbox",
                "RelatedOpportunityId": "O4235295",
                "Visibility": "Full",
                "Insights": {"OpportunityQuality": {"Score": 72, "Trend": "Up"}},
                "RelatedEntityIds": {"AwsProducts": ["AmazonEC2"]}
            }"#,
        )
        .expect("parse");

        assert_eq!(summary.related_opportunity_id.as_deref(), Some("O4235295"));
        let score = summary
            .insights
            .and_then(|i| i.opportunity_quality)
            .and_then(|q| q.score);
        assert_eq!(score, Some(72));
        assert_eq!(
            summary.related_entity_ids.and_then(|r| r.aws_products),
            Some(vec!["AmazonEC2".to_string()])
        );
    }
}
