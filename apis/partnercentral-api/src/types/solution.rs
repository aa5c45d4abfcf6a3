// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Partner solutions (`ListSolutions` response)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of `ListSolutions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SolutionPage {
    pub solution_summaries: Vec<Solution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// A partner solution that opportunities can be associated with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Solution {
    pub catalog: String,
    /// Solution identifier, e.g. `S-0000001`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    pub name: String,
    /// `Active`, `Inactive` or `Draft`
    pub status: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Listing of the same solution in AWS Marketplace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_marketplace_solution_arn: Option<String>,
}
