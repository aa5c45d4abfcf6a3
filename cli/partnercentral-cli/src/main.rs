// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! pcsell - query the AWS Partner Central Selling API

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use partnercentral_api::{
    Catalog, GetAwsOpportunitySummaryParams, GetEngagementInvitationParams, GetOpportunityParams,
    ListEngagementInvitationsParams, ListOpportunitiesParams, ListSolutionsParams, PageSize,
    ParticipantType,
};
use partnercentral_cli::{Operation, SampleInvoker, logging};
use partnercentral_client::{AmbientConfig, DEFAULT_REGION, Overrides};

#[derive(Parser)]
#[command(
    name = "pcsell",
    version,
    about = "Partner Central Selling CLI",
    long_about = "Read opportunities, solutions and engagement invitations from the AWS \
                  Partner Central Selling API and print them as JSON"
)]
struct Cli {
    /// Shared config profile to read credentials from
    #[arg(long, global = true, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// AWS region
    #[arg(long, global = true, default_value = DEFAULT_REGION)]
    region: String,

    /// Endpoint override, e.g. a local stub server
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Give up on an operation after this many seconds, retries included
    #[arg(long, global = true, value_name = "SECS", value_parser = parse_seconds)]
    operation_timeout: Option<Duration>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one opportunity
    GetOpportunity {
        /// Opportunity identifier, e.g. O1111111
        identifier: String,

        /// Catalog to read from (AWS or Sandbox)
        #[arg(long, default_value_t = Catalog::Aws)]
        catalog: Catalog,
    },

    /// List opportunity summaries
    #[command(alias = "ls")]
    ListOpportunities(ListArgs),

    /// List partner solutions
    ListSolutions(ListArgs),

    /// Fetch AWS's summary of a partner opportunity
    GetAwsOpportunitySummary {
        /// Partner opportunity identifier, e.g. O4235295
        related_opportunity_identifier: String,

        /// Catalog to read from (AWS or Sandbox)
        #[arg(long, default_value_t = Catalog::Aws)]
        catalog: Catalog,
    },

    /// Fetch one engagement invitation
    GetEngagementInvitation {
        /// Invitation identifier or ARN
        identifier: String,

        /// Catalog to read from (AWS or Sandbox)
        #[arg(long, default_value_t = Catalog::Aws)]
        catalog: Catalog,
    },

    /// List engagement invitation summaries
    ListEngagementInvitations {
        #[command(flatten)]
        list: ListArgs,

        /// Only invitations the caller sent (SENDER) or received (RECEIVER)
        #[arg(long)]
        participant_type: Option<ParticipantType>,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Catalog to read from (AWS or Sandbox)
    #[arg(long, default_value_t = Catalog::Aws)]
    catalog: Catalog,

    /// Maximum number of records per page (1-100)
    #[arg(long)]
    max_results: Option<PageSize>,

    /// Continue from a previous page
    #[arg(long)]
    next_token: Option<String>,

    /// Follow NextToken until every page has been read
    #[arg(long)]
    all: bool,
}

fn parse_seconds(s: &str) -> Result<Duration, String> {
    s.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| format!("'{}' is not a whole number of seconds", s))
}

impl Cli {
    fn overrides(&self) -> Overrides {
        let mut overrides = Overrides::default().region(&self.region);
        if let Some(endpoint_url) = &self.endpoint_url {
            overrides = overrides.endpoint_url(endpoint_url);
        }
        if let Some(timeout) = self.operation_timeout {
            overrides = overrides.operation_timeout(timeout);
        }
        overrides
    }

    fn provider(&self) -> AmbientConfig {
        match &self.profile {
            Some(profile) => AmbientConfig::new().with_profile(profile),
            None => AmbientConfig::new(),
        }
    }
}

impl Commands {
    fn operation(&self) -> Operation {
        match self {
            Commands::GetOpportunity {
                identifier,
                catalog,
            } => Operation::GetOpportunity(GetOpportunityParams::new(*catalog, identifier)),
            Commands::ListOpportunities(args) => Operation::ListOpportunities {
                params: ListOpportunitiesParams {
                    catalog: args.catalog,
                    max_results: args.max_results,
                    next_token: args.next_token.clone(),
                },
                all: args.all,
            },
            Commands::ListSolutions(args) => Operation::ListSolutions {
                params: ListSolutionsParams {
                    catalog: args.catalog,
                    max_results: args.max_results,
                    next_token: args.next_token.clone(),
                },
                all: args.all,
            },
            Commands::GetAwsOpportunitySummary {
                related_opportunity_identifier,
                catalog,
            } => Operation::GetAwsOpportunitySummary(GetAwsOpportunitySummaryParams::new(
                *catalog,
                related_opportunity_identifier,
            )),
            Commands::GetEngagementInvitation {
                identifier,
                catalog,
            } => Operation::GetEngagementInvitation(GetEngagementInvitationParams::new(
                *catalog, identifier,
            )),
            Commands::ListEngagementInvitations {
                list,
                participant_type,
            } => Operation::ListEngagementInvitations {
                params: ListEngagementInvitationsParams {
                    catalog: list.catalog,
                    max_results: list.max_results,
                    next_token: list.next_token.clone(),
                    participant_type: *participant_type,
                },
                all: list.all,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(if cli.verbose {
        logging::VERBOSE_FILTER
    } else {
        logging::QUIET_FILTER
    })?;

    let invoker = SampleInvoker::new(cli.provider(), cli.overrides());
    invoker
        .run(&cli.command.operation(), &mut std::io::stdout())
        .await?;
    Ok(())
}
