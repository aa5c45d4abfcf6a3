// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Fetch AWS's summary of opportunity `O4235295` and print it as JSON

use anyhow::Result;
use clap::Parser;
use partnercentral_cli::{SampleInvoker, logging, samples};
use partnercentral_client::AmbientConfig;

#[derive(Parser)]
#[command(name = "get-aws-opportunity-summary", version)]
#[command(about = "Print the AWS summary of opportunity O4235295 as JSON")]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    Args::parse();
    logging::init(logging::SAMPLE_FILTER)?;

    let (overrides, operation) = samples::get_aws_opportunity_summary();
    SampleInvoker::new(AmbientConfig::new(), overrides)
        .run(&operation, &mut std::io::stdout())
        .await?;
    Ok(())
}
