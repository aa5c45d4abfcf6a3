// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! List up to 20 engagement invitations from the `AWS` catalog and print them as JSON

use anyhow::Result;
use clap::Parser;
use partnercentral_cli::{SampleInvoker, logging, samples};
use partnercentral_client::AmbientConfig;

#[derive(Parser)]
#[command(name = "list-engagement-invitations", version)]
#[command(about = "Print one page of up to 20 engagement invitations from the AWS catalog as JSON")]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    Args::parse();
    logging::init(logging::SAMPLE_FILTER)?;

    let (overrides, operation) = samples::list_engagement_invitations();
    SampleInvoker::new(AmbientConfig::new(), overrides)
        .run(&operation, &mut std::io::stdout())
        .await?;
    Ok(())
}
