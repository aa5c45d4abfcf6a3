// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Fetch opportunity `O1111111` from the `AWS` catalog and print it as JSON

use anyhow::Result;
use clap::Parser;
use partnercentral_cli::{SampleInvoker, logging, samples};
use partnercentral_client::AmbientConfig;

#[derive(Parser)]
#[command(name = "get-opportunity", version)]
#[command(about = "Print opportunity O1111111 from the AWS catalog as JSON")]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    Args::parse();
    logging::init(logging::SAMPLE_FILTER)?;

    let (overrides, operation) = samples::get_opportunity();
    SampleInvoker::new(AmbientConfig::new(), overrides)
        .run(&operation, &mut std::io::stdout())
        .await?;
    Ok(())
}
