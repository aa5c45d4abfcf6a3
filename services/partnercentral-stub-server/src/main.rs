// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Standalone stub Partner Central Selling server for testing and development
//!
//! Run with:
//! ```bash
//! cargo run -p partnercentral-stub-server
//! ```
//!
//! Then point the samples at it:
//! ```bash
//! AWS_ENDPOINT_URL=http://127.0.0.1:9091 AWS_ACCESS_KEY_ID=test \
//!     AWS_SECRET_ACCESS_KEY=test cargo run -p partnercentral-cli --bin get-opportunity
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use partnercentral_stub_server::{StubContext, TARGET_PREFIX, bundled_fixtures_dir, router};

#[derive(Parser)]
#[command(name = "partnercentral-stub-server", version)]
#[command(about = "Serve Partner Central Selling fixtures over the JSON 1.0 protocol")]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "PCSELL_STUB_BIND", default_value = "127.0.0.1:9091")]
    bind: SocketAddr,

    /// Fixture directory (defaults to the bundled fixtures)
    #[arg(long)]
    fixtures: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let fixtures_dir = cli.fixtures.unwrap_or_else(bundled_fixtures_dir);
    let context = StubContext::from_fixtures(&fixtures_dir)?;

    tracing::info!(
        "Loaded {} opportunities, {} solutions, {} AWS summaries and {} invitations from {}",
        context.opportunity_ids().len(),
        context.solution_count(),
        context.aws_summary_ids().len(),
        context.invitation_ids().len(),
        fixtures_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;

    tracing::info!("Stub Partner Central Selling server listening on http://{}", cli.bind);
    tracing::info!("Available targets:");
    tracing::info!("  {}GetOpportunity", TARGET_PREFIX);
    tracing::info!("  {}ListOpportunities", TARGET_PREFIX);
    tracing::info!("  {}ListSolutions", TARGET_PREFIX);
    tracing::info!("  {}GetAwsOpportunitySummary", TARGET_PREFIX);
    tracing::info!("  {}GetEngagementInvitation", TARGET_PREFIX);
    tracing::info!("  {}ListEngagementInvitations", TARGET_PREFIX);

    axum::serve(listener, router(Arc::new(context)))
        .await
        .context("Server error")
}
