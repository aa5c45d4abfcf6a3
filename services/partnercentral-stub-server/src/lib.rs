// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Stub Partner Central Selling server for testing
//!
//! This crate provides an axum-based HTTP server that answers the read
//! operations of the Partner Central Selling API from static test data. It
//! can be used for:
//!
//! - Integration testing of the samples and `pcsell` without AWS credentials
//! - Local development and demos
//!
//! The server speaks the service's JSON 1.0 protocol: every request is a
//! `POST /` whose `X-Amz-Target` header names the operation. Fixture data is
//! loaded from JSON files at startup and served as-is.

use std::collections::BTreeMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tokio::sync::oneshot;

/// Prefix of every `X-Amz-Target` value the service accepts
pub const TARGET_PREFIX: &str = "AWSPartnerCentralSelling.";

/// Content type of requests and responses
pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// Page size used when a list request carries no `MaxResults`
pub const DEFAULT_MAX_RESULTS: usize = 20;

type Record = Map<String, Value>;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetByIdentifierRequest {
    catalog: String,
    identifier: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetAwsOpportunitySummaryRequest {
    catalog: String,
    related_opportunity_identifier: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListRequest {
    catalog: String,
    #[serde(default)]
    max_results: Option<i64>,
    #[serde(default)]
    next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListEngagementInvitationsRequest {
    #[serde(flatten)]
    list: ListRequest,
    #[serde(default)]
    participant_type: Option<String>,
}

// ============================================================================
// Errors
// ============================================================================

/// A modeled service error, rendered as `{"__type": ..., "message": ...}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl StubError {
    fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "ValidationException",
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "ResourceNotFoundException",
            message: message.into(),
        }
    }

    fn access_denied() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            code: "AccessDeniedException",
            message: "Missing Authentication Token".to_string(),
        }
    }

    fn unknown_operation(target: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "UnknownOperationException",
            message: format!("Unknown operation: '{}'", target),
        }
    }

    /// Wire body of the error
    pub fn body(&self) -> Value {
        json!({
            "__type": self.code,
            "message": self.message,
        })
    }
}

// ============================================================================
// Server Context
// ============================================================================

/// Context for the stub server containing all test data
#[derive(Debug)]
pub struct StubContext {
    /// Raw `GetOpportunity` responses indexed (and therefore sorted) by id
    opportunities: BTreeMap<String, Record>,
    /// Raw solution records sorted by id
    solutions: Vec<Record>,
    /// Raw `GetAwsOpportunitySummary` responses by related opportunity id
    aws_summaries: BTreeMap<String, Record>,
    /// Raw `GetEngagementInvitation` responses by invitation id, each with
    /// the caller's `ParticipantType` added for listings
    invitations: BTreeMap<String, Record>,
    requests: AtomicU64,
}

/// Directory holding the fixtures shipped with this crate
pub fn bundled_fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

impl StubContext {
    /// Create a new stub context by loading fixture data from JSON files
    ///
    /// Opportunities are loaded from `opportunities/*.json`, one raw
    /// `GetOpportunity` response per file. Solutions are loaded from
    /// `solutions.json` if present. AWS opportunity summaries
    /// (`aws_opportunity_summaries/*.json`) and engagement invitations
    /// (`engagement_invitations/*.json`) are optional directories laid out
    /// like the opportunities.
    pub fn from_fixtures(fixtures_dir: &Path) -> Result<Self> {
        let solutions_path = fixtures_dir.join("solutions.json");

        let opportunities = load_records(&fixtures_dir.join("opportunities"), "Id", "opportunity")?;

        let summaries_dir = fixtures_dir.join("aws_opportunity_summaries");
        let aws_summaries = if summaries_dir.is_dir() {
            load_records(&summaries_dir, "RelatedOpportunityId", "AWS opportunity summary")?
        } else {
            BTreeMap::new()
        };

        let invitations_dir = fixtures_dir.join("engagement_invitations");
        let invitations = if invitations_dir.is_dir() {
            load_records(&invitations_dir, "Id", "engagement invitation")?
        } else {
            BTreeMap::new()
        };

        let mut solutions: Vec<Record> = if solutions_path.exists() {
            let json_str = std::fs::read_to_string(&solutions_path)
                .with_context(|| format!("Failed to read {}", solutions_path.display()))?;
            serde_json::from_str(&json_str)
                .with_context(|| format!("Failed to parse {}", solutions_path.display()))?
        } else {
            Vec::new()
        };
        solutions.sort_by(|a, b| string_member(a, "Id").cmp(&string_member(b, "Id")));

        Ok(Self {
            opportunities,
            solutions,
            aws_summaries,
            invitations,
            requests: AtomicU64::new(0),
        })
    }

    /// Load the fixtures shipped with this crate
    pub fn bundled() -> Result<Self> {
        Self::from_fixtures(&bundled_fixtures_dir())
    }

    /// Identifiers of every loaded opportunity, in order
    pub fn opportunity_ids(&self) -> Vec<&str> {
        self.opportunities.keys().map(|s| s.as_str()).collect()
    }

    /// Number of loaded solutions
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Related opportunity ids of every loaded AWS opportunity summary
    pub fn aws_summary_ids(&self) -> Vec<&str> {
        self.aws_summaries.keys().map(|s| s.as_str()).collect()
    }

    /// Identifiers of every loaded engagement invitation, in order
    pub fn invitation_ids(&self) -> Vec<&str> {
        self.invitations.keys().map(|s| s.as_str()).collect()
    }

    fn next_request_id(&self) -> String {
        let n = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
        format!("stub-{:08}", n)
    }

    /// Answer one request for `target` with the given JSON body
    pub fn handle(&self, target: &str, body: &[u8]) -> Result<Value, StubError> {
        let operation = target
            .strip_prefix(TARGET_PREFIX)
            .ok_or_else(|| StubError::unknown_operation(target))?;

        match operation {
            "GetOpportunity" => self.get_opportunity(parse_body(body)?),
            "ListOpportunities" => self.list_opportunities(parse_body(body)?),
            "ListSolutions" => self.list_solutions(parse_body(body)?),
            "GetAwsOpportunitySummary" => self.get_aws_opportunity_summary(parse_body(body)?),
            "GetEngagementInvitation" => self.get_engagement_invitation(parse_body(body)?),
            "ListEngagementInvitations" => self.list_engagement_invitations(parse_body(body)?),
            _ => Err(StubError::unknown_operation(target)),
        }
    }

    fn get_opportunity(&self, request: GetByIdentifierRequest) -> Result<Value, StubError> {
        check_catalog(&request.catalog)?;

        self.opportunities
            .get(&request.identifier)
            .filter(|record| string_member(record, "Catalog") == Some(request.catalog.as_str()))
            .map(|record| Value::Object(record.clone()))
            .ok_or_else(|| {
                StubError::not_found(format!(
                    "Opportunity {} not found in catalog {}",
                    request.identifier, request.catalog
                ))
            })
    }

    fn list_opportunities(&self, request: ListRequest) -> Result<Value, StubError> {
        check_catalog(&request.catalog)?;

        let summaries: Vec<Value> = self
            .opportunities
            .values()
            .filter(|record| string_member(record, "Catalog") == Some(request.catalog.as_str()))
            .map(opportunity_summary)
            .collect();

        let (page, next_token) = paginate(summaries, &request)?;
        Ok(page_body("OpportunitySummaries", page, next_token))
    }

    fn list_solutions(&self, request: ListRequest) -> Result<Value, StubError> {
        check_catalog(&request.catalog)?;

        let solutions: Vec<Value> = self
            .solutions
            .iter()
            .filter(|record| string_member(record, "Catalog") == Some(request.catalog.as_str()))
            .map(|record| Value::Object(record.clone()))
            .collect();

        let (page, next_token) = paginate(solutions, &request)?;
        Ok(page_body("SolutionSummaries", page, next_token))
    }

    fn get_aws_opportunity_summary(
        &self,
        request: GetAwsOpportunitySummaryRequest,
    ) -> Result<Value, StubError> {
        check_catalog(&request.catalog)?;

        self.aws_summaries
            .get(&request.related_opportunity_identifier)
            .filter(|record| string_member(record, "Catalog") == Some(request.catalog.as_str()))
            .map(|record| Value::Object(record.clone()))
            .ok_or_else(|| {
                StubError::not_found(format!(
                    "No AWS summary for opportunity {} in catalog {}",
                    request.related_opportunity_identifier, request.catalog
                ))
            })
    }

    /// Look an invitation up by id or by ARN
    fn get_engagement_invitation(
        &self,
        request: GetByIdentifierRequest,
    ) -> Result<Value, StubError> {
        check_catalog(&request.catalog)?;

        let found = self.invitations.get(&request.identifier).or_else(|| {
            self.invitations
                .values()
                .find(|record| string_member(record, "Arn") == Some(request.identifier.as_str()))
        });

        found
            .filter(|record| string_member(record, "Catalog") == Some(request.catalog.as_str()))
            .map(|record| {
                let mut invitation = record.clone();
                invitation.remove("ParticipantType");
                Value::Object(invitation)
            })
            .ok_or_else(|| {
                StubError::not_found(format!(
                    "Engagement invitation {} not found in catalog {}",
                    request.identifier, request.catalog
                ))
            })
    }

    fn list_engagement_invitations(
        &self,
        request: ListEngagementInvitationsRequest,
    ) -> Result<Value, StubError> {
        check_catalog(&request.list.catalog)?;
        if let Some(participant_type) = request.participant_type.as_deref() {
            check_participant_type(participant_type)?;
        }

        let summaries: Vec<Value> = self
            .invitations
            .values()
            .filter(|record| {
                string_member(record, "Catalog") == Some(request.list.catalog.as_str())
            })
            .filter(|record| match request.participant_type.as_deref() {
                Some(wanted) => string_member(record, "ParticipantType") == Some(wanted),
                None => true,
            })
            .map(invitation_summary)
            .collect();

        let (page, next_token) = paginate(summaries, &request.list)?;
        Ok(page_body("EngagementInvitationSummaries", page, next_token))
    }
}

// ============================================================================
// HTTP Surface
// ============================================================================

/// Create the axum router serving the stub API
pub fn router(context: Arc<StubContext>) -> Router {
    Router::new()
        .route("/", post(dispatch))
        .with_state(context)
}

async fn dispatch(
    State(context): State<Arc<StubContext>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = context.next_request_id();
    let target = headers
        .get("x-amz-target")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    tracing::debug!(operation = target, request_id = %request_id, "request");

    let result = if headers.contains_key(header::AUTHORIZATION) {
        context.handle(target, &body)
    } else {
        Err(StubError::access_denied())
    };

    let (status, payload) = match result {
        Ok(payload) => (StatusCode::OK, payload),
        Err(e) => {
            tracing::debug!(code = e.code, message = %e.message, "request failed");
            (e.status, e.body())
        }
    };

    let mut response = (status, payload.to_string()).into_response();
    let response_headers = response.headers_mut();
    response_headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response_headers.insert("x-amzn-requestid", value);
    }
    response
}

/// A stub server running on its own thread, for tests
///
/// The server listens on an ephemeral loopback port and stops when the
/// handle is dropped.
pub struct StubServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubServer {
    /// Serve `context` on a fresh loopback port
    pub fn start(context: StubContext) -> Result<Self> {
        let listener = std::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .context("Failed to bind stub listener")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build stub runtime")?;
        let (shutdown, shutdown_rx) = oneshot::channel::<()>();
        let app = router(Arc::new(context));

        std::thread::Builder::new()
            .name("partnercentral-stub".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    let listener = match tokio::net::TcpListener::from_std(listener) {
                        Ok(listener) => listener,
                        Err(e) => {
                            tracing::error!("Stub listener unusable: {}", e);
                            return;
                        }
                    };
                    let served = axum::serve(listener, app)
                        .with_graceful_shutdown(async {
                            let _ = shutdown_rx.await;
                        })
                        .await;
                    if let Err(e) = served {
                        tracing::error!("Stub server error: {}", e);
                    }
                });
            })
            .context("Failed to spawn stub server thread")?;

        Ok(Self {
            addr,
            shutdown: Some(shutdown),
        })
    }

    /// Serve the fixtures shipped with this crate
    pub fn start_bundled() -> Result<Self> {
        Self::start(StubContext::bundled()?)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// URL to use as the SDK endpoint, e.g. for `AWS_ENDPOINT_URL`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, StubError> {
    serde_json::from_slice(body)
        .map_err(|e| StubError::validation(format!("Invalid request body: {}", e)))
}

fn check_catalog(catalog: &str) -> Result<(), StubError> {
    match catalog {
        "AWS" | "Sandbox" => Ok(()),
        other => Err(StubError::validation(format!(
            "Catalog must be one of AWS, Sandbox; got '{}'",
            other
        ))),
    }
}

fn check_participant_type(participant_type: &str) -> Result<(), StubError> {
    match participant_type {
        "SENDER" | "RECEIVER" => Ok(()),
        other => Err(StubError::validation(format!(
            "ParticipantType must be one of SENDER, RECEIVER; got '{}'",
            other
        ))),
    }
}

/// Load every `*.json` record in `dir`, keyed by its `key` member
///
/// Files that do not parse as a JSON object or lack `key` are skipped with
/// a warning.
fn load_records(dir: &Path, key: &str, kind: &str) -> Result<BTreeMap<String, Record>> {
    let mut records = BTreeMap::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read fixtures directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let filename = path.file_name().and_then(|s| s.to_str()).unwrap_or("");

        let json_str = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let record = match serde_json::from_str::<Record>(&json_str) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping {}: not a valid {} file ({})", filename, kind, e);
                continue;
            }
        };
        match string_member(&record, key) {
            Some(id) => {
                tracing::info!("Loaded {} {} from {}", kind, id, filename);
                records.insert(id.to_string(), record);
            }
            None => tracing::warn!("Skipping {}: no {} member", filename, key),
        }
    }
    Ok(records)
}

fn string_member<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// Copy the named members of `source` that are present
fn pick(source: &Record, keys: &[&str]) -> Record {
    keys.iter()
        .filter_map(|key| source.get(*key).map(|v| (key.to_string(), v.clone())))
        .collect()
}

/// Project a full opportunity onto the members `ListOpportunities` returns
fn opportunity_summary(record: &Record) -> Value {
    let mut summary = pick(
        record,
        &[
            "Catalog",
            "Id",
            "Arn",
            "PartnerOpportunityIdentifier",
            "OpportunityType",
            "CreatedDate",
            "LastModifiedDate",
        ],
    );

    if let Some(life_cycle) = record.get("LifeCycle").and_then(Value::as_object) {
        let projected = pick(
            life_cycle,
            &[
                "Stage",
                "ClosedLostReason",
                "NextSteps",
                "TargetCloseDate",
                "ReviewStatus",
                "ReviewComments",
                "ReviewStatusReason",
            ],
        );
        summary.insert("LifeCycle".to_string(), Value::Object(projected));
    }

    let account = record
        .get("Customer")
        .and_then(|customer| customer.get("Account"))
        .and_then(Value::as_object);
    if let Some(account) = account {
        let mut projected = pick(
            account,
            &["CompanyName", "Industry", "OtherIndustry", "WebsiteUrl"],
        );
        if let Some(address) = account.get("Address").and_then(Value::as_object) {
            let address = pick(
                address,
                &["City", "PostalCode", "StateOrRegion", "CountryCode"],
            );
            projected.insert("Address".to_string(), Value::Object(address));
        }
        let mut customer = Record::new();
        customer.insert("Account".to_string(), Value::Object(projected));
        summary.insert("Customer".to_string(), Value::Object(customer));
    }

    if let Some(project) = record.get("Project").and_then(Value::as_object) {
        let projected = pick(
            project,
            &[
                "DeliveryModels",
                "ExpectedCustomerSpend",
                "ExpectedContractDuration",
            ],
        );
        summary.insert("Project".to_string(), Value::Object(projected));
    }

    Value::Object(summary)
}

/// Project a stored invitation onto the members `ListEngagementInvitations`
/// returns
fn invitation_summary(record: &Record) -> Value {
    Value::Object(pick(
        record,
        &[
            "Catalog",
            "Id",
            "Arn",
            "PayloadType",
            "EngagementId",
            "EngagementTitle",
            "Status",
            "InvitationDate",
            "ExpirationDate",
            "SenderAwsAccountId",
            "SenderCompanyName",
            "Receiver",
            "ParticipantType",
        ],
    ))
}

/// Slice `items` by the request's offset token and page size
fn paginate(
    items: Vec<Value>,
    request: &ListRequest,
) -> Result<(Vec<Value>, Option<String>), StubError> {
    let size = match request.max_results {
        None => DEFAULT_MAX_RESULTS,
        Some(n) if (1..=100).contains(&n) => n as usize,
        Some(n) => {
            return Err(StubError::validation(format!(
                "MaxResults must be between 1 and 100, got {}",
                n
            )));
        }
    };

    let start = match request.next_token.as_deref() {
        None => 0,
        Some(token) => token
            .parse::<usize>()
            .ok()
            .filter(|offset| *offset <= items.len())
            .ok_or_else(|| StubError::validation(format!("Invalid NextToken: '{}'", token)))?,
    };

    let end = (start + size).min(items.len());
    let next_token = (end < items.len()).then(|| end.to_string());
    let page = items.into_iter().skip(start).take(end - start).collect();
    Ok((page, next_token))
}

fn page_body(member: &str, page: Vec<Value>, next_token: Option<String>) -> Value {
    let mut body = Record::new();
    body.insert(member.to_string(), Value::Array(page));
    if let Some(token) = next_token {
        body.insert("NextToken".to_string(), Value::String(token));
    }
    Value::Object(body)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context() -> StubContext {
        StubContext::bundled().expect("Failed to load fixtures")
    }

    fn call(ctx: &StubContext, operation: &str, body: Value) -> Result<Value, StubError> {
        ctx.handle(
            &format!("{}{}", TARGET_PREFIX, operation),
            body.to_string().as_bytes(),
        )
    }

    fn ids(page: &Value, member: &str) -> Vec<String> {
        page[member]
            .as_array()
            .expect("array member")
            .iter()
            .filter_map(|r| r["Id"].as_str().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_load_fixtures() {
        let ctx = context();
        assert_eq!(
            ctx.opportunity_ids(),
            vec!["O1111111", "O2222222", "O3333333", "O4444444"]
        );
        assert_eq!(ctx.solution_count(), 3);
        assert_eq!(ctx.aws_summary_ids(), vec!["O4235295"]);
        assert_eq!(
            ctx.invitation_ids(),
            vec!["engi-0000000IS0Qga", "engi-0000001LeAd01", "engi-0000002Sent01"]
        );
    }

    /// The SDK reads timestamps as RFC 3339 strings, never as numbers
    #[test]
    fn test_fixture_timestamps_are_rfc3339() {
        fn check(value: &Value, path: &str) {
            match value {
                Value::Object(map) => {
                    for (key, member) in map {
                        let path = format!("{}.{}", path, key);
                        if matches!(
                            key.as_str(),
                            "CreatedDate"
                                | "LastModifiedDate"
                                | "Time"
                                | "InvitationDate"
                                | "ExpirationDate"
                        ) && member.is_number()
                        {
                            panic!("{} is a number", path);
                        }
                        check(member, &path);
                    }
                }
                Value::Array(items) => items.iter().for_each(|item| check(item, path)),
                _ => {}
            }
        }

        let ctx = context();
        let records = ctx
            .opportunities
            .values()
            .chain(ctx.solutions.iter())
            .chain(ctx.aws_summaries.values())
            .chain(ctx.invitations.values());
        for record in records {
            check(&Value::Object(record.clone()), "$");
        }
        assert_eq!(ctx.solutions[0]["CreatedDate"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_load_fixtures_skips_invalid_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let opportunities = dir.path().join("opportunities");
        std::fs::create_dir(&opportunities).expect("mkdir");
        std::fs::write(
            opportunities.join("good.json"),
            r#"{"Catalog": "AWS", "Id": "O7"}"#,
        )
        .expect("write");
        std::fs::write(opportunities.join("broken.json"), "{not json").expect("write");
        std::fs::write(opportunities.join("no-id.json"), r#"{"Catalog": "AWS"}"#)
            .expect("write");
        std::fs::write(opportunities.join("README.txt"), "ignored").expect("write");

        let ctx = StubContext::from_fixtures(dir.path()).expect("load");
        assert_eq!(ctx.opportunity_ids(), vec!["O7"]);
        assert_eq!(ctx.solution_count(), 0);
        assert!(ctx.aws_summary_ids().is_empty());
        assert!(ctx.invitation_ids().is_empty());
    }

    #[test]
    fn test_get_opportunity() {
        let ctx = context();
        let record = call(
            &ctx,
            "GetOpportunity",
            json!({"Catalog": "AWS", "Identifier": "O1111111"}),
        )
        .expect("found");

        assert_eq!(record["Id"], "O1111111");
        assert_eq!(record["Customer"]["Account"]["CompanyName"], "Example Corp");
        assert_eq!(record["CreatedDate"], "2024-05-31T16:00:00Z");
        assert_eq!(
            record["LifeCycle"]["NextStepsHistory"][1]["Time"],
            "2024-06-03T16:00:00Z"
        );
    }

    #[test]
    fn test_get_opportunity_wrong_catalog_not_found() {
        let ctx = context();
        let err = call(
            &ctx,
            "GetOpportunity",
            json!({"Catalog": "Sandbox", "Identifier": "O1111111"}),
        )
        .expect_err("catalog mismatch");

        assert_eq!(err.code, "ResourceNotFoundException");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_get_opportunity_missing_identifier() {
        let ctx = context();
        let err = call(&ctx, "GetOpportunity", json!({"Catalog": "AWS"})).expect_err("invalid");
        assert_eq!(err.code, "ValidationException");
    }

    #[test]
    fn test_list_opportunities_filters_by_catalog() {
        let ctx = context();

        let aws = call(&ctx, "ListOpportunities", json!({"Catalog": "AWS"})).expect("list");
        assert_eq!(
            ids(&aws, "OpportunitySummaries"),
            vec!["O1111111", "O2222222", "O3333333"]
        );
        assert!(aws.get("NextToken").is_none());

        let sandbox =
            call(&ctx, "ListOpportunities", json!({"Catalog": "Sandbox"})).expect("list");
        assert_eq!(ids(&sandbox, "OpportunitySummaries"), vec!["O4444444"]);
    }

    #[test]
    fn test_list_opportunities_paginates() {
        let ctx = context();

        let first = call(
            &ctx,
            "ListOpportunities",
            json!({"Catalog": "AWS", "MaxResults": 2}),
        )
        .expect("first page");
        assert_eq!(
            ids(&first, "OpportunitySummaries"),
            vec!["O1111111", "O2222222"]
        );
        assert_eq!(first["NextToken"], "2");

        let second = call(
            &ctx,
            "ListOpportunities",
            json!({"Catalog": "AWS", "MaxResults": 2, "NextToken": "2"}),
        )
        .expect("second page");
        assert_eq!(ids(&second, "OpportunitySummaries"), vec!["O3333333"]);
        assert!(second.get("NextToken").is_none());
    }

    #[test]
    fn test_list_opportunities_rejects_page_size() {
        let ctx = context();
        for max_results in [0, 101] {
            let err = call(
                &ctx,
                "ListOpportunities",
                json!({"Catalog": "AWS", "MaxResults": max_results}),
            )
            .expect_err("out of range");
            assert_eq!(err.code, "ValidationException");
        }
    }

    #[test]
    fn test_list_rejects_bad_token() {
        let ctx = context();
        let err = call(
            &ctx,
            "ListSolutions",
            json!({"Catalog": "AWS", "NextToken": "garbage"}),
        )
        .expect_err("bad token");
        assert_eq!(err.code, "ValidationException");
    }

    #[test]
    fn test_summary_projection() {
        let ctx = context();
        let page = call(
            &ctx,
            "ListOpportunities",
            json!({"Catalog": "AWS", "MaxResults": 1}),
        )
        .expect("list");
        let summary = &page["OpportunitySummaries"][0];

        assert_eq!(summary["Customer"]["Account"]["CompanyName"], "Example Corp");
        assert_eq!(summary["Customer"]["Account"]["Address"]["City"], "Seattle");
        assert!(summary["Customer"]["Account"].get("Address").is_some());
        assert!(summary["Customer"]["Account"]["Address"].get("StreetAddress").is_none());
        assert!(summary["Customer"].get("Contacts").is_none());
        assert!(summary.get("Marketing").is_none());
        assert_eq!(summary["LifeCycle"]["Stage"], "Qualified");
        assert!(summary["LifeCycle"].get("NextStepsHistory").is_none());
        assert_eq!(summary["Project"]["DeliveryModels"][0], "SaaS or PaaS");
        assert!(summary["Project"].get("Title").is_none());
        assert_eq!(summary["Project"]["ExpectedContractDuration"]["Term"], "Months");
    }

    #[test]
    fn test_get_aws_opportunity_summary() {
        let ctx = context();
        let summary = call(
            &ctx,
            "GetAwsOpportunitySummary",
            json!({"Catalog": "AWS", "RelatedOpportunityIdentifier": "O4235295"}),
        )
        .expect("found");

        assert_eq!(summary["RelatedOpportunityId"], "O4235295");
        assert_eq!(
            summary["Insights"]["AwsProductsSpendInsightsBySource"]["AWS"]["TotalAmount"],
            "12000.00"
        );

        let err = call(
            &ctx,
            "GetAwsOpportunitySummary",
            json!({"Catalog": "Sandbox", "RelatedOpportunityIdentifier": "O4235295"}),
        )
        .expect_err("catalog mismatch");
        assert_eq!(err.code, "ResourceNotFoundException");
    }

    #[test]
    fn test_get_engagement_invitation_by_id_or_arn() {
        let ctx = context();
        let arn = "arn:aws:partnercentral-selling:us-east-1:aws:catalog/Sandbox/engagement-invitation/engi-0000000IS0Qga";

        let by_arn = call(
            &ctx,
            "GetEngagementInvitation",
            json!({"Catalog": "Sandbox", "Identifier": arn}),
        )
        .expect("by arn");
        let by_id = call(
            &ctx,
            "GetEngagementInvitation",
            json!({"Catalog": "Sandbox", "Identifier": "engi-0000000IS0Qga"}),
        )
        .expect("by id");

        assert_eq!(by_arn, by_id);
        assert_eq!(by_arn["Id"], "engi-0000000IS0Qga");
        assert_eq!(by_arn["InvitationDate"], "2024-06-01T00:00:00Z");
        assert!(by_arn["Payload"].get("OpportunityInvitation").is_some());
        assert!(by_arn.get("ParticipantType").is_none());

        let err = call(
            &ctx,
            "GetEngagementInvitation",
            json!({"Catalog": "AWS", "Identifier": arn}),
        )
        .expect_err("catalog mismatch");
        assert_eq!(err.code, "ResourceNotFoundException");
    }

    #[test]
    fn test_list_engagement_invitations() {
        let ctx = context();

        let all = call(
            &ctx,
            "ListEngagementInvitations",
            json!({"Catalog": "AWS", "MaxResults": 20}),
        )
        .expect("list");
        assert_eq!(
            ids(&all, "EngagementInvitationSummaries"),
            vec!["engi-0000001LeAd01", "engi-0000002Sent01"]
        );
        let summary = &all["EngagementInvitationSummaries"][0];
        assert_eq!(summary["ParticipantType"], "RECEIVER");
        assert_eq!(summary["Receiver"]["Account"]["AwsAccountId"], "111122223333");
        assert!(summary.get("Payload").is_none());
        assert!(summary.get("InvitationMessage").is_none());

        let sent = call(
            &ctx,
            "ListEngagementInvitations",
            json!({"Catalog": "AWS", "ParticipantType": "SENDER"}),
        )
        .expect("list");
        assert_eq!(
            ids(&sent, "EngagementInvitationSummaries"),
            vec!["engi-0000002Sent01"]
        );

        let paged = call(
            &ctx,
            "ListEngagementInvitations",
            json!({"Catalog": "AWS", "MaxResults": 1, "NextToken": "1"}),
        )
        .expect("second page");
        assert_eq!(
            ids(&paged, "EngagementInvitationSummaries"),
            vec!["engi-0000002Sent01"]
        );
        assert!(paged.get("NextToken").is_none());
    }

    #[test]
    fn test_list_engagement_invitations_rejects_participant_type() {
        let ctx = context();
        let err = call(
            &ctx,
            "ListEngagementInvitations",
            json!({"Catalog": "AWS", "ParticipantType": "OBSERVER"}),
        )
        .expect_err("invalid");
        assert_eq!(err.code, "ValidationException");
        assert!(err.message.contains("OBSERVER"));
    }

    #[test]
    fn test_list_solutions() {
        let ctx = context();
        let page = call(&ctx, "ListSolutions", json!({"Catalog": "AWS"})).expect("list");
        assert_eq!(
            ids(&page, "SolutionSummaries"),
            vec!["S-0000001", "S-0000002"]
        );
    }

    #[test]
    fn test_unknown_operation() {
        let ctx = context();
        let err = call(&ctx, "DeleteEverything", json!({})).expect_err("unknown");
        assert_eq!(err.code, "UnknownOperationException");

        let err = ctx.handle("SomeOtherService.GetOpportunity", b"{}").expect_err("unknown");
        assert_eq!(err.code, "UnknownOperationException");
    }

    #[test]
    fn test_error_body() {
        let body = StubError::access_denied().body();
        assert_eq!(
            body,
            json!({"__type": "AccessDeniedException", "message": "Missing Authentication Token"})
        );
    }

    #[test]
    fn test_request_ids_are_sequential() {
        let ctx = context();
        assert_eq!(ctx.next_request_id(), "stub-00000001");
        assert_eq!(ctx.next_request_id(), "stub-00000002");
    }
}
