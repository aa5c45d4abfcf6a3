// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for partnercentral-cli integration tests
//!
//! Every command runs with a cleared environment so that no developer
//! credentials, profiles or instance metadata leak into the tests. Commands
//! that should succeed are pointed at an in-process stub server with static
//! credentials.

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use partnercentral_stub_server::StubServer;

pub const TEST_ACCESS_KEY_ID: &str = "AKIDSTUBSERVER";
pub const TEST_SECRET_ACCESS_KEY: &str = "stub-secret-access-key";

/// Start a stub server with the bundled fixtures
pub fn stub() -> StubServer {
    StubServer::start_bundled().expect("Failed to start stub server")
}

/// A command for `bin` with no ambient AWS configuration at all
pub fn isolated_cmd(bin: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin).expect("Failed to find binary");
    cmd.env_clear()
        .env("AWS_CONFIG_FILE", "/nonexistent/aws/config")
        .env("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent/aws/credentials")
        .env("AWS_EC2_METADATA_DISABLED", "true");
    cmd
}

/// A command for `bin` with static credentials, talking to `stub`
pub fn stub_cmd(bin: &str, stub: &StubServer) -> Command {
    let mut cmd = isolated_cmd(bin);
    cmd.env("AWS_ACCESS_KEY_ID", TEST_ACCESS_KEY_ID)
        .env("AWS_SECRET_ACCESS_KEY", TEST_SECRET_ACCESS_KEY)
        .env("AWS_ENDPOINT_URL", stub.base_url());
    cmd
}

/// Run a command that must succeed and return its stdout
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to execute command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

/// Identifiers of every record in a list page
pub fn ids(page: &serde_json::Value, member: &str) -> Vec<String> {
    page[member]
        .as_array()
        .expect("array member")
        .iter()
        .filter_map(|r| r["Id"].as_str().map(str::to_string))
        .collect()
}
