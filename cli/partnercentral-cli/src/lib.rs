// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Partner Central Selling sample programs
//!
//! Each binary loads ambient AWS configuration, invokes one read operation
//! of the Partner Central Selling API and prints the response as JSON:
//!
//! - `get-opportunity` fetches opportunity `O1111111` from the `AWS` catalog
//! - `list-opportunities` lists up to 20 opportunities from the `AWS` catalog
//! - `get-aws-opportunity-summary` fetches AWS's summary of `O4235295`
//! - `get-engagement-invitation` fetches a Sandbox invitation by ARN
//! - `list-engagement-invitations` lists up to 20 engagement invitations
//! - `pcsell` exposes the same operations, plus `ListSolutions`, with flags

pub mod invoker;
pub mod logging;
pub mod output;
pub mod samples;

pub use invoker::{InvokeError, Operation, SampleInvoker, invoke};
