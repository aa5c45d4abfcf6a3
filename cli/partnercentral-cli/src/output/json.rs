// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

/// Indentation of every printed document
const INDENT: &[u8] = b"    ";

/// Render a value as JSON indented by four spaces
pub fn to_json_string<T: Serialize>(value: &T) -> io::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(io::Error::other)
}

/// Write a value as indented JSON followed by a newline.
///
/// The document is rendered in full before anything reaches `out`, so a
/// serialization failure leaves the writer untouched.
pub fn write_json<T: Serialize, W: Write>(out: &mut W, value: &T) -> io::Result<()> {
    let rendered = to_json_string(value)?;
    writeln!(out, "{}", rendered)?;
    out.flush()
}
