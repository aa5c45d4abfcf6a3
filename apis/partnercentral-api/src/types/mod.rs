// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Record types returned by the read operations
//!
//! Member names serialize with the service's PascalCase spelling and
//! enumerated members carry the service's string value unchanged, so a
//! printed record reads the same as the wire response.

pub mod aws_summary;
pub mod invitation;
pub mod opportunity;
pub mod solution;
pub mod summary;

pub use aws_summary::*;
pub use invitation::*;
pub use opportunity::*;
pub use solution::*;
pub use summary::*;
