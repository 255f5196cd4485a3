// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mock response served by the stub server.

use std::time::Duration;

use super::Headers;

pub const DEFAULT_STATUS: u32 = 200;
pub const DEFAULT_BODY: &str = "Hello, World";

/// The status, headers, body and artificial delay of the mock response.
///
/// `status` is not restricted to valid HTTP codes here; it only ever holds at most five
/// decimal digits. The server decides what to do with codes HTTP cannot express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u32,
    headers: Headers,
    body: Vec<u8>,
    delay: Duration,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS,
            headers: [("X-Server", "HTTPLab")].into_iter().collect(),
            body: DEFAULT_BODY.as_bytes().to_vec(),
            delay: Duration::ZERO,
        }
    }
}

impl Response {
    pub fn new(status: u32, headers: Headers, body: impl Into<Vec<u8>>, delay: Duration) -> Self {
        Self { status, headers, body: body.into(), delay }
    }

    pub fn status(&self) -> u32 {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
