// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pane text <-> [`Response`] conversion.
//!
//! [`parse_response`] validates the raw text of the status, headers, body and delay panes and
//! builds a complete [`Response`] or reports the first invalid field. The `export_*` functions
//! render a response back into the text each pane is seeded with.

use std::{error::Error, fmt, time::Duration};

use crate::model::{Headers, Response};

/// Upper bound on the number of digits in a status code.
pub const MAX_STATUS_DIGITS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidStatus { text: String },
    InvalidHeader { line: String },
    InvalidDelay { text: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStatus { text } => write!(f, "Can't parse '{text}' as status code"),
            Self::InvalidHeader { line } => write!(f, "Invalid header '{line}': expected 'key: value'"),
            Self::InvalidDelay { text } => {
                write!(f, "Can't parse '{text}' as delay (non-negative milliseconds)")
            }
        }
    }
}

impl Error for ParseError {}

/// Parses every pane into a [`Response`]. Nothing is returned unless all four fields are valid.
pub fn parse_response(
    status: &str,
    headers: &str,
    body: &str,
    delay: &str,
) -> Result<Response, ParseError> {
    let status = parse_status(status)?;
    let headers = parse_headers(headers)?;
    let delay = parse_delay(delay)?;
    Ok(Response::new(status, headers, body.as_bytes(), delay))
}

pub fn parse_status(text: &str) -> Result<u32, ParseError> {
    let trimmed = text.trim();
    if !is_decimal(trimmed) || trimmed.len() > MAX_STATUS_DIGITS {
        return Err(ParseError::InvalidStatus { text: trimmed.to_owned() });
    }
    trimmed.parse().map_err(|_| ParseError::InvalidStatus { text: trimmed.to_owned() })
}

/// Parses `key: value` lines. Blank lines are skipped; the first colon separates key from value.
pub fn parse_headers(text: &str) -> Result<Headers, ParseError> {
    let mut headers = Headers::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            return Err(ParseError::InvalidHeader { line: line.to_owned() });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ParseError::InvalidHeader { line: line.to_owned() });
        }
        headers.append(key, value.trim());
    }
    Ok(headers)
}

/// Parses a delay in milliseconds. Empty and signed input is rejected rather than clamped.
pub fn parse_delay(text: &str) -> Result<Duration, ParseError> {
    let trimmed = text.trim();
    if !is_decimal(trimmed) {
        return Err(ParseError::InvalidDelay { text: trimmed.to_owned() });
    }
    trimmed
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ParseError::InvalidDelay { text: trimmed.to_owned() })
}

fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

pub fn export_status(response: &Response) -> String {
    response.status().to_string()
}

pub fn export_delay(response: &Response) -> String {
    response.delay().as_millis().to_string()
}

pub fn export_headers(response: &Response) -> String {
    response
        .headers()
        .pairs()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_body(response: &Response) -> String {
    String::from_utf8_lossy(response.body()).into_owned()
}
