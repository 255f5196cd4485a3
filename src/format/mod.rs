// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text formats.
//!
//! Conversion between the raw text of the editor panes and the structured response model.

pub mod response;

pub use response::{parse_response, ParseError};
