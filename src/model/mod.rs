// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: the mock response and the pane names of the editor.

pub mod headers;
pub mod pane;
pub mod response;

pub use headers::Headers;
pub use pane::PaneName;
pub use response::Response;
