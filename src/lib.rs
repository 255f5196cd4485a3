// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! httplab: interactive mock HTTP response editor.
//!
//! A terminal UI for authoring the status, headers, body and delay a stub server replies with,
//! while showing the most recent request that server received.

pub mod format;
pub mod layout;
pub mod model;
pub mod server;
pub mod shared;
pub mod tui;
