// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Screen layout.
//!
//! [`SplitLayout`] partitions one axis; [`plan_panes`] combines splits into pane regions.

pub mod panes;
pub mod split;

pub use panes::{plan_panes, LayoutError};
pub use split::SplitLayout;
