// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Focus cycling between panes.

use crate::model::PaneName;

/// Panes reachable with the cycle key, in cycling order.
pub(crate) const CYCLEABLE: [PaneName; 5] =
    [PaneName::Status, PaneName::Delay, PaneName::Headers, PaneName::Body, PaneName::Request];

/// The pane after `current`, wrapping around. Unknown or missing focus starts at the first pane.
pub(crate) fn next_focus(current: Option<PaneName>) -> PaneName {
    current
        .and_then(|current| CYCLEABLE.iter().position(|name| *name == current))
        .map(|idx| CYCLEABLE[(idx + 1) % CYCLEABLE.len()])
        .unwrap_or(CYCLEABLE[0])
}
