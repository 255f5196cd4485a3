// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pane geometry.
//!
//! The request pane takes the left 70% of the screen, the response panes (status, delay,
//! headers, body) are stacked on the right, and a three-row info pane spans the bottom.

use std::{error::Error, fmt};

use ratatui::layout::Rect;

use super::SplitLayout;
use crate::model::PaneName;

const INFO_HEIGHT: u16 = 3;
const REQUEST_WIDTH_PERCENT: u16 = 70;
const STATUS_HEIGHT: u16 = 3;
const DELAY_HEIGHT: u16 = 3;
const HEADERS_HEIGHT_PERCENT: u16 = 40;
/// A bordered pane needs one row/column of content between its borders.
const MIN_PANE_EXTENT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    TerminalTooSmall { width: u16, height: u16, pane: PaneName },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TerminalTooSmall { width, height, pane } => {
                write!(f, "terminal too small ({width}x{height}): no room for the {pane} pane")
            }
        }
    }
}

impl Error for LayoutError {}

/// Computes the region of every pane for a terminal of the given size.
///
/// Regions never overlap and together cover the whole screen.
pub fn plan_panes(width: u16, height: u16) -> Result<[(PaneName, Rect); 6], LayoutError> {
    let mut split_y = SplitLayout::new(height).fixed([height.saturating_sub(INFO_HEIGHT)]);
    let main_bottom = split_y.next();
    let info_bottom = split_y.next();

    let mut split_x = SplitLayout::new(width).relative([REQUEST_WIDTH_PERCENT]);
    let request_right = split_x.next();
    let response_right = split_x.next();
    let response_width = response_right - request_right;

    let mut stack = SplitLayout::new(main_bottom)
        .fixed([STATUS_HEIGHT, DELAY_HEIGHT])
        .relative([HEADERS_HEIGHT_PERCENT]);
    let mut rows = [0u16; 5];
    for row in rows.iter_mut().skip(1) {
        *row = stack.next();
    }
    let response_row = |idx: usize| {
        Rect::new(request_right, rows[idx], response_width, rows[idx + 1] - rows[idx])
    };

    let plan = [
        (PaneName::Request, Rect::new(0, 0, request_right, main_bottom)),
        (PaneName::Status, response_row(0)),
        (PaneName::Delay, response_row(1)),
        (PaneName::Headers, response_row(2)),
        (PaneName::Body, response_row(3)),
        (PaneName::Info, Rect::new(0, main_bottom, width, info_bottom - main_bottom)),
    ];

    for (pane, region) in &plan {
        if region.width < MIN_PANE_EXTENT || region.height < MIN_PANE_EXTENT {
            return Err(LayoutError::TerminalTooSmall { width, height, pane: *pane });
        }
    }

    Ok(plan)
}
