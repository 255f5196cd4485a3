// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Named panes and the registry that positions them.

use std::collections::BTreeMap;

use ratatui::layout::Rect;

use super::editor::{EditInput, EditorPolicy, TextBuffer};
use crate::format::response::{export_body, export_delay, export_headers, export_status};
use crate::layout::{plan_panes, LayoutError};
use crate::model::{PaneName, Response};

#[derive(Debug, Clone)]
pub(crate) struct Pane {
    name: PaneName,
    region: Rect,
    editable: bool,
    policy: EditorPolicy,
    title: Option<&'static str>,
    buffer: TextBuffer,
    scroll: (u16, u16),
}

impl Pane {
    fn create(name: PaneName, region: Rect, response: &Response) -> Self {
        use EditorPolicy::{FreeText, Navigation, Numeric};

        let (title, editable, policy, text) = match name {
            PaneName::Request => (Some("Request"), false, Navigation, String::new()),
            PaneName::Status => (Some("Status"), true, Numeric, export_status(response)),
            PaneName::Delay => (Some("Delay (ms)"), true, FreeText, export_delay(response)),
            PaneName::Headers => (Some("Headers"), true, FreeText, export_headers(response)),
            PaneName::Body => (Some("Body"), true, FreeText, export_body(response)),
            PaneName::Info => (None, false, Navigation, String::new()),
        };
        Self {
            name,
            region,
            editable,
            policy,
            title,
            buffer: TextBuffer::from_text(&text),
            scroll: (0, 0),
        }
    }

    pub(crate) fn name(&self) -> PaneName {
        self.name
    }

    pub(crate) fn region(&self) -> Rect {
        self.region
    }

    pub(crate) fn editable(&self) -> bool {
        self.editable
    }

    #[cfg(test)]
    pub(crate) fn policy(&self) -> EditorPolicy {
        self.policy
    }

    pub(crate) fn title(&self) -> Option<&'static str> {
        self.title
    }

    pub(crate) fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub(crate) fn text(&self) -> String {
        self.buffer.text()
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.scroll = (0, 0);
    }

    pub(crate) fn clear(&mut self) {
        self.buffer.clear();
        self.scroll = (0, 0);
    }

    pub(crate) fn apply(&mut self, input: EditInput) -> bool {
        self.policy.apply(&mut self.buffer, input)
    }

    /// Adjusts the scroll offset so the cursor is inside the bordered content area and returns
    /// it as `(rows, columns)`.
    pub(crate) fn scroll_to_cursor(&mut self) -> (u16, u16) {
        let inner_height = usize::from(self.region.height.saturating_sub(2)).max(1);
        let inner_width = usize::from(self.region.width.saturating_sub(2)).max(1);
        let (row, col) = self.buffer.cursor();
        let (scroll_y, scroll_x) = self.scroll;
        self.scroll = (
            follow(usize::from(scroll_y), row, inner_height),
            follow(usize::from(scroll_x), col, inner_width),
        );
        self.scroll
    }
}

fn follow(offset: usize, position: usize, viewport: usize) -> u16 {
    let offset = if position < offset {
        position
    } else if position >= offset + viewport {
        position + 1 - viewport
    } else {
        offset
    };
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Owns every pane. Panes are created on the first layout pass and only repositioned after that.
#[derive(Debug, Clone, Default)]
pub(crate) struct PaneRegistry {
    panes: BTreeMap<PaneName, Pane>,
}

impl PaneRegistry {
    /// Positions all panes for a `width` x `height` terminal.
    ///
    /// Missing panes are created and seeded from `response`; existing panes keep their text.
    pub(crate) fn layout(
        &mut self,
        width: u16,
        height: u16,
        response: &Response,
    ) -> Result<(), LayoutError> {
        for (name, region) in plan_panes(width, height)? {
            self.panes
                .entry(name)
                .and_modify(|pane| pane.region = region)
                .or_insert_with(|| Pane::create(name, region, response));
        }
        Ok(())
    }

    pub(crate) fn get(&self, name: PaneName) -> Option<&Pane> {
        self.panes.get(&name)
    }

    pub(crate) fn get_mut(&mut self, name: PaneName) -> Option<&mut Pane> {
        self.panes.get_mut(&name)
    }

    /// Current text of a pane, or an empty string if it has not been laid out yet.
    pub(crate) fn text(&self, name: PaneName) -> String {
        self.get(name).map(Pane::text).unwrap_or_default()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pane> {
        self.panes.values_mut()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }
}
