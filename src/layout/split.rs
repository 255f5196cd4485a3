// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Split layout calculator.
//!
//! Partitions an integer extent into consecutive regions. Directives are queued with
//! [`SplitLayout::fixed`] and [`SplitLayout::relative`] and consumed one per
//! [`SplitLayout::next`] call; each call yields the next partition boundary.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitDirective {
    /// Reserve exactly this many units after the current boundary.
    Fixed(u16),
    /// Reserve this percentage of the total extent after the current boundary.
    Relative(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLayout {
    total: u16,
    cursor: u16,
    pending: VecDeque<SplitDirective>,
}

impl SplitLayout {
    pub fn new(total: u16) -> Self {
        Self { total, cursor: 0, pending: VecDeque::new() }
    }

    /// Queues one fixed-size region per entry, in order.
    pub fn fixed(mut self, sizes: impl IntoIterator<Item = u16>) -> Self {
        self.pending.extend(sizes.into_iter().map(SplitDirective::Fixed));
        self
    }

    /// Queues one region per entry, each sized as a floor-rounded percentage of the total.
    pub fn relative(mut self, percents: impl IntoIterator<Item = u16>) -> Self {
        self.pending.extend(percents.into_iter().map(SplitDirective::Relative));
        self
    }

    #[cfg(test)]
    pub(crate) fn total(&self) -> u16 {
        self.total
    }

    /// The last boundary produced, or 0 before the first [`SplitLayout::next`].
    pub fn current(&self) -> u16 {
        self.cursor
    }

    /// Consumes the next directive and returns the boundary it ends at.
    ///
    /// Once the directives run out the remaining space belongs to the last region, so the
    /// total extent is returned. Reservations larger than the remaining extent are clamped.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u16 {
        let reserved = match self.pending.pop_front() {
            Some(SplitDirective::Fixed(size)) => u32::from(size),
            Some(SplitDirective::Relative(percent)) => {
                u32::from(self.total) * u32::from(percent) / 100
            }
            None => u32::from(self.remaining()),
        };
        let reserved = reserved.min(u32::from(self.remaining())) as u16;
        self.cursor += reserved;
        self.cursor
    }

    fn remaining(&self) -> u16 {
        self.total - self.cursor
    }
}
