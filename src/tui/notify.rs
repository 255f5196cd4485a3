// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Transient notifications in the info pane.
//!
//! Every notification schedules its own clear on the tokio runtime. The timer never touches the
//! panes: it only sends [`UiTask::ClearInfo`] back to the UI loop, which drops clears that a
//! newer notification has superseded.

use std::time::Duration;

use tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

pub(crate) const NOTIFY_TTL: Duration = Duration::from_secs(3);

/// Work for the UI loop, queued from other execution contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiTask {
    /// Clear the info pane if `generation` is still the latest notification.
    ClearInfo { generation: u64 },
    /// Replace the request pane with a description of an inbound request.
    DisplayRequest(String),
    /// Show a message in the info pane.
    Notify(String),
}

pub fn ui_channel() -> (UnboundedSender<UiTask>, UnboundedReceiver<UiTask>) {
    mpsc::unbounded_channel()
}

#[derive(Debug)]
pub(crate) struct Notifier {
    runtime: Handle,
    tasks: UnboundedSender<UiTask>,
    ttl: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Notifier {
    pub(crate) fn new(runtime: Handle, tasks: UnboundedSender<UiTask>) -> Self {
        Self { runtime, tasks, ttl: NOTIFY_TTL, generation: 0, pending: None }
    }

    /// Cancels any pending clear and schedules a new one `ttl` from now.
    pub(crate) fn schedule_clear(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        self.generation = self.generation.wrapping_add(1);

        let generation = self.generation;
        let tasks = self.tasks.clone();
        let ttl = self.ttl;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            let _ = tasks.send(UiTask::ClearInfo { generation });
        }));
    }

    /// Returns whether a clear for `generation` should still be applied.
    pub(crate) fn take_clear(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            tracing::debug!(generation, current = self.generation, "dropping stale info clear");
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
