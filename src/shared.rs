// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared response state for cross-component coordination.
//!
//! The editor is the only writer: a successful save swaps in a whole new [`Response`]. The stub
//! server reads snapshots concurrently and never observes a half-applied save.

use std::sync::{Arc, PoisonError, RwLock};

use crate::model::Response;

#[derive(Debug, Clone, Default)]
pub struct SharedResponse {
    inner: Arc<RwLock<Arc<Response>>>,
}

impl SharedResponse {
    pub fn new(response: Response) -> Self {
        Self { inner: Arc::new(RwLock::new(Arc::new(response))) }
    }

    /// A snapshot of the current response. Later saves do not affect it.
    pub fn get(&self) -> Arc<Response> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn replace(&self, response: Response) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(response);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::SharedResponse;
    use crate::model::{Headers, Response};

    #[test]
    fn replace_swaps_whole_response_and_keeps_old_snapshots() {
        let shared = SharedResponse::default();
        let before = shared.get();

        let next = Response::new(503, Headers::new(), "down", Duration::from_millis(10));
        shared.clone().replace(next.clone());

        assert_eq!(*shared.get(), next);
        assert_eq!(*before, Response::default());
    }
}
