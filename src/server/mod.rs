// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stub HTTP server.
//!
//! Answers every request with the current [`SharedResponse`] after sleeping for its delay, and
//! posts a plain-text dump of each inbound request to the UI loop. Shutdown cuts pending delays
//! short so in-flight requests finish right away.

use std::{future::Future, io};

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::{request::Parts, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response as HttpResponse},
    Router,
};
use tokio::{
    net::TcpListener,
    sync::{mpsc::UnboundedSender, watch},
};

use crate::model::Response;
use crate::shared::SharedResponse;
use crate::tui::UiTask;

pub const DEFAULT_PORT: u16 = 10080;
/// Request bodies beyond this size are dropped from the dump.
const MAX_REQUEST_BODY: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone)]
struct ServerState {
    response: SharedResponse,
    tasks: UnboundedSender<UiTask>,
    closing: watch::Receiver<bool>,
}

/// Builds the stub router. Delays end early once `closing` turns `true`.
pub fn router(
    response: SharedResponse,
    tasks: UnboundedSender<UiTask>,
    closing: watch::Receiver<bool>,
) -> Router {
    Router::new().fallback(serve_mock).with_state(ServerState { response, tasks, closing })
}

/// Serves the stub on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    response: SharedResponse,
    tasks: UnboundedSender<UiTask>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "stub server listening");
    }
    let (closing_tx, closing_rx) = watch::channel(false);
    let shutdown = async move {
        shutdown.await;
        let _ = closing_tx.send(true);
    };
    axum::serve(listener, router(response, tasks, closing_rx))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn serve_mock(State(state): State<ServerState>, request: Request) -> HttpResponse {
    let (parts, body) = request.into_parts();
    let body = match to_bytes(body, MAX_REQUEST_BODY).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read request body");
            Bytes::new()
        }
    };
    tracing::info!(method = %parts.method, uri = %parts.uri, body_len = body.len(), "request");
    let _ = state.tasks.send(UiTask::DisplayRequest(dump_request(&parts, &body)));

    let response = state.response.get();
    if !response.delay().is_zero() {
        let mut closing = state.closing.clone();
        tokio::select! {
            () = tokio::time::sleep(response.delay()) => {}
            _ = closing.wait_for(|closing| *closing) => {
                tracing::debug!("shutting down, reply delay cut short");
            }
        }
    }

    match build_response(&response) {
        Ok(reply) => reply,
        Err(status) => {
            let message = format!("Status {status} is not a valid HTTP code, replied 500");
            tracing::warn!(status, "invalid status code");
            let _ = state.tasks.send(UiTask::Notify(message));
            (StatusCode::INTERNAL_SERVER_ERROR, "httplab: invalid status code\n").into_response()
        }
    }
}

/// Renders a request as `METHOD URI VERSION`, its headers, a blank line and the body.
pub fn dump_request(parts: &Parts, body: &[u8]) -> String {
    let mut dump = format!("{} {} {:?}\n", parts.method, parts.uri, parts.version);
    for (name, value) in &parts.headers {
        dump.push_str(name.as_str());
        dump.push_str(": ");
        dump.push_str(&String::from_utf8_lossy(value.as_bytes()));
        dump.push('\n');
    }
    dump.push('\n');
    dump.push_str(&String::from_utf8_lossy(body));
    dump
}

/// Converts the mock response into an HTTP reply.
///
/// Fails with the status code if HTTP cannot express it. Headers whose name or value is not
/// valid in HTTP are skipped.
pub fn build_response(response: &Response) -> Result<HttpResponse, u32> {
    let status = u16::try_from(response.status())
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or(response.status())?;

    let mut reply = HttpResponse::new(Body::from(response.body().to_vec()));
    *reply.status_mut() = status;
    for (key, value) in response.headers().pairs() {
        match (HeaderName::from_bytes(key.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                reply.headers_mut().append(name, value);
            }
            _ => tracing::warn!(header = key, "skipping header that is not valid HTTP"),
        }
    }
    Ok(reply)
}
