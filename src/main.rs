// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! httplab CLI entrypoint.
//!
//! Runs the response editor and serves the edited response over HTTP at
//! `http://127.0.0.1:<port>/` (any path, any method).

use std::error::Error;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use httplab::format::{parse_response, ParseError};
use httplab::model::{response::DEFAULT_BODY, Response};
use httplab::server::{self, DEFAULT_PORT};
use httplab::shared::SharedResponse;
use httplab::tui::{ui_channel, UiTask};
use tokio::{runtime::Handle, sync::oneshot};
use tracing_subscriber::EnvFilter;

const LOG_FILTER_ENV: &str = "HTTPLAB_LOG";
const LOG_FILE_ENV: &str = "HTTPLAB_LOG_FILE";
const DEFAULT_HEADER: &str = "X-Server: HTTPLab";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--port <port>] [--status <code>] [--header <key: value>]... [--body <text>] [--delay <ms>]\n\nServes the edited response at `http://127.0.0.1:<port>/` (default port {DEFAULT_PORT}).\n--header may be repeated; each value is one `key: value` line.\n\nKeys: Tab cycles panes, Ctrl+S saves the response, Ctrl+C quits.\n\nLogging is off unless {LOG_FILE_ENV}=<path> is set; {LOG_FILTER_ENV} sets the filter (default `info`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    help: bool,
    port: Option<u16>,
    status: Option<String>,
    headers: Vec<String>,
    body: Option<String>,
    delay: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    fn set_once(slot: &mut Option<String>, value: Option<String>) -> Result<(), ()> {
        if slot.is_some() {
            return Err(());
        }
        *slot = Some(value.ok_or(())?);
        Ok(())
    }

    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--port" | "-p" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            "--status" => set_once(&mut options.status, args.next())?,
            "--body" => set_once(&mut options.body, args.next())?,
            "--delay" => set_once(&mut options.delay, args.next())?,
            "--header" => options.headers.push(args.next().ok_or(())?),
            _ => return Err(()),
        }
    }

    Ok(options)
}

/// Builds the startup response with the same validation the editor applies on save.
fn initial_response(options: &CliOptions) -> Result<Response, ParseError> {
    let headers = if options.headers.is_empty() {
        DEFAULT_HEADER.to_owned()
    } else {
        options.headers.join("\n")
    };
    parse_response(
        options.status.as_deref().unwrap_or("200"),
        &headers,
        options.body.as_deref().unwrap_or(DEFAULT_BODY),
        options.delay.as_deref().unwrap_or("0"),
    )
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        // The alternate screen owns stdout/stderr.
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::sink).try_init();
        }
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "httplab".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };
        if options.help {
            print_usage(&program);
            return Ok(());
        }

        init_logging()?;
        let response = SharedResponse::new(initial_response(&options)?);
        let port = options.port.unwrap_or(DEFAULT_PORT);

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
            let (tasks_tx, tasks_rx) = ui_channel();
            let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

            let server_handle = {
                let response = response.clone();
                let tasks = tasks_tx.clone();
                tokio::spawn(async move {
                    let shutdown = async move {
                        let _ = shutdown_rx.await;
                    };
                    if let Err(err) = server::serve(listener, response, tasks.clone(), shutdown).await
                    {
                        tracing::error!(error = %err, "stub server failed");
                        let _ = tasks.send(UiTask::Notify(format!("Server error: {err}")));
                    }
                })
            };

            let runtime_handle = Handle::current();
            let tui_join = tokio::task::spawn_blocking(move || {
                httplab::tui::run(response, runtime_handle, (tasks_tx, tasks_rx))
                    .map_err(|err| err.to_string())
            })
            .await;

            let _ = shutdown_tx.send(());
            let _ = server_handle.await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| {
                Box::new(io::Error::new(io::ErrorKind::Other, err)) as Box<dyn Error>
            })?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("httplab: {err}");
        std::process::exit(1);
    }
}
