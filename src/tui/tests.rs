// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Position, Terminal};
use tokio::runtime::Handle;

use super::{draw, ui_channel, App, UiTask, SAVED_MESSAGE};
use crate::model::{Headers, PaneName, Response};
use crate::shared::SharedResponse;

fn app_with(response: Response) -> (App, SharedResponse) {
    let shared = SharedResponse::new(response);
    let (tx, rx) = ui_channel();
    let mut app = App::new(shared.clone(), Handle::current(), tx, rx);
    app.layout(100, 30).expect("layout");
    (app, shared)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn save(app: &mut App) {
    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
}

fn set_text(app: &mut App, name: PaneName, text: &str) {
    app.panes.get_mut(name).expect("pane").set_text(text);
}

fn info(app: &App) -> String {
    app.panes.text(PaneName::Info)
}

fn previous_response() -> Response {
    let headers: Headers = [("A", "B")].into_iter().collect();
    Response::new(404, headers, "x", Duration::from_millis(50))
}

#[tokio::test]
async fn first_layout_focuses_status() {
    let (app, _) = app_with(Response::default());
    assert_eq!(app.focus, Some(PaneName::Status));
    assert_eq!(app.panes.text(PaneName::Status), "200");
    assert_eq!(app.panes.text(PaneName::Headers), "X-Server: HTTPLab");
    assert_eq!(app.panes.text(PaneName::Body), "Hello, World");
    assert_eq!(app.panes.text(PaneName::Delay), "0");
}

#[tokio::test]
async fn tab_cycles_focus_and_wraps() {
    let (mut app, _) = app_with(Response::default());
    let mut seen = Vec::new();
    for _ in 0..5 {
        press(&mut app, KeyCode::Tab);
        seen.push(app.focus.expect("focus"));
    }
    assert_eq!(
        seen,
        vec![
            PaneName::Delay,
            PaneName::Headers,
            PaneName::Body,
            PaneName::Request,
            PaneName::Status
        ]
    );
}

#[tokio::test]
async fn relayout_keeps_focus_and_edits() {
    let (mut app, _) = app_with(Response::default());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('5'));

    app.layout(120, 40).expect("relayout");
    assert_eq!(app.focus, Some(PaneName::Delay));
    assert_eq!(app.panes.text(PaneName::Delay), "50");
}

#[tokio::test]
async fn status_pane_only_takes_five_digits() {
    let (mut app, _) = app_with(Response::default());
    for ch in ['x', '9', '-', '5', '1'] {
        press(&mut app, KeyCode::Char(ch));
    }
    assert_eq!(app.panes.text(PaneName::Status), "95200");
}

#[tokio::test]
async fn request_pane_is_read_only() {
    let (mut app, _) = app_with(Response::default());
    app.apply_task(UiTask::DisplayRequest("GET / HTTP/1.1".to_owned()));
    app.focus = Some(PaneName::Request);

    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.panes.text(PaneName::Request), "GET / HTTP/1.1");
}

#[tokio::test]
async fn valid_save_replaces_response_and_notifies() {
    let (mut app, shared) = app_with(Response::default());
    set_text(&mut app, PaneName::Status, "201");
    set_text(&mut app, PaneName::Headers, "X-Server: HTTPLab\nFoo: Bar\n\nFoo: Baz");
    set_text(&mut app, PaneName::Body, "{\"ok\":true}");
    set_text(&mut app, PaneName::Delay, "100");

    save(&mut app);

    let saved = shared.get();
    assert_eq!(saved.status(), 201);
    assert_eq!(
        saved.headers().pairs().collect::<Vec<_>>(),
        vec![("X-Server", "HTTPLab"), ("Foo", "Bar"), ("Foo", "Baz")]
    );
    assert_eq!(saved.body(), b"{\"ok\":true}");
    assert_eq!(saved.delay(), Duration::from_millis(100));
    assert_eq!(info(&app), SAVED_MESSAGE);
}

#[tokio::test]
async fn failed_save_leaves_previous_response_untouched() {
    let (mut app, shared) = app_with(previous_response());
    set_text(&mut app, PaneName::Status, "abc");
    set_text(&mut app, PaneName::Headers, "C: D");
    set_text(&mut app, PaneName::Body, "y");
    set_text(&mut app, PaneName::Delay, "75");

    save(&mut app);
    assert_eq!(*shared.get(), previous_response());
    assert!(info(&app).contains("'abc'"), "info was {:?}", info(&app));

    set_text(&mut app, PaneName::Status, "202");
    save(&mut app);
    let headers: Headers = [("C", "D")].into_iter().collect();
    assert_eq!(*shared.get(), Response::new(202, headers, "y", Duration::from_millis(75)));
}

#[tokio::test]
async fn invalid_header_and_delay_are_reported() {
    let (mut app, shared) = app_with(previous_response());
    set_text(&mut app, PaneName::Headers, "A: B\nNoColonHere");
    save(&mut app);
    assert!(info(&app).contains("NoColonHere"));
    assert_eq!(*shared.get(), previous_response());

    set_text(&mut app, PaneName::Headers, "A: B");
    set_text(&mut app, PaneName::Delay, "-5");
    save(&mut app);
    assert!(info(&app).contains("'-5'"));
    assert_eq!(*shared.get(), previous_response());
}

#[tokio::test(start_paused = true)]
async fn repeated_notifications_clear_once_after_the_last() {
    let (mut app, _) = app_with(Response::default());

    app.notify("first");
    tokio::time::sleep(Duration::from_secs(1)).await;
    app.notify("second");

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert_eq!(app.drain_tasks(), 0);
    assert_eq!(info(&app), "second");

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(app.drain_tasks(), 1);
    assert_eq!(info(&app), "");

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(app.drain_tasks(), 0);
}

#[tokio::test]
async fn stale_clear_does_not_erase_newer_message() {
    let (mut app, _) = app_with(Response::default());
    app.notify("first");
    app.notify("second");

    app.apply_task(UiTask::ClearInfo { generation: 1 });
    assert_eq!(info(&app), "second");
}

#[tokio::test]
async fn server_tasks_update_request_and_info() {
    let (mut app, _) = app_with(Response::default());
    set_text(&mut app, PaneName::Body, "draft");

    let (tx, rx) = ui_channel();
    app.tasks = rx;
    tx.send(UiTask::DisplayRequest("POST /hook HTTP/1.1\n\npayload".to_owned())).expect("send");
    tx.send(UiTask::Notify("status 99999 is not a valid HTTP code".to_owned())).expect("send");

    assert_eq!(app.drain_tasks(), 2);
    assert_eq!(app.panes.text(PaneName::Request), "POST /hook HTTP/1.1\n\npayload");
    assert_eq!(info(&app), "status 99999 is not a valid HTTP code");
    assert_eq!(app.panes.text(PaneName::Body), "draft");
}

#[tokio::test]
async fn unedited_save_keeps_body_bytes() {
    let seeded = Response::new(200, Headers::new(), "a\r\nb", Duration::ZERO);
    let (mut app, shared) = app_with(seeded.clone());

    save(&mut app);
    assert_eq!(info(&app), SAVED_MESSAGE);
    assert_eq!(shared.get().body(), b"a\r\nb");
    assert_eq!(*shared.get(), seeded);
}

#[tokio::test]
async fn request_dump_drops_carriage_returns() {
    let (mut app, _) = app_with(Response::default());
    app.apply_task(UiTask::DisplayRequest("POST / HTTP/1.1\n\nk=v\r\nx=y".to_owned()));
    assert_eq!(app.panes.text(PaneName::Request), "POST / HTTP/1.1\n\nk=v\nx=y");
}

#[tokio::test]
async fn quit_key_stops_loop() {
    let (mut app, _) = app_with(Response::default());
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[tokio::test]
async fn draw_renders_titles_text_and_cursor() {
    let (mut app, _) = app_with(Response::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let row = |y: u16| (0..100u16).map(|x| buffer[(x, y)].symbol().to_owned()).collect::<String>();

    assert!(row(0).contains("Request"));
    assert!(row(0).contains("Status"));
    assert!(row(1).contains("200"));
    assert!(row(4).contains("│0"));
    assert!(row(27).contains("Ctrl+S: save"));
    assert_eq!(terminal.get_cursor_position().expect("cursor"), Position::new(71, 1));
}
