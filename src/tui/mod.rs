// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive response editor (ratatui + crossterm). All pane, focus and
//! response mutations happen on the thread running [`run`]; other execution contexts talk to it
//! through [`UiTask`]s.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    layout::Size,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tokio::{
    runtime::Handle,
    sync::mpsc::{UnboundedReceiver, UnboundedSender},
};

use crate::format::parse_response;
use crate::layout::LayoutError;
use crate::model::PaneName;
use crate::shared::SharedResponse;

mod editor;
mod focus;
mod keys;
mod notify;
mod pane;

pub use notify::{ui_channel, UiTask};

use editor::EditInput;
use focus::next_focus;
use keys::{translate_key, Action, Input, KEY_HINTS};
use notify::Notifier;
use pane::{Pane, PaneRegistry};

const FOCUS_COLOR: Color = Color::LightGreen;
const READ_ONLY_TITLE_COLOR: Color = Color::DarkGray;
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);
const SAVED_MESSAGE: &str = "Response saved!";

/// Runs the response editor until the quit key is pressed.
///
/// `runtime` drives the notification timers. `tasks` is the queue the stub server also sends
/// into; only this loop receives from it.
pub fn run(
    response: SharedResponse,
    runtime: Handle,
    tasks: (UnboundedSender<UiTask>, UnboundedReceiver<UiTask>),
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(response, runtime, tasks.0, tasks.1);

    while !app.should_quit {
        let size = terminal.size()?;
        app.layout(size.width, size.height)?;
        app.drain_tasks();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                // Resizes are picked up by the next layout pass.
                _ => {}
            }
        }
    }

    Ok(())
}

struct App {
    response: SharedResponse,
    panes: PaneRegistry,
    focus: Option<PaneName>,
    notifier: Notifier,
    tasks: UnboundedReceiver<UiTask>,
    should_quit: bool,
}

impl App {
    fn new(
        response: SharedResponse,
        runtime: Handle,
        tasks_tx: UnboundedSender<UiTask>,
        tasks_rx: UnboundedReceiver<UiTask>,
    ) -> Self {
        Self {
            response,
            panes: PaneRegistry::default(),
            focus: None,
            notifier: Notifier::new(runtime, tasks_tx),
            tasks: tasks_rx,
            should_quit: false,
        }
    }

    fn layout(&mut self, width: u16, height: u16) -> Result<(), LayoutError> {
        let response = self.response.get();
        self.panes.layout(width, height, &response)?;
        if self.focus.is_none() {
            self.focus = Some(PaneName::Status);
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match translate_key(key) {
            Some(Input::Action(Action::Cycle)) => self.cycle_focus(),
            Some(Input::Action(Action::Save)) => self.save(),
            Some(Input::Action(Action::Quit)) => self.should_quit = true,
            Some(Input::Edit(input)) => self.edit_focused(input),
            None => {}
        }
    }

    fn edit_focused(&mut self, input: EditInput) {
        let Some(focus) = self.focus else {
            return;
        };
        if let Some(pane) = self.panes.get_mut(focus) {
            pane.apply(input);
        }
    }

    fn cycle_focus(&mut self) {
        let next = next_focus(self.focus);
        tracing::debug!(from = ?self.focus, to = %next, "focus cycled");
        self.focus = Some(next);
    }

    /// Parses the response panes and, if every field is valid, replaces the shared response.
    ///
    /// Invalid input is reported in the info pane and leaves the shared response untouched.
    fn save(&mut self) {
        let parsed = parse_response(
            &self.panes.text(PaneName::Status),
            &self.panes.text(PaneName::Headers),
            &self.panes.text(PaneName::Body),
            &self.panes.text(PaneName::Delay),
        );
        match parsed {
            Ok(response) => {
                tracing::info!(
                    status = response.status(),
                    headers = response.headers().len(),
                    body_len = response.body().len(),
                    delay_ms = response.delay().as_millis() as u64,
                    "response saved"
                );
                self.response.replace(response);
                self.notify(SAVED_MESSAGE);
            }
            Err(err) => {
                tracing::info!(error = %err, "response rejected");
                self.notify(err.to_string());
            }
        }
    }

    fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "notify");
        if let Some(info) = self.panes.get_mut(PaneName::Info) {
            info.set_text(&message);
        }
        self.notifier.schedule_clear();
    }

    /// Applies every queued task. Returns how many were applied.
    fn drain_tasks(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(task) = self.tasks.try_recv() {
            self.apply_task(task);
            applied += 1;
        }
        applied
    }

    fn apply_task(&mut self, task: UiTask) {
        match task {
            UiTask::ClearInfo { generation } => {
                if self.notifier.take_clear(generation) {
                    if let Some(info) = self.panes.get_mut(PaneName::Info) {
                        info.clear();
                    }
                }
            }
            UiTask::DisplayRequest(dump) => {
                if let Some(request) = self.panes.get_mut(PaneName::Request) {
                    request.set_text(&dump.replace("\r\n", "\n"));
                }
            }
            UiTask::Notify(message) => self.notify(message),
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let focus = app.focus;
    let mut cursor = None;

    for pane in app.panes.iter_mut() {
        let focused = focus == Some(pane.name());
        let (scroll_y, scroll_x) = pane.scroll_to_cursor();
        let region = pane.region();

        let paragraph = Paragraph::new(pane_text(pane))
            .block(pane_block(pane, focused))
            .scroll((scroll_y, scroll_x));
        frame.render_widget(paragraph, region);

        if focused {
            let (row, col) = pane.buffer().cursor();
            let x = region.x + 1 + (col as u16).saturating_sub(scroll_x);
            let y = region.y + 1 + (row as u16).saturating_sub(scroll_y);
            cursor = Some((x, y));
        }
    }

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn pane_text(pane: &Pane) -> Text<'_> {
    let lines = pane.buffer().lines().iter().map(|line| Line::raw(line.as_str()));
    Text::from(lines.collect::<Vec<_>>())
}

fn pane_block(pane: &Pane, focused: bool) -> Block<'static> {
    let border_style = if focused { Style::default().fg(FOCUS_COLOR) } else { Style::default() };
    let title_style =
        if pane.editable() { Style::default() } else { Style::default().fg(READ_ONLY_TITLE_COLOR) };
    let mut block = Block::default().borders(Borders::ALL).border_style(border_style);
    if let Some(title) = pane.title() {
        block = block.title(Line::styled(format!(" {title} "), title_style));
    }
    if pane.name() == PaneName::Info {
        block = block.title_top(Line::from(KEY_HINTS).right_aligned());
    }
    block
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
