// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::editor::EditInput;

/// Editor-wide commands, independent of the focused pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Cycle,
    Save,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    Action(Action),
    Edit(EditInput),
}

pub(crate) const KEY_HINTS: &str = " Tab: next pane | Ctrl+S: save | Ctrl+C: quit ";

/// Maps a key press to an action or an edit. Unbound keys map to `None`.
pub(crate) fn translate_key(key: KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Input::Action(Action::Save)),
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('q') | KeyCode::Char('Q') => {
                Some(Input::Action(Action::Quit))
            }
            _ => None,
        };
    }

    let edit = match key.code {
        KeyCode::Tab => return Some(Input::Action(Action::Cycle)),
        KeyCode::Char(ch) => EditInput::Char(ch),
        KeyCode::Enter => EditInput::Newline,
        KeyCode::Backspace => EditInput::Backspace,
        KeyCode::Delete => EditInput::Delete,
        KeyCode::Left => EditInput::Left,
        KeyCode::Right => EditInput::Right,
        KeyCode::Up => EditInput::Up,
        KeyCode::Down => EditInput::Down,
        KeyCode::Home => EditInput::Home,
        KeyCode::End => EditInput::End,
        _ => return None,
    };
    Some(Input::Edit(edit))
}
