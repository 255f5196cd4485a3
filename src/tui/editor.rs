// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Httplab-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of httplab and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pane text buffers and the input policies that edit them.
//!
//! Policies only filter by character class. Whether the text means anything is decided when
//! the response is saved.

use crate::format::response::MAX_STATUS_DIGITS;

/// One key or character event, already stripped of terminal-library details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditInput {
    Char(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl EditInput {
    fn is_navigation(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Up | Self::Down | Self::Home | Self::End)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorPolicy {
    /// Cursor movement only; the text never changes.
    Navigation,
    /// ASCII digits only, at most [`MAX_STATUS_DIGITS`] of them.
    Numeric,
    FreeText,
}

impl EditorPolicy {
    /// Applies `input` to `buffer`. Returns `true` if the text changed.
    pub(crate) fn apply(self, buffer: &mut TextBuffer, input: EditInput) -> bool {
        if input.is_navigation() {
            buffer.navigate(input);
            return false;
        }

        match (self, input) {
            (Self::Navigation, _) => false,
            (Self::Numeric, EditInput::Char(ch)) => {
                if !ch.is_ascii_digit() || buffer.char_count() >= MAX_STATUS_DIGITS {
                    return false;
                }
                buffer.insert_char(ch);
                true
            }
            (Self::Numeric, EditInput::Backspace) => buffer.backspace(),
            (Self::Numeric, _) => false,
            (Self::FreeText, EditInput::Char(ch)) => {
                buffer.insert_char(ch);
                true
            }
            (Self::FreeText, EditInput::Newline) => {
                buffer.insert_newline();
                true
            }
            (Self::FreeText, EditInput::Backspace) => buffer.backspace(),
            (Self::FreeText, EditInput::Delete) => buffer.delete(),
            (Self::FreeText, _) => false,
        }
    }
}

/// Multi-line text with a `(row, column)` cursor counted in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self { lines: vec![String::new()], row: 0, col: 0 }
    }
}

impl TextBuffer {
    pub(crate) fn from_text(text: &str) -> Self {
        let mut buffer = Self::default();
        buffer.set_text(text);
        buffer
    }

    pub(crate) fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replaces the whole text and moves the cursor to the start.
    pub(crate) fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_owned).collect();
        self.row = 0;
        self.col = 0;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub(crate) fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    fn char_count(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).sum()
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_offset(&self, row: usize, col: usize) -> usize {
        let line = &self.lines[row];
        line.char_indices().nth(col).map(|(idx, _)| idx).unwrap_or(line.len())
    }

    fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.row, self.col);
        self.lines[self.row].insert(at, ch);
        self.col += 1;
    }

    fn insert_newline(&mut self) {
        let at = self.byte_offset(self.row, self.col);
        let tail = self.lines[self.row].split_off(at);
        self.lines.insert(self.row + 1, tail);
        self.row += 1;
        self.col = 0;
    }

    fn backspace(&mut self) -> bool {
        if self.col > 0 {
            self.col -= 1;
            let at = self.byte_offset(self.row, self.col);
            self.lines[self.row].remove(at);
            return true;
        }
        if self.row == 0 {
            return false;
        }
        let line = self.lines.remove(self.row);
        self.row -= 1;
        self.col = self.line_len(self.row);
        self.lines[self.row].push_str(&line);
        true
    }

    fn delete(&mut self) -> bool {
        if self.col < self.line_len(self.row) {
            let at = self.byte_offset(self.row, self.col);
            self.lines[self.row].remove(at);
            return true;
        }
        if self.row + 1 == self.lines.len() {
            return false;
        }
        let next = self.lines.remove(self.row + 1);
        self.lines[self.row].push_str(&next);
        true
    }

    fn navigate(&mut self, input: EditInput) {
        match input {
            EditInput::Left if self.col > 0 => self.col -= 1,
            EditInput::Left if self.row > 0 => {
                self.row -= 1;
                self.col = self.line_len(self.row);
            }
            EditInput::Right if self.col < self.line_len(self.row) => self.col += 1,
            EditInput::Right if self.row + 1 < self.lines.len() => {
                self.row += 1;
                self.col = 0;
            }
            EditInput::Up if self.row > 0 => {
                self.row -= 1;
                self.col = self.col.min(self.line_len(self.row));
            }
            EditInput::Down if self.row + 1 < self.lines.len() => {
                self.row += 1;
                self.col = self.col.min(self.line_len(self.row));
            }
            EditInput::Home => self.col = 0,
            EditInput::End => self.col = self.line_len(self.row),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EditInput, EditorPolicy, TextBuffer};

    fn type_str(policy: EditorPolicy, buffer: &mut TextBuffer, text: &str) {
        for ch in text.chars() {
            policy.apply(buffer, EditInput::Char(ch));
        }
    }

    #[test]
    fn numeric_accepts_only_digits() {
        let mut buffer = TextBuffer::default();
        type_str(EditorPolicy::Numeric, &mut buffer, "2a0 -4");
        assert_eq!(buffer.text(), "204");
    }

    #[test]
    fn numeric_stops_at_five_chars() {
        let mut buffer = TextBuffer::default();
        type_str(EditorPolicy::Numeric, &mut buffer, "1234567");
        assert_eq!(buffer.text(), "12345");

        assert!(EditorPolicy::Numeric.apply(&mut buffer, EditInput::Backspace));
        assert!(EditorPolicy::Numeric.apply(&mut buffer, EditInput::Char('9')));
        assert_eq!(buffer.text(), "12349");
    }

    #[test]
    fn numeric_inserts_at_cursor_and_ignores_newline() {
        let mut buffer = TextBuffer::from_text("24");
        EditorPolicy::Numeric.apply(&mut buffer, EditInput::Right);
        assert!(EditorPolicy::Numeric.apply(&mut buffer, EditInput::Char('0')));
        assert!(!EditorPolicy::Numeric.apply(&mut buffer, EditInput::Newline));
        assert!(!EditorPolicy::Numeric.apply(&mut buffer, EditInput::Delete));
        assert_eq!(buffer.text(), "204");
    }

    #[test]
    fn navigation_moves_cursor_without_editing() {
        let mut buffer = TextBuffer::from_text("GET / HTTP/1.1\nHost: x");
        for input in [EditInput::Char('z'), EditInput::Backspace, EditInput::Newline] {
            assert!(!EditorPolicy::Navigation.apply(&mut buffer, input));
        }
        EditorPolicy::Navigation.apply(&mut buffer, EditInput::Down);
        EditorPolicy::Navigation.apply(&mut buffer, EditInput::End);
        assert_eq!(buffer.cursor(), (1, 7));
        EditorPolicy::Navigation.apply(&mut buffer, EditInput::Down);
        assert_eq!(buffer.cursor(), (1, 7));
        assert_eq!(buffer.text(), "GET / HTTP/1.1\nHost: x");
    }

    #[test]
    fn free_text_edits_across_lines() {
        let mut buffer = TextBuffer::default();
        type_str(EditorPolicy::FreeText, &mut buffer, "A: 1");
        EditorPolicy::FreeText.apply(&mut buffer, EditInput::Newline);
        type_str(EditorPolicy::FreeText, &mut buffer, "B: 2");
        assert_eq!(buffer.text(), "A: 1\nB: 2");

        EditorPolicy::FreeText.apply(&mut buffer, EditInput::Home);
        EditorPolicy::FreeText.apply(&mut buffer, EditInput::Backspace);
        assert_eq!(buffer.text(), "A: 1B: 2");
        assert_eq!(buffer.cursor(), (0, 4));

        EditorPolicy::FreeText.apply(&mut buffer, EditInput::Delete);
        assert_eq!(buffer.text(), "A: 1: 2");
    }

    #[test]
    fn free_text_handles_multibyte_chars() {
        let mut buffer = TextBuffer::from_text("héllo");
        for _ in 0..2 {
            EditorPolicy::FreeText.apply(&mut buffer, EditInput::Right);
        }
        EditorPolicy::FreeText.apply(&mut buffer, EditInput::Backspace);
        assert_eq!(buffer.text(), "hllo");
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut buffer = TextBuffer::from_text("short\nlonger line");
        EditorPolicy::FreeText.apply(&mut buffer, EditInput::Down);
        EditorPolicy::FreeText.apply(&mut buffer, EditInput::End);
        EditorPolicy::FreeText.apply(&mut buffer, EditInput::Up);
        assert_eq!(buffer.cursor(), (0, 5));
    }

    #[test]
    fn set_text_resets_cursor() {
        let mut buffer = TextBuffer::from_text("a\nb");
        EditorPolicy::FreeText.apply(&mut buffer, EditInput::Down);
        buffer.set_text("fresh");
        assert_eq!(buffer.cursor(), (0, 0));
        assert!(!buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn set_text_keeps_carriage_returns() {
        let buffer = TextBuffer::from_text("a\r\nb");
        assert_eq!(buffer.lines(), ["a\r", "b"]);
        assert_eq!(buffer.text(), "a\r\nb");
    }
}
