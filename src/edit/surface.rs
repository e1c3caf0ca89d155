// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::TextChange;

/// What the text input currently shows, and where its caret is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSurface {
    text: String,
    caret: usize,
    anchor: usize,
}

impl EditSurface {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn selection(&self) -> std::ops::Range<usize> {
        self.caret.min(self.anchor)..self.caret.max(self.anchor)
    }

    /// The change typing `text` would make: it replaces the selection.
    pub fn typing(&self, text: &str) -> TextChange {
        TextChange::replace(self.text.as_str(), self.selection(), text)
    }

    /// The change a backspace would make, if any: it deletes the selection,
    /// or else the char before the caret.
    pub fn backspacing(&self) -> Option<TextChange> {
        let selection = self.selection();
        if !selection.is_empty() {
            return Some(TextChange::delete(self.text.as_str(), selection));
        }
        if self.caret == 0 {
            return None;
        }
        Some(TextChange::delete(self.text.as_str(), self.caret - 1..self.caret))
    }

    /// The change selecting the whole text would make.
    pub fn selecting_all(&self) -> TextChange {
        TextChange::select(self.text.as_str(), self.text.chars().count(), 0)
    }

    pub(crate) fn commit(&mut self, change: &TextChange) {
        self.text = change.control_new_text();
        self.caret = change.caret();
        self.anchor = change.anchor();
    }

    /// Shows `text` with the caret at its end.
    pub(crate) fn show(&mut self, text: String) {
        self.caret = text.chars().count();
        self.anchor = self.caret;
        self.text = text;
    }

    /// Shows `text` with the caret at its start.
    pub(crate) fn reset(&mut self, text: String) {
        self.text = text;
        self.caret = 0;
        self.anchor = 0;
    }
}
