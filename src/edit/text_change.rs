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

use std::ops::Range;

use crate::{helper_constants::PLUS_SIGN, string_util::byte_offset};

/// A pending change of the visible text, before it is committed.
///
/// `range` is the span of `control_text` being replaced by `text`;
/// `caret` and `anchor` are the selection once the change is applied.
/// All positions count chars, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    control_text: String,
    range: Range<usize>,
    text: String,
    caret: usize,
    anchor: usize,
}

impl TextChange {
    /// Creates a change, clamping `range` to `control_text`.
    pub fn new(
        control_text: impl Into<String>,
        range: Range<usize>,
        text: impl Into<String>,
        caret: usize,
        anchor: usize,
    ) -> Self {
        let control_text = control_text.into();
        let len = control_text.chars().count();
        let end = range.end.min(len);
        let start = range.start.min(end);
        Self {
            control_text,
            range: start..end,
            text: text.into(),
            caret,
            anchor,
        }
    }

    /// Replaces `range` with `text`, leaving the caret right after it.
    pub fn replace(control_text: impl Into<String>, range: Range<usize>, text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = range.start + text.chars().count();
        Self::new(control_text, range, text, caret, caret)
    }

    pub fn insert(control_text: impl Into<String>, position: usize, text: impl Into<String>) -> Self {
        Self::replace(control_text, position..position, text)
    }

    pub fn delete(control_text: impl Into<String>, range: Range<usize>) -> Self {
        Self::replace(control_text, range, String::new())
    }

    /// A change that only moves the caret or selection.
    pub fn select(control_text: impl Into<String>, caret: usize, anchor: usize) -> Self {
        Self::new(control_text, caret..caret, String::new(), caret, anchor)
    }

    /// The text before the change.
    pub fn control_text(&self) -> &str {
        &self.control_text
    }

    /// The text once the change is applied.
    pub fn control_new_text(&self) -> String {
        let start = byte_offset(&self.control_text, self.range.start);
        let end = byte_offset(&self.control_text, self.range.end);
        let mut new_text = self.control_text.clone();
        new_text.replace_range(start..end, &self.text);
        new_text
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn is_added(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn is_deleted(&self) -> bool {
        !self.range.is_empty()
    }

    /// False for changes that only move the caret or selection.
    pub fn is_content_change(&self) -> bool {
        self.is_added() || self.is_deleted()
    }

    /// Drops a leading plus sign from the inserted text, moving the
    /// selection back with it.
    pub(crate) fn strip_leading_plus(&mut self) {
        if self.text.starts_with(PLUS_SIGN) {
            self.text.drain(..PLUS_SIGN.len());
            self.caret = self.caret.saturating_sub(1);
            self.anchor = self.anchor.saturating_sub(1);
        }
    }

    /// Puts a plus sign in front of the inserted text, moving the selection
    /// forward with it.
    pub(crate) fn prepend_plus(&mut self) {
        self.text.insert_str(0, PLUS_SIGN);
        self.caret += 1;
        self.anchor += 1;
    }
}
