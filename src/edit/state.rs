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

use crate::{calling_code::CallingCodeEntry, facts::NumberFacts};

/// The observable state of a phone number field.
///
/// Only the owning [`EditStateMachine`](super::EditStateMachine) writes it,
/// and it does so one whole operation at a time: raw value, calling code,
/// display text and facts always describe the same number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedState {
    pub(super) raw_value: Option<String>,
    pub(super) country_code: Option<CallingCodeEntry>,
    pub(super) display_text: String,
    pub(super) facts: NumberFacts,
}

impl ResolvedState {
    /// The number in canonical form: `+` followed by digits only.
    pub fn raw_value(&self) -> Option<&str> {
        self.raw_value.as_deref()
    }

    pub fn country_code(&self) -> Option<&CallingCodeEntry> {
        self.country_code.as_ref()
    }

    /// The national part of the number, formatted for display. Never
    /// contains the calling code.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn is_valid(&self) -> bool {
        self.facts.is_valid()
    }

    pub fn e164(&self) -> Option<&str> {
        self.facts.e164()
    }

    pub fn national(&self) -> Option<&str> {
        self.facts.national()
    }

    pub fn facts(&self) -> &NumberFacts {
        &self.facts
    }
}
