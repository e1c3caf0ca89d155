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

use strum::EnumIter;

use super::{ResolvedState, TextChange};

/// The observable outputs of a field, in the order listeners hear about
/// them.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// **Raw value.** Canonical `+` and digits form of the number.
    RawValue,
    /// **Country calling code.** The resolved calling code entry.
    CountryCode,
    /// **Display text.** Formatted national part of the number.
    DisplayText,
    /// **Validity.** False only once the service rejects the number.
    Valid,
    /// **E164 form.**
    E164,
    /// **National form.**
    National,
}

impl Property {
    /// Whether this property reads differently in the two states.
    pub fn differs(self, old: &ResolvedState, new: &ResolvedState) -> bool {
        match self {
            Property::RawValue => old.raw_value() != new.raw_value(),
            Property::CountryCode => old.country_code() != new.country_code(),
            Property::DisplayText => old.display_text() != new.display_text(),
            Property::Valid => old.is_valid() != new.is_valid(),
            Property::E164 => old.e164() != new.e164(),
            Property::National => old.national() != new.national(),
        }
    }
}

/// What became of an edit handed to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// **Vetoed.**
    /// The edit would have put something other than digits into the text,
    /// or arrived while another edit was being processed; nothing changed.
    Rejected,
    /// **Committed.**
    /// The edit, possibly rewritten, was applied to the surface as is.
    Committed(TextChange),
    /// **Consumed.**
    /// The state machine handled the edit itself and replaced the surface
    /// content; the incoming edit produced no insertion of its own.
    Consumed,
}
