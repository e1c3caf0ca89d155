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

use super::{CallingCodeEntry, DEFAULT_CALLING_CODES};

/// The calling codes a field may infer, plus the preferred ones used to
/// break ties between equally good matches.
///
/// Both lists belong to the caller and may change at any time; nothing is
/// cached from them, so every lookup sees the lists as they are right now.
/// A preferred entry that is not also available has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryCodeTable {
    available: Vec<CallingCodeEntry>,
    preferred: Vec<CallingCodeEntry>,
}

impl CountryCodeTable {
    pub fn new(available: Vec<CallingCodeEntry>, preferred: Vec<CallingCodeEntry>) -> Self {
        Self { available, preferred }
    }

    /// A table offering the whole [`DEFAULT_CALLING_CODES`] catalog with
    /// nothing preferred.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CALLING_CODES.to_vec(), Vec::new())
    }

    /// Available entries, in table order.
    pub fn all(&self) -> &[CallingCodeEntry] {
        &self.available
    }

    pub fn all_mut(&mut self) -> &mut Vec<CallingCodeEntry> {
        &mut self.available
    }

    pub fn preferred(&self) -> &[CallingCodeEntry] {
        &self.preferred
    }

    pub fn preferred_mut(&mut self) -> &mut Vec<CallingCodeEntry> {
        &mut self.preferred
    }

    pub fn is_preferred(&self, entry: &CallingCodeEntry) -> bool {
        self.preferred.contains(entry)
    }

    /// First available entry for the given region id.
    pub fn find_by_region(&self, region_id: &str) -> Option<&CallingCodeEntry> {
        self.available
            .iter()
            .find(|entry| entry.region_id() == region_id)
    }

    /// Entries in the order a country selector shows them: preferred
    /// entries that are available come first, in preferred order, then the
    /// rest of the available entries in table order.
    pub fn listing(&self) -> Vec<&CallingCodeEntry> {
        let mut listing: Vec<&CallingCodeEntry> = self
            .preferred
            .iter()
            .filter(|entry| self.available.contains(entry))
            .collect();
        listing.extend(
            self.available
                .iter()
                .filter(|entry| !self.is_preferred(entry)),
        );
        listing
    }
}
