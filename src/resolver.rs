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

//! Infers the calling code of a number from the digits typed so far.

use log::trace;

use crate::{
    calling_code::{CallingCodeEntry, CountryCodeTable},
    helper_constants::PLUS_CHAR,
};

/// How well a calling code entry matches the start of a number.
///
/// Variants are ordered from the weakest to the strongest match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchScore {
    /// **No match.**
    NoMatch,
    /// **Country code match.**
    /// The entry has no area codes and the number starts with its calling
    /// code.
    CountryCode,
    /// **Area code match.**
    /// The number starts with the calling code followed by one of the
    /// entry's area codes.
    AreaCode,
}

impl MatchScore {
    /// Scores `entry` against a digit string without the leading plus sign.
    ///
    /// An entry that declares area codes only ever matches through one of
    /// them; it never falls back to a bare calling code match.
    pub fn of(entry: &CallingCodeEntry, digits: &str) -> Self {
        let mut buf = itoa::Buffer::new();
        let Some(rest) = digits.strip_prefix(buf.format(entry.country_code())) else {
            return MatchScore::NoMatch;
        };
        if entry.area_codes().is_empty() {
            return MatchScore::CountryCode;
        }
        let mut area_buf = itoa::Buffer::new();
        if entry
            .area_codes()
            .iter()
            .any(|&area_code| rest.starts_with(area_buf.format(area_code)))
        {
            MatchScore::AreaCode
        } else {
            MatchScore::NoMatch
        }
    }
}

/// Resolves the calling code entry of a phone number against a table.
///
/// Holds no state of its own: the table is read on every call.
#[derive(Debug, Clone, Copy)]
pub struct CountryCodeResolver<'a> {
    table: &'a CountryCodeTable,
}

impl<'a> CountryCodeResolver<'a> {
    pub fn new(table: &'a CountryCodeTable) -> Self {
        Self { table }
    }

    /// Returns the best matching entry for `phone_number`, which may start
    /// with a single plus sign.
    ///
    /// Among the entries sharing the highest score, the first one (in table
    /// order) that is preferred wins. Without a preferred candidate the
    /// *last* one in table order wins.
    pub fn resolve(&self, phone_number: &str) -> Option<&'a CallingCodeEntry> {
        let digits = phone_number.strip_prefix(PLUS_CHAR).unwrap_or(phone_number);
        if digits.is_empty() {
            return None;
        }

        let mut best_score = MatchScore::NoMatch;
        let mut candidates: Vec<&'a CallingCodeEntry> = Vec::new();
        for entry in self.table.all() {
            let score = MatchScore::of(entry, digits);
            if score == MatchScore::NoMatch || score < best_score {
                continue;
            }
            if score > best_score {
                best_score = score;
                candidates.clear();
            }
            candidates.push(entry);
        }

        let best = candidates
            .iter()
            .find(|entry| self.table.is_preferred(entry))
            .or_else(|| candidates.last())
            .copied();
        trace!(
            "Resolved {:?} to {:?} out of {} candidate(s) scored {:?}",
            phone_number,
            best.map(CallingCodeEntry::region_id),
            candidates.len(),
            best_score
        );
        best
    }
}

/// Shorthand for `CountryCodeResolver::new(table).resolve(phone_number)`.
pub fn resolve<'a>(table: &'a CountryCodeTable, phone_number: &str) -> Option<&'a CallingCodeEntry> {
    CountryCodeResolver::new(table).resolve(phone_number)
}
