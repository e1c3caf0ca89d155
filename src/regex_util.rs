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

use std::sync::LazyLock;

use regex::Regex;

use crate::helper_constants::{DIGITS, RAW_PHONE_NUMBER};

static DIGITS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(DIGITS).unwrap());

static RAW_PHONE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RAW_PHONE_NUMBER).unwrap());

pub trait RegexFullMatch {
    /// Eq of C fullMatch
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

/// Returns true if `s` is a non-empty string of ASCII digits.
pub fn is_digits_only(s: &str) -> bool {
    DIGITS_PATTERN.full_match(s)
}

/// Returns true if `s` already is a canonical raw phone number.
pub fn is_raw_phone_number(s: &str) -> bool {
    RAW_PHONE_NUMBER_PATTERN.full_match(s)
}
