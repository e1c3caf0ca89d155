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

use std::borrow::Cow;

use crate::{helper_constants::PLUS_SIGN, regex_util::is_raw_phone_number};

/// Strips prefix of given string Cow. Returns option with `Some` if 
/// prefix found and stripped.
/// 
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(Cow::Borrowed),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Some(Cow::Owned(s));
            }
            None
        }
    }
}

/// Keeps only the ASCII digits of a formatted number. Borrows when there
/// is nothing to remove.
pub fn national_digits(formatted: &str) -> Cow<'_, str> {
    if formatted.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(formatted);
    }
    Cow::Owned(formatted.chars().filter(char::is_ascii_digit).collect())
}

/// Brings a programmatically supplied phone number into canonical raw form:
/// a leading plus sign followed by digits only.
///
/// Returns `None` for input that carries neither digits nor a plus sign.
pub fn normalize_raw(raw: &str) -> Option<Cow<'_, str>> {
    if is_raw_phone_number(raw) {
        return Some(Cow::Borrowed(raw));
    }
    let digits = national_digits(raw);
    if digits.is_empty() && !raw.contains(PLUS_SIGN) {
        return None;
    }
    Some(Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, &*digits)))
}

/// Converts a char index into a byte offset, clamping to the end of `s`.
pub fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(offset, _)| offset)
}
