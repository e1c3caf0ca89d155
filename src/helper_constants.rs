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

pub const PLUS_SIGN: &str = "+";
pub const PLUS_CHAR: char = '+';

/// E.164 calling codes are at most three digits long.
pub const MAX_COUNTRY_CODE: u16 = 999;

/// A non-empty run of ASCII digits, the only thing an edit may insert.
pub const DIGITS: &str = "[0-9]+";
/// A canonical raw value: the plus sign followed by ASCII digits.
pub const RAW_PHONE_NUMBER: &str = r"\+[0-9]*";
