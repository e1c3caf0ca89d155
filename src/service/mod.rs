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

//! The phone number validation and formatting service the field relies
//! on. The field never parses numbers itself; it asks a
//! [`PhoneNumberService`] and treats every failure as "not known yet".

pub mod errors;
mod libphonenumber;

pub use errors::ServiceError;
pub use libphonenumber::LibPhoneNumberService;

// Helper type for Result
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Formats a number incrementally, one character at a time.
pub trait AsYouTypeFormatter {
    /// Feeds the next character and returns the best formatting of
    /// everything entered so far.
    fn input_digit(&mut self, next_char: char) -> String;
}

/// Validation and formatting of complete international numbers.
///
/// `raw` is always in canonical form (`+` followed by digits) and
/// `region_id` is the ISO-3166 alpha-2 code of the resolved calling code.
/// Every call may fail on input the service cannot make sense of.
pub trait PhoneNumberService {
    fn is_valid_number(&self, raw: &str, region_id: &str) -> Result<bool>;

    fn format_e164(&self, raw: &str, region_id: &str) -> Result<String>;

    fn format_national(&self, raw: &str, region_id: &str) -> Result<String>;

    /// Returns a fresh incremental formatter for the given region.
    fn as_you_type(&self, region_id: &str) -> Result<Box<dyn AsYouTypeFormatter + '_>>;
}
