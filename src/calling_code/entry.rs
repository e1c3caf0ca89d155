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

use std::{borrow::Cow, fmt};

use crate::helper_constants::{MAX_COUNTRY_CODE, PLUS_SIGN};

use super::errors::InvalidEntryError;

/// A country calling code as described by ITU-T E.164, together with the
/// region it designates.
///
/// Several entries may share a calling code (all NANP countries use `1`);
/// their area codes are what tells them apart. The first area code, if
/// any, is the default one and becomes part of [`Self::default_prefix`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallingCodeEntry {
    name: Cow<'static, str>,
    country_code: u16,
    region_id: Cow<'static, str>,
    area_codes: Cow<'static, [u32]>,
}

impl CallingCodeEntry {
    /// Builds an entry of the compiled-in catalog. Values are trusted.
    pub(crate) const fn from_static(
        name: &'static str,
        country_code: u16,
        region_id: &'static str,
        area_codes: &'static [u32],
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            country_code,
            region_id: Cow::Borrowed(region_id),
            area_codes: Cow::Borrowed(area_codes),
        }
    }

    /// Creates a custom entry, checking that the calling code is a valid
    /// E.164 code and that no area code repeats.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        country_code: u16,
        region_id: impl Into<Cow<'static, str>>,
        area_codes: impl Into<Cow<'static, [u32]>>,
    ) -> Result<Self, InvalidEntryError> {
        if !(1..=MAX_COUNTRY_CODE).contains(&country_code) {
            return Err(InvalidEntryError::CountryCodeOutOfRange(country_code));
        }
        let region_id = region_id.into();
        if region_id.is_empty() {
            return Err(InvalidEntryError::EmptyRegionId);
        }
        let area_codes = area_codes.into();
        for (i, area_code) in area_codes.iter().enumerate() {
            if area_codes[..i].contains(area_code) {
                return Err(InvalidEntryError::DuplicateAreaCode(*area_code));
            }
        }
        Ok(Self {
            name: name.into(),
            country_code,
            region_id,
            area_codes,
        })
    }

    /// Human readable name of the region, e.g. `American Samoa`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    /// ISO-3166 alpha-2 code of the region.
    pub fn region_id(&self) -> &str {
        &self.region_id
    }

    pub fn area_codes(&self) -> &[u32] {
        &self.area_codes
    }

    pub fn default_area_code(&self) -> Option<u32> {
        self.area_codes.first().copied()
    }

    /// The calling code with a leading plus sign, e.g. `+1`.
    pub fn country_prefix(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(self.country_code);
        fast_cat::concat_str!(PLUS_SIGN, country_code)
    }

    /// [`Self::country_prefix`] followed by the default area code, e.g.
    /// `+1684` for American Samoa and `+1` for the United States.
    pub fn default_prefix(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(self.country_code);
        match self.default_area_code() {
            Some(area_code) => {
                let mut area_buf = itoa::Buffer::new();
                let area_code = area_buf.format(area_code);
                fast_cat::concat_str!(PLUS_SIGN, country_code, area_code)
            }
            None => fast_cat::concat_str!(PLUS_SIGN, country_code),
        }
    }
}

impl fmt::Display for CallingCodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.default_prefix(), self.name)
    }
}
