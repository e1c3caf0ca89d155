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

use std::panic::{self, AssertUnwindSafe};

use log::{trace, warn};
use phonenumber::{Mode, PhoneNumber, country};

use super::{AsYouTypeFormatter, PhoneNumberService, Result, ServiceError};
use crate::string_util::national_digits;

/// [`PhoneNumberService`] backed by the `phonenumber` crate and its
/// compiled-in metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumberService;

impl LibPhoneNumberService {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, raw: &str, region_id: &str) -> Result<PhoneNumber> {
        let region = parse_region(region_id)?;
        catch_backend_panic(|| phonenumber::parse(Some(region), raw))?
            .map_err(|err| ServiceError::NotANumber(err.to_string()))
    }

    fn format(&self, raw: &str, region_id: &str, mode: Mode) -> Result<String> {
        let number = self.parse(raw, region_id)?;
        catch_backend_panic(|| phonenumber::format(&number).mode(mode).to_string())
    }
}

impl PhoneNumberService for LibPhoneNumberService {
    fn is_valid_number(&self, raw: &str, region_id: &str) -> Result<bool> {
        let number = self.parse(raw, region_id)?;
        catch_backend_panic(|| phonenumber::is_valid(&number))
    }

    fn format_e164(&self, raw: &str, region_id: &str) -> Result<String> {
        self.format(raw, region_id, Mode::E164)
    }

    fn format_national(&self, raw: &str, region_id: &str) -> Result<String> {
        self.format(raw, region_id, Mode::National)
    }

    fn as_you_type(&self, region_id: &str) -> Result<Box<dyn AsYouTypeFormatter + '_>> {
        let region = parse_region(region_id)?;
        Ok(Box::new(InternationalAsYouType {
            region,
            input: String::new(),
        }))
    }
}

/// Re-formats the whole input on every character. Input that does not
/// parse yet is echoed back unchanged, and so is input the backend would
/// rewrite with digits of its own (national prefix transforms).
struct InternationalAsYouType {
    region: country::Id,
    input: String,
}

impl AsYouTypeFormatter for InternationalAsYouType {
    fn input_digit(&mut self, next_char: char) -> String {
        self.input.push(next_char);
        let region = self.region;
        let input = self.input.as_str();
        let formatted = catch_backend_panic(|| {
            phonenumber::parse(Some(region), input)
                .ok()
                .map(|number| phonenumber::format(&number).mode(Mode::International).to_string())
        });
        match formatted {
            Ok(Some(formatted)) if national_digits(&formatted) == national_digits(&self.input) => {
                formatted
            }
            Ok(Some(formatted)) => {
                trace!("{:?} was reformatted with other digits as {:?}, echoing it", self.input, formatted);
                self.input.clone()
            }
            _ => {
                trace!("{:?} does not parse yet, echoing it", self.input);
                self.input.clone()
            }
        }
    }
}

fn parse_region(region_id: &str) -> Result<country::Id> {
    region_id
        .parse::<country::Id>()
        .map_err(|_| ServiceError::UnknownRegion(region_id.to_owned()))
}

/// Runs a backend call, reporting a panic as [`ServiceError::Panicked`].
fn catch_backend_panic<T>(f: impl FnOnce() -> T) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|_| {
        warn!("phonenumber backend panicked");
        ServiceError::Panicked
    })
}
