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

use log::debug;

use crate::{
    calling_code::CallingCodeEntry,
    service::{self, PhoneNumberService},
};

/// What the phone number service says about the current raw value.
///
/// A number is considered valid until the service positively rejects it:
/// no calling code yet, or a number the service cannot parse, both count
/// as "not known to be invalid".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFacts {
    valid: bool,
    e164: Option<String>,
    national: Option<String>,
}

impl Default for NumberFacts {
    fn default() -> Self {
        Self::unknown()
    }
}

impl NumberFacts {
    /// Facts of a number nothing is known about yet.
    pub fn unknown() -> Self {
        Self {
            valid: true,
            e164: None,
            national: None,
        }
    }

    /// Asks `service` about `raw` in the region of `calling_code`.
    /// Any service failure yields [`NumberFacts::unknown`].
    pub fn compute<S: PhoneNumberService + ?Sized>(
        service: &S,
        raw: &str,
        calling_code: &CallingCodeEntry,
    ) -> Self {
        match Self::try_compute(service, raw, calling_code.region_id()) {
            Ok(facts) => facts,
            Err(err) => {
                debug!("No facts for {:?} in {}: {}", raw, calling_code.region_id(), err);
                Self::unknown()
            }
        }
    }

    fn try_compute<S: PhoneNumberService + ?Sized>(
        service: &S,
        raw: &str,
        region_id: &str,
    ) -> service::Result<Self> {
        let valid = service.is_valid_number(raw, region_id)?;
        let e164 = service.format_e164(raw, region_id)?;
        let national = service.format_national(raw, region_id)?;
        Ok(Self {
            valid,
            e164: Some(e164),
            national: Some(national),
        })
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn e164(&self) -> Option<&str> {
        self.e164.as_deref()
    }

    pub fn national(&self) -> Option<&str> {
        self.national.as_deref()
    }
}
