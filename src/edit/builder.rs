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

use crate::{
    calling_code::{CallingCodeEntry, CountryCodeTable},
    service::PhoneNumberService,
};

use super::EditStateMachine;

#[derive(Debug, Clone)]
enum InitialValue {
    CountryCode(CallingCodeEntry),
    RawValue(String),
}

/// Configures an [`EditStateMachine`]: which calling codes it offers,
/// which ones win ties, and what it starts out with.
#[derive(Debug, Clone)]
pub struct EditStateMachineBuilder {
    table: CountryCodeTable,
    initial: Option<InitialValue>,
}

impl Default for EditStateMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EditStateMachineBuilder {
    /// Starts from the full default catalog, nothing preferred and an
    /// empty field.
    pub fn new() -> Self {
        Self {
            table: CountryCodeTable::with_defaults(),
            initial: None,
        }
    }

    pub fn table(mut self, table: CountryCodeTable) -> Self {
        self.table = table;
        self
    }

    pub fn available(mut self, entries: impl IntoIterator<Item = CallingCodeEntry>) -> Self {
        *self.table.all_mut() = entries.into_iter().collect();
        self
    }

    pub fn preferred(mut self, entries: impl IntoIterator<Item = CallingCodeEntry>) -> Self {
        *self.table.preferred_mut() = entries.into_iter().collect();
        self
    }

    /// Pre-selects a calling code. Replaces an initial raw value.
    pub fn country_code(mut self, entry: CallingCodeEntry) -> Self {
        self.initial = Some(InitialValue::CountryCode(entry));
        self
    }

    /// Starts with a number. Replaces a pre-selected calling code.
    pub fn raw_value(mut self, raw: impl Into<String>) -> Self {
        self.initial = Some(InitialValue::RawValue(raw.into()));
        self
    }

    pub fn build<S: PhoneNumberService>(self, service: S) -> EditStateMachine<S> {
        let mut machine = EditStateMachine::with_table(self.table, service);
        match self.initial {
            Some(InitialValue::CountryCode(entry)) => machine.on_country_code_changed(Some(entry)),
            Some(InitialValue::RawValue(raw)) => machine.on_raw_value_changed(Some(raw.as_str())),
            None => {}
        }
        machine
    }
}
