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

use log::{debug, trace};
use strum::IntoEnumIterator;

use crate::{
    calling_code::{CallingCodeEntry, CountryCodeTable},
    facts::NumberFacts,
    helper_constants::PLUS_SIGN,
    regex_util::is_digits_only,
    resolver::resolve,
    service::{LibPhoneNumberService, PhoneNumberService},
    string_util::{national_digits, normalize_raw, strip_cow_prefix},
};

use super::{
    EditOutcome, EditStateMachineBuilder, EditSurface, Property, ResolvedState, TextChange,
    guard::UpdateFlag,
};

type Listener = Box<dyn FnMut(Property, &ResolvedState)>;

/// Keeps the calling code, the raw value and the displayed national number
/// of a phone number field consistent with each other.
///
/// Every change goes through one of three operations:
/// [`Self::on_raw_value_changed`], [`Self::on_country_code_changed`] and
/// [`Self::apply_edit`]. Each guards against being re-entered through its
/// own side effects, and listeners only hear about the state once the
/// outermost operation has settled.
pub struct EditStateMachine<S = LibPhoneNumberService> {
    table: CountryCodeTable,
    service: S,
    state: ResolvedState,
    surface: EditSurface,
    /// Raised while the raw value is written.
    raw_update: UpdateFlag,
    /// Raised while a calling code is selected.
    code_update: UpdateFlag,
    /// Raised while an edit of the surface is processed.
    edit_update: UpdateFlag,
    listeners: Vec<Listener>,
}

impl EditStateMachine {
    pub fn builder() -> EditStateMachineBuilder {
        EditStateMachineBuilder::new()
    }
}

impl Default for EditStateMachine {
    fn default() -> Self {
        Self::new(LibPhoneNumberService::new())
    }
}

impl<S: PhoneNumberService> EditStateMachine<S> {
    /// A field offering the whole default catalog.
    pub fn new(service: S) -> Self {
        Self::with_table(CountryCodeTable::with_defaults(), service)
    }

    pub fn with_table(table: CountryCodeTable, service: S) -> Self {
        Self {
            table,
            service,
            state: ResolvedState::default(),
            surface: EditSurface::default(),
            raw_update: UpdateFlag::default(),
            code_update: UpdateFlag::default(),
            edit_update: UpdateFlag::default(),
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &ResolvedState {
        &self.state
    }

    pub fn surface(&self) -> &EditSurface {
        &self.surface
    }

    pub fn table(&self) -> &CountryCodeTable {
        &self.table
    }

    /// Changes to the table apply from the next resolution on; the current
    /// state is left alone.
    pub fn table_mut(&mut self) -> &mut CountryCodeTable {
        &mut self.table
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Registers a listener called once per changed [`Property`] after each
    /// operation settles.
    pub fn subscribe(&mut self, listener: impl FnMut(Property, &ResolvedState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Sets the raw value and derives everything else from it: the calling
    /// code, the display text and the number facts.
    ///
    /// The value is brought into canonical form first, so `"+1 (650) 253"`
    /// is stored as `"+1650253"`.
    pub fn on_raw_value_changed(&mut self, new_raw: Option<&str>) {
        let outermost = self.is_idle();
        let Some(guard) = self.raw_update.acquire() else {
            trace!("Ignoring nested raw value update to {:?}", new_raw);
            return;
        };
        let before = outermost.then(|| self.state.clone());

        let raw = new_raw.and_then(normalize_raw).map(Cow::into_owned);
        self.write_raw_value(raw);
        self.render_surface();

        drop(guard);
        if let Some(before) = before {
            self.settle(&before);
        }
    }

    /// Selects a calling code. The raw value is reset to the code's default
    /// prefix, dropping whatever number was there before.
    pub fn on_country_code_changed(&mut self, new_code: Option<CallingCodeEntry>) {
        let outermost = self.is_idle();
        let Some(guard) = self.code_update.acquire() else {
            trace!("Ignoring nested calling code update to {:?}", new_code);
            return;
        };
        let before = outermost.then(|| self.state.clone());

        debug!(
            "Calling code set to {}",
            new_code.as_ref().map_or("none".to_owned(), CallingCodeEntry::to_string)
        );
        let raw = new_code.as_ref().map(CallingCodeEntry::default_prefix);
        self.state.country_code = new_code;
        self.on_raw_value_changed(raw.as_deref());

        drop(guard);
        if let Some(before) = before {
            self.settle(&before);
        }
    }

    /// Clears the number and the calling code.
    pub fn clear(&mut self) {
        self.on_raw_value_changed(None);
    }

    /// Processes a change of the edit surface before it becomes visible.
    ///
    /// Only digits get in; a plus sign is accepted (and synthesized) in
    /// front of the number until a calling code is resolved. The edit that
    /// resolves a calling code is consumed and leaves the surface showing
    /// just the default area code. Once a code is known every edit rewrites
    /// the raw value, and the surface shows its formatted national part.
    pub fn apply_edit(&mut self, change: TextChange) -> EditOutcome {
        let outermost = self.is_idle();
        let Some(guard) = self.edit_update.acquire() else {
            trace!("Ignoring nested edit {:?}", change.text());
            return EditOutcome::Rejected;
        };
        let before = outermost.then(|| self.state.clone());

        let outcome = self.process_edit(change);

        drop(guard);
        if let Some(before) = before {
            self.settle(&before);
        }
        outcome
    }

    /// Types `text` over the current selection.
    pub fn type_text(&mut self, text: &str) -> EditOutcome {
        let change = self.surface.typing(text);
        self.apply_edit(change)
    }

    /// Deletes the selection or the char before the caret. On an empty
    /// surface this falls through to [`Self::on_backspace`].
    pub fn backspace(&mut self) -> EditOutcome {
        match self.surface.backspacing() {
            Some(change) => self.apply_edit(change),
            None if self.on_backspace() => EditOutcome::Consumed,
            None => EditOutcome::Rejected,
        }
    }

    /// Handles a backspace key press that has nothing left to delete: with
    /// an empty surface and a resolved calling code, the code is dropped.
    /// Returns whether the key press was consumed.
    pub fn on_backspace(&mut self) -> bool {
        if !self.surface.text().is_empty() || self.state.country_code.is_none() {
            return false;
        }
        debug!("Backspace on empty text, dropping the calling code");
        self.clear();
        true
    }

    /// Formats `raw` for display with the resolved calling code: the digits
    /// go through the as-you-type formatter one by one, and the calling code
    /// prefix is cut from the result. Formatter output whose digits differ
    /// from the raw value is discarded in favor of the plain digits.
    ///
    /// Returns an empty string without a raw value or a calling code.
    pub fn format(&self, raw: Option<&str>) -> String {
        let (Some(raw), Some(code)) = (
            raw.filter(|raw| !raw.is_empty()),
            self.state.country_code.as_ref(),
        ) else {
            return String::new();
        };

        let formatted = match self.service.as_you_type(code.region_id()) {
            Ok(mut formatter) => {
                let mut formatted = String::new();
                for next_char in raw.chars() {
                    formatted = formatter.input_digit(next_char);
                }
                // Formatting only regroups digits; it never adds or drops any.
                if national_digits(&formatted) == national_digits(raw) {
                    formatted
                } else {
                    debug!("Formatter turned {:?} into {:?}, showing digits as typed", raw, formatted);
                    raw.to_owned()
                }
            }
            Err(err) => {
                debug!("No as-you-type formatter for {}: {}", code.region_id(), err);
                raw.to_owned()
            }
        };

        let prefix = code.country_prefix();
        match strip_cow_prefix(Cow::Owned(formatted), &prefix) {
            Some(national) => national.trim().to_owned(),
            None => national_digits(raw.strip_prefix(prefix.as_str()).unwrap_or(raw)).into_owned(),
        }
    }

    fn process_edit(&mut self, mut change: TextChange) -> EditOutcome {
        let resolved = self.state.country_code.is_some();
        if change.is_added() {
            if !resolved {
                change.strip_leading_plus();
            }
            if !change.text().is_empty() && !is_digits_only(change.text()) {
                trace!("Rejecting non-digit input {:?}", change.text());
                return EditOutcome::Rejected;
            }
            if !resolved && !change.control_new_text().starts_with(PLUS_SIGN) {
                change.prepend_plus();
            }
        }

        if !change.is_content_change() {
            self.surface.commit(&change);
            return EditOutcome::Committed(change);
        }

        let new_text = change.control_new_text();
        let Some(code) = self.state.country_code.clone() else {
            return self.resolve_from_edit(change, &new_text);
        };

        if new_text.is_empty() {
            debug!("Text cleared, dropping calling code {}", code);
            self.on_country_code_changed(None);
            self.surface.reset(String::new());
            return EditOutcome::Consumed;
        }

        let prefix = code.country_prefix();
        let national_number = national_digits(&new_text);
        let new_raw = fast_cat::concat_str!(&prefix, &*national_number);
        self.on_raw_value_changed(Some(new_raw.as_str()));
        // The surface was left alone while the edit was in progress.
        self.surface.show(self.state.display_text.clone());
        EditOutcome::Consumed
    }

    fn resolve_from_edit(&mut self, change: TextChange, new_text: &str) -> EditOutcome {
        let Some(code) = resolve(&self.table, new_text).cloned() else {
            self.surface.commit(&change);
            return EditOutcome::Committed(change);
        };
        debug!("Resolved calling code {} from {:?}", code, new_text);

        let area_code = code
            .default_area_code()
            .map(|area_code| itoa::Buffer::new().format(area_code).to_owned())
            .unwrap_or_default();
        self.on_country_code_changed(Some(code));
        self.surface.reset(area_code);
        EditOutcome::Consumed
    }

    fn write_raw_value(&mut self, raw: Option<String>) {
        let resolved = raw
            .as_deref()
            .and_then(|raw| resolve(&self.table, raw))
            .cloned();
        self.state.raw_value = raw;

        // A calling code being selected right now stays, whatever the raw
        // value resolves to.
        let selecting = self.code_update.is_set();
        let Some(resolved) = resolved else {
            if !selecting {
                self.state.country_code = None;
            }
            self.state.display_text.clear();
            self.state.facts = NumberFacts::unknown();
            return;
        };
        if !selecting {
            self.state.country_code = Some(resolved);
        }

        let display_text = self.format(self.state.raw_value.as_deref());
        let facts = match (self.state.raw_value.as_deref(), self.state.country_code.as_ref()) {
            (Some(raw), Some(code)) => NumberFacts::compute(&self.service, raw, code),
            _ => NumberFacts::unknown(),
        };
        trace!(
            "Raw value {:?} displays as {:?}, valid: {}",
            self.state.raw_value,
            display_text,
            facts.is_valid()
        );
        self.state.display_text = display_text;
        self.state.facts = facts;
    }

    /// Shows the display text, unless an edit is in progress: the edit
    /// decides what the surface shows.
    fn render_surface(&mut self) {
        if self.edit_update.is_set() {
            return;
        }
        self.surface.show(self.state.display_text.clone());
    }

    fn is_idle(&self) -> bool {
        !(self.raw_update.is_set() || self.code_update.is_set() || self.edit_update.is_set())
    }

    fn settle(&mut self, before: &ResolvedState) {
        for property in Property::iter() {
            if !property.differs(before, &self.state) {
                continue;
            }
            trace!("{:?} settled", property);
            for listener in &mut self.listeners {
                listener(property, &self.state);
            }
        }
    }
}
