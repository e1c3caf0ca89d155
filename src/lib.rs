//! A headless phone number input field.
//!
//! While the user types, the field infers the country calling code from
//! the digits entered so far, keeps the number in canonical `+<digits>`
//! form and shows the national part formatted as you type. Validation and
//! formatting are delegated to a [`PhoneNumberService`].

pub mod calling_code;
pub mod edit;
pub mod facts;
pub mod resolver;
pub mod service;
mod helper_constants;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use calling_code::{CallingCodeEntry, CountryCodeTable, DEFAULT_CALLING_CODES, InvalidEntryError};
pub use edit::{
    EditOutcome, EditStateMachine, EditStateMachineBuilder, EditSurface, Property, ResolvedState,
    TextChange,
};
pub use facts::NumberFacts;
pub use resolver::{CountryCodeResolver, MatchScore, resolve};
pub use service::{AsYouTypeFormatter, LibPhoneNumberService, PhoneNumberService, ServiceError};
