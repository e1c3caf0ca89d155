use std::{cell::RefCell, rc::Rc};

use crate::{
    AsYouTypeFormatter, CallingCodeEntry, CountryCodeTable, EditStateMachine, PhoneNumberService,
    Property, ResolvedState, ServiceError, service::Result,
};

pub fn init_logging() {
    let _ = colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

pub fn entry(name: &'static str, country_code: u16, region_id: &'static str, area_codes: &[u32]) -> CallingCodeEntry {
    CallingCodeEntry::new(name, country_code, region_id, area_codes.to_vec()).unwrap()
}

pub fn canada() -> CallingCodeEntry {
    entry("Canada", 1, "CA", &[])
}

pub fn united_states() -> CallingCodeEntry {
    entry("United States", 1, "US", &[])
}

pub fn american_samoa() -> CallingCodeEntry {
    entry("American Samoa", 1, "AS", &[684])
}

pub fn guernsey() -> CallingCodeEntry {
    entry("Guernsey", 44, "GG", &[1481, 7781])
}

pub fn united_kingdom() -> CallingCodeEntry {
    entry("United Kingdom", 44, "GB", &[])
}

pub fn germany() -> CallingCodeEntry {
    entry("Germany", 49, "DE", &[])
}

/// Canada before the United States, as in the default catalog.
pub fn small_table() -> CountryCodeTable {
    CountryCodeTable::new(
        vec![
            canada(),
            american_samoa(),
            guernsey(),
            united_kingdom(),
            united_states(),
            germany(),
        ],
        Vec::new(),
    )
}

/// Deterministic stand-in for a real phone number library.
///
/// Numbers with fewer than four digits do not parse; a number is valid when
/// it has exactly `valid_digits` digits. The as-you-type formatter echoes
/// its input, with a trailing `0` added when `formatter_adds_digits` is set.
#[derive(Debug, Clone)]
pub struct FakePhoneNumberService {
    pub valid_digits: usize,
    pub failing_regions: Vec<&'static str>,
    pub formatter_adds_digits: bool,
}

impl Default for FakePhoneNumberService {
    fn default() -> Self {
        Self {
            valid_digits: 11,
            failing_regions: Vec::new(),
            formatter_adds_digits: false,
        }
    }
}

impl FakePhoneNumberService {
    fn fails_for(&self, region_id: &str) -> bool {
        self.failing_regions.iter().any(|failing| *failing == region_id)
    }

    fn digits(&self, raw: &str, region_id: &str) -> Result<usize> {
        if self.fails_for(region_id) {
            return Err(ServiceError::UnknownRegion(region_id.to_owned()));
        }
        let digits = raw.trim_start_matches('+').len();
        if digits < 4 {
            return Err(ServiceError::NotANumber(raw.to_owned()));
        }
        Ok(digits)
    }
}

impl PhoneNumberService for FakePhoneNumberService {
    fn is_valid_number(&self, raw: &str, region_id: &str) -> Result<bool> {
        Ok(self.digits(raw, region_id)? == self.valid_digits)
    }

    fn format_e164(&self, raw: &str, region_id: &str) -> Result<String> {
        self.digits(raw, region_id)?;
        Ok(raw.to_owned())
    }

    fn format_national(&self, raw: &str, region_id: &str) -> Result<String> {
        self.digits(raw, region_id)?;
        Ok(format!("{region_id} {raw}"))
    }

    fn as_you_type(&self, region_id: &str) -> Result<Box<dyn AsYouTypeFormatter + '_>> {
        if self.fails_for(region_id) {
            return Err(ServiceError::UnknownRegion(region_id.to_owned()));
        }
        Ok(Box::new(EchoFormatter {
            input: String::new(),
            adds_digit: self.formatter_adds_digits,
        }))
    }
}

#[derive(Debug)]
struct EchoFormatter {
    input: String,
    adds_digit: bool,
}

impl AsYouTypeFormatter for EchoFormatter {
    fn input_digit(&mut self, next_char: char) -> String {
        self.input.push(next_char);
        if self.adds_digit {
            return format!("{}0", self.input);
        }
        self.input.clone()
    }
}

pub fn fake_machine() -> EditStateMachine<FakePhoneNumberService> {
    init_logging();
    EditStateMachine::with_table(small_table(), FakePhoneNumberService::default())
}

/// Every notification a machine sends, with the state it was sent with.
pub type Notifications = Rc<RefCell<Vec<(Property, ResolvedState)>>>;

pub fn record_notifications<S: PhoneNumberService>(machine: &mut EditStateMachine<S>) -> Notifications {
    let notifications = Notifications::default();
    let sink = Rc::clone(&notifications);
    machine.subscribe(move |property, state| {
        sink.borrow_mut().push((property, state.clone()));
    });
    notifications
}
