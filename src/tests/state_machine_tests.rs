use super::fixtures::{
    FakePhoneNumberService, american_samoa, canada, fake_machine, germany, guernsey,
    init_logging, record_notifications, small_table, united_kingdom, united_states,
};
use crate::{
    CountryCodeTable, EditOutcome, EditStateMachine, EditStateMachineBuilder, Property,
    ResolvedState, TextChange, resolve,
};

fn type_chars<S: crate::PhoneNumberService>(machine: &mut EditStateMachine<S>, text: &str) {
    for next_char in text.chars() {
        machine.type_text(&next_char.to_string());
    }
}

#[test]
fn first_digit_resolves_calling_code() {
    let mut machine = fake_machine();

    let outcome = machine.type_text("1");

    assert_eq!(outcome, EditOutcome::Consumed);
    let state = machine.state();
    assert_eq!(state.country_code(), Some(&united_states()));
    assert_eq!(state.raw_value(), Some("+1"));
    assert_eq!(state.display_text(), "");
    assert!(state.is_valid());
    assert_eq!(state.e164(), None);
    assert_eq!(state.national(), None);
    assert_eq!(machine.surface().text(), "");
}

#[test]
fn typing_a_full_number() {
    let mut machine = fake_machine();
    type_chars(&mut machine, "16502530000");

    let state = machine.state();
    assert_eq!(state.country_code(), Some(&united_states()));
    assert_eq!(state.raw_value(), Some("+16502530000"));
    assert_eq!(state.display_text(), "6502530000");
    assert!(state.is_valid());
    assert_eq!(state.e164(), Some("+16502530000"));
    assert_eq!(state.national(), Some("US +16502530000"));
    assert_eq!(machine.surface().text(), "6502530000");
    assert_eq!(machine.surface().caret(), 10);
}

#[test]
fn incomplete_number_is_not_flagged_while_typing() {
    let mut machine = fake_machine();
    type_chars(&mut machine, "165");

    assert_eq!(machine.state().raw_value(), Some("+165"));
    assert!(machine.state().is_valid());
    assert_eq!(machine.state().e164(), None);

    type_chars(&mut machine, "0253000");
    assert_eq!(machine.state().raw_value(), Some("+1650253000"));
    assert!(!machine.state().is_valid());
    assert_eq!(machine.state().e164(), Some("+1650253000"));
}

#[test]
fn area_code_switches_calling_code() {
    let mut machine = fake_machine();
    type_chars(&mut machine, "1684");

    assert_eq!(machine.state().country_code(), Some(&american_samoa()));
    assert_eq!(machine.state().raw_value(), Some("+1684"));
    assert_eq!(machine.state().display_text(), "684");
    assert_eq!(machine.surface().text(), "684");

    assert_eq!(machine.backspace(), EditOutcome::Consumed);
    assert_eq!(machine.state().country_code(), Some(&united_states()));
    assert_eq!(machine.state().raw_value(), Some("+168"));
    assert_eq!(machine.surface().text(), "68");
}

#[test]
fn leading_plus_is_accepted_once() {
    let mut machine = fake_machine();

    let outcome = machine.type_text("+");
    assert!(matches!(outcome, EditOutcome::Committed(ref change) if change.text() == "+"));
    assert_eq!(machine.surface().text(), "+");
    assert_eq!(machine.surface().caret(), 1);

    let outcome = machine.type_text("+");
    assert!(matches!(outcome, EditOutcome::Committed(ref change) if !change.is_content_change()));
    assert_eq!(machine.surface().text(), "+");

    assert!(matches!(machine.type_text("4"), EditOutcome::Committed(_)));
    assert_eq!(machine.surface().text(), "+4");
    assert_eq!(machine.state().country_code(), None);

    assert_eq!(machine.type_text("4"), EditOutcome::Consumed);
    assert_eq!(machine.state().country_code(), Some(&united_kingdom()));
    assert_eq!(machine.state().raw_value(), Some("+44"));
    assert_eq!(machine.surface().text(), "");
}

#[test]
fn plus_sign_is_synthesized_with_the_caret_moved() {
    let mut machine = EditStateMachine::with_table(
        CountryCodeTable::new(vec![germany()], Vec::new()),
        FakePhoneNumberService::default(),
    );

    let outcome = machine.type_text("4");

    let EditOutcome::Committed(change) = outcome else {
        panic!("expected a committed edit");
    };
    assert_eq!(change.text(), "+4");
    assert_eq!((change.caret(), change.anchor()), (2, 2));
    assert_eq!(machine.surface().text(), "+4");
    assert_eq!(machine.surface().caret(), 2);
}

#[test]
fn pasted_calling_code_resolves_at_once() {
    let mut machine = fake_machine();
    assert_eq!(machine.type_text("+44"), EditOutcome::Consumed);
    assert_eq!(machine.state().country_code(), Some(&united_kingdom()));

    type_chars(&mut machine, "1481");
    assert_eq!(machine.state().country_code(), Some(&guernsey()));
    assert_eq!(machine.state().raw_value(), Some("+441481"));
    assert_eq!(machine.state().display_text(), "1481");
}

#[test]
fn edit_resolving_calling_code_is_consumed() {
    let mut machine = fake_machine();

    // Only the calling code and default area code survive the resolving edit.
    assert_eq!(machine.type_text("16845551234"), EditOutcome::Consumed);

    assert_eq!(machine.state().country_code(), Some(&american_samoa()));
    assert_eq!(machine.state().raw_value(), Some("+1684"));
    assert_eq!(machine.surface().text(), "684");
    assert_eq!(machine.surface().caret(), 0);
}

#[test]
fn non_digit_input_is_rejected() {
    let mut machine = fake_machine();
    let before = (machine.state().clone(), machine.surface().clone());
    assert_eq!(machine.type_text("abc"), EditOutcome::Rejected);
    assert_eq!(machine.type_text("+4a"), EditOutcome::Rejected);
    assert_eq!((machine.state().clone(), machine.surface().clone()), before);

    type_chars(&mut machine, "1650");
    let before = (machine.state().clone(), machine.surface().clone());
    assert_eq!(machine.type_text("abc"), EditOutcome::Rejected);
    assert_eq!(machine.type_text("-"), EditOutcome::Rejected);
    assert_eq!(machine.type_text("+"), EditOutcome::Rejected);
    assert_eq!((machine.state().clone(), machine.surface().clone()), before);
}

#[test]
fn unmatched_digits_never_resolve() {
    let mut machine = EditStateMachine::with_table(
        CountryCodeTable::new(vec![united_kingdom(), guernsey(), germany()], Vec::new()),
        FakePhoneNumberService::default(),
    );

    for (next_char, shown) in [("1", "+1"), ("2", "+12"), ("5", "+125")] {
        assert!(matches!(machine.type_text(next_char), EditOutcome::Committed(_)));
        assert_eq!(machine.surface().text(), shown);
        assert_eq!(machine.state().country_code(), None);
        assert_eq!(machine.state().raw_value(), None);
        assert!(machine.state().is_valid());
    }
}

#[test]
fn clearing_the_text_drops_the_calling_code() {
    let mut machine = fake_machine();
    type_chars(&mut machine, "1650");
    assert_eq!(machine.surface().text(), "650");

    let outcome = machine.apply_edit(TextChange::delete("650", 0..3));

    assert_eq!(outcome, EditOutcome::Consumed);
    assert_eq!(machine.state(), &ResolvedState::default());
    assert_eq!(machine.state().country_code(), None);
    assert_eq!(machine.state().raw_value(), None);
    assert_eq!(machine.state().display_text(), "");
    assert!(machine.state().is_valid());
    assert_eq!(machine.surface().text(), "");
}

#[test]
fn backspacing_the_last_digit_drops_the_calling_code() {
    let mut machine = fake_machine();
    type_chars(&mut machine, "165");
    assert_eq!(machine.surface().text(), "65");

    assert_eq!(machine.backspace(), EditOutcome::Consumed);
    assert_eq!(machine.state().raw_value(), Some("+16"));
    assert_eq!(machine.backspace(), EditOutcome::Consumed);
    assert_eq!(machine.state(), &ResolvedState::default());
}

#[test]
fn backspace_on_empty_text_drops_the_calling_code() {
    let mut machine = fake_machine();
    machine.type_text("1");
    assert_eq!(machine.surface().text(), "");
    assert!(machine.state().country_code().is_some());

    assert_eq!(machine.backspace(), EditOutcome::Consumed);
    assert_eq!(machine.state(), &ResolvedState::default());

    assert_eq!(machine.backspace(), EditOutcome::Rejected);
    assert!(!machine.on_backspace());
}

#[test]
fn selection_change_is_committed_untouched() {
    let mut machine = fake_machine();
    type_chars(&mut machine, "1650");
    let state = machine.state().clone();

    let outcome = machine.apply_edit(machine.surface().selecting_all());

    assert!(matches!(outcome, EditOutcome::Committed(_)));
    assert_eq!(machine.state(), &state);
    assert_eq!(machine.surface().selection(), 0..3);

    machine.type_text("7");
    assert_eq!(machine.state().raw_value(), Some("+17"));
    assert_eq!(machine.surface().text(), "7");
}

#[test]
fn programmatic_raw_value_is_normalized() {
    let mut machine = fake_machine();

    machine.on_raw_value_changed(Some("+1 (684) 555-1234"));

    let state = machine.state();
    assert_eq!(state.raw_value(), Some("+16845551234"));
    assert_eq!(state.country_code(), Some(&american_samoa()));
    assert_eq!(state.display_text(), "6845551234");
    assert!(state.is_valid());
    assert_eq!(state.e164(), Some("+16845551234"));
    assert_eq!(state.national(), Some("AS +16845551234"));
    assert_eq!(machine.surface().text(), "6845551234");
    assert_eq!(machine.surface().caret(), 10);
}

#[test]
fn unresolved_raw_value_is_kept() {
    let mut machine = fake_machine();
    machine.on_raw_value_changed(Some("+16502530000"));

    machine.on_raw_value_changed(Some("+99"));

    let state = machine.state();
    assert_eq!(state.raw_value(), Some("+99"));
    assert_eq!(state.country_code(), None);
    assert_eq!(state.display_text(), "");
    assert!(state.is_valid());
    assert_eq!(state.e164(), None);
    assert_eq!(machine.surface().text(), "");
}

#[test]
fn raw_value_update_is_idempotent() {
    let mut machine = fake_machine();
    machine.on_raw_value_changed(Some("+1 650 253 0000"));
    let first = machine.state().clone();

    let raw = first.raw_value().map(str::to_owned);
    machine.on_raw_value_changed(raw.as_deref());
    assert_eq!(machine.state(), &first);
    machine.on_raw_value_changed(raw.as_deref());
    assert_eq!(machine.state(), &first);
}

#[test]
fn selecting_a_calling_code_resets_the_number() {
    let mut machine = fake_machine();
    machine.on_raw_value_changed(Some("+16502530000"));

    machine.on_country_code_changed(Some(guernsey()));

    assert_eq!(machine.state().country_code(), Some(&guernsey()));
    assert_eq!(machine.state().raw_value(), Some("+441481"));
    assert_eq!(machine.state().display_text(), "1481");
    assert_eq!(machine.surface().text(), "1481");
    assert_eq!(
        resolve(machine.table(), machine.state().raw_value().unwrap()),
        Some(&guernsey())
    );

    machine.on_country_code_changed(None);
    assert_eq!(machine.state(), &ResolvedState::default());
    assert_eq!(machine.surface().text(), "");
}

#[test]
fn selected_calling_code_survives_a_tie() {
    let mut machine = fake_machine();

    // "+1" alone resolves to the United States in this table.
    machine.on_country_code_changed(Some(canada()));

    assert_eq!(machine.state().country_code(), Some(&canada()));
    assert_eq!(machine.state().raw_value(), Some("+1"));
}

#[test]
fn service_failure_degrades_to_unknown() {
    init_logging();
    let service = FakePhoneNumberService {
        failing_regions: vec!["GB"],
        ..Default::default()
    };
    let mut machine = EditStateMachine::with_table(small_table(), service);

    machine.on_raw_value_changed(Some("+442079460000"));

    let state = machine.state();
    assert_eq!(state.country_code(), Some(&united_kingdom()));
    assert!(state.is_valid());
    assert_eq!(state.e164(), None);
    assert_eq!(state.national(), None);
    assert_eq!(state.display_text(), "2079460000");
}

#[test]
fn format_strips_calling_code() {
    let mut machine = fake_machine();
    assert_eq!(machine.format(Some("+16502530000")), "");

    machine.type_text("1");
    assert_eq!(machine.format(Some("+16502530000")), "6502530000");
    assert_eq!(machine.format(Some("")), "");
    assert_eq!(machine.format(None), "");
}

#[test]
fn table_changes_apply_to_the_next_edit() {
    let mut machine = fake_machine();
    machine.table_mut().preferred_mut().push(canada());

    machine.type_text("1");

    assert_eq!(machine.state().country_code(), Some(&canada()));
}

#[test]
fn listeners_hear_settled_state_once_per_property() {
    let mut machine = fake_machine();
    let notifications = record_notifications(&mut machine);

    machine.on_raw_value_changed(Some("+16502530000"));

    let properties: Vec<Property> = notifications.borrow().iter().map(|(property, _)| *property).collect();
    assert_eq!(
        properties,
        vec![
            Property::RawValue,
            Property::CountryCode,
            Property::DisplayText,
            Property::E164,
            Property::National,
        ]
    );
    for (_, state) in notifications.borrow().iter() {
        assert_eq!(state, machine.state());
    }

    notifications.borrow_mut().clear();
    machine.on_raw_value_changed(Some("+16502530000"));
    assert!(notifications.borrow().is_empty());
}

#[test]
fn nested_updates_notify_once() {
    let mut machine = fake_machine();
    let notifications = record_notifications(&mut machine);

    machine.type_text("1");

    let properties: Vec<Property> = notifications.borrow().iter().map(|(property, _)| *property).collect();
    assert_eq!(properties, vec![Property::RawValue, Property::CountryCode]);

    notifications.borrow_mut().clear();
    assert_eq!(machine.type_text("x"), EditOutcome::Rejected);
    assert!(notifications.borrow().is_empty());
}

#[test]
fn builder_applies_initial_value() {
    init_logging();
    let machine = EditStateMachineBuilder::new()
        .table(small_table())
        .country_code(guernsey())
        .build(FakePhoneNumberService::default());
    assert_eq!(machine.state().raw_value(), Some("+441481"));
    assert_eq!(machine.surface().text(), "1481");

    let machine = EditStateMachineBuilder::new()
        .available([canada(), united_states()])
        .preferred([canada()])
        .raw_value("+1 416 555 0199")
        .build(FakePhoneNumberService::default());
    assert_eq!(machine.state().country_code(), Some(&canada()));
    assert_eq!(machine.state().raw_value(), Some("+14165550199"));
    assert_eq!(machine.table().preferred(), &[canada()]);

    let machine = EditStateMachine::builder().build(FakePhoneNumberService::default());
    assert_eq!(machine.state(), &ResolvedState::default());
    assert!(machine.table().all().len() > 200);
}

#[test]
fn formatter_adding_digits_is_ignored() {
    init_logging();
    let service = FakePhoneNumberService {
        formatter_adds_digits: true,
        ..Default::default()
    };
    let mut machine = EditStateMachine::with_table(small_table(), service);

    type_chars(&mut machine, "16845551234");

    let state = machine.state();
    assert_eq!(state.raw_value(), Some("+16845551234"));
    assert_eq!(state.country_code(), Some(&american_samoa()));
    assert_eq!(state.display_text(), "6845551234");
    assert_eq!(machine.surface().text(), "6845551234");
    assert_eq!(machine.format(Some("+1684")), "684");
}
