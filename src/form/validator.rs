//! Per-field validation rules.
//!
//! Every rule is an independent predicate over the raw input string. The
//! functions here return `true` when the value is *invalid*, which is the
//! flag the form stores and renders as an inline hint.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use crate::form::field::{Field, GENDER_OPTIONS};

/// Youngest age accepted for the date-of-birth field, in whole years.
pub const MIN_AGE_YEARS: i32 = 15;

/// Shortest accepted address, in characters.
pub const MIN_ADDRESS_LEN: usize = 10;

pub const MOBILE_DIGITS: usize = 10;

/// Date format produced by the date-of-birth input.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Hint for a date of birth that is filled in but not a `YYYY-MM-DD` date.
pub const DOB_FORMAT_HINT: &str = "Enter the date as YYYY-MM-DD";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is valid")
});

/// Validate `value` for `field` against the local calendar year.
pub fn validate(field: Field, value: &str) -> bool {
    validate_in_year(field, value, Local::now().year())
}

/// Validate by wire name. Names with no rule are never invalid.
pub fn validate_named(name: &str, value: &str) -> bool {
    match name.parse::<Field>() {
        Ok(field) => validate(field, value),
        Err(_) => false,
    }
}

/// Validate `value` for `field`, treating `current_year` as "now" for the
/// date-of-birth rule.
pub fn validate_in_year(field: Field, value: &str, current_year: i32) -> bool {
    match field {
        Field::FirstName | Field::LastName => has_consecutive_whitespace(value),
        Field::Address => value.chars().count() < MIN_ADDRESS_LEN,
        Field::Mobile => !is_mobile_number(value),
        Field::Email => !EMAIL_RE.is_match(value),
        Field::Dob => is_too_young(value, current_year),
        Field::Course => value.trim().is_empty(),
        Field::Gender => !GENDER_OPTIONS.contains(&value),
    }
}

fn has_consecutive_whitespace(value: &str) -> bool {
    let mut previous = false;
    for ch in value.chars() {
        let current = ch.is_whitespace();
        if current && previous {
            return true;
        }
        previous = current;
    }
    false
}

fn is_mobile_number(value: &str) -> bool {
    value.len() == MOBILE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// Inline hint for `field` flagged invalid while holding `value`.
///
/// Only the date of birth has two ways to fail, so only it depends on the
/// value.
pub fn error_hint(field: Field, value: &str) -> &'static str {
    match field {
        Field::Dob if parse_dob(value).is_none() => DOB_FORMAT_HINT,
        _ => field.error_hint(),
    }
}

fn parse_dob(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DOB_FORMAT).ok()
}

/// Naive year subtraction: month and day are ignored. An empty value is left
/// to the submission gate; anything else that is not a date is invalid.
fn is_too_young(value: &str, current_year: i32) -> bool {
    if value.is_empty() {
        return false;
    }
    match parse_dob(value) {
        Some(birth) => current_year - birth.year() < MIN_AGE_YEARS,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_spaces_in_names_are_fine() {
        assert!(!validate_in_year(Field::FirstName, "Mary Ann", 2026));
        assert!(!validate_in_year(Field::LastName, " de la Cruz ", 2026));
    }

    #[test]
    fn mixed_whitespace_pair_counts_as_double() {
        assert!(validate_in_year(Field::FirstName, "Mary\t Ann", 2026));
        assert!(validate_in_year(Field::LastName, "a\n\nb", 2026));
    }

    #[test]
    fn address_counts_characters_not_bytes() {
        // 10 chars, 20 bytes.
        assert!(!validate_in_year(Field::Address, "ÄÄÄÄÄÄÄÄÄÄ", 2026));
        assert!(validate_in_year(Field::Address, "ÄÄÄÄÄÄÄÄÄ", 2026));
    }

    #[test]
    fn mobile_rejects_non_ascii_digits() {
        assert!(validate_in_year(Field::Mobile, "١٢٣٤٥٦٧٨٩٠", 2026));
    }

    #[test]
    fn dob_ignores_month_and_day() {
        assert!(!validate_in_year(Field::Dob, "2011-12-31", 2026));
        assert!(validate_in_year(Field::Dob, "2012-01-01", 2026));
    }

    #[test]
    fn dob_in_the_future_is_invalid() {
        assert!(validate_in_year(Field::Dob, "2030-01-01", 2026));
    }

    #[test]
    fn unparseable_dob_is_invalid() {
        assert!(validate_in_year(Field::Dob, "2000-0", 2026));
        assert!(validate_in_year(Field::Dob, "01/02/2000", 2026));
        assert!(validate_in_year(Field::Dob, "2000-02-30", 2026));
    }

    #[test]
    fn empty_dob_is_left_to_the_gate() {
        assert!(!validate_in_year(Field::Dob, "", 2026));
    }

    #[test]
    fn dob_hint_tells_format_from_age() {
        assert_eq!(error_hint(Field::Dob, "2000-0"), DOB_FORMAT_HINT);
        assert_eq!(error_hint(Field::Dob, "2020-01-01"), Field::Dob.error_hint());
        assert_eq!(error_hint(Field::Mobile, "12"), Field::Mobile.error_hint());
    }

    #[test]
    fn gender_accepts_only_listed_options() {
        for option in GENDER_OPTIONS {
            assert!(!validate_in_year(Field::Gender, option, 2026));
        }
        assert!(validate_in_year(Field::Gender, "", 2026));
        assert!(validate_in_year(Field::Gender, "Female", 2026));
    }

    #[test]
    fn unknown_names_are_never_invalid() {
        assert!(!validate_named("nickname", ""));
        assert!(validate_named("mobile", "123"));
    }
}
