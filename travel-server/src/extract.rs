//! Confirmation text extraction.
//!
//! Turns an arbitrary block of pasted booking-confirmation text into a
//! best-effort flight leg. This is a heuristic scraper, not a parser for any
//! real confirmation format: each field is pulled out independently, and a
//! field that fails to match is simply left unset rather than failing the
//! whole extraction. Ambiguous input produces a plausible-looking but
//! possibly wrong leg, never an error.
//!
//! The extractor only ever produces Flight legs; it does not try to infer
//! Train or Hotel kinds from the text. That is a deliberate constraint of
//! the current heuristics, not an oversight.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::{ClockTime, Leg};

/// Sentinel carrier code used when no flight code is found in the text.
pub const UNKNOWN_CARRIER: &str = "XX000";

/// Flight codes: two uppercase letters followed by 3-4 digits (LH123, BA2490).
static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2}[0-9]{3,4}").expect("valid regex"));

/// Times of day: H:MM or HH:MM. Candidates are range-checked afterwards.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}").expect("valid regex"));

/// Standalone 3-letter location codes (airport/station style).
static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{3}\b").expect("valid regex"));

/// ISO dates with a 21st-century year.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20\d{2}-\d{2}-\d{2}").expect("valid regex"));

/// Extract a best-effort flight leg from pasted confirmation text.
///
/// The extraction rules run independently over the text:
///
/// - **code**: the first flight-code match; `"XX000"` when none is found.
/// - **times**: all time-of-day matches in order of appearance, skipping any
///   that are not valid 24-hour times. The first becomes `depart`, the
///   second `arrive`; missing ones stay unset.
/// - **locations**: all standalone 3-uppercase-letter tokens in order. The
///   first becomes `from`, the second `to`; missing ones stay unset.
/// - **date**: the first `YYYY-MM-DD` match. When absent, or matched but not
///   a real calendar date, falls back to `today` — the date is never unset
///   because connection analysis requires it.
///
/// `today` is injected rather than read from the wall clock, so the function
/// is pure: for a fixed `(text, today)` the result is always the same.
///
/// # Examples
///
/// ```
/// use travel_server::extract::extract_flight;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let leg = extract_flight("Flight LH123 BER AMS 2025-10-03 10:40 12:00", today);
///
/// assert_eq!(leg.code, "LH123");
/// assert_eq!(leg.from.as_deref(), Some("BER"));
/// assert_eq!(leg.to.as_deref(), Some("AMS"));
/// assert_eq!(leg.date.to_string(), "2025-10-03");
/// ```
pub fn extract_flight(text: &str, today: NaiveDate) -> Leg {
    let code = CODE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_CARRIER.to_string());

    let mut times = TIME_RE
        .find_iter(text)
        .filter_map(|m| ClockTime::parse(m.as_str()).ok());
    let depart = times.next();
    let arrive = times.next();

    let mut locations = LOCATION_RE.find_iter(text).map(|m| m.as_str().to_string());
    let from = locations.next();
    let to = locations.next();

    let date = DATE_RE
        .find(text)
        .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
        .unwrap_or(today);

    Leg::flight(code, from, to, date, depart, arrive)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::LegKind;
    use proptest::prelude::*;

    prop_compose! {
        fn any_date()(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28
        ) -> NaiveDate {
            NaiveDate::from_ymd_opt(year, month, day).unwrap()
        }
    }

    proptest! {
        /// Extraction is total: any text yields a Flight leg with a date.
        #[test]
        fn always_returns_flight(text in ".{0,200}", today in any_date()) {
            let leg = extract_flight(&text, today);
            prop_assert_eq!(leg.kind, LegKind::Flight);
            prop_assert!(leg.name.is_none());
        }

        /// The code is either the sentinel or matches the flight-code shape.
        #[test]
        fn code_is_sentinel_or_flight_shaped(text in ".{0,200}", today in any_date()) {
            let leg = extract_flight(&text, today);
            if leg.code != UNKNOWN_CARRIER {
                prop_assert!(super::CODE_RE.is_match(&leg.code));
            }
        }

        /// Text with no digits can never produce times or a non-fallback date.
        #[test]
        fn digit_free_text_has_no_times(text in "[a-zA-Z ,.]{0,100}", today in any_date()) {
            let leg = extract_flight(&text, today);
            prop_assert!(leg.depart.is_none());
            prop_assert!(leg.arrive.is_none());
            prop_assert_eq!(leg.date, today);
        }

        /// Extraction is deterministic for a fixed (text, today) pair.
        #[test]
        fn deterministic(text in ".{0,200}", today in any_date()) {
            prop_assert_eq!(
                extract_flight(&text, today),
                extract_flight(&text, today)
            );
        }

        /// arrive is only ever set when depart is also set.
        #[test]
        fn arrive_implies_depart(text in ".{0,200}", today in any_date()) {
            let leg = extract_flight(&text, today);
            if leg.arrive.is_some() {
                prop_assert!(leg.depart.is_some());
            }
        }

        /// to is only ever set when from is also set.
        #[test]
        fn to_implies_from(text in ".{0,200}", today in any_date()) {
            let leg = extract_flight(&text, today);
            if leg.to.is_some() {
                prop_assert!(leg.from.is_some());
            }
        }
    }
}
