//! Connection risk analysis.
//!
//! Scans an ordered itinerary for same-day transitions with too little
//! buffer between one leg's arrival and the next leg's departure. Only
//! immediately adjacent legs are compared; the itinerary is assumed to
//! already be chronological and is never re-sorted or mutated here.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::Leg;

/// Configuration for connection analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Minimum buffer between arrival and next departure (minutes).
    /// Same-day connections tighter than this are flagged.
    pub min_connection_mins: i64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 60,
        }
    }
}

/// A flagged tight connection between two adjacent legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TightConnection {
    /// The shared date of both legs.
    pub date: NaiveDate,
    /// Code of the arriving leg.
    pub earlier_code: String,
    /// Code of the departing leg.
    pub later_code: String,
    /// Buffer between arrival and departure in minutes. Negative when the
    /// later leg's clock time is before the earlier leg's arrival.
    pub gap_mins: i64,
}

impl fmt::Display for TightConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tight connection on {} between {} and {}",
            self.date, self.earlier_code, self.later_code
        )
    }
}

/// Find tight connections using a custom configuration.
///
/// A single left-to-right pass over adjacent pairs `(i, i + 1)`. A pair is
/// only evaluated when both legs fall on the same date and the earlier leg
/// has an arrival time and the later leg a departure time; hotel stays never
/// carry these, so they are silently skipped. Results appear in pair order.
///
/// The gap is computed on plain minutes of day with no date rollover: a pair
/// that wraps past midnight comes out negative, which is below any sensible
/// threshold and therefore flags. Changing that would change observable
/// output, so it stays.
pub fn find_tight_connections_with(legs: &[Leg], config: &AnalyzerConfig) -> Vec<TightConnection> {
    let mut out = Vec::new();

    for pair in legs.windows(2) {
        let [a, b] = pair else { continue };

        if a.date != b.date {
            continue;
        }
        let (Some(arrive), Some(depart)) = (a.arrive, b.depart) else {
            continue;
        };

        let gap_mins = depart.minutes_of_day() - arrive.minutes_of_day();
        if gap_mins < config.min_connection_mins {
            out.push(TightConnection {
                date: a.date,
                earlier_code: a.code.clone(),
                later_code: b.code.clone(),
                gap_mins,
            });
        }
    }

    out
}

/// Find tight connections with the default 60-minute threshold.
pub fn find_tight_connections(legs: &[Leg]) -> Vec<TightConnection> {
    find_tight_connections_with(legs, &AnalyzerConfig::default())
}

/// Render tight connections as human-readable warning strings.
///
/// # Examples
///
/// ```
/// use travel_server::analyze::connection_warnings;
/// use travel_server::domain::{ClockTime, Leg};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
/// let legs = vec![
///     Leg::flight("LH123", None, None, date, None, ClockTime::parse("12:00").ok()),
///     Leg::flight("AF200", None, None, date, ClockTime::parse("12:30").ok(), None),
/// ];
///
/// let warnings = connection_warnings(&legs);
/// assert_eq!(
///     warnings,
///     vec!["Tight connection on 2025-10-03 between LH123 and AF200"]
/// );
/// ```
pub fn connection_warnings(legs: &[Leg]) -> Vec<String> {
    find_tight_connections(legs)
        .iter()
        .map(TightConnection::to_string)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{ClockTime, Leg, LegKind};
    use proptest::prelude::*;

    fn arb_kind() -> impl Strategy<Value = LegKind> {
        prop_oneof![
            Just(LegKind::Flight),
            Just(LegKind::Train),
            Just(LegKind::Hotel),
        ]
    }

    prop_compose! {
        fn arb_leg()(
            kind in arb_kind(),
            day in 1u32..=28,
            depart in proptest::option::of((0u32..24, 0u32..60)),
            arrive in proptest::option::of((0u32..24, 0u32..60)),
        ) -> Leg {
            let date = NaiveDate::from_ymd_opt(2025, 10, day).unwrap();
            match kind {
                LegKind::Hotel => Leg::hotel("PENDING", "Somewhere", date),
                LegKind::Flight | LegKind::Train => {
                    let mk = |t: Option<(u32, u32)>| {
                        t.map(|(h, m)| ClockTime::from_hm(h, m).unwrap())
                    };
                    Leg::flight("PENDING", None, None, date, mk(depart), mk(arrive))
                }
            }
        }
    }

    /// Itinerary with position-unique codes, so a flagged pair can be traced
    /// back to exactly one input pair.
    fn arb_itinerary(max: usize) -> impl Strategy<Value = Vec<Leg>> {
        proptest::collection::vec(arb_leg(), 0..max).prop_map(|mut legs| {
            for (i, leg) in legs.iter_mut().enumerate() {
                leg.code = format!("XX{:03}", i);
            }
            legs
        })
    }

    proptest! {
        /// Never more warnings than adjacent pairs.
        #[test]
        fn warning_count_bounded(legs in arb_itinerary(8)) {
            let warnings = connection_warnings(&legs);
            prop_assert!(warnings.len() <= legs.len().saturating_sub(1));
        }

        /// Running the analyzer twice gives identical output.
        #[test]
        fn idempotent(legs in arb_itinerary(8)) {
            prop_assert_eq!(connection_warnings(&legs), connection_warnings(&legs));
        }

        /// The analyzer never mutates its input.
        #[test]
        fn input_unchanged(legs in arb_itinerary(8)) {
            let before = legs.clone();
            let _ = find_tight_connections(&legs);
            prop_assert_eq!(legs, before);
        }

        /// Every flagged pair shares a date and has a below-threshold gap.
        #[test]
        fn flagged_pairs_are_genuinely_tight(
            legs in arb_itinerary(8)
        ) {
            for conn in find_tight_connections(&legs) {
                prop_assert!(conn.gap_mins < 60);
                // The flagged pair must exist adjacently in the input
                let found = legs.windows(2).any(|w| {
                    w[0].code == conn.earlier_code
                        && w[1].code == conn.later_code
                        && w[0].date == conn.date
                        && w[1].date == conn.date
                });
                prop_assert!(found);
            }
        }

        /// Hotel legs never appear in any flagged pair.
        #[test]
        fn hotels_never_flagged(legs in arb_itinerary(8)) {
            let hotel_codes: Vec<&str> = legs
                .iter()
                .filter(|l| l.kind == LegKind::Hotel)
                .map(|l| l.code.as_str())
                .collect();

            for conn in find_tight_connections(&legs) {
                prop_assert!(!hotel_codes.contains(&conn.earlier_code.as_str()));
                prop_assert!(!hotel_codes.contains(&conn.later_code.as_str()));
            }
        }
    }
}
