//! Itinerary leg type.
//!
//! A `Leg` is one segment of a tour itinerary: a flight, a train ride, or a
//! hotel stay. Which optional fields are populated is keyed by the kind:
//! transit legs carry locations and times, hotel stays carry a display name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClockTime, DomainError};

/// The kind of an itinerary leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegKind {
    Flight,
    Train,
    Hotel,
}

impl LegKind {
    /// Returns true for legs that move between locations (Flight, Train).
    pub fn is_transit(&self) -> bool {
        matches!(self, LegKind::Flight | LegKind::Train)
    }
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LegKind::Flight => "Flight",
            LegKind::Train => "Train",
            LegKind::Hotel => "Hotel",
        };
        f.write_str(s)
    }
}

/// One segment of a travel itinerary.
///
/// `from`/`to` are advisory location codes (typically 3-letter airport or
/// station codes when extracted from confirmation text); the model does not
/// enforce a format on them. Times are naive local clock values and the date
/// is shared by the whole leg; overnight legs are not modelled.
///
/// An itinerary is an ordered `Vec<Leg>`, assumed already chronological.
/// Legs are never mutated by analysis; the analyzer only reads them.
///
/// # Examples
///
/// ```
/// use travel_server::domain::{ClockTime, Leg};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
/// let leg = Leg::flight(
///     "LH123",
///     Some("BER".into()),
///     Some("AMS".into()),
///     date,
///     ClockTime::parse("10:40").ok(),
///     ClockTime::parse("12:00").ok(),
/// );
/// assert!(leg.kind.is_transit());
/// assert_eq!(leg.code, "LH123");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Flight, Train or Hotel.
    pub kind: LegKind,

    /// Carrier/train identifier or hotel reference. Required, free-form.
    pub code: String,

    /// Origin location code (transit legs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Destination location code (transit legs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Calendar date the leg occurs. Always present.
    pub date: NaiveDate,

    /// Local departure time (transit legs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depart: Option<ClockTime>,

    /// Local arrival time (transit legs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrive: Option<ClockTime>,

    /// Display name (hotel stays only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Leg {
    /// Construct a leg of any kind, checking that only fields the kind
    /// carries are populated.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnexpectedField` if a hotel stay has locations
    /// or times, or a transit leg has a name.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: LegKind,
        code: impl Into<String>,
        from: Option<String>,
        to: Option<String>,
        date: NaiveDate,
        depart: Option<ClockTime>,
        arrive: Option<ClockTime>,
        name: Option<String>,
    ) -> Result<Self, DomainError> {
        if kind.is_transit() {
            if name.is_some() {
                return Err(DomainError::UnexpectedField {
                    kind,
                    field: "name",
                });
            }
        } else {
            for (field, present) in [
                ("from", from.is_some()),
                ("to", to.is_some()),
                ("depart", depart.is_some()),
                ("arrive", arrive.is_some()),
            ] {
                if present {
                    return Err(DomainError::UnexpectedField { kind, field });
                }
            }
        }

        Ok(Leg {
            kind,
            code: code.into(),
            from,
            to,
            date,
            depart,
            arrive,
            name,
        })
    }

    /// Construct a flight leg. Any of the transit fields may be unset; a
    /// best-effort extraction often produces a partially filled leg.
    pub fn flight(
        code: impl Into<String>,
        from: Option<String>,
        to: Option<String>,
        date: NaiveDate,
        depart: Option<ClockTime>,
        arrive: Option<ClockTime>,
    ) -> Self {
        Leg {
            kind: LegKind::Flight,
            code: code.into(),
            from,
            to,
            date,
            depart,
            arrive,
            name: None,
        }
    }

    /// Construct a train leg.
    pub fn train(
        code: impl Into<String>,
        from: Option<String>,
        to: Option<String>,
        date: NaiveDate,
        depart: Option<ClockTime>,
        arrive: Option<ClockTime>,
    ) -> Self {
        Leg {
            kind: LegKind::Train,
            code: code.into(),
            from,
            to,
            date,
            depart,
            arrive,
            name: None,
        }
    }

    /// Construct a hotel stay. Hotels have no locations or times, so they
    /// never participate in connection analysis.
    pub fn hotel(code: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        Leg {
            kind: LegKind::Hotel,
            code: code.into(),
            from: None,
            to: None,
            date,
            depart: None,
            arrive: None,
            name: Some(name.into()),
        }
    }

    /// Returns true for legs that move between locations.
    pub fn is_transit(&self) -> bool {
        self.kind.is_transit()
    }
}
