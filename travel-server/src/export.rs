//! CSV data contract for itineraries.
//!
//! Fixed column order `type,code,from,to,date,depart,arrive,name`, every
//! field quoted, empty string for unset optionals. This covers the data
//! contract only; download glue and presentation formatting live elsewhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ClockTime, DomainError, Leg, LegKind};

/// Errors produced by CSV encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("row {row}: unknown leg kind {kind:?}")]
    UnknownKind { row: usize, kind: String },

    #[error("row {row}: invalid date {value:?}")]
    InvalidDate { row: usize, value: String },

    #[error("row {row}: invalid {field} time {value:?}")]
    InvalidTime {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: {source}")]
    InvalidLeg { row: usize, source: DomainError },
}

/// A leg as it appears on the wire in CSV: all fields are plain strings,
/// with the empty string standing in for unset optionals.
#[derive(Debug, Serialize, Deserialize)]
struct LegRecord {
    #[serde(rename = "type")]
    kind: String,
    code: String,
    from: String,
    to: String,
    date: String,
    depart: String,
    arrive: String,
    name: String,
}

impl From<&Leg> for LegRecord {
    fn from(leg: &Leg) -> Self {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        let time = |v: &Option<ClockTime>| v.map(|t| t.to_string()).unwrap_or_default();

        LegRecord {
            kind: leg.kind.to_string(),
            code: leg.code.clone(),
            from: opt(&leg.from),
            to: opt(&leg.to),
            date: leg.date.to_string(),
            depart: time(&leg.depart),
            arrive: time(&leg.arrive),
            name: opt(&leg.name),
        }
    }
}

impl LegRecord {
    /// Convert a record back into a leg. `row` is the 1-based data row
    /// number, used for error reporting.
    fn into_leg(self, row: usize) -> Result<Leg, ExportError> {
        let kind = match self.kind.as_str() {
            "Flight" => LegKind::Flight,
            "Train" => LegKind::Train,
            "Hotel" => LegKind::Hotel,
            _ => {
                return Err(ExportError::UnknownKind {
                    row,
                    kind: self.kind,
                });
            }
        };

        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| {
            ExportError::InvalidDate {
                row,
                value: self.date.clone(),
            }
        })?;

        let opt = |s: String| if s.is_empty() { None } else { Some(s) };
        let time = |s: String, field: &'static str| -> Result<Option<ClockTime>, ExportError> {
            if s.is_empty() {
                return Ok(None);
            }
            ClockTime::parse(&s)
                .map(Some)
                .map_err(|_| ExportError::InvalidTime {
                    row,
                    field,
                    value: s,
                })
        };

        let depart = time(self.depart, "depart")?;
        let arrive = time(self.arrive, "arrive")?;

        Leg::new(
            kind,
            self.code,
            opt(self.from),
            opt(self.to),
            date,
            depart,
            arrive,
            opt(self.name),
        )
        .map_err(|source| ExportError::InvalidLeg { row, source })
    }
}

/// Encode an itinerary as CSV, header row included.
pub fn legs_to_csv(legs: &[Leg]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .from_writer(&mut buf);

        for leg in legs {
            writer.serialize(LegRecord::from(leg))?;
        }
        writer.flush()?;
    }

    // The writer only ever received UTF-8 strings
    Ok(String::from_utf8(buf).expect("csv output is valid UTF-8"))
}

/// Decode an itinerary from CSV text.
///
/// Empty input yields an empty itinerary. Rows with an unknown kind, an
/// unparseable date/time, or fields the kind does not carry are errors.
pub fn legs_from_csv(text: &str) -> Result<Vec<Leg>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut legs = Vec::new();
    for (i, record) in reader.deserialize::<LegRecord>().enumerate() {
        legs.push(record?.into_leg(i + 1)?);
    }
    Ok(legs)
}
