//! JSON file-backed itinerary store.
//!
//! Holds the ordered leg list in memory and writes it through to a JSON
//! file on every change. A missing or unreadable file degrades to a seed
//! itinerary rather than failing startup; write failures are real errors.

use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use crate::domain::{ClockTime, Leg};

/// Errors from persisting the itinerary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize itinerary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write itinerary file: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for the itinerary store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the itinerary file.
    pub path: PathBuf,
}

impl StoreConfig {
    /// Create a store config with the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("itinerary.json")
    }
}

/// The itinerary store.
///
/// Readers get a snapshot of the current leg list; writers replace the whole
/// list, which is written through to disk before the in-memory copy is
/// swapped. The analyzer and extractor never touch the store directly -- the
/// web layer reads legs, invokes them, and writes results back.
#[derive(Debug)]
pub struct ItineraryStore {
    config: StoreConfig,
    legs: RwLock<Vec<Leg>>,
}

impl ItineraryStore {
    /// Open the store, loading legs from disk.
    ///
    /// A missing, unreadable, or corrupt file falls back to the seed
    /// itinerary (with a warning) instead of failing.
    pub fn open(config: StoreConfig) -> Self {
        let legs = match Self::load(&config.path) {
            Some(legs) => legs,
            None => {
                tracing::warn!(
                    path = %config.path.display(),
                    "no usable itinerary file, starting from seed itinerary"
                );
                seed_itinerary()
            }
        };

        Self {
            config,
            legs: RwLock::new(legs),
        }
    }

    fn load(path: &Path) -> Option<Vec<Leg>> {
        let contents = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Returns a snapshot of the current leg list.
    pub async fn legs(&self) -> Vec<Leg> {
        self.legs.read().await.clone()
    }

    /// Replace the leg list, writing through to disk.
    pub async fn set_legs(&self, legs: Vec<Leg>) -> Result<(), StoreError> {
        let mut guard = self.legs.write().await;
        self.persist(&legs)?;
        *guard = legs;
        Ok(())
    }

    /// Insert a leg at the front of the list (newest first, as extracted
    /// legs are displayed). Returns the updated list.
    pub async fn prepend(&self, leg: Leg) -> Result<Vec<Leg>, StoreError> {
        let mut guard = self.legs.write().await;
        let mut legs = Vec::with_capacity(guard.len() + 1);
        legs.push(leg);
        legs.extend(guard.iter().cloned());
        self.persist(&legs)?;
        *guard = legs.clone();
        Ok(legs)
    }

    fn persist(&self, legs: &[Leg]) -> Result<(), StoreError> {
        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(legs)?;
        std::fs::write(&self.config.path, json)?;
        Ok(())
    }

    /// Returns the itinerary file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

/// The default itinerary a fresh installation starts with.
pub fn seed_itinerary() -> Vec<Leg> {
    let date = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
    let time = |h, m| ClockTime::from_hm(h, m).expect("valid seed time");

    vec![
        Leg::flight(
            "LH123",
            Some("BER".into()),
            Some("AMS".into()),
            date(2025, 10, 3),
            Some(time(10, 40)),
            Some(time(12, 0)),
        ),
        Leg::train(
            "ICE 708",
            Some("AMS".into()),
            Some("PAR".into()),
            date(2025, 11, 20),
            Some(time(8, 20)),
            Some(time(12, 10)),
        ),
        Leg::hotel("H-PAR", "Hotel Amour", date(2025, 11, 20)),
    ]
}
