//! Zone accumulation for a single builder run

use crate::error::CoreResult;
use crate::types::CountryTimezone;

/// Collects the zones a builder defines, in call order.
///
/// A fresh collector is handed to the builder for each resolution attempt and
/// consumed by the record afterwards.
#[derive(Debug)]
pub struct ZoneCollector {
    entries: Vec<CountryTimezone>,
}

impl ZoneCollector {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Define a timezone for the country
    ///
    /// Fails only when a coordinate has a zero denominator, in which case
    /// nothing is added.
    ///
    /// # Arguments
    /// * `identifier` - Zone identifier, e.g. `Australia/Perth`
    /// * `latitude_numerator`, `latitude_denominator` - Latitude in degrees as a fraction
    /// * `longitude_numerator`, `longitude_denominator` - Longitude in degrees as a fraction
    /// * `description` - Area covered, for countries with more than one zone
    pub fn add_timezone(
        &mut self,
        identifier: impl Into<String>,
        latitude_numerator: i32,
        latitude_denominator: i32,
        longitude_numerator: i32,
        longitude_denominator: i32,
        description: Option<&str>,
    ) -> CoreResult<&mut Self> {
        self.entries.push(CountryTimezone::new(
            identifier,
            latitude_numerator,
            latitude_denominator,
            longitude_numerator,
            longitude_denominator,
            description,
        )?);
        Ok(self)
    }

    /// Number of zones added so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<CountryTimezone> {
        self.entries
    }
}
