//! Country timezone type definition

use std::borrow::Cow;

use serde::Serialize;

use crate::error::CoreResult;
use crate::types::Coordinate;
use crate::utils::identifier::friendly_identifier;

/// A timezone used by a country, as listed in the country's zone table.
///
/// Coordinates are those of the zone's principal location, kept as exact
/// rationals so that values read from the reference data round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTimezone {
    identifier: String,
    latitude: Coordinate,
    longitude: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CountryTimezone {
    /// Create a country timezone from its identifier and rational coordinates
    pub fn new(
        identifier: impl Into<String>,
        latitude_numerator: i32,
        latitude_denominator: i32,
        longitude_numerator: i32,
        longitude_denominator: i32,
        description: Option<&str>,
    ) -> CoreResult<Self> {
        Ok(Self {
            identifier: identifier.into(),
            latitude: Coordinate::new(latitude_numerator, latitude_denominator)?,
            longitude: Coordinate::new(longitude_numerator, longitude_denominator)?,
            description: description.map(str::to_string),
        })
    }

    /// Zone identifier, e.g. `Australia/Sydney`
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn latitude(&self) -> Coordinate {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> Coordinate {
        self.longitude
    }

    /// Description of the area covered, only present for countries with several zones
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The description if there is one, otherwise a readable form of the identifier
    /// without its region (`Australia/Lord_Howe` gives `Lord Howe`).
    #[must_use]
    pub fn description_or_friendly_identifier(&self) -> Cow<'_, str> {
        match &self.description {
            Some(description) => Cow::Borrowed(description),
            None => Cow::Owned(friendly_identifier(&self.identifier, true)),
        }
    }
}
