//! Country record with a lazily resolved zone list

use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::country::resolve::ResolveCell;
use crate::country::ZoneCollector;
use crate::error::CoreResult;
use crate::traits::ZoneBuilder;
use crate::types::{CountryTimezone, EvaluationMode};

/// A country and the timezones it uses.
///
/// The zone list is produced by a builder supplied at construction. The
/// builder runs on the first read of [`zones`](Self::zones) or
/// [`zone_identifiers`](Self::zone_identifiers) (or in the constructor with
/// [`EvaluationMode::Eager`]); once it succeeds the list is fixed for the life
/// of the record and the builder is dropped.
///
/// Records are `Send + Sync`. Concurrent first reads run the builder once and
/// all observe the same slice; resolving one record never blocks another.
pub struct CountryRecord {
    code: String,
    name: String,
    builder: Mutex<Option<Box<dyn ZoneBuilder>>>,
    zones: ResolveCell<Box<[CountryTimezone]>>,
    zone_identifiers: OnceLock<Box<[String]>>,
}

impl CountryRecord {
    /// Create a record whose zones are defined by `builder`
    ///
    /// # Arguments
    /// * `code` - ISO 3166-1 alpha-2 code
    /// * `name` - Country name for display
    /// * `builder` - Adds the country's zones to the collector it is given
    /// * `mode` - Whether to run the builder now or on first read
    pub fn new<F>(
        code: impl Into<String>,
        name: impl Into<String>,
        builder: F,
        mode: EvaluationMode,
    ) -> Self
    where
        F: Fn(&mut ZoneCollector) -> CoreResult<()> + Send + Sync + 'static,
    {
        Self::build(code.into(), name.into(), Some(Box::new(builder)), mode)
    }

    /// Create a record from a boxed [`ZoneBuilder`] implementation
    pub fn with_builder(
        code: impl Into<String>,
        name: impl Into<String>,
        builder: Box<dyn ZoneBuilder>,
        mode: EvaluationMode,
    ) -> Self {
        Self::build(code.into(), name.into(), Some(builder), mode)
    }

    /// Create a record for a country with no zones of its own
    pub fn without_zones(
        code: impl Into<String>,
        name: impl Into<String>,
        mode: EvaluationMode,
    ) -> Self {
        Self::build(code.into(), name.into(), None, mode)
    }

    fn build(
        code: String,
        name: String,
        builder: Option<Box<dyn ZoneBuilder>>,
        mode: EvaluationMode,
    ) -> Self {
        let record = Self {
            code,
            name,
            builder: Mutex::new(builder),
            zones: ResolveCell::new(),
            zone_identifiers: OnceLock::new(),
        };

        if mode.is_eager() && record.zones().is_err() {
            log::debug!(
                "Eager zone resolution for {} failed, retrying on first read",
                record.code
            );
        }

        record
    }

    /// ISO 3166-1 alpha-2 code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the zone list has been built
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.zones.get().is_some()
    }

    /// The country's timezones, in the order the builder added them
    ///
    /// Runs the builder if the list has not been built yet. Builder errors are
    /// returned unchanged and leave the record unresolved, so a later call
    /// tries again.
    pub fn zones(&self) -> CoreResult<&[CountryTimezone]> {
        match self.zones.get_or_try_init(|| self.resolve()) {
            Ok(zones) => Ok(&zones[..]),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to resolve zones for {}: {e}", self.code);
                } else {
                    log::error!("Failed to resolve zones for {}: {e}", self.code);
                }
                Err(e)
            }
        }
    }

    /// Identifiers of [`zones`](Self::zones), in the same order
    pub fn zone_identifiers(&self) -> CoreResult<&[String]> {
        if let Some(identifiers) = self.zone_identifiers.get() {
            return Ok(&identifiers[..]);
        }

        let zones = self.zones()?;
        let identifiers = self.zone_identifiers.get_or_init(|| {
            zones
                .iter()
                .map(|zone| zone.identifier().to_string())
                .collect()
        });
        Ok(&identifiers[..])
    }

    /// Run the builder against a fresh collector.
    ///
    /// Only called through the resolve cell, so never concurrently for one record.
    fn resolve(&self) -> CoreResult<Box<[CountryTimezone]>> {
        log::debug!("Resolving zones for {}", self.code);

        let mut builder = self.builder.lock().unwrap_or_else(PoisonError::into_inner);
        let mut collector = ZoneCollector::new();
        if let Some(builder) = builder.as_ref() {
            builder.populate(&mut collector)?;
        }

        // Release whatever the builder captured.
        if builder.take().is_some() {
            log::debug!("Released zone builder for {}", self.code);
        }

        let zones = collector.into_entries().into_boxed_slice();
        log::debug!("Resolved {} zones for {}", zones.len(), self.code);
        Ok(zones)
    }
}

// Code only; zones may not be resolved and are never forced by formatting.
#[allow(clippy::missing_fields_in_debug)]
impl fmt::Debug for CountryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CountryRecord").field(&self.code).finish()
    }
}
