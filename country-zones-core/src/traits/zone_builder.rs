//! Zone builder abstract Trait

use crate::country::ZoneCollector;
use crate::error::CoreResult;

/// Zone Builder Trait
///
/// Defines the timezones of one country. A `CountryRecord` calls `populate`
/// when its zone list is first needed and drops the builder once the call
/// succeeds, releasing whatever data it captured.
///
/// Implemented for any `Fn(&mut ZoneCollector) -> CoreResult<()>` closure, which
/// is how the registry normally supplies zone tables.
pub trait ZoneBuilder: Send + Sync {
    /// Add the country's zones to `zones`
    ///
    /// Zones must be added in the order they should be reported. An error
    /// discards everything added so far; the record stays unresolved and calls
    /// `populate` again on the next read.
    ///
    /// # Arguments
    /// * `zones` - Empty collector for this attempt
    fn populate(&self, zones: &mut ZoneCollector) -> CoreResult<()>;
}

impl<F> ZoneBuilder for F
where
    F: Fn(&mut ZoneCollector) -> CoreResult<()> + Send + Sync,
{
    fn populate(&self, zones: &mut ZoneCollector) -> CoreResult<()> {
        self(zones)
    }
}
