//! Country Zones Core Library
//!
//! Country reference data for a timezone database:
//! - `CountryRecord`: an ISO 3166 country with a lazily resolved, cached zone list
//! - `ZoneCollector`: the accumulator handed to a country's zone builder
//! - `CountryTimezone`: one zone of a country, with rational coordinates
//!
//! Zone lists are defined by a builder routine that runs at most once per record,
//! on first access (or during construction in eager mode). Loading the raw
//! timezone database and looking countries up by code belong to the registry that
//! owns the records, not to this library.

pub mod country;
pub mod error;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use country::{CountryRecord, ZoneCollector};
pub use error::{CoreError, CoreResult};
pub use traits::ZoneBuilder;
pub use types::{Coordinate, CountryTimezone, EvaluationMode};
