//! Country records and their zone tables

mod collector;
mod record;
mod resolve;

pub use collector::ZoneCollector;
pub use record::CountryRecord;
