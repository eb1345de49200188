//! Type definition module

mod coordinate;
mod country_timezone;
mod evaluation_mode;

pub use coordinate::Coordinate;
pub use country_timezone::CountryTimezone;
pub use evaluation_mode::EvaluationMode;
