//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Coordinate with a zero denominator
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Failure raised by a zone builder routine
    #[error("Zone definition error: {0}")]
    ZoneDefinition(String),

    /// A zone builder read its own record while it was being resolved
    #[error("Zones requested while the same record is being resolved")]
    ReentrantResolution,
}

impl CoreError {
    /// Whether it is expected behavior (bad reference data) rather than a bug, used for log
    /// classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidCoordinate(_) | Self::ZoneDefinition(_) => true,
            Self::ReentrantResolution => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
