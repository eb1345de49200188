//! Trait definitions for the data supplied by the registry

mod zone_builder;

pub use zone_builder::ZoneBuilder;
