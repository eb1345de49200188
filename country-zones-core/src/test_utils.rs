//! Test helpers
//!
//! Stub builders that count their invocations, plus zone table fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::country::ZoneCollector;
use crate::error::{CoreError, CoreResult};
use crate::traits::ZoneBuilder;

/// One row of a zone table: identifier, latitude, longitude, description
pub type ZoneRow = (&'static str, i32, i32, i32, i32, Option<&'static str>);

pub const AUSTRALIA: &[ZoneRow] = &[
    ("Australia/Sydney", 33, -1, 151, 1, Some("New South Wales")),
    ("Australia/Perth", 31, -1, 115, 1, Some("Western Australia")),
];

pub const NAMED_ABC: &[ZoneRow] = &[
    ("A", 1, 1, 1, 1, None),
    ("B", 2, 1, 2, 1, None),
    ("C", 3, 1, 3, 1, None),
];

// ===== CallCounter =====

/// Shared view of how often a builder ran, kept after the builder is moved
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn increment(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

// ===== CountingBuilder =====

pub struct CountingBuilder {
    rows: &'static [ZoneRow],
    calls: CallCounter,
    /// Number of initial attempts that add the first row and then fail
    failures: usize,
    delay: Option<Duration>,
}

impl CountingBuilder {
    pub fn new(rows: &'static [ZoneRow]) -> Self {
        Self {
            rows,
            calls: CallCounter::default(),
            failures: 0,
            delay: None,
        }
    }

    pub fn failing_first(mut self, failures: usize) -> Self {
        self.failures = failures;
        self
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn counter(&self) -> CallCounter {
        self.calls.clone()
    }

    pub fn boxed(self) -> Box<dyn ZoneBuilder> {
        Box::new(self)
    }
}

impl ZoneBuilder for CountingBuilder {
    fn populate(&self, zones: &mut ZoneCollector) -> CoreResult<()> {
        let attempt = self.calls.increment();
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        let failing = attempt < self.failures;
        for row in self.rows {
            add_row(zones, row)?;
            if failing {
                // Leave a partially filled collector behind.
                break;
            }
        }

        if failing {
            return Err(CoreError::ZoneDefinition(format!("attempt {attempt} failed")));
        }
        Ok(())
    }
}

pub fn add_row(zones: &mut ZoneCollector, row: &ZoneRow) -> CoreResult<()> {
    let (identifier, lat_num, lat_den, lon_num, lon_den, description) = *row;
    zones.add_timezone(identifier, lat_num, lat_den, lon_num, lon_den, description)?;
    Ok(())
}
