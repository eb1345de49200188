//! Shared test tools and helpers

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use country_zones_core::{CountryRecord, CoreResult, EvaluationMode, ZoneCollector};

/// One row of a zone table: identifier, latitude, longitude, description
pub type ZoneRow = (&'static str, i32, i32, i32, i32, Option<&'static str>);

/// A small excerpt of the country zone table
pub const COUNTRIES: &[(&str, &str, &[ZoneRow])] = &[
    (
        "AU",
        "Australia",
        &[
            ("Australia/Lord_Howe", -3133, 100, 15905, 100, Some("Lord Howe Island")),
            ("Antarctica/Macquarie", -54, 1, 15895, 100, Some("Macquarie Island")),
            ("Australia/Hobart", -4253, 100, 14719, 100, Some("Tasmania")),
            ("Australia/Sydney", -3352, 60, 15113, 60, Some("New South Wales (most areas)")),
            ("Australia/Perth", -3157, 60, 11551, 60, Some("Western Australia (most areas)")),
        ],
    ),
    (
        "GB",
        "United Kingdom",
        &[("Europe/London", 3091, 60, -7, 60, None)],
    ),
    (
        "AQ",
        "Antarctica",
        &[
            (
                "Antarctica/McMurdo",
                -7750,
                100,
                16660,
                100,
                Some("New Zealand time - McMurdo, South Pole"),
            ),
            ("Antarctica/DumontDUrville", -6667, 100, 14001, 100, None),
        ],
    ),
    ("BV", "Bouvet Island", &[]),
];

/// Builder for `rows` that counts its invocations in `calls`
pub fn counting_builder(
    rows: &'static [ZoneRow],
    calls: Arc<AtomicUsize>,
) -> impl Fn(&mut ZoneCollector) -> CoreResult<()> + Send + Sync + 'static {
    move |zones| {
        calls.fetch_add(1, Ordering::SeqCst);
        for &(identifier, lat_num, lat_den, lon_num, lon_den, description) in rows {
            zones.add_timezone(identifier, lat_num, lat_den, lon_num, lon_den, description)?;
        }
        Ok(())
    }
}

/// Build records the way a registry would, with one shared invocation counter
pub fn load_registry(
    mode: EvaluationMode,
) -> (HashMap<&'static str, CountryRecord>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let registry = COUNTRIES
        .iter()
        .map(|&(code, name, rows)| {
            let record = if rows.is_empty() {
                CountryRecord::without_zones(code, name, mode)
            } else {
                CountryRecord::new(code, name, counting_builder(rows, Arc::clone(&calls)), mode)
            };
            (code, record)
        })
        .collect();
    (registry, calls)
}
