//! Test data generation utilities.
//!
//! Writes small SQLite files shaped like the Hawaii climate dataset, with the
//! same rows exposed as constants so tests can compute expected answers.

use rusqlite::{params, Connection};
use std::path::Path;

type Result<T> = std::result::Result<T, rusqlite::Error>;

/// (station code, name, latitude, longitude, elevation)
pub const STATIONS: &[(&str, &str, f64, f64, f64)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00514830", "KUALOA RANCH HEADQUARTERS 886.9, HI US", 21.5213, -157.8374, 7.0),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

/// (station code, date, precipitation, temperature observation)
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519397", "2016-08-21", Some(0.0), 79.0),
    ("USC00519397", "2016-08-22", Some(0.4), 76.0),
    ("USC00519397", "2016-08-23", Some(0.0), 81.0),
    ("USC00513117", "2016-08-23", Some(0.15), 76.0),
    ("USC00519397", "2016-08-24", Some(0.08), 79.0),
    ("USC00513117", "2016-08-24", Some(2.15), 76.0),
    ("USC00514830", "2016-08-24", Some(2.28), 80.0),
    ("USC00519281", "2016-08-24", Some(2.15), 77.0),
    ("USC00519397", "2016-08-25", Some(0.08), 80.0),
    ("USC00513117", "2016-08-25", None, 77.0),
    ("USC00519281", "2016-08-26", Some(0.01), 78.0),
    ("USC00519397", "2017-01-01", Some(0.0), 62.0),
    ("USC00519281", "2017-08-18", None, 79.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
    ("USC00519281", "2017-08-23", Some(0.45), 82.0),
];

/// Creates a database with the `station` and `measurement` tables filled from
/// [`STATIONS`] and [`MEASUREMENTS`].
pub fn create_hawaii_fixture(path: &Path) -> Result<()> {
    let mut conn = Connection::open(path)?;
    conn.execute_batch(
        "CREATE TABLE station (
            id INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        );
        CREATE TABLE measurement (
            id INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        );",
    )?;

    let tx = conn.transaction()?;
    for (station, name, latitude, longitude, elevation) in STATIONS {
        tx.execute(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![station, name, latitude, longitude, elevation],
        )?;
    }
    for (station, date, prcp, tobs) in MEASUREMENTS {
        tx.execute(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
            params![station, date, prcp, tobs],
        )?;
    }
    tx.commit()
}

/// Creates a database that lacks the `measurement` table.
pub fn create_stations_only_db(path: &Path) -> Result<()> {
    let conn = Connection::open(path)?;
    conn.execute_batch(
        "CREATE TABLE station (
            id INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        );",
    )
}

/// Name of the station with the given code
pub fn station_name(code: &str) -> &'static str {
    STATIONS
        .iter()
        .find(|(station, ..)| *station == code)
        .map(|(_, name, ..)| *name)
        .expect("Unknown station code")
}

/// Temperature observations with dates satisfying `filter`
pub fn tobs_where(filter: impl Fn(&str) -> bool) -> Vec<f64> {
    MEASUREMENTS
        .iter()
        .filter(|(_, date, ..)| filter(date))
        .map(|(.., tobs)| *tobs)
        .collect()
}
