use std::error::Error;
use std::path::PathBuf;

use climate_api::ClimateDb;

fn main() -> Result<(), Box<dyn Error>> {
    let file_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Resources/hawaii.sqlite"));

    println!("Inspecting database: {}", file_path.display());

    let db = ClimateDb::open(&file_path)?;

    println!("\n=== TABLES ===");
    for table in &db.schema().tables {
        println!("  {} ({})", table.name, table.columns.join(", "));
    }

    println!("\n=== ROW COUNTS ===");
    println!("  station     = {}", db.count_stations()?);
    println!("  measurement = {}", db.count_measurements()?);

    let stations = db.list_stations()?;
    println!("\n=== STATIONS ===");
    for station in &stations {
        println!("  {:<12} {}", station.station, station.name);
    }

    Ok(())
}
