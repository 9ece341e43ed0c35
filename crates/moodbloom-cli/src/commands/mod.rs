pub mod config;
pub mod emotions;
pub mod garden;
pub mod log;

use moodbloom_core::{Config, Database, GardenSession};

/// Open the garden stored in the data directory.
pub fn open_session() -> Result<(GardenSession<Database>, Config), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let session = GardenSession::open_strict(Database::open()?, &config.garden)?;
    Ok((session, config))
}

/// Print a non-fatal persistence problem.
pub fn report_persist_warning(warning: Option<&str>) {
    if let Some(w) = warning {
        eprintln!("warning: changes may not have been saved: {w}");
    }
}
