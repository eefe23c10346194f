use crate::models::{AppError, Unit, Value};
use crate::utils::{read_json_file, write_json_file};
use log::{debug, info};
use std::path::Path;

/// Load the candidate values to deduplicate from a JSON array on disk.
///
/// Elements are not required to be units here; `uniq` rejects those.
///
/// # Errors
/// Returns `AppError` if the file is missing or is not a JSON array.
pub fn load_values(path: &str) -> Result<Vec<Value>, AppError> {
    let values: Vec<Value> = read_json_file(Path::new(path))?;
    debug!("loaded {} values from {}", values.len(), path);
    Ok(values)
}

/// Persist kept units as a pretty-printed JSON array.
///
/// # Errors
/// Returns `AppError` if the file cannot be written.
pub fn save_units(path: &str, units: &[&Unit]) -> Result<(), AppError> {
    write_json_file(Path::new(path), units)?;
    info!("saved {} units to {}", units.len(), path);
    Ok(())
}
