use crate::models::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Ensure parent directory of `path` exists, creating it if needed.
///
/// # Errors
/// Returns `AppError` if directory creation fails.
pub fn ensure_parent_dir(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") {
            fs::create_dir_all(parent).map_err(|e| {
                AppError(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
    }
    Ok(())
}

/// Read and deserialize JSON from file.
///
/// # Errors
/// Returns `AppError` if file cannot be read or JSON is invalid.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let s = fs::read_to_string(path)
        .map_err(|e| AppError(format!("failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&s)
        .map_err(|e| AppError(format!("invalid JSON in {}: {e}", path.display())))
}

/// Write data as pretty JSON to file, creating parent directories.
///
/// # Errors
/// Returns `AppError` if file cannot be written or JSON serialization fails.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), AppError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| AppError(format!("failed to serialize {}: {e}", path.display())))?;
    fs::write(path, json).map_err(|e| AppError(format!("failed to write {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("data.json");
        write_json_file(&path, &vec![1, 2, 3]).unwrap();
        let back: Vec<i32> = read_json_file(&path).unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        let err = read_json_file::<Vec<i32>>(&path).unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON in"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_json_file::<Vec<i32>>(Path::new("/nonexistent/units.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }
}
