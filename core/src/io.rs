use std::fs;
use std::path::Path;

use crate::error::ConvertError;

/// Read file contents.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ConvertError> {
    fs::read(path).map_err(|e| ConvertError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write file contents, replacing whatever is already at `path`.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), ConvertError> {
    fs::write(path, data).map_err(|e| ConvertError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Remove a source file after its conversion has been written.
pub fn remove_source(path: &Path) -> Result<(), ConvertError> {
    fs::remove_file(path).map_err(|e| ConvertError::DeleteSource {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Size on disk, or 0 when the file can't be stat'ed.
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
