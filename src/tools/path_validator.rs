use crate::error::{ManifestError, Result};
use std::io;
use std::path::Path;

/// 確認掃描目標存在且為資料夾
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ManifestError::filesystem(
            path,
            io::Error::new(io::ErrorKind::NotFound, "path does not exist"),
        ));
    }
    if !path.is_dir() {
        return Err(ManifestError::filesystem(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path is not a directory"),
        ));
    }
    Ok(())
}
