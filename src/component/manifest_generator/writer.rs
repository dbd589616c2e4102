use super::manifest::Manifest;
use crate::config::Settings;
use crate::error::{ManifestError, Result};
use log::info;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b" ";

/// 以一個空白縮排輸出 JSON
pub fn manifest_to_json(manifest: &Manifest) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    manifest
        .serialize(&mut serializer)
        .map_err(ManifestError::Serialize)?;

    String::from_utf8(buffer).map_err(|e| {
        ManifestError::Serialize(serde::ser::Error::custom(e.to_string()))
    })
}

pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let content = manifest_to_json(manifest)?;
    fs::write(path, content).map_err(|e| ManifestError::filesystem(path, e))?;

    info!("已寫入 {} 筆資料至 {}", manifest.len(), path.display());
    Ok(())
}

/// 預設輸出至掃描目錄下
#[must_use]
pub fn default_manifest_path(root: &Path, settings: &Settings) -> PathBuf {
    root.join(&settings.manifest_file_name)
}
