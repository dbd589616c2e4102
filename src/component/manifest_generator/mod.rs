//! 錄影檔 manifest 產生元件
//!
//! 掃描資料夾內的 webm 錄影檔，整合 ffprobe 資訊與檔名資訊，輸出 files.json

mod main;
mod manifest;
mod writer;

pub use main::ManifestGenerator;
pub use manifest::{Manifest, ManifestEntry};
pub use writer::{default_manifest_path, manifest_to_json, write_manifest};
