//! manifest 產生主模組
//!
//! 依序走訪資料夾，對每個候選檔案呼叫探測器與檔名解析器，組成 manifest

use super::manifest::{Manifest, ManifestEntry};
use crate::error::Result;
use crate::tools::{
    MetadataProber, format_duration, format_label, format_size, parse_file_name,
};
use log::{debug, info};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// 掃描時用來挑出候選檔案的字串
const CANDIDATE_MARKER: &str = ".webm";

/// manifest 產生器
pub struct ManifestGenerator<P: MetadataProber> {
    prober: P,
}

impl<P: MetadataProber> ManifestGenerator<P> {
    pub const fn new(prober: P) -> Self {
        Self { prober }
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// 掃描資料夾並產生 manifest
    ///
    /// 任何一個檔案失敗都會中止整個掃描，不回傳部分結果
    pub fn scan(&self, root: &Path) -> Result<Manifest> {
        info!("開始掃描目錄: {}", root.display());

        let mut manifest = Manifest::default();
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry?;
            if !is_candidate(&entry) {
                continue;
            }
            manifest.files.push(self.build_entry(&entry)?);
        }

        info!("掃描完成，共 {} 個錄影檔", manifest.len());
        Ok(manifest)
    }

    fn build_entry(&self, entry: &DirEntry) -> Result<ManifestEntry> {
        let path = entry.path();
        debug!("處理檔案: {}", path.display());

        let metadata = entry.metadata()?;
        let size = format_size(metadata.len());

        let probe = self.prober.probe(path)?;

        let file_name = entry.file_name().to_string_lossy();
        let parsed = parse_file_name(&file_name)?;
        if parsed.recorded_at != probe.start {
            debug!(
                "檔名時間 {} 與 START_TIME {} 不同: {}",
                format_label(&parsed.recorded_at),
                format_label(&probe.start),
                path.display()
            );
        }

        Ok(ManifestEntry {
            path: parsed.canonical_path,
            name: parsed.title,
            duration: probe.duration_seconds,
            real_duration_label: format_duration(probe.end - probe.start),
            real_start: probe.start,
            real_start_label: format_label(&probe.start),
            real_end: probe.end,
            real_end_label: format_label(&probe.end),
            size,
        })
    }
}

/// 資料夾一律略過；檔名只要含有 `.webm` 就交給解析器做嚴格檢查
fn is_candidate(entry: &DirEntry) -> bool {
    !entry.file_type().is_dir() && entry.file_name().to_string_lossy().contains(CANDIDATE_MARKER)
}
