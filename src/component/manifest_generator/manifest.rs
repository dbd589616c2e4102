use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 一次掃描的結果，順序即走訪順序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub files: Vec<ManifestEntry>,
}

impl Manifest {
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// 單一錄影檔的資訊
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// 重組後的路徑，固定位於 ./files 之下
    pub path: String,
    /// 標題
    pub name: String,
    /// 影片的秒數
    pub duration: f64,
    /// 實際經過時間
    pub real_duration_label: String,
    #[serde(rename = "start")]
    pub real_start: DateTime<FixedOffset>,
    pub real_start_label: String,
    #[serde(rename = "end")]
    pub real_end: DateTime<FixedOffset>,
    pub real_end_label: String,
    /// 人類易讀的檔案大小
    pub size: String,
}
