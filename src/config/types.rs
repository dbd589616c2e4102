use crate::tools::DEFAULT_FFPROBE_PROGRAM;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MANIFEST_FILE_NAME: &str = "files.json";

/// 使用者設定（settings.json）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ffprobe 執行檔，預設從 PATH 尋找
    pub ffprobe_program: String,
    /// 輸出至掃描目錄下的檔名
    pub manifest_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ffprobe_program: DEFAULT_FFPROBE_PROGRAM.to_string(),
            manifest_file_name: DEFAULT_MANIFEST_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
}
