use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 掃描過程中可能發生的錯誤
///
/// 每一種錯誤都會中止整個掃描，呼叫端可依種類判斷是哪個檔案、哪個階段失敗
#[derive(Error, Debug)]
pub enum ManifestError {
    /// 檔名不符合 `<date>_<title>.webm` 格式
    #[error("invalid format: {name}")]
    InvalidFormat { name: String },

    /// ffprobe 無法啟動或以非零狀態結束
    #[error("error running ffprobe on {}: {reason}", path.display())]
    ProbeExecution { path: PathBuf, reason: String },

    /// ffprobe 輸出不是預期的 JSON
    #[error("error parsing ffprobe output for {}: {source}", path.display())]
    ProbeParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid duration {value:?} for {}", path.display())]
    DurationParse { path: PathBuf, value: String },

    /// 時間欄位缺漏、為空或格式錯誤
    #[error("invalid timestamp {value:?} in {context}: {reason}")]
    TimeParse {
        context: String,
        value: String,
        reason: String,
    },

    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ManifestError {
    pub fn filesystem(path: &Path, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<walkdir::Error> for ManifestError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
        Self::Filesystem { path, source }
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
