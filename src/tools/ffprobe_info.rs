use crate::error::{ManifestError, Result};
use crate::tools::timestamp::parse_tokyo_timestamp;
use chrono::{DateTime, FixedOffset};
use log::debug;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

pub const DEFAULT_FFPROBE_PROGRAM: &str = "ffprobe";

/// 單一檔案的探測結果
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub duration_seconds: f64,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// 取得影片時長與錄影起訖時間
///
/// 掃描器只依賴這個介面，測試時可以替換成不需要外部程式的實作
pub trait MetadataProber {
    fn probe(&self, path: &Path) -> Result<ProbeResult>;
}

#[derive(Deserialize)]
struct FfprobeOutput {
    format: FormatInfo,
}

#[derive(Deserialize)]
struct FormatInfo {
    duration: Option<String>,
    #[serde(default)]
    tags: FormatTags,
}

#[derive(Deserialize, Default)]
struct FormatTags {
    #[serde(rename = "START_TIME")]
    start_time: Option<String>,
    #[serde(rename = "END_TIME")]
    end_time: Option<String>,
}

/// 透過 ffprobe 子程序取得資訊
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    program: String,
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new(DEFAULT_FFPROBE_PROGRAM)
    }
}

impl FfprobeProber {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl MetadataProber for FfprobeProber {
    fn probe(&self, path: &Path) -> Result<ProbeResult> {
        debug!("執行 {} : {}", self.program, path.display());

        let output = Command::new(&self.program)
            .args(["-v", "quiet", "-print_format", "json", "-show_format"])
            .arg(path)
            .output()
            .map_err(|e| ManifestError::ProbeExecution {
                path: path.to_path_buf(),
                reason: format!("failed to start {}: {e}", self.program),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ManifestError::ProbeExecution {
                path: path.to_path_buf(),
                reason: format!("{} ({})", output.status, stderr.trim()),
            });
        }

        parse_probe_output(path, &output.stdout)
    }
}

/// 解析 `ffprobe -print_format json -show_format` 的輸出
pub fn parse_probe_output(path: &Path, stdout: &[u8]) -> Result<ProbeResult> {
    let probe: FfprobeOutput =
        serde_json::from_slice(stdout).map_err(|source| ManifestError::ProbeParse {
            path: path.to_path_buf(),
            source,
        })?;

    let raw_duration = probe.format.duration.unwrap_or_default();
    let duration_seconds =
        raw_duration
            .parse::<f64>()
            .map_err(|_| ManifestError::DurationParse {
                path: path.to_path_buf(),
                value: raw_duration.clone(),
            })?;

    let tags = probe.format.tags;
    let start = parse_tokyo_timestamp(
        tags.start_time.as_deref().unwrap_or_default(),
        &format!("START_TIME of {}", path.display()),
    )?;
    let end = parse_tokyo_timestamp(
        tags.end_time.as_deref().unwrap_or_default(),
        &format!("END_TIME of {}", path.display()),
    )?;

    Ok(ProbeResult {
        duration_seconds,
        start,
        end,
    })
}
