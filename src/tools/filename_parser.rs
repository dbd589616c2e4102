//! 錄影檔名解析
//!
//! 檔名格式為 `<date>_<title>.webm`，例如 `2025-02-24T13-17-51_サンプル.webm`

use crate::error::{ManifestError, Result};
use crate::tools::timestamp::parse_tokyo_timestamp;
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// manifest 內路徑固定指向的資料夾
pub const CANONICAL_DIR: &str = "./files";

static REGEX_RECORDING_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}-[0-9]{2}-[0-9]{2})_(?P<name>.+?)\.webm$",
    )
    .expect("Invalid regex")
});

/// 解析後的檔名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// 由日期與標題重組的路徑，與實際所在資料夾無關
    pub canonical_path: String,
    pub title: String,
    /// 檔名中的日期（東京時間）
    pub recorded_at: DateTime<FixedOffset>,
}

/// 解析錄影檔名
///
/// 傳入完整路徑時只看最後一段
pub fn parse_file_name(raw: &str) -> Result<ParsedName> {
    let base_name = Path::new(raw)
        .file_name()
        .map_or_else(|| raw.to_string(), |name| name.to_string_lossy().into_owned());

    let captures = REGEX_RECORDING_NAME
        .captures(&base_name)
        .ok_or_else(|| ManifestError::InvalidFormat {
            name: raw.to_string(),
        })?;

    let date = &captures["date"];
    let title = &captures["name"];
    let recorded_at = parse_tokyo_timestamp(date, &format!("file name {base_name}"))?;

    Ok(ParsedName {
        canonical_path: format!("{CANONICAL_DIR}/{date}_{title}.webm"),
        title: title.to_string(),
        recorded_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::timestamp::tokyo;
    use chrono::TimeZone;

    #[test]
    fn test_parse_japanese_title() {
        let result = parse_file_name("2025-02-23T21-59-41_ダークソウル3実況を見る.webm").unwrap();
        assert_eq!(result.title, "ダークソウル3実況を見る");
        assert_eq!(
            result.canonical_path,
            "./files/2025-02-23T21-59-41_ダークソウル3実況を見る.webm"
        );
        assert_eq!(
            result.recorded_at,
            tokyo().with_ymd_and_hms(2025, 2, 23, 21, 59, 41).unwrap()
        );
    }

    #[test]
    fn test_parse_ignores_directory() {
        let result = parse_file_name("/mnt/rec/2024/2025-02-24T13-17-51_サンプル.webm").unwrap();
        assert_eq!(result.canonical_path, "./files/2025-02-24T13-17-51_サンプル.webm");
        assert_eq!(result.title, "サンプル");
    }

    #[test]
    fn test_parse_title_with_underscores() {
        let result = parse_file_name("2025-02-24T13-17-51_part_1_final.webm").unwrap();
        assert_eq!(result.title, "part_1_final");
    }

    #[test]
    fn test_parse_title_keeps_inner_webm() {
        let result = parse_file_name("2025-02-24T13-17-51_clip.webm.webm").unwrap();
        assert_eq!(result.title, "clip.webm");
        assert_eq!(result.canonical_path, "./files/2025-02-24T13-17-51_clip.webm.webm");
    }

    #[test]
    fn test_parse_missing_date_prefix() {
        let err = parse_file_name("サンプル.webm").unwrap_err();
        assert!(matches!(err, ManifestError::InvalidFormat { name } if name == "サンプル.webm"));
    }

    #[test]
    fn test_parse_wrong_suffix() {
        assert!(matches!(
            parse_file_name("2025-02-24T13-17-51_notes.webm.txt"),
            Err(ManifestError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_file_name("2025-02-24T13-17-51_clip.mp4"),
            Err(ManifestError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_empty_title() {
        assert!(matches!(
            parse_file_name("2025-02-24T13-17-51_.webm"),
            Err(ManifestError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_out_of_range_date() {
        let err = parse_file_name("2025-13-24T13-17-51_clip.webm").unwrap_err();
        assert!(matches!(err, ManifestError::TimeParse { .. }));
    }
}
