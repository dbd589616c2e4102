//! 錄影時間戳
//!
//! 檔名與 ffprobe 標籤中的時間都是東京當地時間，且不帶時區資訊

use crate::error::{ManifestError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// 時間戳格式，例如 `2025-02-24T13-17-51`
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H-%M-%S";

/// Asia/Tokyo 固定為 UTC+09:00，沒有夏令時間
pub const TOKYO_OFFSET_SECONDS: i32 = 9 * 3600;

static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}-[0-9]{2}-[0-9]{2}$").expect("Invalid regex")
});

#[must_use]
pub fn tokyo() -> FixedOffset {
    FixedOffset::east_opt(TOKYO_OFFSET_SECONDS).expect("Invalid Tokyo offset")
}

/// 將固定格式的當地時間解析為東京時區的時間
///
/// `context` 只用於錯誤訊息，說明這個值從哪裡來
pub fn parse_tokyo_timestamp(value: &str, context: &str) -> Result<DateTime<FixedOffset>> {
    let time_error = |reason: String| ManifestError::TimeParse {
        context: context.to_string(),
        value: value.to_string(),
        reason,
    };

    if value.is_empty() {
        return Err(time_error("missing or empty".to_string()));
    }
    if !TIMESTAMP_PATTERN.is_match(value) {
        return Err(time_error("expected YYYY-MM-DDTHH-MM-SS".to_string()));
    }

    let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_LAYOUT)
        .map_err(|e| time_error(e.to_string()))?;

    naive
        .and_local_timezone(tokyo())
        .single()
        .ok_or_else(|| time_error("not representable in Asia/Tokyo".to_string()))
}

/// 以固定格式輸出時間戳（不含時區）
#[must_use]
pub fn format_label(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(TIMESTAMP_LAYOUT).to_string()
}
