use chrono::TimeDelta;

const SIZE_UNIT: u64 = 1024;
const SIZE_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// 將經過時間格式化為 `<H>時間<M>分<S>秒`
///
/// 先捨去到整數秒，再以整數除法拆出時、分、秒
#[must_use]
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{hours}時間{minutes}分{secs}秒")
}

/// 以 1024 為單位格式化檔案大小，數值無條件捨去
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes < SIZE_UNIT {
        return format!("{bytes}B");
    }

    let mut divisor = SIZE_UNIT;
    let mut exponent = 0;
    let mut scaled = bytes / SIZE_UNIT;
    while scaled >= SIZE_UNIT {
        divisor *= SIZE_UNIT;
        exponent += 1;
        scaled /= SIZE_UNIT;
    }

    format!("{}{}B", bytes / divisor, SIZE_PREFIXES[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::seconds(1)), "0時間0分1秒");
        assert_eq!(
            format_duration(TimeDelta::minutes(1) + TimeDelta::seconds(1)),
            "0時間1分1秒"
        );
        assert_eq!(format_duration(TimeDelta::hours(1)), "1時間0分0秒");
        assert_eq!(format_duration(TimeDelta::seconds(24)), "0時間0分24秒");
    }

    #[test]
    fn test_format_duration_truncates_fraction() {
        assert_eq!(format_duration(TimeDelta::milliseconds(59_999)), "0時間0分59秒");
        assert_eq!(format_duration(TimeDelta::zero()), "0時間0分0秒");
    }

    #[test]
    fn test_format_duration_no_carry_beyond_hours() {
        assert_eq!(format_duration(TimeDelta::hours(30)), "30時間0分0秒");
    }

    #[test]
    fn test_format_duration_components_recompose() {
        for total in [0_i64, 59, 60, 61, 3599, 3600, 3661, 86_399, 90_061, 1_000_000] {
            let label = format_duration(TimeDelta::seconds(total));
            let (h, rest) = label.split_once("時間").unwrap();
            let (m, rest) = rest.split_once('分').unwrap();
            let s = rest.strip_suffix('秒').unwrap();
            let (h, m, s): (i64, i64, i64) = (h.parse().unwrap(), m.parse().unwrap(), s.parse().unwrap());
            assert_eq!(total, 3600 * h + 60 * m + s, "label {label}");
            assert!(m < 60 && s < 60);
        }
    }

    #[test]
    fn test_format_duration_negative_is_not_clamped() {
        assert_eq!(format_duration(TimeDelta::seconds(-61)), "0時間-1分-1秒");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(1), "1B");
        assert_eq!(format_size(1023), "1023B");
    }

    #[test]
    fn test_format_size_truncates() {
        assert_eq!(format_size(1024), "1KB");
        assert_eq!(format_size(1025), "1KB");
        assert_eq!(format_size(2047), "1KB");
        assert_eq!(format_size(2048), "2KB");
        assert_eq!(format_size(1024 * 64), "64KB");
        assert_eq!(format_size(57_344), "56KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1023KB");
    }

    #[test]
    fn test_format_size_larger_units() {
        assert_eq!(format_size(1024 * 1024), "1MB");
        assert_eq!(format_size(1024 * 1024 * 64), "64MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1GB");
        assert_eq!(format_size(1 << 40), "1TB");
        assert_eq!(format_size(1 << 50), "1PB");
        assert_eq!(format_size(1 << 60), "1EB");
        assert_eq!(format_size(u64::MAX), "15EB");
    }
}
