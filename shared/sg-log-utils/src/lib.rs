//! ログユーティリティ（stdのみ）

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// UTCのRFC3339（ミリ秒付き）。例: 2025-01-15T10:30:00.123Z
pub fn utc_rfc3339_millis() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format_rfc3339_millis(now.as_secs(), now.subsec_millis())
}

fn format_rfc3339_millis(secs: u64, millis: u32) -> String {
    let (year, month, day, hour, minute, second) = unix_seconds_to_utc_components(secs);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year, month, day, hour, minute, second, millis
    )
}

/// UTCタイムスタンプ付きのイベント行を作成する。
pub fn event_line(component: &str, message: &str) -> String {
    format!("[{}] [{}] {}\n", utc_rfc3339_millis(), component, message)
}

/// イベントログの既定出力先（書き込み可能な最初の場所を使う）
pub fn default_event_log_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(dir) = std::env::var("SPYGLASS_LOG_DIR") {
        if !dir.trim().is_empty() {
            paths.push(PathBuf::from(dir).join("spyglass.log"));
        }
    }
    let base = std::env::var("ProgramData").unwrap_or_else(|_| "C:\\ProgramData".to_string());
    paths.push(
        PathBuf::from(base)
            .join("Spyglass")
            .join("logs")
            .join("spyglass.log"),
    );
    paths.push(std::env::temp_dir().join("spyglass.log"));
    paths
}

/// 指定された出力先のうち、書き込み可能な最初の場所に1行追記する
pub fn append_line_to_paths(line: &str, paths: &[PathBuf]) {
    for path in paths {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
            return;
        }
    }
}

/// 既定の出力先にイベント行を書き込む
pub fn log_event(component: &str, message: &str) {
    let line = event_line(component, message);
    append_line_to_paths(&line, &default_event_log_paths());
}

fn unix_seconds_to_utc_components(secs: u64) -> (i32, u32, u32, u32, u32, u32) {
    let days = (secs / 86_400) as i64;
    let rem = (secs % 86_400) as i64;
    let hour = (rem / 3_600) as u32;
    let minute = ((rem % 3_600) / 60) as u32;
    let second = (rem % 60) as u32;
    let (year, month, day) = civil_from_days(days);
    (year, month, day, hour, minute, second)
}

fn civil_from_days(days: i64) -> (i32, u32, u32) {
    // Howard Hinnant のアルゴリズム
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = mp + if mp < 10 { 3 } else { -9 }; // [1, 12]
    let year = y + if m <= 2 { 1 } else { 0 };
    (year as i32, m as u32, d as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_formats_as_1970() {
        assert_eq!(format_rfc3339_millis(0, 0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_known_timestamp_formats() {
        // 2025-01-15T10:30:00.123Z
        assert_eq!(
            format_rfc3339_millis(1_736_937_000, 123),
            "2025-01-15T10:30:00.123Z"
        );
    }

    #[test]
    fn test_event_line_shape() {
        let line = event_line("sg-cli", "started");
        assert!(line.starts_with('['));
        assert!(line.contains("] [sg-cli] started"));
        assert!(line.ends_with('\n'));
    }
}
