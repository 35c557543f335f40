use chrono::{DateTime, SecondsFormat, Utc};

use crate::shared::constants::DOWNLOAD_PREFIX;

/// `face-hider-result-<timestamp>.png`, where the timestamp is ISO 8601 UTC
/// with millisecond precision and every `:` and `.` replaced by `-`.
pub fn download_file_name(now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{DOWNLOAD_PREFIX}{stamp}.png")
}
