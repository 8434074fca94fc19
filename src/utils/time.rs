use chrono::{DateTime, FixedOffset, Local, Utc};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Timestamp as shown in the results table: in `offset` when set, the
/// server's local zone otherwise.
pub fn display_time(dt: DateTime<Utc>, offset: Option<FixedOffset>) -> String {
    match offset {
        Some(offset) => dt.with_timezone(&offset).format(DISPLAY_FORMAT).to_string(),
        None => dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_uses_fixed_offset() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 14, 20, 15, 0).unwrap();
        let bangkok = FixedOffset::east_opt(7 * 3600);
        assert_eq!(display_time(dt, bangkok), "2025-03-15 03:15:00");
    }
}
