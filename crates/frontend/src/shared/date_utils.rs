/// Форматирование дат для таблиц
use chrono::{DateTime, Utc};

/// "2024-03-15 14:02" (UTC)
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Давность изменения для колонки "Updated": "just now", "5 min ago", ...
/// Старше недели - обычная дата.
pub fn format_relative(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = (*now - *dt).num_seconds();
    match seconds {
        s if s < 60 => "just now".to_string(),
        s if s < 3600 => format!("{} min ago", s / 60),
        s if s < 86_400 => format!("{} h ago", s / 3600),
        s if s < 7 * 86_400 => format!("{} d ago", s / 86_400),
        _ => dt.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&at(14, 2)), "2024-03-15 14:02");
    }

    #[test]
    fn test_format_relative_steps() {
        let now = at(12, 0);
        assert_eq!(format_relative(&(now - Duration::seconds(10)), &now), "just now");
        assert_eq!(format_relative(&(now - Duration::minutes(5)), &now), "5 min ago");
        assert_eq!(format_relative(&(now - Duration::hours(3)), &now), "3 h ago");
        assert_eq!(format_relative(&(now - Duration::days(2)), &now), "2 d ago");
        assert_eq!(format_relative(&(now - Duration::days(30)), &now), "2024-02-14");
    }

    #[test]
    fn test_clock_skew_reads_as_just_now() {
        let now = at(12, 0);
        assert_eq!(format_relative(&(now + Duration::minutes(1)), &now), "just now");
    }
}
