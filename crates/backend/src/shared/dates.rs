use chrono::{DateTime, NaiveDate, Utc};

/// Parse a `YYYY-MM-DD` filter value into the first instant of that day (UTC)
pub fn day_floor(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = parse_day(s)?;
    Ok(date.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc())
}

/// Parse a `YYYY-MM-DD` filter value into the last second of that day (UTC)
pub fn day_ceil(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = parse_day(s)?;
    Ok(date
        .and_hms_opt(23, 59, 59)
        .expect("end of day exists")
        .and_utc())
}

fn parse_day(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("date filter '{s}' is not in YYYY-MM-DD form"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_the_whole_day() {
        let from = day_floor("2025-06-01").unwrap();
        let to = day_ceil("2025-06-01").unwrap();
        assert_eq!(from.to_rfc3339(), "2025-06-01T00:00:00+00:00");
        assert_eq!(to.to_rfc3339(), "2025-06-01T23:59:59+00:00");
    }

    #[test]
    fn rejects_other_formats() {
        assert!(day_floor("01.06.2025").is_err());
        assert!(day_floor("2025-06").is_err());
    }
}
