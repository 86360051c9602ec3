use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

pub fn now() -> DateTime<Local> {
    chrono::Local::now()
}

/// Parse a timestamp as stored in the DB or typed on the CLI.
/// Accepts RFC 3339, "YYYY-MM-DD HH:MM[:SS]" and a bare "YYYY-MM-DD"
/// (midnight, local time).
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Local>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Local));
    }

    let dt_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];
    for fmt in dt_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_from_naive(dt, s);
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0).unwrap();
        return local_from_naive(dt, s);
    }

    Err(AppError::InvalidTimestamp(s.to_string()))
}

fn local_from_naive(dt: NaiveDateTime, raw: &str) -> AppResult<DateTime<Local>> {
    Local
        .from_local_datetime(&dt)
        .single()
        .ok_or_else(|| AppError::InvalidTimestamp(raw.to_string()))
}
