use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Resolve an optional CLI date argument; `None` and "today" mean today.
pub fn resolve_date(arg: Option<&String>) -> AppResult<NaiveDate> {
    match arg.map(|s| s.trim()) {
        None | Some("today") => Ok(today()),
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// Parse `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

/// All days of a month; empty for an invalid year/month.
pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut next = NaiveDate::from_ymd_opt(year, month, 1);

    while let Some(d) = next {
        if d.month() != month {
            break;
        }
        out.push(d);
        next = d.succ_opt();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(all_days_of_month(2024, 2).len(), 29);
        assert_eq!(all_days_of_month(2023, 2).len(), 28);
        assert_eq!(all_days_of_month(2024, 13).len(), 0);
    }

    #[test]
    fn parses_month_and_dates() {
        assert_eq!(parse_month("2024-06"), Some((2024, 6)));
        assert_eq!(parse_month("2024-6x"), None);
        assert!(parse_date("2024-06-31").is_none());
        assert!(resolve_date(Some(&"01.06.2024".to_string())).is_err());
        assert_eq!(resolve_date(None).unwrap(), today());
    }
}
