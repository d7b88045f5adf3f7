// dates.rs - Post dates
//
// Front matter dates arrive either as a bare `YYYY-MM-DD` or as a full
// timestamp. Timestamps are reduced to their UTC calendar day. Long-form
// localized text is rendered by the browser; this side only picks the day
// and the locale.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::config::SiteConfig;
use crate::error::EngineError;
use crate::language;

pub fn parse_date(raw: &str) -> Result<NaiveDate, EngineError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|ts| ts.date())
        .map_err(|_| EngineError::Date(raw.to_owned()))
}

/// `2024-03-09`
pub fn format_yyyymmdd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A calendar day paired with the locale it should be spelled out in
/// (numeric year, long month, numeric day).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedDate {
    pub date: NaiveDate,
    pub locale: &'static str,
}

impl LocalizedDate {
    pub fn new(raw: &str, lang: Option<&str>) -> Result<Self, EngineError> {
        Ok(Self { date: parse_date(raw)?, locale: language::locale_for(lang) })
    }

    pub fn for_site(raw: &str, site: &SiteConfig) -> Result<Self, EngineError> {
        Ok(Self { date: parse_date(raw)?, locale: site.locale() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_bare_and_timestamped_dates() {
        assert_eq!(parse_date("2024-03-09").unwrap(), day(2024, 3, 9));
        assert_eq!(parse_date(" 2024-03-09T10:00:00 ").unwrap(), day(2024, 3, 9));
        // 01:30 at +09:00 is still the previous day in UTC.
        assert_eq!(parse_date("2024-03-09T01:30:00+09:00").unwrap(), day(2024, 3, 8));
    }

    #[test]
    fn garbage_is_a_date_error() {
        assert!(matches!(parse_date("yesterday"), Err(EngineError::Date(_))));
        assert!(matches!(parse_date("2024-13-40"), Err(EngineError::Date(_))));
    }

    #[test]
    fn yyyymmdd_is_zero_padded() {
        assert_eq!(format_yyyymmdd(day(987, 1, 5)), "0987-01-05");
        assert_eq!(format_yyyymmdd(day(2024, 12, 31)), "2024-12-31");
    }

    #[test]
    fn localized_date_uses_site_language() {
        let site = SiteConfig { lang: Some("zh".into()), ..SiteConfig::default() };
        let d = LocalizedDate::for_site("2024-03-09", &site).unwrap();
        assert_eq!(d, LocalizedDate { date: day(2024, 3, 9), locale: "zh-CN" });

        let d = LocalizedDate::new("2024-03-09", None).unwrap();
        assert_eq!(d.locale, "en-US");
    }
}
