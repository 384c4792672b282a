use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::constants::VALUE_DATE_FORMAT;
use crate::session::PlayRecord;

/// Label identifying a daily puzzle, e.g. "Thursday, November 09 2023".
pub fn value_date_label(date: NaiveDate) -> String {
    date.format(VALUE_DATE_FORMAT).to_string()
}

pub fn today_label() -> String {
    value_date_label(Local::now().date_naive())
}

/// Exact string match against every stored label; no normalisation.
pub fn has_played_on(history: &[PlayRecord], label: &str) -> bool {
    let played = history.iter().any(|record| record.value_date == label);
    log::debug!("played {:?}: {}", label, played);
    played
}

pub fn has_played_today(history: &[PlayRecord]) -> bool {
    has_played_on(history, &today_label())
}

/// Whole seconds from `now` until the following local midnight.
pub fn seconds_until_midnight(now: NaiveDateTime) -> i64 {
    let next_day = now
        .date()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0));
    match next_day {
        Some(midnight) => (midnight - now).num_seconds(),
        // NaiveDate::MAX has no successor
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_label_format() {
        assert_eq!(value_date_label(date(2023, 11, 9)), "Thursday, November 09 2023");
        assert_eq!(value_date_label(date(2024, 2, 29)), "Thursday, February 29 2024");
        assert_eq!(value_date_label(date(2026, 10, 18)), "Sunday, October 18 2026");
    }

    #[test]
    fn test_has_played_exact_match() {
        let label = value_date_label(date(2023, 11, 9));
        let history = vec![
            PlayRecord::new("Wednesday, November 08 2023", 1.0),
            PlayRecord::new(label.clone(), 2.0),
        ];
        assert!(has_played_on(&history, &label));
    }

    #[test]
    fn test_has_played_rejects_variants() {
        let label = "Thursday, November 09 2023";
        for stored in [
            "thursday, november 09 2023",
            "THURSDAY, NOVEMBER 09 2023",
            "Thursday, November 09 2023 ",
            " Thursday, November 09 2023",
            "Thursday,  November 09 2023",
            "Thursday, November 9 2023",
        ] {
            let history = vec![PlayRecord::new(stored, 1.0)];
            assert!(!has_played_on(&history, label), "{stored:?}");
        }
        assert!(!has_played_on(&[], label));
    }

    #[test]
    fn test_has_played_today() {
        let history = vec![PlayRecord::new(today_label(), 1.0)];
        assert!(has_played_today(&history));
        assert!(!has_played_today(&[PlayRecord::new("Monday, January 01 1900", 1.0)]));
    }

    #[test]
    fn test_seconds_until_midnight() {
        let now = date(2023, 11, 9).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(seconds_until_midnight(now), 60);
        let start = date(2023, 11, 9).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(seconds_until_midnight(start), 86_400);
        let late = date(2023, 12, 31).and_hms_opt(12, 30, 15).unwrap();
        assert_eq!(seconds_until_midnight(late), 11 * 3600 + 29 * 60 + 45);
    }
}
