use serde::{Deserialize, Serialize};

use crate::constants::MISSING_FASTEST;

/// Aggregates the server computes from a posted play history.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StatisticsSummary {
    pub played: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub max_streak: u32,
    // Milliseconds, absent until a puzzle has been solved
    #[serde(default)]
    pub fastest: Option<f64>,
}

/// How raw elapsed-time numbers are turned into seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeScale {
    /// Divides by 100, as the first release of the site did.
    Legacy,
    /// Divides by 1000: the stored value is milliseconds.
    #[default]
    Millis,
}

impl TimeScale {
    pub fn divisor(self) -> f64 {
        match self {
            TimeScale::Legacy => 100.0,
            TimeScale::Millis => 1000.0,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(TimeScale::Legacy),
            "millis" | "ms" => Some(TimeScale::Millis),
            _ => None,
        }
    }
}

/// `"{minutes}min {seconds}s"`; seconds are rounded, minutes floored.
pub fn prettify_elapsed_time(elapsed: f64, scale: TimeScale) -> String {
    let total_seconds = elapsed / scale.divisor();
    let minutes = (total_seconds / 60.0).floor() as i64;
    let seconds = (total_seconds % 60.0).round() as i64;
    format!("{}min {}s", minutes, seconds)
}

/// Display text for each statistics target, keyed by element id.
pub fn statistics_fields(summary: &StatisticsSummary, scale: TimeScale) -> [(&'static str, String); 4] {
    let fastest = summary
        .fastest
        .map(|ms| prettify_elapsed_time(ms, scale))
        .unwrap_or_else(|| MISSING_FASTEST.to_string());

    [
        ("played", summary.played.to_string()),
        ("fastest", fastest),
        ("current_streak", summary.current_streak.to_string()),
        ("max_streak", summary.max_streak.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_divisor_is_off_by_ten() {
        // 5000 ms is really 5 seconds; the legacy divisor reports 50.
        assert_eq!(prettify_elapsed_time(5000.0, TimeScale::Legacy), "0min 50s");
        assert_eq!(prettify_elapsed_time(5000.0, TimeScale::Millis), "0min 5s");
    }

    #[test]
    fn test_minutes_and_rounding() {
        assert_eq!(prettify_elapsed_time(125_400.0, TimeScale::Millis), "2min 5s");
        assert_eq!(prettify_elapsed_time(125_600.0, TimeScale::Millis), "2min 6s");
        assert_eq!(prettify_elapsed_time(0.0, TimeScale::Millis), "0min 0s");
        assert_eq!(prettify_elapsed_time(12_000.0, TimeScale::Legacy), "2min 0s");
    }

    #[test]
    fn test_summary_from_server_json() {
        let summary: StatisticsSummary = serde_json::from_str(
            r#"{"played": 12, "fastest": 61000, "current_streak": 3, "max_streak": 7}"#,
        )
        .unwrap();
        assert_eq!(
            summary,
            StatisticsSummary {
                played: 12,
                current_streak: 3,
                max_streak: 7,
                fastest: Some(61_000.0),
            }
        );

        let empty: StatisticsSummary =
            serde_json::from_str(r#"{"played": 0, "fastest": null, "current_streak": 0, "max_streak": 0}"#).unwrap();
        assert_eq!(empty.fastest, None);
    }

    #[test]
    fn test_fields_substitute_missing_fastest() {
        let summary = StatisticsSummary { played: 4, current_streak: 1, max_streak: 2, fastest: None };
        let fields = statistics_fields(&summary, TimeScale::Millis);
        assert_eq!(fields[0], ("played", "4".to_string()));
        assert_eq!(fields[1], ("fastest", "-".to_string()));
        assert_eq!(fields[2], ("current_streak", "1".to_string()));
        assert_eq!(fields[3], ("max_streak", "2".to_string()));

        let timed = StatisticsSummary { fastest: Some(90_000.0), ..summary };
        assert_eq!(statistics_fields(&timed, TimeScale::Millis)[1].1, "1min 30s");
    }

    #[test]
    fn test_time_scale_parse() {
        assert_eq!(TimeScale::parse("Legacy"), Some(TimeScale::Legacy));
        assert_eq!(TimeScale::parse(" ms "), Some(TimeScale::Millis));
        assert_eq!(TimeScale::parse("minutes"), None);
    }
}
