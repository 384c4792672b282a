use crate::constants::{
    DEFAULT_COUNTDOWN_PERIOD_SECONDS, DEFAULT_COUNTDOWN_PREFIX, HOME_PATH, REDIRECT_DELAY_MS,
};
use crate::statistics::TimeScale;

/// Where a countdown starts, or where it restarts after reaching zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownAnchor {
    /// The configured fixed period.
    Period,
    /// Seconds left until the next local midnight.
    Midnight,
}

impl CountdownAnchor {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "period" | "fixed" => Some(CountdownAnchor::Period),
            "midnight" => Some(CountdownAnchor::Midnight),
            _ => None,
        }
    }
}

/// Per-page behaviour switches. Every field has a default so a bare host
/// page works unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub statistics_enabled: bool,
    pub countdown_prefix: String,
    pub countdown_period_seconds: i64,
    pub countdown_start: CountdownAnchor,
    pub countdown_wrap: CountdownAnchor,
    pub time_scale: TimeScale,
    pub redirect_delay_ms: u32,
    pub home_path: String,
    pub success_animation: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            statistics_enabled: true,
            countdown_prefix: DEFAULT_COUNTDOWN_PREFIX.to_string(),
            countdown_period_seconds: DEFAULT_COUNTDOWN_PERIOD_SECONDS,
            countdown_start: CountdownAnchor::Midnight,
            countdown_wrap: CountdownAnchor::Period,
            time_scale: TimeScale::default(),
            redirect_delay_ms: REDIRECT_DELAY_MS,
            home_path: HOME_PATH.to_string(),
            success_animation: None,
        }
    }
}

impl PageConfig {
    /// Builds a config from `data-*` style lookups (`lookup("statistics")`
    /// reads `data-statistics`). Unparsable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("statistics") {
            match parse_switch(&v) {
                Some(enabled) => config.statistics_enabled = enabled,
                None => log::warn!("ignoring data-statistics={:?}", v),
            }
        }
        if let Some(v) = lookup("countdown-prefix") {
            config.countdown_prefix = v;
        }
        if let Some(v) = lookup("countdown-period") {
            match v.trim().parse::<i64>() {
                Ok(secs) if secs > 0 => config.countdown_period_seconds = secs,
                _ => log::warn!("ignoring data-countdown-period={:?}", v),
            }
        }
        if let Some(anchor) = lookup("countdown-start").and_then(|v| CountdownAnchor::parse(&v)) {
            config.countdown_start = anchor;
        }
        if let Some(anchor) = lookup("countdown-wrap").and_then(|v| CountdownAnchor::parse(&v)) {
            config.countdown_wrap = anchor;
        }
        if let Some(scale) = lookup("elapsed-scale").and_then(|v| TimeScale::parse(&v)) {
            config.time_scale = scale;
        }
        if let Some(v) = lookup("redirect-delay") {
            match v.trim().parse::<u32>() {
                Ok(ms) => config.redirect_delay_ms = ms,
                Err(_) => log::warn!("ignoring data-redirect-delay={:?}", v),
            }
        }
        if let Some(v) = lookup("home-path").filter(|v| !v.trim().is_empty()) {
            config.home_path = v;
        }
        config.success_animation = lookup("success-animation").filter(|v| !v.trim().is_empty());

        config
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" | "" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
