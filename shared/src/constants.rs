pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const STATISTICS_ENDPOINT: &str = "/statistics";
pub const HOME_PATH: &str = "/";

pub const VALUE_DATES_KEY: &str = "valueDates";
pub const START_TIME_KEY: &str = "startTime";

pub const VALUE_DATE_FORMAT: &str = "%A, %B %d %Y";

pub const COUNTDOWN_TICK_MS: u32 = 1000;
// 23:59:59
pub const DEFAULT_COUNTDOWN_PERIOD_SECONDS: i64 = 23 * 3600 + 59 * 60 + 59;
pub const DEFAULT_COUNTDOWN_PREFIX: &str = "Next Wordle: ";

pub const REDIRECT_DELAY_MS: u32 = 3500;

pub const MISSING_FASTEST: &str = "-";
pub const SUCCESS_MESSAGE: &str = "Well done ※\\(^o^)/※";
pub const FAILURE_MESSAGE: &str = "You guessed wrong •͡˘㇁•͡˘ Keep trying!";
