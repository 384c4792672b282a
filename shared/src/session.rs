use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{START_TIME_KEY, VALUE_DATES_KEY};
use crate::error::PuzzleError;

/// One finished daily puzzle.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayRecord {
    // Calendar-day label, e.g. "Thursday, November 09 2023"
    pub value_date: String,
    // Milliseconds between page load and the winning guess
    pub elapsed_time: f64,
}

impl PlayRecord {
    pub fn new(value_date: impl Into<String>, elapsed_time: f64) -> Self {
        Self {
            value_date: value_date.into(),
            elapsed_time,
        }
    }
}

/// Play records in the order they were played.
pub type SessionHistory = Vec<PlayRecord>;

/// Synchronous string key-value storage, the shape of the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), PuzzleError>;
}

/// Store that lives as long as the value does. Used by tests and as the
/// fallback when the browser refuses persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PuzzleError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PuzzleError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PuzzleError> {
        (**self).set(key, value)
    }
}

/// Reads and appends the play history kept under `valueDates`, and the
/// session start time kept under `startTime`.
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fails only when the stored value is not a JSON array. Entries that do
    /// not decode as a `PlayRecord` are skipped so the rest survive.
    pub fn try_load(&self) -> Result<SessionHistory, PuzzleError> {
        let raw = match self.store.get(VALUE_DATES_KEY) {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        let entries = serde_json::from_str::<Vec<serde_json::Value>>(&raw)?;
        let total = entries.len();
        let history: SessionHistory = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<PlayRecord>(entry).ok())
            .collect();
        if history.len() < total {
            log::warn!("skipped {} unreadable play records", total - history.len());
        }
        Ok(history)
    }

    /// Never fails: missing, corrupt, or non-array data reads as no history.
    pub fn load(&self) -> SessionHistory {
        self.try_load().unwrap_or_else(|e| {
            log::debug!("discarding stored play history: {}", e);
            Vec::new()
        })
    }

    pub fn append(&self, record: PlayRecord) -> Result<(), PuzzleError> {
        let mut history = self.load();
        history.push(record);
        let encoded = serde_json::to_string(&history)?;
        self.store.set(VALUE_DATES_KEY, &encoded)
    }

    pub fn record_session_start(&self, now_ms: f64) -> Result<(), PuzzleError> {
        let encoded = serde_json::to_string(&now_ms)?;
        self.store.set(START_TIME_KEY, &encoded)
    }

    pub fn session_start(&self) -> Option<f64> {
        let raw = self.store.get(START_TIME_KEY)?;
        let parsed = parse_timestamp(&raw);
        if parsed.is_none() {
            log::warn!("unrecognised {} value: {:?}", START_TIME_KEY, raw);
        }
        parsed
    }

    /// Milliseconds since the recorded session start, or 0 when no start was recorded.
    pub fn elapsed_since_start(&self, now_ms: f64) -> f64 {
        match self.session_start() {
            Some(start) => (now_ms - start).max(0.0),
            None => 0.0,
        }
    }
}

// Accepts 1699500000000, "1699500000000", and RFC 3339 text, quoted or bare.
fn parse_timestamp(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let unquoted = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Number(n)) => return n.as_f64(),
        Ok(serde_json::Value::String(s)) => s,
        _ => trimmed.to_string(),
    };

    if let Ok(ms) = unquoted.trim().parse::<f64>() {
        return ms.is_finite().then_some(ms);
    }

    DateTime::parse_from_rfc3339(unquoted.trim())
        .ok()
        .map(|dt| dt.timestamp_millis() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, elapsed: f64) -> PlayRecord {
        PlayRecord::new(label, elapsed)
    }

    #[test]
    fn test_load_empty_store() {
        let session = SessionStore::new(MemoryStore::new());
        assert!(session.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_value() {
        let store = MemoryStore::new();
        store.set(VALUE_DATES_KEY, "not json").unwrap();
        let session = SessionStore::new(&store);
        assert!(session.load().is_empty());
        assert!(matches!(session.try_load(), Err(PuzzleError::Decode(_))));
    }

    #[test]
    fn test_load_non_sequence_values() {
        for raw in ["null", "{}", "42", "\"Thursday\"", "[{\"valueDate\": 3}]"] {
            let store = MemoryStore::new();
            store.set(VALUE_DATES_KEY, raw).unwrap();
            assert!(SessionStore::new(&store).load().is_empty(), "{raw}");
        }
    }

    #[test]
    fn test_append_then_load() {
        let session = SessionStore::new(MemoryStore::new());
        session.append(record("Wednesday, November 08 2023", 61_000.0)).unwrap();
        session.append(record("Thursday, November 09 2023", 42_500.0)).unwrap();

        let history = session.load();
        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(&record("Thursday, November 09 2023", 42_500.0)));
    }

    #[test]
    fn test_append_recovers_corrupt_history() {
        let store = MemoryStore::new();
        store.set(VALUE_DATES_KEY, "[oops").unwrap();
        let session = SessionStore::new(&store);
        session.append(record("Friday, November 10 2023", 1.0)).unwrap();
        assert_eq!(session.load(), vec![record("Friday, November 10 2023", 1.0)]);
    }

    #[test]
    fn test_append_keeps_readable_records_beside_bad_one() {
        let store = MemoryStore::new();
        store
            .set(
                VALUE_DATES_KEY,
                r#"[{"valueDate":"Tuesday, November 07 2023","elapsedTime":30000},{"valueDate":"Wednesday, November 08 2023","elapsedTime":null}]"#,
            )
            .unwrap();
        let session = SessionStore::new(&store);
        assert_eq!(session.try_load().unwrap().len(), 1);

        session.append(record("Thursday, November 09 2023", 42_500.0)).unwrap();
        assert_eq!(
            session.load(),
            vec![
                record("Tuesday, November 07 2023", 30_000.0),
                record("Thursday, November 09 2023", 42_500.0),
            ]
        );
    }

    #[test]
    fn test_shared_store_is_seen_by_every_session() {
        let store = Rc::new(MemoryStore::new());
        let puzzle_page = SessionStore::new(Rc::clone(&store));
        let submit_handler = SessionStore::new(Rc::clone(&store));

        puzzle_page.record_session_start(1_000.0).unwrap();
        assert_eq!(submit_handler.elapsed_since_start(4_000.0), 3_000.0);

        submit_handler.append(record("Thursday, November 09 2023", 3_000.0)).unwrap();
        assert_eq!(puzzle_page.load().len(), 1);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let store = MemoryStore::new();
        SessionStore::new(&store)
            .append(record("Friday, November 10 2023", 1500.0))
            .unwrap();
        assert_eq!(
            store.get(VALUE_DATES_KEY).unwrap(),
            r#"[{"valueDate":"Friday, November 10 2023","elapsedTime":1500.0}]"#
        );
    }

    #[test]
    fn test_reads_history_written_by_browser() {
        let store = MemoryStore::new();
        store
            .set(VALUE_DATES_KEY, r#"[{"valueDate":"Friday, November 10 2023","elapsedTime":1500}]"#)
            .unwrap();
        assert_eq!(
            SessionStore::new(&store).load(),
            vec![record("Friday, November 10 2023", 1500.0)]
        );
    }

    #[test]
    fn test_session_start_formats() {
        let cases = [
            ("1699500000000", Some(1_699_500_000_000.0)),
            ("\"1699500000000\"", Some(1_699_500_000_000.0)),
            ("\"2023-11-09T03:20:00.000Z\"", Some(1_699_500_000_000.0)),
            ("2023-11-09T03:20:00Z", Some(1_699_500_000_000.0)),
            ("yesterday", None),
        ];
        for (raw, expected) in cases {
            let store = MemoryStore::new();
            store.set(START_TIME_KEY, raw).unwrap();
            assert_eq!(SessionStore::new(&store).session_start(), expected, "{raw}");
        }
    }

    #[test]
    fn test_elapsed_since_start() {
        let session = SessionStore::new(MemoryStore::new());
        assert_eq!(session.elapsed_since_start(5_000.0), 0.0);

        session.record_session_start(1_000.0).unwrap();
        assert_eq!(session.session_start(), Some(1_000.0));
        assert_eq!(session.elapsed_since_start(6_500.0), 5_500.0);
    }
}
