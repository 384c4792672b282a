pub mod calendar;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod letters;
pub mod session;
pub mod statistics;
pub mod submission;

pub use error::PuzzleError;
pub use session::{KeyValueStore, MemoryStore, PlayRecord, SessionHistory, SessionStore};
