use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::session::{KeyValueStore, PlayRecord, SessionStore};

/// Body returned by the guess form's action.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessResponse {
    pub is_correct: bool,
    // Per-jumble verdicts, only sent for a wrong final answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_jumbles_correct: Option<BTreeMap<String, bool>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JumbleVerdict {
    pub jumble_id: String,
    pub correct: bool,
}

impl JumbleVerdict {
    pub fn describe(&self) -> String {
        let verdict = if self.correct { "correct" } else { "incorrect" };
        format!("Jumble {}: {}", self.jumble_id, verdict)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Whole puzzle solved: the record was stored and one redirect is due.
    Solved {
        record: PlayRecord,
        redirect_after_ms: u32,
    },
    /// Wrong answer, with whatever per-jumble feedback the server gave.
    Partial { verdicts: Vec<JumbleVerdict> },
}

impl SubmissionOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SubmissionOutcome::Solved { .. })
    }
}

impl GuessResponse {
    pub fn verdicts(&self) -> Vec<JumbleVerdict> {
        self.is_jumbles_correct
            .iter()
            .flatten()
            .map(|(id, correct)| JumbleVerdict {
                jumble_id: id.clone(),
                correct: *correct,
            })
            .collect()
    }
}

/// Applies a guess response to the session: a correct answer appends exactly
/// one play record for `value_date` timed from the recorded session start.
pub fn resolve_guess<S: KeyValueStore>(
    session: &SessionStore<S>,
    response: &GuessResponse,
    value_date: &str,
    now_ms: f64,
    redirect_after_ms: u32,
) -> Result<SubmissionOutcome, PuzzleError> {
    if !response.is_correct {
        return Ok(SubmissionOutcome::Partial {
            verdicts: response.verdicts(),
        });
    }

    let record = PlayRecord::new(value_date, session.elapsed_since_start(now_ms));
    session.append(record.clone())?;
    log::info!("solved {} in {} ms", record.value_date, record.elapsed_time);

    Ok(SubmissionOutcome::Solved {
        record,
        redirect_after_ms,
    })
}
