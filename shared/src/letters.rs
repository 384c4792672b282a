use crate::error::PuzzleError;

/// Result of checking what was typed into a single-letter box.
#[derive(Debug)]
pub enum LetterInput {
    /// Uppercased, non-empty value; focus should move to the next box.
    Accepted(String),
    /// Nothing to advance on.
    Empty,
    /// Value is not among the allowed letters; the box must be cleared.
    Rejected(PuzzleError),
}

/// Uppercases `raw` and checks it against `allowed`.
///
/// Membership is containment in the allowed string, so the empty value and
/// contiguous runs of allowed letters both pass.
pub fn check_letter_input(raw: &str, allowed: Option<&str>) -> LetterInput {
    let value = raw.to_uppercase();

    if let Some(allowed) = allowed {
        if !allowed.contains(value.as_str()) {
            return LetterInput::Rejected(PuzzleError::Validation {
                value,
                allowed: allowed.to_string(),
            });
        }
    }

    if value.is_empty() {
        LetterInput::Empty
    } else {
        LetterInput::Accepted(value)
    }
}

/// Cue letters still free for the final answer.
///
/// Each used letter removes the first remaining occurrence of itself
/// (case-insensitively) from the uppercased cue letters; order is kept.
pub fn display_letters(cue_letters: &str, used_letters: &str) -> String {
    let mut remaining = cue_letters.to_uppercase();
    for used in used_letters.chars() {
        let needle = used.to_uppercase().to_string();
        remaining = remaining.replacen(&needle, "", 1);
    }
    remaining
}
