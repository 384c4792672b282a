use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("stored data could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("server responded with HTTP {status}")]
    Network { status: u16 },
    #[error("request failed: {0}")]
    Request(String),
    #[error("Sorry, `{value}` is not a valid option ¯\\_(ツ)_/¯. \nPlease pick one letter from `{allowed}`")]
    Validation { value: String, allowed: String },
    #[error("storage write refused: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_value_and_choices() {
        let err = PuzzleError::Validation {
            value: "Z".to_string(),
            allowed: "ABC".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("`Z` is not a valid option"));
        assert!(message.ends_with("Please pick one letter from `ABC`"));
    }

    #[test]
    fn test_network_message_carries_status() {
        assert_eq!(
            PuzzleError::Network { status: 503 }.to_string(),
            "server responded with HTTP 503"
        );
    }
}
