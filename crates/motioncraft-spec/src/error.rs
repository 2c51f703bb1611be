//! Error types for spec extraction and parsing.
//!
//! These errors classify why an upstream response could not drive structured
//! synthesis. They are consumed by the engine to pick a degradation tier and
//! are never surfaced as synthesis failures.

use thiserror::Error;

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Reasons an upstream response does not contain a usable movement spec.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The response text contains no balanced JSON object.
    #[error("no JSON object found in response text")]
    NoJsonObject,

    /// A JSON object was found but did not parse as a spec.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The spec parsed but declares no phases to synthesize.
    #[error("spec contains no phases")]
    NoPhases,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SpecError::NoJsonObject.to_string(),
            "no JSON object found in response text"
        );
        assert_eq!(SpecError::NoPhases.to_string(), "spec contains no phases");
    }

    #[test]
    fn test_json_parse_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let spec_err = SpecError::from(err);
        assert!(spec_err.to_string().starts_with("JSON parse error"));
    }
}
