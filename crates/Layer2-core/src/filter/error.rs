//! Error types for the block filter
//!
//! FilterError는 스캔/패턴 관련 세부 에러를 관리합니다.
//! fws_foundation::Error와의 변환을 지원합니다.

use fws_foundation::Error as FoundationError;
use thiserror::Error;

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur while scanning or evaluating blocks
#[derive(Error, Debug, Clone)]
pub enum FilterError {
    /// The block grammar itself failed to compile
    #[error("Block grammar unavailable: {0}")]
    BlockGrammar(#[from] regex::Error),

    /// A `ua="..."` attribute is not a usable regular expression
    #[error("Invalid user agent pattern '{pattern}': {message}")]
    UaPattern { pattern: String, message: String },

    /// Input exceeds the configured scan limit
    #[error("Input of {len} bytes exceeds scan limit of {max} bytes")]
    InputTooLarge { len: usize, max: usize },
}

impl FilterError {
    pub(crate) fn ua_pattern(pattern: &str, err: regex::Error) -> Self {
        Self::UaPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}

// ============================================================================
// fws_foundation::Error 변환
// ============================================================================

impl From<FilterError> for FoundationError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::BlockGrammar(e) => FoundationError::PatternEngine(e.to_string()),
            FilterError::UaPattern { pattern, message } => {
                FoundationError::InvalidPattern { pattern, message }
            }
            FilterError::InputTooLarge { len, max } => FoundationError::InputTooLarge { len, max },
        }
    }
}
