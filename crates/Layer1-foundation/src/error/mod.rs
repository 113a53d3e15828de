//! Error types for fws
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// fws 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 패턴 / 스캔 관련
    // ========================================================================
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Pattern engine error: {0}")]
    PatternEngine(String),

    #[error("Input too large: {len} bytes (max {max})")]
    InputTooLarge { len: usize, max: usize },

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Not found: {0}")]
    NotFound(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// 필터가 원문 반환으로 흡수하는 에러인지 확인
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidPattern { .. } | Error::PatternEngine(_) | Error::InputTooLarge { .. }
        )
    }

    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::NotFound(_) | Error::InvalidPattern { .. }
        )
    }

    /// 패턴 에러 생성 헬퍼
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::invalid_pattern("(", "unclosed group").is_recoverable());
        assert!(Error::PatternEngine("size limit".into()).is_recoverable());
        assert!(Error::InputTooLarge { len: 10, max: 5 }.is_recoverable());
        assert!(!Error::Config("bad".into()).is_recoverable());
        assert!(Error::Config("bad".into()).is_user_facing());
        assert!(!Error::PatternEngine("boom".into()).is_user_facing());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_pattern("a(", "unclosed group");
        assert_eq!(err.to_string(), "Invalid pattern 'a(': unclosed group");

        let err = Error::InputTooLarge { len: 10, max: 5 };
        assert_eq!(err.to_string(), "Input too large: 10 bytes (max 5)");
    }
}
