//! # fws-foundation
//!
//! Foundation layer for fws:
//! - Core: 요청 컨텍스트 타입과 호스트 협력자 Trait
//! - Config: 필터 설정 (FilterSettings, 계층형 로더)
//! - Error: 중앙 에러 타입
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Host rendering pipeline                                │
//! │          │ text + RequestEnvironment                    │
//! │          ▼                                              │
//! │  fws-core: ServiceAccessClassifier → RequestContext     │
//! │          │                                              │
//! │          ▼                                              │
//! │  fws-core: BlockFilter ({fws ...}...{fws})              │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod strings;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Core (요청 컨텍스트)
// ============================================================================
pub use self::core::{
    AccessChannel, AccessClassifier, RequestContext, RequestEnvironment, RequestSnapshot,
    ServiceSignal, UserAgentProvider,
};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    ClassifierSettings, FilterSettings, SettingsLoader, CONFIG_DIR_NAME, LOCAL_SETTINGS_FILE,
    SETTINGS_FILE,
};

// ============================================================================
// Strings
// ============================================================================
pub use strings::{CowStr, CONDITION_ANY, CONDITION_WEB, CONDITION_WS, MARKER_PREFIX};
