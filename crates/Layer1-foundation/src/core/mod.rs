//! Core Module - 요청 컨텍스트 및 협력자 인터페이스
//!
//! ## 타입 계층
//!
//! - `types.rs`: 데이터 타입 (RequestContext, AccessChannel)
//! - `traits.rs`: 인터페이스 (RequestEnvironment, AccessClassifier, UserAgentProvider)

pub mod traits;
pub mod types;

// ============================================================================
// Types - 데이터 타입 (types.rs)
// ============================================================================

pub use types::{AccessChannel, RequestContext, ServiceSignal};

// ============================================================================
// Traits - 인터페이스 (traits.rs)
// ============================================================================

pub use traits::{AccessClassifier, RequestEnvironment, RequestSnapshot, UserAgentProvider};
