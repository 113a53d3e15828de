//! Core Traits - 호스트 협력자 인터페이스
//!
//! 필터는 전역 요청 상태를 직접 읽지 않습니다. 호스트가 아래 trait을 구현해
//! 주입하고, Layer2가 이를 이용해 요청을 분류합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (rendering pipeline)                                  │
//! │  └── RequestEnvironment 구현 (flag, path, params, UA)       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Layer2-Core                                                │
//! │  ├── ServiceAccessClassifier → AccessClassifier             │
//! │  └── BlockFilter (RequestContext 소비)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Layer1-Foundation (이 레이어)                              │
//! │  └── Trait / RequestContext 정의                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

// ============================================================================
// Collaborator Traits
// ============================================================================

/// Ambient request attributes owned by the host
pub trait RequestEnvironment {
    /// Process-wide "running as service call" indicator
    fn service_mode(&self) -> bool;

    /// Path of the current request (script path plus query is fine)
    fn request_path(&self) -> &str;

    /// Raw request parameter, if present
    fn param(&self, name: &str) -> Option<&str>;

    /// Raw user agent header
    fn user_agent(&self) -> &str;
}

/// Decides whether the current request is a service access
pub trait AccessClassifier {
    fn is_service_access(&self) -> bool;
}

/// Supplies the current user agent string
pub trait UserAgentProvider {
    fn current_user_agent(&self) -> String;
}

// ============================================================================
// RequestSnapshot - 소유형 RequestEnvironment 구현
// ============================================================================

/// Owned request attributes, built once per request by the host
#[derive(Debug, Clone, Default)]
pub struct RequestSnapshot {
    service_mode: bool,
    path: String,
    params: HashMap<String, String>,
    user_agent: String,
}

impl RequestSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service_mode(mut self, enabled: bool) -> Self {
        self.service_mode = enabled;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl RequestEnvironment for RequestSnapshot {
    fn service_mode(&self) -> bool {
        self.service_mode
    }

    fn request_path(&self) -> &str {
        &self.path
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl UserAgentProvider for RequestSnapshot {
    fn current_user_agent(&self) -> String {
        self.user_agent.clone()
    }
}
