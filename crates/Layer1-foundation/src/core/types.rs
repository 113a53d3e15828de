//! Core Types - 요청 분류 데이터 타입
//!
//! 필터 한 번 호출 동안만 유효한 요청 정보입니다. 호출 간 캐시하지 않습니다.

use super::traits::{AccessClassifier, UserAgentProvider};
use serde::{Deserialize, Serialize};

// ============================================================================
// Access Channel - 요청 경로 분류
// ============================================================================

/// Which classification signal marked a request as service access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceSignal {
    /// Host runs the whole process as a service call
    ServiceMode,
    /// Token file endpoint with a usable token parameter
    TokenFileEndpoint,
    /// App file endpoint requested by the companion app
    AppFileEndpoint,
}

impl ServiceSignal {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ServiceMode => "service_mode",
            Self::TokenFileEndpoint => "token_file_endpoint",
            Self::AppFileEndpoint => "app_file_endpoint",
        }
    }
}

/// Result of classifying a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessChannel {
    /// Ordinary interactive browsing
    #[default]
    Web,
    /// Non-interactive API / service access
    Service(ServiceSignal),
}

impl AccessChannel {
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Service(_) => "ws",
        }
    }
}

// ============================================================================
// Request Context
// ============================================================================

/// Per-invocation request description consumed by the block filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// True for non-interactive / API / service-channel requests
    pub is_service_access: bool,

    /// Raw user agent string of the requesting client
    #[serde(default)]
    pub user_agent: String,
}

impl RequestContext {
    pub fn new(is_service_access: bool, user_agent: impl Into<String>) -> Self {
        Self {
            is_service_access,
            user_agent: user_agent.into(),
        }
    }

    /// Interactive web request
    pub fn web(user_agent: impl Into<String>) -> Self {
        Self::new(false, user_agent)
    }

    /// Service (web service / API) request
    pub fn service(user_agent: impl Into<String>) -> Self {
        Self::new(true, user_agent)
    }

    /// Build from a classified channel
    pub fn from_channel(channel: AccessChannel, user_agent: impl Into<String>) -> Self {
        Self::new(channel.is_service(), user_agent)
    }

    /// Read both attributes from the host collaborators
    pub fn capture<C>(collaborator: &C) -> Self
    where
        C: AccessClassifier + UserAgentProvider + ?Sized,
    {
        Self::new(
            collaborator.is_service_access(),
            collaborator.current_user_agent(),
        )
    }

    pub fn channel_name(&self) -> &'static str {
        if self.is_service_access {
            "ws"
        } else {
            "web"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHost;

    impl AccessClassifier for FixedHost {
        fn is_service_access(&self) -> bool {
            true
        }
    }

    impl UserAgentProvider for FixedHost {
        fn current_user_agent(&self) -> String {
            "MoodleMobile 4.0".to_string()
        }
    }

    #[test]
    fn test_capture_from_collaborators() {
        let ctx = RequestContext::capture(&FixedHost);
        assert!(ctx.is_service_access);
        assert_eq!(ctx.user_agent, "MoodleMobile 4.0");
        assert_eq!(ctx.channel_name(), "ws");
    }

    #[test]
    fn test_from_channel() {
        let ctx = RequestContext::from_channel(AccessChannel::Web, "Firefox");
        assert!(!ctx.is_service_access);

        let ctx = RequestContext::from_channel(
            AccessChannel::Service(ServiceSignal::TokenFileEndpoint),
            "curl",
        );
        assert!(ctx.is_service_access);
        assert_eq!(ctx, RequestContext::service("curl"));
    }

    #[test]
    fn test_default_channel_is_web() {
        assert_eq!(AccessChannel::default(), AccessChannel::Web);
        assert!(!AccessChannel::default().is_service());
    }

    #[test]
    fn test_context_serde() {
        let ctx: RequestContext =
            serde_json::from_str(r#"{"isServiceAccess":true,"userAgent":"x"}"#).unwrap();
        assert_eq!(ctx, RequestContext::service("x"));

        let channel = AccessChannel::Service(ServiceSignal::ServiceMode);
        let json = serde_json::to_string(&channel).unwrap();
        assert_eq!(json, r#"{"service":"service_mode"}"#);
    }
}
