//! Service Access Classification - 요청 경로 감지
//!
//! 세 가지 신호를 순서대로 확인하고 처음 참인 신호로 결정합니다.
//!
//! 1. 호스트 전역 service mode 플래그
//! 2. 토큰 파일 엔드포인트 + 비어있지 않은 토큰 파라미터
//! 3. 앱 파일 엔드포인트 + 컴패니언 앱 user agent
//!
//! 어느 것도 아니면 일반 웹 접근입니다.

use fws_foundation::{
    AccessChannel, AccessClassifier, ClassifierSettings, RequestContext, RequestEnvironment,
    ServiceSignal, UserAgentProvider,
};
use tracing::debug;

// ============================================================================
// MobileAppDetector
// ============================================================================

/// Recognises the companion mobile app from its user agent
#[derive(Debug, Clone)]
pub struct MobileAppDetector {
    marker: String,
}

impl MobileAppDetector {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into().to_lowercase(),
        }
    }

    /// Case-insensitive substring test
    pub fn is_app(&self, user_agent: &str) -> bool {
        !self.marker.is_empty() && user_agent.to_lowercase().contains(&self.marker)
    }
}

// ============================================================================
// ServiceAccessClassifier
// ============================================================================

/// Decides between web and service access for a request
#[derive(Debug, Clone)]
pub struct ServiceAccessClassifier {
    settings: ClassifierSettings,
    app_detector: MobileAppDetector,
}

impl Default for ServiceAccessClassifier {
    fn default() -> Self {
        Self::new(ClassifierSettings::default())
    }
}

impl ServiceAccessClassifier {
    pub fn new(settings: ClassifierSettings) -> Self {
        let app_detector = MobileAppDetector::new(settings.app_agent_marker.clone());
        Self {
            settings,
            app_detector,
        }
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Classify a request, first matching signal wins
    pub fn classify<E>(&self, env: &E) -> AccessChannel
    where
        E: RequestEnvironment + ?Sized,
    {
        let channel = if env.service_mode() {
            AccessChannel::Service(ServiceSignal::ServiceMode)
        } else if self.is_token_file_request(env) {
            AccessChannel::Service(ServiceSignal::TokenFileEndpoint)
        } else if self.is_app_file_request(env) {
            AccessChannel::Service(ServiceSignal::AppFileEndpoint)
        } else {
            AccessChannel::Web
        };

        if let AccessChannel::Service(signal) = channel {
            debug!(
                "Service access via {} for path '{}'",
                signal.name(),
                env.request_path()
            );
        }

        channel
    }

    pub fn is_service_access<E>(&self, env: &E) -> bool
    where
        E: RequestEnvironment + ?Sized,
    {
        self.classify(env).is_service()
    }

    /// One-call capture of the filter context
    pub fn context<E>(&self, env: &E) -> RequestContext
    where
        E: RequestEnvironment + ?Sized,
    {
        RequestContext::from_channel(self.classify(env), env.user_agent())
    }

    /// Bind to a request, exposing the collaborator traits
    pub fn bind<'a, E>(&'a self, env: &'a E) -> BoundRequest<'a, E>
    where
        E: RequestEnvironment + ?Sized,
    {
        BoundRequest {
            classifier: self,
            env,
        }
    }

    fn is_token_file_request<E>(&self, env: &E) -> bool
    where
        E: RequestEnvironment + ?Sized,
    {
        path_contains(env.request_path(), &self.settings.token_file_endpoint)
            && env
                .param(&self.settings.token_param)
                .map(has_alphanumeric)
                .unwrap_or(false)
    }

    fn is_app_file_request<E>(&self, env: &E) -> bool
    where
        E: RequestEnvironment + ?Sized,
    {
        path_contains(env.request_path(), &self.settings.app_file_endpoint)
            && self.app_detector.is_app(env.user_agent())
    }
}

/// Token parameters are cleaned to ASCII alphanumerics by the host
fn has_alphanumeric(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_alphanumeric())
}

fn path_contains(path: &str, endpoint: &str) -> bool {
    !endpoint.is_empty() && path.contains(endpoint)
}

// ============================================================================
// BoundRequest
// ============================================================================

/// A classifier paired with one request
pub struct BoundRequest<'a, E: ?Sized> {
    classifier: &'a ServiceAccessClassifier,
    env: &'a E,
}

impl<E> AccessClassifier for BoundRequest<'_, E>
where
    E: RequestEnvironment + ?Sized,
{
    fn is_service_access(&self) -> bool {
        self.classifier.is_service_access(self.env)
    }
}

impl<E> UserAgentProvider for BoundRequest<'_, E>
where
    E: RequestEnvironment + ?Sized,
{
    fn current_user_agent(&self) -> String {
        self.env.user_agent().to_string()
    }
}
