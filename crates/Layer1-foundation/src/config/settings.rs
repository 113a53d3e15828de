//! Filter Settings - 필터 통합 설정
//!
//! 모든 필드에 기본값이 있어 빈 파일(`{}`)도 유효한 설정입니다.

use crate::strings::{
    DEFAULT_APP_AGENT_MARKER, DEFAULT_APP_FILE_ENDPOINT, DEFAULT_TOKEN_FILE_ENDPOINT,
    DEFAULT_TOKEN_PARAM, DEFAULT_UA_PATTERN_SIZE_LIMIT,
};
use serde::{Deserialize, Serialize};

/// 설정 파일명
pub const SETTINGS_FILE: &str = "settings.json";

/// 로컬 설정 파일명 (gitignored)
pub const LOCAL_SETTINGS_FILE: &str = "settings.local.json";

// ============================================================================
// Classifier Settings
// ============================================================================

/// Endpoints and markers used to recognise service access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierSettings {
    /// Path fragment of the token-authenticated file endpoint
    #[serde(default = "default_token_file_endpoint")]
    pub token_file_endpoint: String,

    /// Name of the token request parameter
    #[serde(default = "default_token_param")]
    pub token_param: String,

    /// Path fragment of the file endpoint shared with the companion app
    #[serde(default = "default_app_file_endpoint")]
    pub app_file_endpoint: String,

    /// User agent fragment identifying the companion app
    #[serde(default = "default_app_agent_marker")]
    pub app_agent_marker: String,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            token_file_endpoint: default_token_file_endpoint(),
            token_param: default_token_param(),
            app_file_endpoint: default_app_file_endpoint(),
            app_agent_marker: default_app_agent_marker(),
        }
    }
}

impl ClassifierSettings {
    /// 다른 설정과 병합 (기본값이 아닌 other 값이 우선)
    pub fn merge(&mut self, other: ClassifierSettings) {
        let defaults = ClassifierSettings::default();

        if other.token_file_endpoint != defaults.token_file_endpoint {
            self.token_file_endpoint = other.token_file_endpoint;
        }
        if other.token_param != defaults.token_param {
            self.token_param = other.token_param;
        }
        if other.app_file_endpoint != defaults.app_file_endpoint {
            self.app_file_endpoint = other.app_file_endpoint;
        }
        if other.app_agent_marker != defaults.app_agent_marker {
            self.app_agent_marker = other.app_agent_marker;
        }
    }
}

fn default_token_file_endpoint() -> String {
    DEFAULT_TOKEN_FILE_ENDPOINT.to_string()
}

fn default_token_param() -> String {
    DEFAULT_TOKEN_PARAM.to_string()
}

fn default_app_file_endpoint() -> String {
    DEFAULT_APP_FILE_ENDPOINT.to_string()
}

fn default_app_agent_marker() -> String {
    DEFAULT_APP_AGENT_MARKER.to_string()
}

// ============================================================================
// Filter Settings (통합)
// ============================================================================

/// Top-level settings for the block filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    /// Request classification
    #[serde(default)]
    pub classifier: ClassifierSettings,

    /// Compiled-size cap in bytes for `ua` patterns
    #[serde(default = "default_ua_pattern_size_limit")]
    pub ua_pattern_size_limit: usize,

    /// Inputs longer than this are returned unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_input_bytes: Option<usize>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            classifier: ClassifierSettings::default(),
            ua_pattern_size_limit: default_ua_pattern_size_limit(),
            max_input_bytes: None,
        }
    }
}

fn default_ua_pattern_size_limit() -> usize {
    DEFAULT_UA_PATTERN_SIZE_LIMIT
}

impl FilterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(mut self, classifier: ClassifierSettings) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_max_input_bytes(mut self, max: usize) -> Self {
        self.max_input_bytes = Some(max);
        self
    }

    pub fn with_ua_pattern_size_limit(mut self, limit: usize) -> Self {
        self.ua_pattern_size_limit = limit;
        self
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: FilterSettings) {
        self.classifier.merge(other.classifier);

        if other.ua_pattern_size_limit != DEFAULT_UA_PATTERN_SIZE_LIMIT {
            self.ua_pattern_size_limit = other.ua_pattern_size_limit;
        }
        if other.max_input_bytes.is_some() {
            self.max_input_bytes = other.max_input_bytes;
        }
    }
}
