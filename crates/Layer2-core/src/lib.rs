//! fws-core: Core Runtime for fws
//!
//! Layer2 - 블록 필터와 요청 분류 구현 레이어
//!
//! # 주요 모듈
//!
//! - `filter`: `{fws ...}...{fws}` 조건부 블록 필터
//! - `classify`: 웹 / 웹서비스 요청 분류
//!
//! # 사용 예시
//!
//! ```ignore
//! use fws_core::{BlockFilter, ServiceAccessClassifier};
//! use fws_foundation::{FilterSettings, RequestSnapshot};
//!
//! let settings = FilterSettings::default();
//! let classifier = ServiceAccessClassifier::new(settings.classifier.clone());
//! let filter = BlockFilter::new(settings);
//!
//! // 호스트가 요청마다 스냅샷 생성
//! let request = RequestSnapshot::new()
//!     .with_path("/webservice/pluginfile.php/12/mod_page/content/index.html")
//!     .with_param("token", token)
//!     .with_user_agent(user_agent);
//!
//! let ctx = classifier.context(&request);
//! let html = filter.filter("{fws web}Web only.{fws}{fws ws}App only.{fws}", &ctx);
//! ```

pub mod classify;
pub mod filter;

// Re-exports: Filter
pub use filter::{
    contains_marker, evaluate, filter, scan_blocks, Block, BlockFilter, Condition, FilterError,
};

// Re-exports: Classification
pub use classify::{BoundRequest, MobileAppDetector, ServiceAccessClassifier};
