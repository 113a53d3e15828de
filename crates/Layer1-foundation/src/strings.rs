//! Zero-Copy String Utilities
//!
//! Static string constants shared by the filter layers, plus the `CowStr`
//! alias used for results that are usually passed through unchanged.
//!
//! # Usage
//!
//! ```ignore
//! use fws_foundation::strings::{CowStr, CONDITION_WEB};
//!
//! // Zero-copy pass-through
//! let text: CowStr = "No tags".into();
//! ```

use std::borrow::Cow;

/// Copy-on-write string type
///
/// Filter output borrows the input when no block matched.
pub type CowStr<'a> = Cow<'a, str>;

// ============================================================================
// Marker Constants
// ============================================================================

/// Opening marker prefix, probed case-insensitively before scanning
pub const MARKER_PREFIX: &str = "{fws";

// ============================================================================
// Condition Constants
// ============================================================================

/// Block shown for every request
pub const CONDITION_ANY: &str = "any";
/// Block shown for interactive web requests
pub const CONDITION_WEB: &str = "web";
/// Block shown for web service requests
pub const CONDITION_WS: &str = "ws";

// ============================================================================
// Classifier Defaults
// ============================================================================

/// File delivery endpoint used by token-authenticated service calls
pub const DEFAULT_TOKEN_FILE_ENDPOINT: &str = "webservice/pluginfile.php";
/// Request parameter carrying the service token
pub const DEFAULT_TOKEN_PARAM: &str = "token";
/// File delivery endpoint shared by the web site and the companion app
pub const DEFAULT_APP_FILE_ENDPOINT: &str = "/tokenpluginfile.php";
/// User agent fragment sent by the companion mobile app
pub const DEFAULT_APP_AGENT_MARKER: &str = "MoodleMobile";

/// Compiled-size cap for `ua` patterns (1 MiB)
pub const DEFAULT_UA_PATTERN_SIZE_LIMIT: usize = 1 << 20;
