//! Block grammar
//!
//! ```text
//! {fws WS+ TOKEN (WS* ua="PATTERN")? WS* } BODY { WS* fws WS* }
//! ```
//!
//! Keywords are ASCII case-insensitive and WS is ASCII whitespace; no Unicode
//! case folding applies, so `{fwſ` is plain text. TOKEN is `[a-zA-Z0-9]+`.
//! BODY spans newlines and ends at the nearest closing marker. Blocks never nest.

use super::error::{FilterError, Result};
use fws_foundation::strings::{CONDITION_ANY, CONDITION_WEB, CONDITION_WS, MARKER_PREFIX};
use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::OnceLock;

const BLOCK_PATTERN: &str = concat!(
    r#"(?s)\{(?i-u:fws)(?-u:\s)+([a-zA-Z0-9]+)(?-u:\s)*"#,
    r#"(?:(?i-u:ua)="([^"]+)")?(?-u:\s)*\}"#,
    r#"(.*?)\{(?-u:\s)*(?i-u:fws)(?-u:\s)*\}"#,
);

static BLOCK_REGEX: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

/// Compiled block grammar, shared across calls
pub(crate) fn block_regex() -> Result<&'static Regex> {
    BLOCK_REGEX
        .get_or_init(|| Regex::new(BLOCK_PATTERN))
        .as_ref()
        .map_err(|e| FilterError::BlockGrammar(e.clone()))
}

/// Cheap case-insensitive probe for the opening marker
pub fn contains_marker(text: &str) -> bool {
    let prefix = MARKER_PREFIX.as_bytes();
    text.as_bytes()
        .windows(prefix.len())
        .any(|w| w.eq_ignore_ascii_case(prefix))
}

// ============================================================================
// Condition
// ============================================================================

/// Condition token of an opening marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Every request
    Any,
    /// Interactive web requests only
    Web,
    /// Service requests only
    Ws,
    /// Anything else; never shown
    Unknown(String),
}

impl Condition {
    /// Parse a raw token (case-insensitive)
    pub fn parse(token: &str) -> Self {
        let token = token.to_ascii_lowercase();
        match token.as_str() {
            CONDITION_ANY => Self::Any,
            CONDITION_WEB => Self::Web,
            CONDITION_WS => Self::Ws,
            _ => Self::Unknown(token),
        }
    }

    /// Whether a block with this condition is shown for the given channel
    pub fn admits(&self, is_service_access: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Web => !is_service_access,
            Self::Ws => is_service_access,
            Self::Unknown(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Any => CONDITION_ANY,
            Self::Web => CONDITION_WEB,
            Self::Ws => CONDITION_WS,
            Self::Unknown(token) => token,
        }
    }
}

// ============================================================================
// Block
// ============================================================================

/// One matched `{fws ...}...{fws}` span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'t> {
    /// Byte range of the whole block, markers included
    pub span: Range<usize>,
    pub condition: Condition,
    /// Raw `ua` pattern, used verbatim
    pub ua_pattern: Option<&'t str>,
    /// Inner text, not filtered again
    pub body: &'t str,
}

impl<'t> Block<'t> {
    pub(crate) fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            span: whole.range(),
            condition: Condition::parse(caps.get(1)?.as_str()),
            ua_pattern: caps.get(2).map(|m| m.as_str()),
            body: caps.get(3).map_or("", |m| m.as_str()),
        })
    }
}

/// List every block in `text`, left to right
pub fn scan_blocks(text: &str) -> Result<Vec<Block<'_>>> {
    if !contains_marker(text) {
        return Ok(Vec::new());
    }

    let regex = block_regex()?;
    Ok(regex
        .captures_iter(text)
        .filter_map(|caps| Block::from_captures(&caps))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_regex_compiles() {
        assert!(block_regex().is_ok());
    }

    #[test]
    fn test_contains_marker() {
        assert!(contains_marker("before {fws web}x{fws}"));
        assert!(contains_marker("{FwS"));
        assert!(!contains_marker("No tags"));
        assert!(!contains_marker("{fw"));
        assert!(!contains_marker(""));
        assert!(!contains_marker("{ fws web}"));
    }

    #[test]
    fn test_condition_parse() {
        assert_eq!(Condition::parse("any"), Condition::Any);
        assert_eq!(Condition::parse("WEB"), Condition::Web);
        assert_eq!(Condition::parse("Ws"), Condition::Ws);
        assert_eq!(
            Condition::parse("Invalid"),
            Condition::Unknown("invalid".to_string())
        );
    }

    #[test]
    fn test_condition_admits() {
        assert!(Condition::Any.admits(false));
        assert!(Condition::Any.admits(true));
        assert!(Condition::Web.admits(false));
        assert!(!Condition::Web.admits(true));
        assert!(!Condition::Ws.admits(false));
        assert!(Condition::Ws.admits(true));
        assert!(!Condition::Unknown("app".into()).admits(false));
        assert!(!Condition::Unknown("app".into()).admits(true));
    }

    #[test]
    fn test_scan_blocks() {
        let text = "a{fws web}A{fws}b{FWS ws ua=\"Mobile\"}B\nC{ fws }c";
        let blocks = scan_blocks(text).unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].condition, Condition::Web);
        assert_eq!(blocks[0].body, "A");
        assert_eq!(blocks[0].ua_pattern, None);
        assert_eq!(&text[blocks[0].span.clone()], "{fws web}A{fws}");

        assert_eq!(blocks[1].condition, Condition::Ws);
        assert_eq!(blocks[1].ua_pattern, Some("Mobile"));
        assert_eq!(blocks[1].body, "B\nC");
    }

    #[test]
    fn test_body_is_non_greedy() {
        let blocks = scan_blocks("{fws any}1{fws}{fws any}2{fws}").unwrap();
        let bodies: Vec<_> = blocks.iter().map(|b| b.body).collect();
        assert_eq!(bodies, vec!["1", "2"]);
    }

    #[test]
    fn test_malformed_markers_do_not_match() {
        assert!(scan_blocks("{fws}Bad syntax{fws}").unwrap().is_empty());
        assert!(scan_blocks("{fws web}unterminated").unwrap().is_empty());
        assert!(scan_blocks("{fws web ua=\"\"}empty ua{fws}").unwrap().is_empty());
        assert!(scan_blocks("{fws we-b}dash{fws}").unwrap().is_empty());
    }

    #[test]
    fn test_keywords_fold_ascii_only() {
        // U+017F (ſ) 와 U+212A (Kelvin) 는 ASCII 로 접히지 않음
        assert!(scan_blocks("{fw\u{17f} web}A{fw\u{17f}}").unwrap().is_empty());
        assert!(scan_blocks("{fws \u{212a}}A{fws}").unwrap().is_empty());

        let blocks = scan_blocks("{fws web}A{fw\u{17f}}B{fws}").unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "A{fw\u{17f}}B");

        let blocks = scan_blocks("{FWS Web UA=\"x\"}A{ FwS }").unwrap();
        assert_eq!(blocks[0].condition, Condition::Web);
        assert_eq!(blocks[0].ua_pattern, Some("x"));
    }

    #[test]
    fn test_empty_body() {
        let blocks = scan_blocks("{fws any}{fws}").unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "");
    }
}
