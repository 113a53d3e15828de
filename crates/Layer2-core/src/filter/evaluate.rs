//! Per-block decision
//!
//! A block survives when its condition admits the request channel and, if a
//! `ua` pattern is given, the user agent contains a match for it.

use super::error::{FilterError, Result};
use super::grammar::{Block, Condition};
use fws_foundation::strings::DEFAULT_UA_PATTERN_SIZE_LIMIT;
use fws_foundation::RequestContext;
use regex::RegexBuilder;
use tracing::{debug, warn};

/// Unanchored regex search of `pattern` in `user_agent`
pub fn ua_matches(pattern: &str, user_agent: &str, size_limit: usize) -> Result<bool> {
    let regex = RegexBuilder::new(pattern)
        .size_limit(size_limit)
        .build()
        .map_err(|e| FilterError::ua_pattern(pattern, e))?;
    Ok(regex.is_match(user_agent))
}

/// Replacement text for one block: its body, or `""` when suppressed
pub fn evaluate<'t>(
    condition: &str,
    ua_pattern: Option<&str>,
    body: &'t str,
    ctx: &RequestContext,
) -> &'t str {
    decide(
        &Condition::parse(condition),
        ua_pattern,
        body,
        ctx,
        DEFAULT_UA_PATTERN_SIZE_LIMIT,
    )
}

/// Same as [`evaluate`] for an already parsed block
pub fn evaluate_block<'t>(block: &Block<'t>, ctx: &RequestContext, size_limit: usize) -> &'t str {
    decide(&block.condition, block.ua_pattern, block.body, ctx, size_limit)
}

fn decide<'t>(
    condition: &Condition,
    ua_pattern: Option<&str>,
    body: &'t str,
    ctx: &RequestContext,
    size_limit: usize,
) -> &'t str {
    if !condition.admits(ctx.is_service_access) {
        debug!(
            "Suppressed '{}' block for {} request",
            condition.as_str(),
            ctx.channel_name()
        );
        return "";
    }

    let Some(pattern) = ua_pattern.filter(|p| !p.is_empty()) else {
        return body;
    };

    match ua_matches(pattern, &ctx.user_agent, size_limit) {
        Ok(true) => body,
        Ok(false) => {
            debug!("User agent does not match '{}', block suppressed", pattern);
            ""
        }
        Err(e) => {
            // 잘못된 패턴은 불일치로 처리
            warn!("{}", e);
            ""
        }
    }
}
