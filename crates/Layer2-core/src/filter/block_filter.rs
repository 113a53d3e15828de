//! Block filter entry points
//!
//! Single left-to-right pass: every block is replaced by its evaluated text,
//! everything between blocks is copied verbatim. Replacement text is never
//! scanned again.

use super::error::{FilterError, Result};
use super::evaluate::evaluate_block;
use super::grammar::{block_regex, contains_marker, Block};
use fws_foundation::{CowStr, FilterSettings, RequestContext};
use std::borrow::Cow;
use tracing::{debug, trace, warn};

/// Conditional block filter
#[derive(Debug, Clone, Default)]
pub struct BlockFilter {
    settings: FilterSettings,
}

impl BlockFilter {
    pub fn new(settings: FilterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    /// Filter `text` for the given request.
    ///
    /// Never fails: if the scan cannot run, the input comes back unchanged.
    pub fn filter<'t>(&self, text: &'t str, ctx: &RequestContext) -> CowStr<'t> {
        match self.try_filter(text, ctx) {
            Ok(out) => out,
            Err(e) => {
                warn!("Block scan abandoned, keeping original text: {}", e);
                Cow::Borrowed(text)
            }
        }
    }

    /// Like [`BlockFilter::filter`] but reports scan failures
    pub fn try_filter<'t>(&self, text: &'t str, ctx: &RequestContext) -> Result<CowStr<'t>> {
        if !contains_marker(text) {
            trace!("No block marker, skipping scan");
            return Ok(Cow::Borrowed(text));
        }

        if let Some(max) = self.settings.max_input_bytes {
            if text.len() > max {
                return Err(FilterError::InputTooLarge {
                    len: text.len(),
                    max,
                });
            }
        }

        let regex = block_regex()?;
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut blocks = 0usize;

        for caps in regex.captures_iter(text) {
            let Some(block) = Block::from_captures(&caps) else {
                continue;
            };
            out.push_str(&text[last..block.span.start]);
            out.push_str(evaluate_block(
                &block,
                ctx,
                self.settings.ua_pattern_size_limit,
            ));
            last = block.span.end;
            blocks += 1;
        }

        if blocks == 0 {
            return Ok(Cow::Borrowed(text));
        }

        out.push_str(&text[last..]);
        debug!(
            "Filtered {} block(s) for {} request ({} -> {} bytes)",
            blocks,
            ctx.channel_name(),
            text.len(),
            out.len()
        );
        Ok(Cow::Owned(out))
    }
}

/// Filter with default settings
pub fn filter(text: &str, ctx: &RequestContext) -> String {
    BlockFilter::default().filter(text, ctx).into_owned()
}
