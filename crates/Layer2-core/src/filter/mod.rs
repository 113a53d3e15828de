//! Conditional block filter
//!
//! Keeps or drops `{fws <condition> [ua="<regex>"]}...{fws}` blocks depending
//! on whether the request is interactive web access or service access.
//!
//! ```text
//! {fws web}Web only.{fws} Common text. {fws ws}WS only{fws}
//! ```
//!
//! - `grammar`: marker grammar, `Condition`, `Block`, `scan_blocks`
//! - `evaluate`: per-block decision (condition + user agent)
//! - `block_filter`: `BlockFilter` / `filter` entry points
//! - `error`: `FilterError`

mod block_filter;
mod error;
mod evaluate;
mod grammar;

pub use block_filter::{filter, BlockFilter};
pub use error::{FilterError, Result};
pub use evaluate::{evaluate, evaluate_block, ua_matches};
pub use grammar::{contains_marker, scan_blocks, Block, Condition};
