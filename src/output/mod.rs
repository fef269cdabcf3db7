//! Output formatting for lookup responses.
//!
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal summary with colors

mod json;
mod terminal;

pub use json::{print_response_json, response_json};
pub use terminal::{format_field, print_summary, summary_lines};
