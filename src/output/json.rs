//! JSON rendering of lookup responses.

use crate::error::{Result, VpcContextError};
use crate::models::VpcContextResponse;

/// Render a response as pretty-printed JSON.
pub fn response_json(response: &VpcContextResponse) -> Result<String> {
    serde_json::to_string_pretty(response)
        .map_err(|e| VpcContextError::Serialization(e.to_string()))
}

/// Print a response as JSON to stdout.
pub fn print_response_json(response: &VpcContextResponse) -> Result<()> {
    println!("{}", response_json(response)?);
    Ok(())
}
