//! # Validator Chain
//!
//! Runs a command's validators one after another against a message.
//! Order matters: cheap or broad checks (e.g. room allow-list) come first so later
//! checks never run once an earlier one has refused the message.

use anyhow::Result;

use crate::domain::traits::SharedValidator;
use crate::domain::types::InboundMessage;

/// Returns `Ok(true)` only if every validator passes.
///
/// Stops at the first validator returning `false`. An error from a validator is
/// returned as-is and the remaining validators are skipped.
pub async fn evaluate(message: &InboundMessage, validators: &[SharedValidator]) -> Result<bool> {
    for validator in validators {
        if !validator.validate(message).await? {
            return Ok(false);
        }
    }
    Ok(true)
}
