//! Fee and conversion arithmetic
//!
//! Pure functions only; the coordinator feeds the result back into the draft
//! store so the derived fields can never go stale.

use crate::models::Transaction;
use crate::utils::errors::RemitError;

/// Percentage-based transfer fee applied to every send
pub const TRANSFER_FEES_PERCENTAGE: f64 = 0.05;

/// Compute fees, total spent and amount received for the given send amount.
///
/// Returns a copy of `current` with `amount`, `transfer_fees`, `total_spent`
/// and `amount_received` rewritten together. Negative and non-finite amounts
/// are rejected; a zero amount computes through (zero fees, the fixed
/// platform fee still applies).
pub fn calculate_transaction(
    amount_to_send: f64,
    current: &Transaction,
) -> Result<Transaction, RemitError> {
    if !amount_to_send.is_finite() {
        return Err(RemitError::validation("Enter a valid amount"));
    }
    if amount_to_send < 0.0 {
        return Err(RemitError::validation("Amount cannot be negative"));
    }

    let transfer_fees = amount_to_send * TRANSFER_FEES_PERCENTAGE;
    let total_spent = amount_to_send + current.moneco_fees + transfer_fees;
    let amount_received = (amount_to_send - transfer_fees) * current.conversion_rate;

    Ok(Transaction {
        amount: Some(amount_to_send.to_string()),
        transfer_fees,
        total_spent,
        amount_received,
        ..current.clone()
    })
}
