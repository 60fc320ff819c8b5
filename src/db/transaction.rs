//! Ledger queries
//!
//! Completed transfers live in one append-only table; rows are never updated
//! or deleted after confirmation. The recipient sub-object is stored as a
//! JSON blob and round-trips losslessly.

use sqlx::sqlite::SqlitePool;

use crate::models::{Recipient, Transaction};
use crate::utils::errors::RemitError;

type TransactionRow = (
    i64,            // id
    Option<String>, // option
    Option<String>, // channel
    Option<String>, // recipient (JSON)
    Option<String>, // selected_wallet
    String,         // currency_code
    Option<String>, // amount
    f64,            // moneco_fees
    f64,            // transfer_fees
    f64,            // conversion_rate
    f64,            // total_spent
    f64,            // amount_received
    i64,            // date
);

fn row_to_transaction(row: TransactionRow) -> Result<Transaction, RemitError> {
    let (
        id,
        option,
        channel,
        recipient_json,
        selected_wallet,
        currency_code,
        amount,
        moneco_fees,
        transfer_fees,
        conversion_rate,
        total_spent,
        amount_received,
        date,
    ) = row;

    // A recipient blob that no longer parses means the store is corrupt
    let recipient = match recipient_json {
        Some(json) => Some(serde_json::from_str::<Recipient>(&json)?),
        None => None,
    };

    Ok(Transaction {
        id: Some(id),
        option,
        channel,
        recipient,
        selected_wallet,
        currency_code,
        amount,
        moneco_fees,
        transfer_fees,
        conversion_rate,
        total_spent,
        amount_received,
        date,
    })
}

/// Insert a transaction record. A `None` id lets the store assign the next
/// one; re-inserting an existing id replaces the prior row, so a confirmation
/// can be retried safely.
pub async fn insert_transaction(
    pool: &SqlitePool,
    transaction: &Transaction,
) -> Result<(), RemitError> {
    let recipient_json = transaction
        .recipient
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    sqlx::query(
        "INSERT OR REPLACE INTO transactions \
         (id, option, channel, recipient, selected_wallet, currency_code, amount, \
          moneco_fees, transfer_fees, conversion_rate, total_spent, amount_received, date) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(transaction.id)
    .bind(&transaction.option)
    .bind(&transaction.channel)
    .bind(recipient_json)
    .bind(&transaction.selected_wallet)
    .bind(&transaction.currency_code)
    .bind(&transaction.amount)
    .bind(transaction.moneco_fees)
    .bind(transaction.transfer_fees)
    .bind(transaction.conversion_rate)
    .bind(transaction.total_spent)
    .bind(transaction.amount_received)
    .bind(transaction.date)
    .execute(pool)
    .await
    .map_err(RemitError::Storage)?;

    Ok(())
}

/// Get the most recently inserted transactions, newest first
pub async fn get_last_transactions(
    pool: &SqlitePool,
    limit: u32,
) -> Result<Vec<Transaction>, RemitError> {
    let rows = sqlx::query_as::<_, TransactionRow>(
        "SELECT id, option, channel, recipient, selected_wallet, currency_code, amount, \
         moneco_fees, transfer_fees, conversion_rate, total_spent, amount_received, date \
         FROM transactions ORDER BY id DESC LIMIT ?",
    )
    .bind(limit as i64)
    .fetch_all(pool)
    .await
    .map_err(RemitError::Storage)?;

    rows.into_iter().map(row_to_transaction).collect()
}

/// Sum of `total_spent` across every record; `None` when the ledger is empty
pub async fn get_total_spent_sum(pool: &SqlitePool) -> Result<Option<f64>, RemitError> {
    sqlx::query_scalar::<_, Option<f64>>("SELECT SUM(total_spent) FROM transactions")
        .fetch_one(pool)
        .await
        .map_err(RemitError::Storage)
}
