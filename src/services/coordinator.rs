//! The remit coordinator
//!
//! One coordinator per session: it owns the catalog client, the ledger pool
//! and the draft store, and exposes everything the presentation layer renders
//! as watch channels. Each catalog (wallets, recipients, recent transactions)
//! carries its own process state so the screens can load independently.

use sqlx::sqlite::SqlitePool;
use tokio::sync::watch;
use tracing::{error, info};

use crate::api::remit::RemitClient;
use crate::db;
use crate::models::{Contact, MobileWallet, ProcessState, Recipient, Transaction};
use crate::services::balance_service;
use crate::services::draft_service::DraftStore;
use crate::utils;
use crate::utils::calculator;
use crate::utils::countries;
use crate::utils::errors::RemitError;

/// How many ledger entries the home screen shows
pub const RECENT_TRANSACTIONS_LIMIT: u32 = 5;

const NO_TRANSACTIONS_YET: &str = "No transactions yet";
const NO_RECIPIENTS_FOUND: &str = "No recipients found";
const NO_WALLETS_FOUND: &str = "No mobile wallets available";
const NO_TRANSFER_IN_PROGRESS: &str = "No transfer in progress";
const SELECT_A_COUNTRY: &str = "Select a country";
const SELECT_A_CONTACT: &str = "Select a contact";
const ENTER_AN_AMOUNT: &str = "Enter an amount";
const INSUFFICIENT_BALANCE: &str = "Insufficient balance";

pub struct RemitCoordinator {
    api: RemitClient,
    pool: SqlitePool,
    draft: DraftStore,
    current_balance: watch::Sender<f64>,
    mobile_wallets: watch::Sender<Vec<MobileWallet>>,
    previous_recipients: watch::Sender<Vec<Recipient>>,
    local_transactions: watch::Sender<Vec<Transaction>>,
    wallets_state: watch::Sender<ProcessState>,
    recipients_state: watch::Sender<ProcessState>,
    transactions_state: watch::Sender<ProcessState>,
}

impl RemitCoordinator {
    pub fn new(api: RemitClient, pool: SqlitePool) -> Self {
        Self {
            api,
            pool,
            draft: DraftStore::new(),
            current_balance: watch::channel(0.0).0,
            mobile_wallets: watch::channel(Vec::new()).0,
            previous_recipients: watch::channel(Vec::new()).0,
            local_transactions: watch::channel(Vec::new()).0,
            wallets_state: watch::channel(ProcessState::Loading).0,
            recipients_state: watch::channel(ProcessState::Loading).0,
            transactions_state: watch::channel(ProcessState::Loading).0,
        }
    }

    pub fn current_balance(&self) -> watch::Receiver<f64> {
        self.current_balance.subscribe()
    }

    pub fn mobile_wallets(&self) -> watch::Receiver<Vec<MobileWallet>> {
        self.mobile_wallets.subscribe()
    }

    pub fn previous_recipients(&self) -> watch::Receiver<Vec<Recipient>> {
        self.previous_recipients.subscribe()
    }

    pub fn local_transactions(&self) -> watch::Receiver<Vec<Transaction>> {
        self.local_transactions.subscribe()
    }

    pub fn wallets_state(&self) -> watch::Receiver<ProcessState> {
        self.wallets_state.subscribe()
    }

    pub fn recipients_state(&self) -> watch::Receiver<ProcessState> {
        self.recipients_state.subscribe()
    }

    pub fn transactions_state(&self) -> watch::Receiver<ProcessState> {
        self.transactions_state.subscribe()
    }

    /// Snapshot of the in-progress draft
    pub fn current_transaction(&self) -> Option<Transaction> {
        self.draft.get()
    }

    /// Subscribe to draft replacements
    pub fn subscribe_current_transaction(&self) -> watch::Receiver<Option<Transaction>> {
        self.draft.subscribe()
    }

    /// Fetch the most recent ledger entries for the home screen.
    /// An empty ledger renders the same way a failed fetch does.
    pub async fn fetch_local_transactions(&self) {
        self.transactions_state.send_replace(ProcessState::Loading);

        let state = match db::transaction::get_last_transactions(
            &self.pool,
            RECENT_TRANSACTIONS_LIMIT,
        )
        .await
        {
            Ok(transactions) if transactions.is_empty() => {
                ProcessState::Error(NO_TRANSACTIONS_YET.to_string())
            }
            Ok(transactions) => {
                self.local_transactions.send_replace(transactions);
                ProcessState::Done
            }
            Err(e) => {
                error!("Failed to fetch local transactions: {}", e);
                ProcessState::Error(e.to_string())
            }
        };

        self.transactions_state.send_replace(state);
    }

    /// Fetch the previous recipients from the catalog service
    pub async fn fetch_recipients(&self) {
        self.recipients_state.send_replace(ProcessState::Loading);

        let state = match self.api.get_previous_recipients().await {
            Ok(recipients) if recipients.is_empty() => {
                ProcessState::Error(NO_RECIPIENTS_FOUND.to_string())
            }
            Ok(recipients) => {
                self.previous_recipients.send_replace(recipients);
                ProcessState::Done
            }
            Err(e) => {
                error!("Failed to fetch recipients: {}", e);
                ProcessState::Error(e.to_string())
            }
        };

        self.recipients_state.send_replace(state);
    }

    /// Fetch the mobile wallets from the catalog service and resolve their
    /// logo asset keys
    pub async fn fetch_mobile_wallets(&self) {
        self.wallets_state.send_replace(ProcessState::Loading);

        let state = match self.api.get_mobile_wallets().await {
            Ok(wallets) if wallets.is_empty() => {
                ProcessState::Error(NO_WALLETS_FOUND.to_string())
            }
            Ok(wallets) => {
                self.mobile_wallets
                    .send_replace(utils::map_mobile_wallets_to_logos(wallets));
                ProcessState::Done
            }
            Err(e) => {
                error!("Failed to fetch mobile wallets: {}", e);
                ProcessState::Error(e.to_string())
            }
        };

        self.wallets_state.send_replace(state);
    }

    /// Recompute the remaining balance and publish it
    pub async fn calculate_remaining_balance(&self) {
        let balance = balance_service::calculate_remaining_balance(&self.pool).await;
        self.current_balance.send_replace(balance);
    }

    /// Replace the draft wholesale, or clear it with `None`
    pub fn update_current_transaction(&self, transaction: Option<Transaction>) {
        self.draft.replace(transaction);
    }

    /// Append a transaction to the local ledger
    pub async fn insert_current_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<(), RemitError> {
        db::transaction::insert_transaction(&self.pool, transaction).await
    }

    /// Step 1: pick the transfer category; starts a fresh draft
    pub fn choose_transfer_option(&self, option: &str) {
        self.draft.replace(Some(Transaction::new(option)));
    }

    /// Step 2: pick the destination channel
    pub fn choose_destination(&self, channel: &str) -> Result<(), RemitError> {
        let current = self.current_draft()?;
        self.draft.replace(Some(Transaction {
            channel: Some(channel.to_string()),
            ..current
        }));
        Ok(())
    }

    /// Step 3: pick a previous recipient. The recipient's currency code is
    /// filled in from the country table.
    pub fn choose_recipient(&self, recipient: Recipient) -> Result<(), RemitError> {
        let current = self.current_draft()?;
        let recipient = Recipient {
            currency_code: countries::get_currency_code(&recipient.country),
            ..recipient
        };
        self.draft.replace(Some(Transaction {
            recipient: Some(recipient),
            ..current
        }));
        Ok(())
    }

    /// Step 3, via the address book: both a country and a contact must have
    /// been picked before the recipient can be built
    pub fn choose_recipient_from_contact(
        &self,
        country: Option<&str>,
        contact: Option<&Contact>,
    ) -> Result<(), RemitError> {
        let country = country.ok_or_else(|| RemitError::validation(SELECT_A_COUNTRY))?;
        let contact = contact.ok_or_else(|| RemitError::validation(SELECT_A_CONTACT))?;
        let current = self.current_draft()?;

        let recipient = utils::convert_contact_to_recipient(contact, country);
        self.draft.replace(Some(Transaction {
            recipient: Some(recipient),
            ..current
        }));
        Ok(())
    }

    /// Step 4: pick the recipient's mobile wallet
    pub fn choose_wallet(&self, wallet_name: &str) -> Result<(), RemitError> {
        let current = self.current_draft()?;
        self.draft.replace(Some(Transaction {
            selected_wallet: Some(wallet_name.to_string()),
            ..current
        }));
        Ok(())
    }

    /// Step 5: the amount edit. Runs the calculator so the fee and conversion
    /// fields are rewritten together with the amount.
    pub fn set_amount(&self, amount_to_send: f64) -> Result<(), RemitError> {
        let current = self.current_draft()?;
        let updated = calculator::calculate_transaction(amount_to_send, &current)?;
        self.draft.replace(Some(updated));
        Ok(())
    }

    /// Final step: persist the draft into the ledger and clear it.
    ///
    /// On a storage failure the draft is retained so the confirmation can be
    /// retried.
    pub async fn confirm_transfer(&self) -> Result<Transaction, RemitError> {
        let current = self.current_draft()?;
        if current.amount.is_none() {
            return Err(RemitError::validation(ENTER_AN_AMOUNT));
        }

        self.calculate_remaining_balance().await;
        let balance = *self.current_balance.borrow();
        if current.total_spent > balance {
            return Err(RemitError::validation(INSUFFICIENT_BALANCE));
        }

        db::transaction::insert_transaction(&self.pool, &current).await?;
        self.draft.replace(None);

        info!(
            "Transfer confirmed: {} {} to {}",
            current.amount.as_deref().unwrap_or_default(),
            current.currency_code,
            current
                .recipient
                .as_ref()
                .map(|r| r.name.as_str())
                .unwrap_or("unknown recipient"),
        );
        Ok(current)
    }

    fn current_draft(&self) -> Result<Transaction, RemitError> {
        self.draft
            .get()
            .ok_or_else(|| RemitError::validation(NO_TRANSFER_IN_PROGRESS))
    }
}
