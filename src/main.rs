use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use remitconnect::api::remit::RemitClient;
use remitconnect::db;
use remitconnect::models::ProcessState;
use remitconnect::services::RemitCoordinator;
use remitconnect::utils;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("remitconnect=debug".parse().unwrap())
                .add_directive("sqlx=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("Starting RemitConnect...");

    // Initialize database
    info!("Initializing database...");
    let pool = match db::init_db().await {
        Ok(p) => {
            info!("Database initialized successfully");
            p
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return;
        }
    };

    let api = match std::env::var("REMIT_API_BASE_URL") {
        Ok(base_url) => RemitClient::with_base_url(base_url),
        Err(_) => RemitClient::new(),
    };

    let coordinator = RemitCoordinator::new(api, pool);

    // Home screen startup sequence: balance, recent activity, catalogs
    coordinator.calculate_remaining_balance().await;
    coordinator.fetch_local_transactions().await;
    coordinator.fetch_mobile_wallets().await;
    coordinator.fetch_recipients().await;

    let balance = *coordinator.current_balance().borrow();
    info!(
        "Remaining balance: {} EUR",
        utils::double_to_currency(balance)
    );

    report("Recent transactions", &coordinator.transactions_state().borrow());
    report("Mobile wallets", &coordinator.wallets_state().borrow());
    report("Recipients", &coordinator.recipients_state().borrow());

    let wallets = coordinator.mobile_wallets().borrow().clone();
    for wallet in &wallets {
        info!(
            "Wallet available: {} (logo: {})",
            wallet.name,
            wallet.logo.as_deref().unwrap_or("none")
        );
    }
}

fn report(label: &str, state: &ProcessState) {
    match state {
        ProcessState::Loading => info!("{}: loading", label),
        ProcessState::Done => info!("{}: ready", label),
        ProcessState::Error(message) => warn!("{}: {}", label, message),
    }
}
