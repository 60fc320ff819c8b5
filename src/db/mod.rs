use sqlx::sqlite::SqlitePool;

pub mod transaction;

const DEFAULT_DATABASE_URL: &str = "sqlite://remit_connect.db?mode=rwc";

/// Initialize the SQLite connection pool and create tables
pub async fn init_db() -> Result<SqlitePool, sqlx::Error> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = SqlitePool::connect(&database_url).await?;

    create_tables(&pool).await?;

    Ok(pool)
}

/// Create all database tables
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            option TEXT,
            channel TEXT,
            recipient TEXT,
            selected_wallet TEXT,
            currency_code TEXT NOT NULL DEFAULT 'EUR',
            amount TEXT,
            moneco_fees REAL NOT NULL,
            transfer_fees REAL NOT NULL,
            conversion_rate REAL NOT NULL,
            total_spent REAL NOT NULL,
            amount_received REAL NOT NULL,
            date INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
