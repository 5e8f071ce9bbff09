use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:budget.db";

/// DbConnection owns the SQLite pool for the lifetime of the session.
///
/// Cloning is cheap (the pool is shared). The connection is handed to
/// `BudgetStore` as an injected dependency, so tests can run against an
/// in-memory database.
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open the database at `url`, creating it and the schema if needed.
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        info!("Opened budget database: {}", url);
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // Budgets: named pools of funds
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS budgets (
                name TEXT PRIMARY KEY,
                total REAL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Items: budget lines, linked to their budget by name
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                name TEXT,
                total REAL,
                cap REAL,
                budget_name TEXT,
                category TEXT
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Categories: standalone expense labels, not enforced as a foreign key
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                name TEXT PRIMARY KEY
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
