//! SQLite-backed user storage.
//!
//! [`Database`] is the single handle through which the store reaches the
//! persisted users. Opening it is the only fallible step visible to callers;
//! once open, its [`UserStorage`] implementation converts every failure into
//! an empty result and logs it.

use crate::{DbError, Result, UserRepository};

use roster_core::{User, UserStorage};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database file at `path` and run migrations.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.run_migrations().await?;

        info!("Opened user database at {}", path.display());

        Ok(database)
    }

    /// Open a private in-memory database.
    ///
    /// The pool is pinned to one connection that is never reaped, since the
    /// data lives only as long as that connection.
    pub async fn open_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.run_migrations().await?;

        debug!("Opened in-memory user database");

        Ok(database)
    }

    async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool. Every later operation fails and degrades to its
    /// empty result.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn try_create_user(&self, name: &str) -> Result<User> {
        let user = User::new(name);
        UserRepository::create(&self.pool, &user).await?;
        Ok(user)
    }

    pub async fn try_load_users(&self) -> Result<Vec<User>> {
        UserRepository::find_all(&self.pool).await
    }

    /// Delete `users` in one transaction.
    pub async fn try_drop_users(&self, users: &[User]) -> Result<u64> {
        let ids: Vec<_> = users.iter().map(|user| user.sync_id).collect();

        let mut tx = self.pool.begin().await?;
        let deleted = UserRepository::delete_by_ids(&mut *tx, &ids).await?;
        tx.commit().await?;

        Ok(deleted)
    }
}

#[async_trait]
impl UserStorage for Database {
    async fn create_user(&self, name: &str) -> Option<User> {
        match self.try_create_user(name).await {
            Ok(user) => {
                debug!("Created user {}", user.sync_id);
                Some(user)
            }
            Err(e) => {
                warn!("Ignoring failed user creation: {e}");
                None
            }
        }
    }

    async fn load_users(&self) -> Vec<User> {
        self.try_load_users().await.unwrap_or_else(|e| {
            warn!("Ignoring failed user load: {e}");
            Vec::new()
        })
    }

    async fn drop_all(&self) {
        let users = self.load_users().await;

        match self.try_drop_users(&users).await {
            Ok(deleted) => debug!("Dropped {deleted} users"),
            Err(e) => warn!("Ignoring failed user drop: {e}"),
        }
    }
}
