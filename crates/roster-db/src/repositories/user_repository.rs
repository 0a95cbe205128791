use crate::error::Result as DbErrorResult;

use roster_core::User;

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};
use uuid::Uuid;

/// Stays well under SQLite's bound-parameter limit.
const DELETE_CHUNK_SIZE: usize = 500;

pub struct UserRepository;

impl UserRepository {
    pub async fn create<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let sync_id = user.sync_id.to_string();

        sqlx::query(
            r#"
                INSERT INTO users (sync_id, user_name)
                VALUES (?, ?)
                "#,
        )
        .bind(sync_id)
        .bind(&user.user_name)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// All users in the order SQLite returns them. No sort key is applied.
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<User>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
                SELECT sync_id, user_name
                FROM users
                "#,
        )
        .fetch_all(executor)
        .await?;

        let users = rows
            .into_iter()
            .map(|(sync_id, user_name)| User::from_parts(&sync_id, user_name))
            .collect::<roster_core::Result<Vec<_>>>()?;

        Ok(users)
    }

    pub async fn find_by_id<'e, E>(executor: E, sync_id: Uuid) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let id_str = sync_id.to_string();

        let row: Option<(String, String)> = sqlx::query_as(
            r#"
                SELECT sync_id, user_name
                FROM users
                WHERE sync_id = ?
                "#,
        )
        .bind(id_str)
        .fetch_optional(executor)
        .await?;

        match row {
            Some((sync_id, user_name)) => Ok(Some(User::from_parts(&sync_id, user_name)?)),
            None => Ok(None),
        }
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    /// Delete the given users, returning how many rows were removed.
    ///
    /// Takes a connection rather than a generic executor because large id
    /// sets are split across several statements; pass `&mut *tx` to keep
    /// them in one transaction.
    pub async fn delete_by_ids(conn: &mut SqliteConnection, ids: &[Uuid]) -> DbErrorResult<u64> {
        let mut deleted = 0;

        for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
            let mut builder = QueryBuilder::<Sqlite>::new("DELETE FROM users WHERE sync_id IN (");
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(id.to_string());
            }
            separated.push_unseparated(")");

            let result = builder.build().execute(&mut *conn).await?;
            deleted += result.rows_affected();
        }

        Ok(deleted)
    }
}
