#![allow(dead_code)]

use roster_core::User;
use roster_db::{Database, UserRepository};

/// Creates an in-memory database with migrations run
pub async fn create_test_database() -> Database {
    Database::open_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Inserts a user directly through the repository
pub async fn insert_test_user(database: &Database, name: &str) -> User {
    let user = User::new(name);
    UserRepository::create(database.pool(), &user)
        .await
        .expect("Failed to insert test user");
    user
}

/// Inserts a row whose sync_id is not a UUID
pub async fn insert_corrupt_row(database: &Database) {
    sqlx::query("INSERT INTO users (sync_id, user_name) VALUES (?, ?)")
        .bind("not-a-uuid")
        .bind("Broken")
        .execute(database.pool())
        .await
        .expect("Failed to insert corrupt row");
}
