#![allow(dead_code)]

use roster_db::Database;
use roster_store::UserStore;

use std::sync::Arc;

/// Creates a store backed by a fresh in-memory database
pub async fn create_test_store() -> (UserStore, Database) {
    let database = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let store = UserStore::new(Arc::new(database.clone()));
    (store, database)
}

/// Types `name` into the form and submits it, waiting for the result
pub async fn submit_user(store: &UserStore, name: &str) {
    store.set_user_name(name);
    store
        .create_new_user()
        .expect("Name should not be blank")
        .settled()
        .await;
}
