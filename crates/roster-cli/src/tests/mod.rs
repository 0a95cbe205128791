
use roster_db::Database;
use roster_store::UserStore;

use std::sync::Arc;

pub(crate) async fn create_test_store() -> (UserStore, Database) {
    let database = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let store = UserStore::new(Arc::new(database.clone()));
    (store, database)
}
