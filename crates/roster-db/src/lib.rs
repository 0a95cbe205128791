pub mod database;
pub mod error;
pub mod repositories;

pub use database::Database;
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
