pub mod error;
pub mod models;
pub mod storage;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::user::User;
pub use storage::UserStorage;

/// Shown in place of a user name that was stored empty.
pub const FALLBACK_DISPLAY_NAME: &str = "John Doe";
