//! Persistence seam used by the user store.

use crate::User;

use async_trait::async_trait;

/// Durable storage for [`User`] records.
///
/// Implementations never surface failures: a failed create yields `None`,
/// a failed load yields an empty list and a failed drop still completes.
/// Callers cannot tell "nothing stored" apart from "the read failed".
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Persist a new user with a freshly allocated `sync_id`.
    async fn create_user(&self, name: &str) -> Option<User>;

    /// Every stored user, in whatever order the engine returns them.
    async fn load_users(&self) -> Vec<User>;

    /// Delete every stored user.
    async fn drop_all(&self);
}
