use crate::PendingIntent;

use roster_core::{User, UserStorage};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use tokio::sync::watch;

/// Form state for the user roster.
///
/// Every intent starts a new generation. When an intent finishes, its result
/// replaces the `users` snapshot only if no later intent has started in the
/// meantime, so the most recently started intent always wins. Superseded
/// intents still run to completion against storage; only their result is
/// dropped.
///
/// Intents spawn onto the current Tokio runtime.
#[derive(Clone)]
pub struct UserStore {
    state: Arc<StoreState>,
}

struct StoreState {
    storage: Arc<dyn UserStorage>,
    user_name: watch::Sender<String>,
    users: watch::Sender<Vec<User>>,
    generation: AtomicU64,
}

impl StoreState {
    /// Replace the snapshot if `generation` is still the latest.
    ///
    /// The check runs under the channel's write lock, so a newer intent can
    /// never be overwritten by an older one finishing late.
    fn apply(&self, generation: u64, users: Vec<User>) -> bool {
        let applied = self.users.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *current = users;
            true
        });

        if !applied {
            debug!("Discarded stale result of intent {generation}");
        }

        applied
    }
}

impl UserStore {
    pub fn new(storage: Arc<dyn UserStorage>) -> Self {
        let (user_name, _) = watch::channel(String::new());
        let (users, _) = watch::channel(Vec::new());

        Self {
            state: Arc::new(StoreState {
                storage,
                user_name,
                users,
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn user_name(&self) -> String {
        self.state.user_name.borrow().clone()
    }

    pub fn set_user_name(&self, user_name: impl Into<String>) {
        self.state.user_name.send_replace(user_name.into());
    }

    pub fn subscribe_user_name(&self) -> watch::Receiver<String> {
        self.state.user_name.subscribe()
    }

    /// The last applied snapshot.
    pub fn users(&self) -> Vec<User> {
        self.state.users.borrow().clone()
    }

    pub fn subscribe_users(&self) -> watch::Receiver<Vec<User>> {
        self.state.users.subscribe()
    }

    /// Generation of the most recently started intent. 0 before any intent.
    pub fn generation(&self) -> u64 {
        self.state.generation.load(Ordering::SeqCst)
    }

    fn next_generation(&self) -> u64 {
        self.state.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Create a user from the trimmed `user_name`, then reload the snapshot.
    ///
    /// Returns `None` without touching storage when the trimmed name is
    /// empty. The reload happens whether or not the create succeeded. The
    /// input is left as it was.
    pub fn create_new_user(&self) -> Option<PendingIntent> {
        let name = self.state.user_name.borrow().trim().to_string();
        if name.is_empty() {
            debug!("Ignoring create intent with a blank user name");
            return None;
        }

        let generation = self.next_generation();
        debug!("Intent {generation}: create user");

        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            if state.storage.create_user(&name).await.is_none() {
                debug!("Intent {generation}: create produced no user");
            }
            let users = state.storage.load_users().await;
            state.apply(generation, users);
        });

        Some(PendingIntent::new(generation, handle))
    }

    /// Replace the snapshot with whatever storage currently holds.
    pub fn load_users(&self) -> PendingIntent {
        let generation = self.next_generation();
        debug!("Intent {generation}: load users");

        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            let users = state.storage.load_users().await;
            state.apply(generation, users);
        });

        PendingIntent::new(generation, handle)
    }

    /// Delete every stored user, then show an empty snapshot.
    ///
    /// The snapshot is cleared without re-reading storage, even if the delete
    /// failed.
    pub fn drop_all(&self) -> PendingIntent {
        let generation = self.next_generation();
        debug!("Intent {generation}: drop all users");

        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            state.storage.drop_all().await;
            state.apply(generation, Vec::new());
        });

        PendingIntent::new(generation, handle)
    }
}
