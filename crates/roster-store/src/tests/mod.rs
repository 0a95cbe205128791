
use roster_core::{User, UserStorage};

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

/// In-memory storage that counts every call.
#[derive(Default)]
pub(crate) struct RecordingStorage {
    users: Mutex<Vec<User>>,
    pub(crate) creates: AtomicUsize,
    pub(crate) loads: AtomicUsize,
    pub(crate) drops: AtomicUsize,
}

impl RecordingStorage {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub(crate) async fn stored(&self) -> Vec<User> {
        self.users.lock().await.clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
            + self.loads.load(Ordering::SeqCst)
            + self.drops.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStorage for RecordingStorage {
    async fn create_user(&self, name: &str) -> Option<User> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        let user = User::new(name);
        self.users.lock().await.push(user.clone());
        Some(user)
    }

    async fn load_users(&self) -> Vec<User> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.users.lock().await.clone()
    }

    async fn drop_all(&self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
        self.users.lock().await.clear();
    }
}

/// Storage that is never reachable: creates yield nothing, loads are empty.
pub(crate) struct UnavailableStorage;

#[async_trait]
impl UserStorage for UnavailableStorage {
    async fn create_user(&self, _name: &str) -> Option<User> {
        None
    }

    async fn load_users(&self) -> Vec<User> {
        Vec::new()
    }

    async fn drop_all(&self) {}
}

/// Storage whose deletes silently fail, leaving every record in place.
pub(crate) struct UndeletableStorage {
    users: Vec<User>,
}

impl UndeletableStorage {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserStorage for UndeletableStorage {
    async fn create_user(&self, _name: &str) -> Option<User> {
        None
    }

    async fn load_users(&self) -> Vec<User> {
        self.users.clone()
    }

    async fn drop_all(&self) {}
}

/// Storage whose loads read their result immediately but hold it back until
/// `release` is called.
pub(crate) struct GatedStorage {
    inner: RecordingStorage,
    gate: Notify,
}

impl GatedStorage {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self {
            inner: RecordingStorage::with_users(users),
            gate: Notify::new(),
        }
    }

    pub(crate) fn release(&self) {
        self.gate.notify_one();
    }

    pub(crate) async fn stored(&self) -> Vec<User> {
        self.inner.stored().await
    }
}

#[async_trait]
impl UserStorage for GatedStorage {
    async fn create_user(&self, name: &str) -> Option<User> {
        self.inner.create_user(name).await
    }

    async fn load_users(&self) -> Vec<User> {
        let users = self.inner.load_users().await;
        self.gate.notified().await;
        users
    }

    async fn drop_all(&self) {
        self.inner.drop_all().await;
    }
}

/// Storage that serves `healthy_loads` loads and panics on every load after
/// that.
pub(crate) struct PanickingStorage {
    users: Vec<User>,
    healthy_loads: AtomicUsize,
}

impl PanickingStorage {
    pub(crate) fn with_users(users: Vec<User>, healthy_loads: usize) -> Self {
        Self {
            users,
            healthy_loads: AtomicUsize::new(healthy_loads),
        }
    }
}

#[async_trait]
impl UserStorage for PanickingStorage {
    async fn create_user(&self, _name: &str) -> Option<User> {
        None
    }

    async fn load_users(&self) -> Vec<User> {
        let remaining = self
            .healthy_loads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
        if remaining.is_err() {
            panic!("storage backend crashed");
        }
        self.users.clone()
    }

    async fn drop_all(&self) {}
}
