//! The browser-side session entry and the context that owns it.
//!
//! The only cross-request state on the client is one JSON record stored under
//! [`USER_DATA_KEY`]. [`SessionContext`] is the single place that reads and
//! writes it, and broadcasts login changes to whoever subscribed.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use civic_mock::models::User;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::ClientError;

/// Storage key of the session record
pub const USER_DATA_KEY: &str = "userData";

/// What the client keeps about the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub social_credit_score: Option<u32>,
}

impl StoredUser {
    /// Parse a stored record, rejecting anything that is not a usable user.
    pub fn parse(raw: &str) -> Option<Self> {
        let user: Self = serde_json::from_str(raw).ok()?;
        user.is_valid().then_some(user)
    }

    fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.name.trim().is_empty() && self.email.contains('@')
    }
}

impl From<&User> for StoredUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            social_credit_score: Some(user.social_credit.score),
        }
    }
}

/// String key/value storage that outlives a page, like `localStorage`.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// In-process [`SessionStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Owns the session store and publishes the current user.
#[derive(Debug)]
pub struct SessionContext<S> {
    store: S,
    current: watch::Sender<Option<StoredUser>>,
}

impl<S: SessionStore> SessionContext<S> {
    /// Wrap `store`, picking up a session left by a previous run.
    pub fn new(store: S) -> Self {
        let initial = load(&store);
        let (current, _) = watch::channel(initial);
        Self { store, current }
    }

    /// Persist `user` as the logged-in user and notify subscribers.
    pub fn login(&self, user: StoredUser) -> Result<(), ClientError> {
        let raw = serde_json::to_string(&user)?;
        self.store.set(USER_DATA_KEY, raw);
        tracing::debug!(user_id = %user.id, "Session started");
        self.current.send_replace(Some(user));
        Ok(())
    }

    pub fn logout(&self) {
        self.store.remove(USER_DATA_KEY);
        tracing::debug!("Session ended");
        self.current.send_replace(None);
    }

    /// The logged-in user as the store has it now.
    ///
    /// A malformed record is removed and reported as no user.
    pub fn current_user(&self) -> Option<StoredUser> {
        let user = load(&self.store);
        self.current.send_if_modified(|current| {
            if *current == user {
                return false;
            }
            current.clone_from(&user);
            true
        });
        user
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Receiver that sees every login and logout.
    pub fn subscribe(&self) -> watch::Receiver<Option<StoredUser>> {
        self.current.subscribe()
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}

fn load(store: &impl SessionStore) -> Option<StoredUser> {
    let raw = store.get(USER_DATA_KEY)?;
    let user = StoredUser::parse(&raw);
    if user.is_none() {
        tracing::warn!("Discarding malformed session record");
        store.remove(USER_DATA_KEY);
    }
    user
}
