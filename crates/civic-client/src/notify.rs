//! Transient notifications ("toasts").
//!
//! Each notification removes itself after the queue's time-to-live unless it
//! is dismissed first. Dropping the queue cancels every pending expiry.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use tokio::task::JoinHandle;

/// How long a notification stays visible by default
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    visible: Vec<Notification>,
    timers: HashMap<u64, JoinHandle<()>>,
}

impl Inner {
    fn remove(&mut self, id: u64) -> bool {
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }
}

#[derive(Debug)]
pub struct NotificationQueue {
    ttl: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl NotificationQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Show a notification and schedule its expiry. Returns its id.
    ///
    /// Must be called inside a tokio runtime.
    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.visible.push(Notification {
            id,
            kind,
            message: message.into(),
        });

        let shared = Arc::clone(&self.inner);
        let ttl = self.ttl;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut inner = shared.lock().unwrap_or_else(PoisonError::into_inner);
            inner.remove(id);
            inner.timers.remove(&id);
        });
        inner.timers.insert(id, timer);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message)
    }

    /// Remove a notification before it expires.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut inner = self.lock();
        if let Some(timer) = inner.timers.remove(&id) {
            timer.abort();
        }
        inner.remove(id)
    }

    /// Notifications currently shown, oldest first.
    pub fn visible(&self) -> Vec<Notification> {
        self.lock().visible.clone()
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        for (_, timer) in inner.timers.drain() {
            timer.abort();
        }
        inner.visible.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for NotificationQueue {
    fn drop(&mut self) {
        self.clear();
    }
}
