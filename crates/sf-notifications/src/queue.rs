//! Bounded in-memory toast queue

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::notification::Notification;

const DEFAULT_CAPACITY: usize = 32;

/// Shared queue of pending toasts. When full, the oldest toast is dropped.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Notification>>>,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&self, notification: Notification) {
        let mut queue = self.inner.lock();
        while queue.len() >= self.capacity {
            queue.pop_front();
        }
        queue.push_back(notification);
    }

    /// Dispatch function feeding this queue, for [`crate::NotificationService::new`]
    pub fn dispatcher(&self) -> impl Fn(Notification) + Send + Sync + 'static {
        let queue = self.clone();
        move |notification| queue.push(notification)
    }

    /// Remove and return every pending toast, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        self.inner.lock().drain(..).collect()
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
