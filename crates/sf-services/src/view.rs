//! Per-view list state
//!
//! A [`ListView`] is a local cache of one server list. It is replaced wholesale by a
//! refresh, filtered in place by a local delete, and never written once the view has
//! been deactivated.

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;
use sf_core::error::SfResult;
use sf_core::traits::{total_amount, Costed, Id, Identifiable};
use sf_notifications::NotificationService;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::feedback::TITLE_ERROR;
use crate::retry::{fetch_with_backoff_observed, FetchOutcome, FetchPhase, RetryPolicy};

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Set when the last refresh failed; cleared by the next successful one
    pub error: Option<String>,
    pub phase: FetchPhase,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            phase: FetchPhase::Idle,
        }
    }
}

impl<T> ListState<T> {
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.error = None;
        self.loading = false;
        self.phase = FetchPhase::Idle;
    }

    /// Keeps the previous items
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
        self.phase = FetchPhase::Error;
    }

    fn enter(&mut self, phase: FetchPhase) {
        self.phase = phase;
        self.loading = phase.is_busy();
    }
}

impl<T: Identifiable> ListState<T> {
    /// Drop the item with `id`; returns whether one was present
    pub fn remove_by_id(&mut self, id: Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn find(&self, id: Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

impl<T: Costed> ListState<T> {
    /// Sum of the line amounts currently held
    pub fn total(&self) -> f64 {
        total_amount(&self.items)
    }
}

/// How a call to [`ListView::refresh`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    Updated,
    Failed,
    Cancelled,
}

pub struct ListView<T> {
    resource: &'static str,
    state: Arc<RwLock<ListState<T>>>,
    policy: RetryPolicy,
    cancel: CancellationToken,
    notifier: NotificationService,
    fetch_failed: &'static str,
}

impl<T: Clone> ListView<T> {
    pub fn new(
        resource: &'static str,
        policy: RetryPolicy,
        notifier: NotificationService,
        fetch_failed: &'static str,
    ) -> Self {
        Self {
            resource,
            state: Arc::new(RwLock::new(ListState::default())),
            policy,
            cancel: CancellationToken::new(),
            notifier,
            fetch_failed,
        }
    }

    /// Re-fetch the list through the backoff policy and apply the result.
    ///
    /// A result arriving after [`ListView::deactivate`] is discarded.
    pub async fn refresh<F, Fut>(&self, fetch: F) -> RefreshStatus
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = SfResult<Vec<T>>>,
    {
        if !self.is_active() {
            return RefreshStatus::Cancelled;
        }

        let outcome = fetch_with_backoff_observed(fetch, self.policy, &self.cancel, |phase| {
            if !self.cancel.is_cancelled() {
                self.state.write().enter(phase);
            }
        })
        .await;

        match outcome {
            FetchOutcome::Fetched(items) => {
                debug!(resource = self.resource, count = items.len(), "list refreshed");
                self.state.write().replace(items);
                RefreshStatus::Updated
            }
            FetchOutcome::Failed(err) => {
                self.state.write().fail(err.to_string());
                self.notifier.error(TITLE_ERROR, self.fetch_failed);
                RefreshStatus::Failed
            }
            FetchOutcome::Cancelled => {
                info!(resource = self.resource, "refresh abandoned for inactive view");
                RefreshStatus::Cancelled
            }
        }
    }

    pub fn snapshot(&self) -> ListState<T> {
        self.state.read().clone()
    }

    pub fn items(&self) -> Vec<T> {
        self.state.read().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    /// Stop every pending and future refresh of this view
    pub fn deactivate(&self) {
        self.cancel.cancel();
        let mut state = self.state.write();
        state.loading = false;
        if state.phase.is_busy() {
            state.phase = FetchPhase::Idle;
        }
    }

    pub fn is_active(&self) -> bool {
        !self.cancel.is_cancelled()
    }
}

impl<T: Clone + Identifiable> ListView<T> {
    /// Local delete: removes the item without a round trip
    pub fn remove_local(&self, id: Id) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state.write().remove_by_id(id)
    }

    pub fn find(&self, id: Id) -> Option<T> {
        self.state.read().find(id).cloned()
    }
}

impl<T: Clone + Costed> ListView<T> {
    pub fn total(&self) -> f64 {
        self.state.read().total()
    }
}
