//! # sf-services
//!
//! The data-sync layer of Stockflow: an action layer over the API client, the
//! fetch-with-backoff utility, and one view per list shown to the user.
//!
//! A view owns a local cache of its list. Mutations go through the action layer; on
//! success the view either re-fetches the list or filters it locally, and every
//! outcome is reported through the injected [`NotificationService`].

pub mod actions;
pub mod allocations;
pub mod articles;
pub mod dashboard;
pub mod feedback;
pub mod outcome;
pub mod productions;
pub mod retry;
pub mod view;
pub mod workforce;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use actions::Actions;
pub use allocations::AllocationsView;
pub use articles::ArticlesView;
pub use dashboard::{Dashboard, ProductionSummary};
pub use outcome::{FailureKind, MutationOutcome};
pub use productions::ProductionsView;
pub use retry::{fetch_with_backoff, FetchOutcome, FetchPhase, RetryPolicy};
pub use view::{ListState, ListView, RefreshStatus};
pub use workforce::WorkforceView;

pub use sf_notifications::NotificationService;
