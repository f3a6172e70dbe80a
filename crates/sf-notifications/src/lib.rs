//! # sf-notifications
//!
//! Short, human-readable status messages ("toasts") raised by the data-sync handlers.
//!
//! Handlers never reach for an ambient toast API: they receive a [`NotificationService`]
//! built around an injected dispatch function. The front end decides where dispatched
//! notifications go; [`ToastQueue`] is the bounded in-memory sink it can use.

pub mod notification;
pub mod queue;
pub mod service;

pub use notification::{Level, Notification};
pub use queue::ToastQueue;
pub use service::{Dispatch, NotificationService};
