//! CLI command implementations.
//!
//! | Module        | Commands handled |
//! |---------------|------------------|
//! | `articles`    | `Articles`       |
//! | `productions` | `Productions`    |
//! | `allocations` | `Allocations`    |
//! | `workforce`   | `Workforce`      |
//!
//! Every form is validated before the first request goes out.

pub mod allocations;
pub mod articles;
pub mod productions;
pub mod workforce;

pub use allocations::cmd_allocations;
pub use articles::cmd_articles;
pub use productions::cmd_productions;
pub use workforce::cmd_workforce;

use anyhow::{anyhow, bail, Result};
use sf_core::ValidationErrors;
use sf_services::{ListView, MutationOutcome, RefreshStatus};

use crate::render;

/// Unwrap a form submission, printing field errors when it was rejected
fn validated<P>(submission: Result<P, ValidationErrors>) -> Result<P> {
    submission.or_else(|errors| {
        eprint!("{}", render::field_errors(&errors));
        bail!("Invalid input")
    })
}

fn finish(outcome: MutationOutcome) -> Result<()> {
    match outcome {
        MutationOutcome::Completed => Ok(()),
        MutationOutcome::Invalid(errors) => {
            eprint!("{}", render::field_errors(&errors));
            bail!("Invalid input")
        }
        MutationOutcome::Failed { message, .. } => Err(anyhow!(message)),
    }
}

fn loaded<T: Clone>(status: RefreshStatus, list: &ListView<T>) -> Result<()> {
    match status {
        RefreshStatus::Updated => Ok(()),
        RefreshStatus::Failed => Err(anyhow!(list
            .error()
            .unwrap_or_else(|| "Failed to load the list".to_string()))),
        RefreshStatus::Cancelled => bail!("Cancelled"),
    }
}

/// Print the list unless its last refresh failed
fn show<T: Clone>(list: &ListView<T>, render: fn(&[T]) -> String) {
    if list.error().is_none() {
        print!("{}", render(&list.items()));
    }
}
