//! User-facing texts and the shared mutation runner

use std::future::Future;

use sf_core::error::{SfError, SfResult};
use sf_notifications::NotificationService;
use tracing::debug;

use crate::outcome::{FailureKind, MutationOutcome};

pub const TITLE_SUCCESS: &str = "Success";
pub const TITLE_ERROR: &str = "Error";
pub const TITLE_NOT_FOUND: &str = "Not found";
pub const TITLE_EXISTING: &str = "Existing detail";
pub const TITLE_SERVER: &str = "Server error";

const SERVER_ERROR: &str = "An error occurred on the server.";
const ALREADY_EXISTS: &str = "This entry already exists. Edit it instead of creating it again.";

/// Texts shown after one kind of mutation
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub success: &'static str,
    pub failure: &'static str,
    pub not_found: Option<&'static str>,
    pub conflict: Option<&'static str>,
    /// Substring of a server `message` that also means "already exists"
    pub conflict_marker: Option<&'static str>,
}

impl Messages {
    const fn new(success: &'static str, failure: &'static str) -> Self {
        Self {
            success,
            failure,
            not_found: None,
            conflict: None,
            conflict_marker: None,
        }
    }

    const fn not_found(mut self, text: &'static str) -> Self {
        self.not_found = Some(text);
        self
    }

    const fn conflict(mut self, text: &'static str, marker: &'static str) -> Self {
        self.conflict = Some(text);
        self.conflict_marker = Some(marker);
        self
    }
}

pub const ARTICLE_CREATE: Messages =
    Messages::new("Article added.", "Adding the article failed.");
pub const ARTICLE_UPDATE: Messages =
    Messages::new("Article updated.", "Updating the article failed.")
        .not_found("The article was not found.");
pub const ARTICLE_DELETE: Messages =
    Messages::new("Article deleted.", "Deleting the article failed.")
        .not_found("The article was not found.");

pub const PRODUCTION_CREATE: Messages = Messages::new(
    "A new production was added.",
    "Creating the production failed.",
);

pub const ALLOCATION_CREATE: Messages = Messages::new(
    "Article added to the production.",
    "Adding the article to the production failed.",
);
pub const ALLOCATION_UPDATE: Messages = Messages::new(
    "Production article updated.",
    "Updating the production article failed.",
)
.not_found("The production article was not found.");
pub const ALLOCATION_DELETE: Messages = Messages::new(
    "Production article deleted.",
    "Deleting the production article failed.",
)
.not_found("The production article was not found.");

pub const WORKFORCE_CREATE: Messages =
    Messages::new("Details added.", "Adding the details failed.").conflict(
        "These details cannot be created again. Please edit them instead.",
        "déjà créé",
    );
pub const WORKFORCE_UPDATE: Messages =
    Messages::new("Details updated.", "Updating the details failed.")
        .not_found("The details were not found.");
pub const WORKFORCE_DELETE: Messages =
    Messages::new("Details deleted.", "An error occurred while deleting.")
        .not_found("The details were not found.");

/// List fetch failure texts
pub const ARTICLES_FETCH_FAILED: &str = "Could not load the articles.";
pub const ARTICLE_NAMES_FETCH_FAILED: &str = "Could not load the article names.";
pub const PRODUCTIONS_FETCH_FAILED: &str = "Could not load the productions.";
pub const ALLOCATIONS_FETCH_FAILED: &str = "Could not load the production articles.";
pub const WORKFORCE_FETCH_FAILED: &str = "Could not load the workforce details.";

/// Await a mutation and turn its result into an outcome plus one notification.
///
/// Validation failures are returned without a notification; the caller shows them
/// next to the offending fields.
pub async fn mutate<Fut>(
    notifier: &NotificationService,
    messages: &Messages,
    call: Fut,
) -> MutationOutcome
where
    Fut: Future<Output = SfResult<()>>,
{
    match call.await {
        Ok(()) => {
            notifier.success(TITLE_SUCCESS, messages.success);
            MutationOutcome::Completed
        }
        Err(SfError::Validation(errors)) => MutationOutcome::Invalid(errors),
        Err(err) => {
            let kind = FailureKind::classify(&err, messages.conflict_marker);
            let message = report(notifier, messages, kind, &err);
            debug!(kind = ?kind, message = %message, "mutation failed");
            MutationOutcome::Failed { kind, message }
        }
    }
}

fn report(
    notifier: &NotificationService,
    messages: &Messages,
    kind: FailureKind,
    err: &SfError,
) -> String {
    match kind {
        FailureKind::NotFound => {
            let text = messages.not_found.unwrap_or(messages.failure);
            notifier.error(TITLE_NOT_FOUND, text);
            text.to_string()
        }
        FailureKind::Conflict => {
            let text = messages.conflict.unwrap_or(ALREADY_EXISTS);
            notifier.warning(TITLE_EXISTING, text);
            text.to_string()
        }
        FailureKind::Server => {
            notifier.error(TITLE_SERVER, SERVER_ERROR);
            SERVER_ERROR.to_string()
        }
        FailureKind::Other => {
            let text = err
                .server_message()
                .filter(|m| !m.is_empty())
                .unwrap_or(messages.failure);
            notifier.error(TITLE_ERROR, text);
            text.to_string()
        }
    }
}
