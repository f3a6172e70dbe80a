//! Workforce details of one production

use sf_client::ApiClient;
use sf_core::traits::{Id, Resource};
use sf_models::{WorkforceDetail, WorkforcePayload};
use sf_notifications::NotificationService;

use crate::actions::Actions;
use crate::feedback::{self, mutate};
use crate::outcome::{FailureKind, MutationOutcome};
use crate::retry::RetryPolicy;
use crate::view::{ListView, RefreshStatus};

pub struct WorkforceView<C: ?Sized> {
    production_id: Id,
    actions: Actions<C>,
    notifier: NotificationService,
    list: ListView<WorkforceDetail>,
}

impl<C: ApiClient + ?Sized> WorkforceView<C> {
    pub fn new(
        production_id: Id,
        actions: Actions<C>,
        policy: RetryPolicy,
        notifier: NotificationService,
    ) -> Self {
        let list = ListView::new(
            WorkforceDetail::NAME,
            policy,
            notifier.clone(),
            feedback::WORKFORCE_FETCH_FAILED,
        );
        Self {
            production_id,
            actions,
            notifier,
            list,
        }
    }

    pub fn production_id(&self) -> Id {
        self.production_id
    }

    pub fn list(&self) -> &ListView<WorkforceDetail> {
        &self.list
    }

    pub async fn refresh(&self) -> RefreshStatus {
        let production_id = self.production_id;
        self.list
            .refresh(|| self.actions.list_workforce_details(production_id))
            .await
    }

    /// At most one detail per production; a second create ends as a conflict
    pub async fn create(&self, payload: &WorkforcePayload) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::WORKFORCE_CREATE,
            self.actions.create_workforce_detail(payload),
        )
        .await;
        if outcome.is_completed() {
            self.refresh().await;
        }
        outcome
    }

    pub async fn update(&self, id: Id, payload: &WorkforcePayload) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::WORKFORCE_UPDATE,
            self.actions.update_workforce_detail(id, payload),
        )
        .await;
        if outcome.is_completed() {
            self.refresh().await;
        }
        outcome
    }

    pub async fn delete(&self, id: Id) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::WORKFORCE_DELETE,
            self.actions.delete_workforce_detail(id),
        )
        .await;
        if outcome.is_completed() || outcome.failure_kind() == Some(FailureKind::NotFound) {
            self.list.remove_local(id);
        }
        outcome
    }

    /// Sum of headcount × price per head over the displayed rows
    pub fn total(&self) -> f64 {
        self.list.total()
    }
}
