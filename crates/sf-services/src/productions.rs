//! Productions view

use sf_client::ApiClient;
use sf_core::traits::Resource;
use sf_models::{NewProduction, Production};
use sf_notifications::NotificationService;

use crate::actions::Actions;
use crate::feedback::{self, mutate};
use crate::outcome::MutationOutcome;
use crate::retry::RetryPolicy;
use crate::view::{ListView, RefreshStatus};

pub struct ProductionsView<C: ?Sized> {
    actions: Actions<C>,
    notifier: NotificationService,
    list: ListView<Production>,
}

impl<C: ApiClient + ?Sized> ProductionsView<C> {
    pub fn new(actions: Actions<C>, policy: RetryPolicy, notifier: NotificationService) -> Self {
        let list = ListView::new(
            Production::NAME,
            policy,
            notifier.clone(),
            feedback::PRODUCTIONS_FETCH_FAILED,
        );
        Self {
            actions,
            notifier,
            list,
        }
    }

    pub fn list(&self) -> &ListView<Production> {
        &self.list
    }

    pub async fn refresh(&self) -> RefreshStatus {
        self.list.refresh(|| self.actions.list_productions()).await
    }

    pub async fn create(&self, payload: &NewProduction) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::PRODUCTION_CREATE,
            self.actions.create_production(payload),
        )
        .await;
        if outcome.is_completed() {
            self.refresh().await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use std::time::Duration;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn view(backend: &Arc<FakeBackend>) -> ProductionsView<FakeBackend> {
        ProductionsView::new(
            Actions::new(Arc::clone(backend)),
            RetryPolicy::new(3, Duration::from_millis(1000)),
            NotificationService::silent(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_refreshes_list() {
        let backend = Arc::new(FakeBackend::new());
        let view = view(&backend);

        let outcome = view
            .create(&NewProduction {
                date: ymd(2024, 3, 5),
                quantity: 250.0,
                title: "Run A".into(),
            })
            .await;

        assert!(outcome.is_completed());
        let items = view.list().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Run A");
        assert_eq!(items[0].calendar_date(), Some(ymd(2024, 3, 5)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_four_rate_limits_end_in_error() {
        let backend = Arc::new(FakeBackend::new());
        for _ in 0..4 {
            backend.fail_next("list_productions", 429);
        }
        let view = view(&backend);
        let start = tokio::time::Instant::now();

        assert_eq!(view.refresh().await, RefreshStatus::Failed);
        assert_eq!(backend.calls("list_productions"), 4);
        assert!(start.elapsed() >= Duration::from_millis(7000));
        assert!(view.list().error().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_rate_limits_then_success() {
        let backend = Arc::new(FakeBackend::new());
        backend.seed_production("2024-03-05", 10.0, "Run A");
        for _ in 0..3 {
            backend.fail_next("list_productions", 429);
        }
        let view = view(&backend);

        assert_eq!(view.refresh().await, RefreshStatus::Updated);
        assert_eq!(backend.calls("list_productions"), 4);
        assert_eq!(view.list().items().len(), 1);
        assert_eq!(view.list().error(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_fetched_once() {
        let backend = Arc::new(FakeBackend::new());
        backend.fail_next("list_productions", 500);
        let view = view(&backend);
        let start = tokio::time::Instant::now();

        assert_eq!(view.refresh().await, RefreshStatus::Failed);
        assert_eq!(backend.calls("list_productions"), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
