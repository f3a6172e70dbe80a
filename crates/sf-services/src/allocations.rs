//! Production-article allocations of one production
//!
//! Create and update re-fetch the list. Delete filters the local list instead of
//! going back to the server.

use sf_client::ApiClient;
use sf_core::traits::{Id, Resource};
use sf_models::{ArticleName, NewProductionArticle, ProductionArticle, UpdateProductionArticle};
use sf_notifications::NotificationService;

use crate::actions::Actions;
use crate::feedback::{self, mutate};
use crate::outcome::{FailureKind, MutationOutcome};
use crate::retry::RetryPolicy;
use crate::view::{ListView, RefreshStatus};

pub struct AllocationsView<C: ?Sized> {
    production_id: Id,
    actions: Actions<C>,
    notifier: NotificationService,
    list: ListView<ProductionArticle>,
    /// Choices for the article select of the allocation form
    article_names: ListView<ArticleName>,
}

impl<C: ApiClient + ?Sized> AllocationsView<C> {
    pub fn new(
        production_id: Id,
        actions: Actions<C>,
        policy: RetryPolicy,
        notifier: NotificationService,
    ) -> Self {
        let list = ListView::new(
            ProductionArticle::NAME,
            policy,
            notifier.clone(),
            feedback::ALLOCATIONS_FETCH_FAILED,
        );
        let article_names = ListView::new(
            ArticleName::NAME,
            policy,
            notifier.clone(),
            feedback::ARTICLE_NAMES_FETCH_FAILED,
        );
        Self {
            production_id,
            actions,
            notifier,
            list,
            article_names,
        }
    }

    pub fn production_id(&self) -> Id {
        self.production_id
    }

    pub fn list(&self) -> &ListView<ProductionArticle> {
        &self.list
    }

    pub fn article_names(&self) -> &ListView<ArticleName> {
        &self.article_names
    }

    pub async fn refresh(&self) -> RefreshStatus {
        let production_id = self.production_id;
        self.list
            .refresh(|| self.actions.list_production_articles(production_id))
            .await
    }

    pub async fn refresh_article_names(&self) -> RefreshStatus {
        self.article_names
            .refresh(|| self.actions.list_article_names())
            .await
    }

    /// Name of an article from the last loaded names list
    pub fn article_name(&self, article_id: Id) -> Option<String> {
        self.article_names.find(article_id).map(|a| a.name)
    }

    pub async fn create(&self, payload: &NewProductionArticle) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::ALLOCATION_CREATE,
            self.actions.create_production_article(payload),
        )
        .await;
        if outcome.is_completed() {
            self.refresh().await;
        }
        outcome
    }

    pub async fn update(&self, payload: &UpdateProductionArticle) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::ALLOCATION_UPDATE,
            self.actions.update_production_article(payload),
        )
        .await;
        if outcome.is_completed() {
            self.refresh().await;
        }
        outcome
    }

    /// A not-found answer also drops the row: it is gone on the server either way.
    pub async fn delete(&self, id: Id) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::ALLOCATION_DELETE,
            self.actions.delete_production_article(id),
        )
        .await;
        if outcome.is_completed() || outcome.failure_kind() == Some(FailureKind::NotFound) {
            self.list.remove_local(id);
        }
        outcome
    }

    /// Sum of quantity × unit price over the displayed rows
    pub fn total(&self) -> f64 {
        self.list.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use sf_core::traits::Costed;
    use std::sync::Arc;

    fn view(backend: &Arc<FakeBackend>, production_id: Id) -> AllocationsView<FakeBackend> {
        AllocationsView::new(
            production_id,
            Actions::new(Arc::clone(backend)),
            RetryPolicy::default(),
            NotificationService::silent(),
        )
    }

    #[tokio::test]
    async fn test_update_then_refresh_shows_new_factors() {
        let backend = Arc::new(FakeBackend::new());
        let production = backend.seed_production("2024-03-05", 100.0, "Run A");
        let article = backend.seed_article("Bolt", 50);
        let allocation = backend.seed_allocation(production, article, 1.0, 2.0);
        let view = view(&backend, production);
        view.refresh().await;

        let outcome = view
            .update(&UpdateProductionArticle {
                id: allocation,
                article_id: article,
                unit_price: 3.5,
                quantity: 4.0,
            })
            .await;
        assert!(outcome.is_completed());

        let row = view.list().find(allocation).unwrap();
        assert_eq!(row.unit_price, 3.5);
        assert_eq!(row.quantity, 4.0);
        assert_eq!(row.amount(), 14.0);
        assert_eq!(view.total(), 14.0);
        assert_eq!(view.list().items(), backend.allocations(production));
    }

    #[tokio::test]
    async fn test_delete_filters_locally() {
        let backend = Arc::new(FakeBackend::new());
        let production = backend.seed_production("2024-03-05", 100.0, "Run A");
        let article = backend.seed_article("Bolt", 50);
        let first = backend.seed_allocation(production, article, 1.0, 2.0);
        let second = backend.seed_allocation(production, article, 3.0, 4.0);
        let view = view(&backend, production);
        view.refresh().await;
        let kept = view.list().find(second).unwrap();

        assert!(view.delete(first).await.is_completed());

        assert_eq!(view.list().items(), vec![kept]);
        assert_eq!(backend.calls("list_production_articles"), 1);
    }

    #[tokio::test]
    async fn test_create_resolves_names_and_refreshes() {
        let backend = Arc::new(FakeBackend::new());
        let production = backend.seed_production("2024-03-05", 100.0, "Run A");
        let article = backend.seed_article("Washer", 500);
        let view = view(&backend, production);

        assert_eq!(view.refresh_article_names().await, RefreshStatus::Updated);
        let name = view.article_name(article).unwrap();
        assert_eq!(name, "Washer");

        let outcome = view
            .create(&NewProductionArticle {
                production_id: production,
                article_id: article,
                article_name: name,
                quantity: 10.0,
                unit_price: 0.25,
            })
            .await;
        assert!(outcome.is_completed());
        assert_eq!(view.total(), 2.5);
        assert_eq!(view.list().items()[0].article_name, "Washer");
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_row() {
        let backend = Arc::new(FakeBackend::new());
        let production = backend.seed_production("2024-03-05", 100.0, "Run A");
        let article = backend.seed_article("Bolt", 50);
        let allocation = backend.seed_allocation(production, article, 1.0, 2.0);
        let view = view(&backend, production);
        view.refresh().await;

        backend.fail_next("delete_production_article", 500);
        let outcome = view.delete(allocation).await;

        assert_eq!(outcome.failure_kind(), Some(FailureKind::Server));
        assert_eq!(view.list().items().len(), 1);
    }
}
