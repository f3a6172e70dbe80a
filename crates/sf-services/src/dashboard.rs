//! Entry point tying one API client to every view

use std::sync::Arc;

use sf_client::ApiClient;
use sf_core::config::RetryConfig;
use sf_core::traits::{total_amount, Id, Resource};
use sf_models::{ArticleName, ProductionArticle, WorkforceDetail};
use sf_notifications::NotificationService;

use crate::actions::Actions;
use crate::allocations::AllocationsView;
use crate::articles::ArticlesView;
use crate::feedback;
use crate::productions::ProductionsView;
use crate::retry::RetryPolicy;
use crate::view::{ListView, RefreshStatus};
use crate::workforce::WorkforceView;

pub struct Dashboard<C: ?Sized> {
    actions: Actions<C>,
    policy: RetryPolicy,
    notifier: NotificationService,
}

impl<C: ApiClient + ?Sized> Dashboard<C> {
    pub fn new(client: Arc<C>, retry: RetryConfig, notifier: NotificationService) -> Self {
        Self {
            actions: Actions::new(client),
            policy: retry.into(),
            notifier,
        }
    }

    pub fn actions(&self) -> &Actions<C> {
        &self.actions
    }

    pub fn articles(&self) -> ArticlesView<C> {
        ArticlesView::new(self.actions.clone(), self.policy, self.notifier.clone())
    }

    /// Id and name of every article; refresh with [`Actions::list_article_names`]
    pub fn article_names(&self) -> ListView<ArticleName> {
        ListView::new(
            ArticleName::NAME,
            self.policy,
            self.notifier.clone(),
            feedback::ARTICLE_NAMES_FETCH_FAILED,
        )
    }

    pub fn productions(&self) -> ProductionsView<C> {
        ProductionsView::new(self.actions.clone(), self.policy, self.notifier.clone())
    }

    pub fn allocations(&self, production_id: Id) -> AllocationsView<C> {
        AllocationsView::new(
            production_id,
            self.actions.clone(),
            self.policy,
            self.notifier.clone(),
        )
    }

    pub fn workforce(&self, production_id: Id) -> WorkforceView<C> {
        WorkforceView::new(
            production_id,
            self.actions.clone(),
            self.policy,
            self.notifier.clone(),
        )
    }

    /// Load both cost lists of a production. `None` when either could not be loaded.
    pub async fn production_summary(&self, production_id: Id) -> Option<ProductionSummary> {
        let allocations = self.allocations(production_id);
        let workforce = self.workforce(production_id);

        let (a, w) = tokio::join!(allocations.refresh(), workforce.refresh());
        if a != RefreshStatus::Updated || w != RefreshStatus::Updated {
            return None;
        }

        Some(ProductionSummary {
            production_id,
            allocations: allocations.list().items(),
            workforce: workforce.list().items(),
        })
    }
}

/// Cost lines of one production. Amounts are derived from the factors on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSummary {
    pub production_id: Id,
    pub allocations: Vec<ProductionArticle>,
    pub workforce: Vec<WorkforceDetail>,
}

impl ProductionSummary {
    pub fn materials_total(&self) -> f64 {
        total_amount(&self.allocations)
    }

    pub fn workforce_total(&self) -> f64 {
        total_amount(&self.workforce)
    }

    pub fn grand_total(&self) -> f64 {
        self.materials_total() + self.workforce_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    #[tokio::test]
    async fn test_summary_totals() {
        let backend = Arc::new(FakeBackend::new());
        let production = backend.seed_production("2024-03-05", 100.0, "Run A");
        let bolt = backend.seed_article("Bolt", 50);
        let nut = backend.seed_article("Nut", 50);
        backend.seed_allocation(production, bolt, 4.0, 3.5);
        backend.seed_allocation(production, nut, 10.0, 0.5);
        backend.seed_workforce(production, 3, 50.0);

        let dashboard = Dashboard::new(
            Arc::clone(&backend),
            RetryConfig::default(),
            NotificationService::silent(),
        );
        let summary = dashboard.production_summary(production).await.unwrap();

        assert_eq!(summary.materials_total(), 19.0);
        assert_eq!(summary.workforce_total(), 150.0);
        assert_eq!(summary.grand_total(), 169.0);
    }

    #[tokio::test]
    async fn test_summary_unavailable_when_a_list_fails() {
        let backend = Arc::new(FakeBackend::new());
        let production = backend.seed_production("2024-03-05", 100.0, "Run A");
        backend.fail_next("list_workforce_details", 500);

        let dashboard = Dashboard::new(
            Arc::clone(&backend),
            RetryConfig::default(),
            NotificationService::silent(),
        );
        assert!(dashboard.production_summary(production).await.is_none());
    }
}
