//! Articles view
//!
//! Every successful mutation is followed by a full re-fetch of the list.

use sf_client::ApiClient;
use sf_core::traits::{Id, Resource};
use sf_models::{Article, ArticlePayload};
use sf_notifications::NotificationService;

use crate::actions::Actions;
use crate::feedback::{self, mutate};
use crate::outcome::MutationOutcome;
use crate::retry::RetryPolicy;
use crate::view::{ListView, RefreshStatus};

pub struct ArticlesView<C: ?Sized> {
    actions: Actions<C>,
    notifier: NotificationService,
    list: ListView<Article>,
}

impl<C: ApiClient + ?Sized> ArticlesView<C> {
    pub fn new(actions: Actions<C>, policy: RetryPolicy, notifier: NotificationService) -> Self {
        let list = ListView::new(
            Article::NAME,
            policy,
            notifier.clone(),
            feedback::ARTICLES_FETCH_FAILED,
        );
        Self {
            actions,
            notifier,
            list,
        }
    }

    pub fn list(&self) -> &ListView<Article> {
        &self.list
    }

    pub async fn refresh(&self) -> RefreshStatus {
        self.list.refresh(|| self.actions.list_articles()).await
    }

    pub async fn create(&self, payload: &ArticlePayload) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::ARTICLE_CREATE,
            self.actions.create_article(payload),
        )
        .await;
        self.after(outcome).await
    }

    pub async fn update(&self, id: Id, payload: &ArticlePayload) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::ARTICLE_UPDATE,
            self.actions.update_article(id, payload),
        )
        .await;
        self.after(outcome).await
    }

    pub async fn delete(&self, id: Id) -> MutationOutcome {
        let outcome = mutate(
            &self.notifier,
            &feedback::ARTICLE_DELETE,
            self.actions.delete_article(id),
        )
        .await;
        self.after(outcome).await
    }

    async fn after(&self, outcome: MutationOutcome) -> MutationOutcome {
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
    use sf_core::config::NotificationConfig;
    use sf_notifications::{Level, ToastQueue};
    use std::sync::Arc;

    fn setup(backend: &Arc<FakeBackend>) -> (ArticlesView<FakeBackend>, ToastQueue) {
        let queue = ToastQueue::new();
        let notifier = NotificationService::new(queue.dispatcher(), &NotificationConfig::default());
        let view = ArticlesView::new(
            Actions::new(Arc::clone(backend)),
            RetryPolicy::default(),
            notifier,
        );
        (view, queue)
    }

    #[tokio::test]
    async fn test_create_bolt_then_list_has_exactly_it() {
        let backend = Arc::new(FakeBackend::new());
        let (view, queue) = setup(&backend);

        let outcome = view.create(&ArticlePayload::new("Bolt", 10)).await;
        assert!(outcome.is_completed());

        let items = view.list().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bolt");
        assert_eq!(items[0].quantity, 10);
        assert_eq!(backend.calls("list_articles"), 1);
        assert_eq!(queue.drain()[0].level, Level::Success);
    }

    #[tokio::test]
    async fn test_list_after_update_matches_server() {
        let backend = Arc::new(FakeBackend::new());
        let bolt = backend.seed_article("Bolt", 10);
        backend.seed_article("Nut", 3);
        let (view, _queue) = setup(&backend);
        view.refresh().await;

        let outcome = view.update(bolt, &ArticlePayload::new("Bolt M8", 12)).await;
        assert!(outcome.is_completed());
        assert_eq!(view.list().items(), backend.articles());
        assert_eq!(view.list().find(bolt).unwrap().name, "Bolt M8");
    }

    #[tokio::test]
    async fn test_delete_missing_article_reports_not_found() {
        let backend = Arc::new(FakeBackend::new());
        backend.seed_article("Bolt", 10);
        let (view, queue) = setup(&backend);
        view.refresh().await;

        let outcome = view.delete(99).await;
        assert_eq!(outcome.failure_kind(), Some(crate::FailureKind::NotFound));
        assert_eq!(view.list().items().len(), 1);
        // No refresh after a failed mutation.
        assert_eq!(backend.calls("list_articles"), 1);

        let toast = queue.drain().pop().unwrap();
        assert_eq!(toast.title, feedback::TITLE_NOT_FOUND);
        assert_eq!(toast.description, "The article was not found.");
    }

    #[tokio::test]
    async fn test_invalid_article_is_not_sent() {
        let backend = Arc::new(FakeBackend::new());
        let (view, queue) = setup(&backend);

        let outcome = view.create(&ArticlePayload::new("", 5)).await;
        assert!(matches!(outcome, MutationOutcome::Invalid(_)));
        assert_eq!(backend.calls("create_article"), 0);
        assert!(queue.is_empty());
    }
}
