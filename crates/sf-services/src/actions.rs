//! Action layer
//!
//! One async wrapper per API call. Write payloads are checked against the model
//! invariants before anything is sent; every failure is logged here and then returned
//! unchanged to the caller.

use std::sync::Arc;

use sf_client::ApiClient;
use sf_core::error::{SfError, SfResult};
use sf_core::traits::{Id, Resource};
use sf_models::{
    Article, ArticleName, ArticlePayload, NewProduction, NewProductionArticle, Production,
    ProductionArticle, UpdateProductionArticle, WorkforceDetail, WorkforcePayload,
};
use tracing::{debug, error};
use validator::Validate;

pub struct Actions<C: ?Sized> {
    client: Arc<C>,
}

impl<C: ?Sized> Clone for Actions<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

fn validated<P: Validate>(resource: &'static str, payload: &P) -> SfResult<()> {
    payload.validate().map_err(|errors| {
        let errors = sf_core::ValidationErrors::from(errors);
        debug!(resource, errors = %errors, "payload rejected before sending");
        SfError::Validation(errors)
    })
}

fn logged<T>(resource: &'static str, operation: &'static str, result: SfResult<T>) -> SfResult<T> {
    if let Err(err) = &result {
        error!(
            resource,
            operation,
            code = err.error_code(),
            status = err.status_code(),
            error = %err,
            "action failed"
        );
    }
    result
}

impl<C: ApiClient + ?Sized> Actions<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    // Articles

    pub async fn create_article(&self, payload: &ArticlePayload) -> SfResult<()> {
        validated(Article::NAME, payload)?;
        logged(Article::NAME, "create", self.client.create_article(payload).await)
    }

    pub async fn list_articles(&self) -> SfResult<Vec<Article>> {
        logged(Article::NAME, "list", self.client.list_articles().await)
    }

    pub async fn list_article_names(&self) -> SfResult<Vec<ArticleName>> {
        logged(ArticleName::NAME, "list", self.client.list_article_names().await)
    }

    pub async fn update_article(&self, id: Id, payload: &ArticlePayload) -> SfResult<()> {
        validated(Article::NAME, payload)?;
        logged(
            Article::NAME,
            "update",
            self.client.update_article(id, payload).await,
        )
    }

    pub async fn delete_article(&self, id: Id) -> SfResult<()> {
        logged(Article::NAME, "delete", self.client.delete_article(id).await)
    }

    // Productions

    pub async fn create_production(&self, payload: &NewProduction) -> SfResult<()> {
        validated(Production::NAME, payload)?;
        logged(
            Production::NAME,
            "create",
            self.client.create_production(payload).await,
        )
    }

    pub async fn list_productions(&self) -> SfResult<Vec<Production>> {
        logged(Production::NAME, "list", self.client.list_productions().await)
    }

    // Production-article allocations

    pub async fn create_production_article(&self, payload: &NewProductionArticle) -> SfResult<()> {
        validated(ProductionArticle::NAME, payload)?;
        logged(
            ProductionArticle::NAME,
            "create",
            self.client.create_production_article(payload).await,
        )
    }

    pub async fn list_production_articles(
        &self,
        production_id: Id,
    ) -> SfResult<Vec<ProductionArticle>> {
        logged(
            ProductionArticle::NAME,
            "list",
            self.client.list_production_articles(production_id).await,
        )
    }

    pub async fn update_production_article(
        &self,
        payload: &UpdateProductionArticle,
    ) -> SfResult<()> {
        validated(ProductionArticle::NAME, payload)?;
        logged(
            ProductionArticle::NAME,
            "update",
            self.client.update_production_article(payload).await,
        )
    }

    pub async fn delete_production_article(&self, id: Id) -> SfResult<()> {
        logged(
            ProductionArticle::NAME,
            "delete",
            self.client.delete_production_article(id).await,
        )
    }

    // Workforce details

    pub async fn create_workforce_detail(&self, payload: &WorkforcePayload) -> SfResult<()> {
        validated(WorkforceDetail::NAME, payload)?;
        logged(
            WorkforceDetail::NAME,
            "create",
            self.client.create_workforce_detail(payload).await,
        )
    }

    pub async fn list_workforce_details(&self, production_id: Id) -> SfResult<Vec<WorkforceDetail>> {
        logged(
            WorkforceDetail::NAME,
            "list",
            self.client.list_workforce_details(production_id).await,
        )
    }

    pub async fn update_workforce_detail(&self, id: Id, payload: &WorkforcePayload) -> SfResult<()> {
        validated(WorkforceDetail::NAME, payload)?;
        logged(
            WorkforceDetail::NAME,
            "update",
            self.client.update_workforce_detail(id, payload).await,
        )
    }

    pub async fn delete_workforce_detail(&self, id: Id) -> SfResult<()> {
        logged(
            WorkforceDetail::NAME,
            "delete",
            self.client.delete_workforce_detail(id).await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Api {}

        #[async_trait]
        impl ApiClient for Api {
            async fn create_article(&self, payload: &ArticlePayload) -> SfResult<()>;
            async fn list_articles(&self) -> SfResult<Vec<Article>>;
            async fn list_article_names(&self) -> SfResult<Vec<ArticleName>>;
            async fn update_article(&self, id: Id, payload: &ArticlePayload) -> SfResult<()>;
            async fn delete_article(&self, id: Id) -> SfResult<()>;
            async fn create_production(&self, payload: &NewProduction) -> SfResult<()>;
            async fn list_productions(&self) -> SfResult<Vec<Production>>;
            async fn create_production_article(&self, payload: &NewProductionArticle) -> SfResult<()>;
            async fn list_production_articles(&self, production_id: Id) -> SfResult<Vec<ProductionArticle>>;
            async fn update_production_article(&self, payload: &UpdateProductionArticle) -> SfResult<()>;
            async fn delete_production_article(&self, id: Id) -> SfResult<()>;
            async fn create_workforce_detail(&self, payload: &WorkforcePayload) -> SfResult<()>;
            async fn list_workforce_details(&self, production_id: Id) -> SfResult<Vec<WorkforceDetail>>;
            async fn update_workforce_detail(&self, id: Id, payload: &WorkforcePayload) -> SfResult<()>;
            async fn delete_workforce_detail(&self, id: Id) -> SfResult<()>;
        }
    }

    #[tokio::test]
    async fn test_valid_payload_is_forwarded() {
        let mut api = MockApi::new();
        api.expect_create_article()
            .withf(|payload| payload.name == "Bolt" && payload.quantity == 10)
            .times(1)
            .returning(|_| Ok(()));

        let actions = Actions::new(Arc::new(api));
        actions
            .create_article(&ArticlePayload::new("Bolt", 10))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_client() {
        let mut api = MockApi::new();
        api.expect_create_workforce_detail().times(0);

        let actions = Actions::new(Arc::new(api));
        let err = actions
            .create_workforce_detail(&WorkforcePayload {
                production_id: 1,
                worker_count: -2,
                price_per_head: 10.0,
            })
            .await
            .unwrap_err();

        match err {
            SfError::Validation(errors) => assert_eq!(errors.errors.len(), 1),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_errors_propagate_unchanged() {
        let mut api = MockApi::new();
        api.expect_delete_production_article()
            .with(mockall::predicate::eq(8))
            .times(1)
            .returning(|_| Err(SfError::from_status(404, Some("gone".into()))));
        api.expect_list_productions()
            .times(1)
            .returning(|| Err(SfError::from_status(429, None)));

        let actions = Actions::new(Arc::new(api));

        let err = actions.delete_production_article(8).await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.server_message(), Some("gone"));

        assert!(actions.list_productions().await.unwrap_err().is_rate_limited());
    }

    #[tokio::test]
    async fn test_list_passes_production_id() {
        let mut api = MockApi::new();
        api.expect_list_workforce_details()
            .with(mockall::predicate::eq(3))
            .returning(|production_id| {
                Ok(vec![WorkforceDetail {
                    id: 5,
                    production_id,
                    worker_count: 2,
                    price_per_head: 10.0,
                }])
            });

        let details = Actions::new(Arc::new(api))
            .list_workforce_details(3)
            .await
            .unwrap();
        assert_eq!(details[0].production_id, 3);
    }
}
