//! The API client trait

use async_trait::async_trait;
use sf_core::error::SfResult;
use sf_core::traits::Id;
use sf_models::{
    Article, ArticleName, ArticlePayload, NewProduction, NewProductionArticle, Production,
    ProductionArticle, UpdateProductionArticle, WorkforceDetail, WorkforcePayload,
};

/// One method per REST endpoint consumed by the dashboard.
///
/// Mutations return `()`: the client never trusts a mutation response as the new
/// state of a list, it re-fetches or reconciles locally instead.
#[async_trait]
pub trait ApiClient: Send + Sync {
    // Articles
    async fn create_article(&self, payload: &ArticlePayload) -> SfResult<()>;
    async fn list_articles(&self) -> SfResult<Vec<Article>>;
    async fn list_article_names(&self) -> SfResult<Vec<ArticleName>>;
    async fn update_article(&self, id: Id, payload: &ArticlePayload) -> SfResult<()>;
    async fn delete_article(&self, id: Id) -> SfResult<()>;

    // Productions
    async fn create_production(&self, payload: &NewProduction) -> SfResult<()>;
    async fn list_productions(&self) -> SfResult<Vec<Production>>;

    // Production-article allocations
    async fn create_production_article(&self, payload: &NewProductionArticle) -> SfResult<()>;
    async fn list_production_articles(&self, production_id: Id)
        -> SfResult<Vec<ProductionArticle>>;
    async fn update_production_article(&self, payload: &UpdateProductionArticle) -> SfResult<()>;
    async fn delete_production_article(&self, id: Id) -> SfResult<()>;

    // Workforce details
    async fn create_workforce_detail(&self, payload: &WorkforcePayload) -> SfResult<()>;
    async fn list_workforce_details(&self, production_id: Id) -> SfResult<Vec<WorkforceDetail>>;
    async fn update_workforce_detail(&self, id: Id, payload: &WorkforcePayload) -> SfResult<()>;
    async fn delete_workforce_detail(&self, id: Id) -> SfResult<()>;
}
