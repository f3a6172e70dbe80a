//! reqwest-backed implementation of [`ApiClient`]

use async_trait::async_trait;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sf_core::config::{ClientConfig, ProductionArticleKey};
use sf_core::error::{SfError, SfResult};
use sf_core::traits::Id;
use sf_models::{
    Article, ArticleName, ArticlePayload, NewProduction, NewProductionArticle, Production,
    ProductionArticle, ProductionArticleList, UpdateProductionArticle, WorkforceDetail,
    WorkforcePayload,
};
use tracing::{debug, warn};
use url::Url;

use crate::client::ApiClient;
use crate::endpoints;

/// Error body returned by the backend; only `message` is surfaced
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client bound to one base URL
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: Url,
    production_article_key: ProductionArticleKey,
}

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> SfResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SfError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            production_article_key: config.production_article_key,
        })
    }

    fn url(&self, path: &str) -> SfResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| SfError::Config(format!("invalid endpoint path {}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SfResult<T> {
        let response = self.dispatch::<()>(Method::GET, path, None).await?;
        let bytes = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&bytes).map_err(|e| SfError::Decode(e.to_string()))
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> SfResult<()> {
        self.dispatch(method, path, body).await.map(|_| ())
    }

    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> SfResult<Response> {
        let url = self.url(path)?;
        debug!(method = %method, url = %url, "sending request");

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport)?;
        check_status(&method, path, response).await
    }
}

fn parse_base_url(raw: &str) -> SfResult<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).map_err(|e| SfError::Config(format!("invalid base URL {}: {}", raw, e)))
}

fn transport(err: reqwest::Error) -> SfError {
    SfError::Transport(err.to_string())
}

async fn check_status(method: &Method, path: &str, response: Response) -> SfResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // The body is best-effort; a failure to read it must not hide the status.
    let message = response
        .text()
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
        .and_then(|body| body.message);

    warn!(
        method = %method,
        path,
        status = status.as_u16(),
        message = message.as_deref().unwrap_or(""),
        "request failed"
    );
    Err(SfError::from_status(status.as_u16(), message))
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn create_article(&self, payload: &ArticlePayload) -> SfResult<()> {
        self.send(Method::POST, endpoints::CREATE_ARTICLE, Some(payload))
            .await
    }

    async fn list_articles(&self) -> SfResult<Vec<Article>> {
        self.get_json(endpoints::LIST_ARTICLES).await
    }

    async fn list_article_names(&self) -> SfResult<Vec<ArticleName>> {
        self.get_json(endpoints::LIST_ARTICLE_NAMES).await
    }

    async fn update_article(&self, id: Id, payload: &ArticlePayload) -> SfResult<()> {
        self.send(Method::PUT, &endpoints::update_article(id), Some(payload))
            .await
    }

    async fn delete_article(&self, id: Id) -> SfResult<()> {
        self.send::<()>(Method::DELETE, &endpoints::delete_article(id), None)
            .await
    }

    async fn create_production(&self, payload: &NewProduction) -> SfResult<()> {
        self.send(Method::POST, endpoints::CREATE_PRODUCTION, Some(payload))
            .await
    }

    async fn list_productions(&self) -> SfResult<Vec<Production>> {
        self.get_json(endpoints::LIST_PRODUCTIONS).await
    }

    async fn create_production_article(&self, payload: &NewProductionArticle) -> SfResult<()> {
        self.send(Method::POST, endpoints::CREATE_PRODUCTION_ARTICLE, Some(payload))
            .await
    }

    async fn list_production_articles(
        &self,
        production_id: Id,
    ) -> SfResult<Vec<ProductionArticle>> {
        let list: ProductionArticleList = self
            .get_json(&endpoints::list_production_articles(production_id))
            .await?;
        Ok(list.items)
    }

    async fn update_production_article(&self, payload: &UpdateProductionArticle) -> SfResult<()> {
        let key = match self.production_article_key {
            ProductionArticleKey::AllocationId => payload.id,
            ProductionArticleKey::ArticleId => payload.article_id,
        };
        self.send(
            Method::PUT,
            &endpoints::update_production_article(key),
            Some(payload),
        )
        .await
    }

    async fn delete_production_article(&self, id: Id) -> SfResult<()> {
        self.send::<()>(
            Method::DELETE,
            &endpoints::delete_production_article(id),
            None,
        )
        .await
    }

    async fn create_workforce_detail(&self, payload: &WorkforcePayload) -> SfResult<()> {
        self.send(Method::POST, endpoints::CREATE_WORKFORCE_DETAIL, Some(payload))
            .await
    }

    async fn list_workforce_details(&self, production_id: Id) -> SfResult<Vec<WorkforceDetail>> {
        self.get_json(&endpoints::list_workforce_details(production_id))
            .await
    }

    async fn update_workforce_detail(&self, id: Id, payload: &WorkforcePayload) -> SfResult<()> {
        self.send(
            Method::PUT,
            &endpoints::update_workforce_detail(id),
            Some(payload),
        )
        .await
    }

    async fn delete_workforce_detail(&self, id: Id) -> SfResult<()> {
        self.send::<()>(
            Method::DELETE,
            &endpoints::delete_workforce_detail(id),
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = parse_base_url("http://localhost:8000/backend").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/backend/");
        assert_eq!(
            url.join(endpoints::LIST_ARTICLES).unwrap().as_str(),
            "http://localhost:8000/backend/api/liste-articles"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(parse_base_url("not a url"), Err(SfError::Config(_))));
    }
}
