//! In-memory backend for exercising views without a server
//!
//! Behaves like the real API for the happy paths: ids are assigned on create, lists
//! reflect every accepted mutation, unknown ids answer 404 and a second workforce
//! detail for the same production answers 409. Failures can be scripted per operation.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use sf_client::ApiClient;
use sf_core::error::{SfError, SfResult};
use sf_core::traits::Id;
use sf_models::{
    Article, ArticleName, ArticlePayload, NewProduction, NewProductionArticle, Production,
    ProductionArticle, UpdateProductionArticle, WorkforceDetail, WorkforcePayload,
};

pub const DUPLICATE_WORKFORCE_MESSAGE: &str = "Détail déjà créé pour cette production";

#[derive(Default)]
struct Store {
    last_id: Id,
    articles: Vec<Article>,
    productions: Vec<Production>,
    allocations: Vec<ProductionArticle>,
    workforce: Vec<WorkforceDetail>,
    failures: HashMap<&'static str, VecDeque<(u16, Option<String>)>>,
    calls: HashMap<&'static str, usize>,
}

impl Store {
    fn next_id(&mut self) -> Id {
        self.last_id += 1;
        self.last_id
    }

    fn article_name(&self, article_id: Id) -> String {
        self.articles
            .iter()
            .find(|a| a.id == article_id)
            .map(|a| a.name.clone())
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct FakeBackend {
    store: Mutex<Store>,
}

fn not_found(what: &str, id: Id) -> SfError {
    SfError::from_status(404, Some(format!("{} {} not found", what, id)))
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call of `operation` fail with `status`
    pub fn fail_next(&self, operation: &'static str, status: u16) {
        self.fail_next_with(operation, status, None);
    }

    pub fn fail_next_with(&self, operation: &'static str, status: u16, message: Option<&str>) {
        self.store
            .lock()
            .failures
            .entry(operation)
            .or_default()
            .push_back((status, message.map(str::to_string)));
    }

    /// Calls received for `operation`, failed ones included
    pub fn calls(&self, operation: &str) -> usize {
        self.store.lock().calls.get(operation).copied().unwrap_or(0)
    }

    pub fn seed_article(&self, name: &str, quantity: i64) -> Id {
        let mut store = self.store.lock();
        let id = store.next_id();
        store
            .articles
            .push(ArticlePayload::new(name, quantity).into_article(id));
        id
    }

    pub fn seed_production(&self, date: &str, quantity: f64, title: &str) -> Id {
        let mut store = self.store.lock();
        let id = store.next_id();
        store.productions.push(Production {
            id,
            date: date.to_string(),
            quantity,
            title: title.to_string(),
        });
        id
    }

    pub fn seed_allocation(
        &self,
        production_id: Id,
        article_id: Id,
        quantity: f64,
        unit_price: f64,
    ) -> Id {
        let mut store = self.store.lock();
        let id = store.next_id();
        let article_name = store.article_name(article_id);
        store.allocations.push(ProductionArticle {
            id,
            production_id,
            article_id,
            article_name,
            quantity,
            unit_price,
        });
        id
    }

    pub fn seed_workforce(&self, production_id: Id, worker_count: i64, price_per_head: f64) -> Id {
        let id = self.store.lock().next_id();
        self.seed_workforce_with_id(id, production_id, worker_count, price_per_head)
    }

    pub fn seed_workforce_with_id(
        &self,
        id: Id,
        production_id: Id,
        worker_count: i64,
        price_per_head: f64,
    ) -> Id {
        let mut store = self.store.lock();
        store.last_id = store.last_id.max(id);
        store.workforce.push(
            WorkforcePayload {
                production_id,
                worker_count,
                price_per_head,
            }
            .into_detail(id),
        );
        id
    }

    pub fn articles(&self) -> Vec<Article> {
        self.store.lock().articles.clone()
    }

    pub fn productions(&self) -> Vec<Production> {
        self.store.lock().productions.clone()
    }

    pub fn allocations(&self, production_id: Id) -> Vec<ProductionArticle> {
        self.store
            .lock()
            .allocations
            .iter()
            .filter(|a| a.production_id == production_id)
            .cloned()
            .collect()
    }

    pub fn workforce(&self, production_id: Id) -> Vec<WorkforceDetail> {
        self.store
            .lock()
            .workforce
            .iter()
            .filter(|w| w.production_id == production_id)
            .cloned()
            .collect()
    }

    /// Count the call, then either pop a scripted failure or hand out the store
    fn enter(&self, operation: &'static str) -> SfResult<parking_lot::MutexGuard<'_, Store>> {
        let mut store = self.store.lock();
        *store.calls.entry(operation).or_default() += 1;
        if let Some((status, message)) = store
            .failures
            .get_mut(operation)
            .and_then(VecDeque::pop_front)
        {
            return Err(SfError::from_status(status, message));
        }
        Ok(store)
    }
}

#[async_trait]
impl ApiClient for FakeBackend {
    async fn create_article(&self, payload: &ArticlePayload) -> SfResult<()> {
        let mut store = self.enter("create_article")?;
        let id = store.next_id();
        store.articles.push(payload.clone().into_article(id));
        Ok(())
    }

    async fn list_articles(&self) -> SfResult<Vec<Article>> {
        Ok(self.enter("list_articles")?.articles.clone())
    }

    async fn list_article_names(&self) -> SfResult<Vec<ArticleName>> {
        let store = self.enter("list_article_names")?;
        Ok(store
            .articles
            .iter()
            .map(|a| ArticleName {
                id: a.id,
                name: a.name.clone(),
            })
            .collect())
    }

    async fn update_article(&self, id: Id, payload: &ArticlePayload) -> SfResult<()> {
        let mut store = self.enter("update_article")?;
        let article = store
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found("article", id))?;
        *article = payload.clone().into_article(id);
        Ok(())
    }

    async fn delete_article(&self, id: Id) -> SfResult<()> {
        let mut store = self.enter("delete_article")?;
        let before = store.articles.len();
        store.articles.retain(|a| a.id != id);
        if store.articles.len() == before {
            return Err(not_found("article", id));
        }
        Ok(())
    }

    async fn create_production(&self, payload: &NewProduction) -> SfResult<()> {
        let mut store = self.enter("create_production")?;
        let id = store.next_id();
        store.productions.push(Production {
            id,
            date: payload.date.format("%Y-%m-%d").to_string(),
            quantity: payload.quantity,
            title: payload.title.clone(),
        });
        Ok(())
    }

    async fn list_productions(&self) -> SfResult<Vec<Production>> {
        Ok(self.enter("list_productions")?.productions.clone())
    }

    async fn create_production_article(&self, payload: &NewProductionArticle) -> SfResult<()> {
        let mut store = self.enter("create_production_article")?;
        if !store.productions.iter().any(|p| p.id == payload.production_id) {
            return Err(not_found("production", payload.production_id));
        }
        let article_name = if payload.article_name.is_empty() {
            store.article_name(payload.article_id)
        } else {
            payload.article_name.clone()
        };
        let id = store.next_id();
        store.allocations.push(ProductionArticle {
            id,
            production_id: payload.production_id,
            article_id: payload.article_id,
            article_name,
            quantity: payload.quantity,
            unit_price: payload.unit_price,
        });
        Ok(())
    }

    async fn list_production_articles(
        &self,
        production_id: Id,
    ) -> SfResult<Vec<ProductionArticle>> {
        let store = self.enter("list_production_articles")?;
        Ok(store
            .allocations
            .iter()
            .filter(|a| a.production_id == production_id)
            .cloned()
            .collect())
    }

    async fn update_production_article(&self, payload: &UpdateProductionArticle) -> SfResult<()> {
        let mut store = self.enter("update_production_article")?;
        let article_name = store.article_name(payload.article_id);
        let allocation = store
            .allocations
            .iter_mut()
            .find(|a| a.id == payload.id)
            .ok_or_else(|| not_found("production article", payload.id))?;
        payload.apply_to(allocation);
        if !article_name.is_empty() {
            allocation.article_name = article_name;
        }
        Ok(())
    }

    async fn delete_production_article(&self, id: Id) -> SfResult<()> {
        let mut store = self.enter("delete_production_article")?;
        let before = store.allocations.len();
        store.allocations.retain(|a| a.id != id);
        if store.allocations.len() == before {
            return Err(not_found("production article", id));
        }
        Ok(())
    }

    async fn create_workforce_detail(&self, payload: &WorkforcePayload) -> SfResult<()> {
        let mut store = self.enter("create_workforce_detail")?;
        if store
            .workforce
            .iter()
            .any(|w| w.production_id == payload.production_id)
        {
            return Err(SfError::from_status(
                409,
                Some(DUPLICATE_WORKFORCE_MESSAGE.to_string()),
            ));
        }
        let id = store.next_id();
        store.workforce.push(payload.clone().into_detail(id));
        Ok(())
    }

    async fn list_workforce_details(&self, production_id: Id) -> SfResult<Vec<WorkforceDetail>> {
        let store = self.enter("list_workforce_details")?;
        Ok(store
            .workforce
            .iter()
            .filter(|w| w.production_id == production_id)
            .cloned()
            .collect())
    }

    async fn update_workforce_detail(&self, id: Id, payload: &WorkforcePayload) -> SfResult<()> {
        let mut store = self.enter("update_workforce_detail")?;
        let detail = store
            .workforce
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| not_found("workforce detail", id))?;
        *detail = payload.clone().into_detail(id);
        Ok(())
    }

    async fn delete_workforce_detail(&self, id: Id) -> SfResult<()> {
        let mut store = self.enter("delete_workforce_detail")?;
        let before = store.workforce.len();
        store.workforce.retain(|w| w.id != id);
        if store.workforce.len() == before {
            return Err(not_found("workforce detail", id));
        }
        Ok(())
    }
}
