//! Production-article allocation model
//!
//! Assignment of a quantity of an article, at a unit price, to a production.
//! The line amount is derived from the two factors and never persisted.

use serde::{Deserialize, Serialize};
use sf_core::traits::{Costed, Id, Identifiable, Resource};
use validator::Validate;

/// An allocation as returned inside `GET /api/article/production/{productionId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionArticle {
    pub id: Id,

    pub production_id: Id,

    pub article_id: Id,

    #[serde(rename = "articleName", default)]
    pub article_name: String,

    #[serde(rename = "articleProductionQte")]
    pub quantity: f64,

    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl Identifiable for ProductionArticle {
    fn id(&self) -> Id {
        self.id
    }
}

impl Resource for ProductionArticle {
    const NAME: &'static str = "production_article";
}

impl Costed for ProductionArticle {
    fn factors(&self) -> (f64, f64) {
        (self.quantity, self.unit_price)
    }
}

/// Envelope of the allocation list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionArticleList {
    #[serde(rename = "articleProductions", default)]
    pub items: Vec<ProductionArticle>,
}

/// Body of `POST /api/create/article-production`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProductionArticle {
    #[validate(range(min = 1, message = "must reference a production"))]
    pub production_id: i64,

    #[validate(range(min = 1, message = "must reference an article"))]
    pub article_id: i64,

    #[serde(rename = "articleName")]
    pub article_name: String,

    #[serde(rename = "articleProductionQte")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub quantity: f64,

    #[serde(rename = "unitPrice")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub unit_price: f64,
}

/// Body of `PUT /api/update_article/production/{id}`
///
/// Carries both the allocation id and the article id so either can key the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateProductionArticle {
    pub id: Id,

    pub article_id: Id,

    #[serde(rename = "unitPrice")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub unit_price: f64,

    #[serde(rename = "articleQte")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub quantity: f64,
}

impl UpdateProductionArticle {
    /// Apply this update to a locally held allocation
    pub fn apply_to(&self, allocation: &mut ProductionArticle) {
        allocation.article_id = self.article_id;
        allocation.unit_price = self.unit_price;
        allocation.quantity = self.quantity;
    }
}
