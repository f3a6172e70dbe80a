//! Article model
//!
//! Stock item master record.

use serde::{Deserialize, Serialize};
use sf_core::traits::{Id, Identifiable, Resource};
use validator::Validate;

/// A stock item as returned by `GET /api/liste-articles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Id,

    #[serde(rename = "articleName")]
    pub name: String,

    /// Available quantity
    #[serde(rename = "articleQte")]
    pub quantity: i64,
}

impl Identifiable for Article {
    fn id(&self) -> Id {
        self.id
    }
}

impl Resource for Article {
    const NAME: &'static str = "article";
}

/// Id and name only, as returned by `GET /api/nom/articles` for selects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleName {
    pub id: Id,

    #[serde(rename = "articleName")]
    pub name: String,
}

impl Identifiable for ArticleName {
    fn id(&self) -> Id {
        self.id
    }
}

impl Resource for ArticleName {
    const NAME: &'static str = "article_name";
}

/// Body of both the create and the update article requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ArticlePayload {
    #[serde(rename = "articleName")]
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,

    #[serde(rename = "articleQte")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub quantity: i64,
}

impl ArticlePayload {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// The article this payload would produce once the backend assigns `id`
    pub fn into_article(self, id: Id) -> Article {
        Article {
            id,
            name: self.name,
            quantity: self.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_wire_format() {
        let article: Article =
            serde_json::from_str(r#"{"id":3,"articleName":"Bolt","articleQte":10}"#).unwrap();
        assert_eq!(article.name, "Bolt");
        assert_eq!(article.quantity, 10);

        let body = serde_json::to_value(ArticlePayload::new("Bolt", 10)).unwrap();
        assert_eq!(body, serde_json::json!({"articleName": "Bolt", "articleQte": 10}));
    }

    #[test]
    fn test_payload_invariants() {
        assert!(ArticlePayload::new("Bolt", 0).validate().is_ok());

        let errors = ArticlePayload::new("", -1).validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }
}
