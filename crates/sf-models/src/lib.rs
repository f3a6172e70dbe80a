//! # sf-models
//!
//! Client-side shapes of the entities served by the inventory API.
//!
//! Field names on the wire follow the backend contract (`articleName`, `pricePerP`, ...);
//! the Rust fields use descriptive names. Write payloads carry `validator` rules for the
//! data-model invariants (non-negative quantities and prices, non-empty names).

pub use sf_core::traits::{Costed, Id, Identifiable, Resource};

pub mod article;
pub mod production;
pub mod production_article;
pub mod workforce;

pub use article::{Article, ArticleName, ArticlePayload};
pub use production::{NewProduction, Production};
pub use production_article::{
    NewProductionArticle, ProductionArticle, ProductionArticleList, UpdateProductionArticle,
};
pub use workforce::{WorkforceDetail, WorkforcePayload};
