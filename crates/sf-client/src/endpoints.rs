//! Endpoint paths of the inventory API, relative to the configured base URL

use sf_core::traits::Id;

pub const CREATE_ARTICLE: &str = "api/ajout-article";
pub const LIST_ARTICLES: &str = "api/liste-articles";
pub const LIST_ARTICLE_NAMES: &str = "api/nom/articles";

pub fn update_article(id: Id) -> String {
    format!("api/modifier-article/{}", id)
}

pub fn delete_article(id: Id) -> String {
    format!("api/supprimer-article/{}", id)
}

pub const CREATE_PRODUCTION: &str = "api/create-production";
pub const LIST_PRODUCTIONS: &str = "api/liste-productions";

pub const CREATE_PRODUCTION_ARTICLE: &str = "api/create/article-production";

pub fn list_production_articles(production_id: Id) -> String {
    format!("api/article/production/{}", production_id)
}

pub fn update_production_article(key: Id) -> String {
    format!("api/update_article/production/{}", key)
}

pub fn delete_production_article(id: Id) -> String {
    format!("api/delete_article/production/{}", id)
}

pub const CREATE_WORKFORCE_DETAIL: &str = "api/creer/maindoeuvre";

pub fn list_workforce_details(production_id: Id) -> String {
    format!("api/liste/maindoeuvre/{}", production_id)
}

pub fn update_workforce_detail(id: Id) -> String {
    format!("api/modifier/maindoeuvre/{}", id)
}

pub fn delete_workforce_detail(id: Id) -> String {
    format!("api/supprimer/maindoeuvre/{}", id)
}
