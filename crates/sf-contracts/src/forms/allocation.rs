//! Production-article allocation form
//!
//! Used both to allocate a new article to a production and to edit an existing
//! allocation in place.

use sf_core::error::ValidationErrors;
use sf_core::traits::Id;
use sf_models::{NewProductionArticle, UpdateProductionArticle};

use super::Form;
use crate::rules::{FieldRules, FormValues, Rule, RuleSet};

pub const ARTICLE: &str = "article_id";
pub const QUANTITY: &str = "articleProductionQte";
pub const UNIT_PRICE: &str = "unitPrice";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationForm {
    pub production_id: Id,
    pub article_id: String,
    /// Display name of the selected article, when known
    pub article_name: String,
    pub quantity: String,
    pub unit_price: String,
}

impl AllocationForm {
    pub fn new(
        production_id: Id,
        article_id: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
    ) -> Self {
        Self {
            production_id,
            article_id: article_id.into(),
            article_name: String::new(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
        }
    }

    pub fn with_article_name(mut self, name: impl Into<String>) -> Self {
        self.article_name = name.into();
        self
    }

    /// Validate and build the edit payload for allocation `id`
    pub fn submit_update(&self, id: Id) -> Result<UpdateProductionArticle, ValidationErrors> {
        let created = self.submit()?;
        Ok(UpdateProductionArticle {
            id,
            article_id: created.article_id,
            unit_price: created.unit_price,
            quantity: created.quantity,
        })
    }
}

impl Form for AllocationForm {
    type Payload = NewProductionArticle;

    fn rules() -> RuleSet {
        RuleSet::new()
            .field(
                FieldRules::new(ARTICLE)
                    .rule(Rule::Required, "An article is required")
                    .rule(Rule::Number, "Please select an article")
                    .rule(Rule::Integer, "Please select an article")
                    .rule(Rule::Min(1.0), "Please select an article"),
            )
            .field(
                FieldRules::new(QUANTITY)
                    .rule(Rule::Required, "Quantity is required")
                    .rule(Rule::Number, "Quantity must be a number")
                    .rule(Rule::Min(1.0), "Quantity must be greater than 0"),
            )
            .field(
                FieldRules::new(UNIT_PRICE)
                    .rule(Rule::Required, "Unit price is required")
                    .rule(Rule::Number, "Unit price must be a number")
                    .rule(Rule::Min(1.0), "Unit price must be at least 1"),
            )
    }

    fn values(&self) -> FormValues {
        FormValues::new()
            .with(ARTICLE, self.article_id.as_str())
            .with(QUANTITY, self.quantity.as_str())
            .with(UNIT_PRICE, self.unit_price.as_str())
    }

    fn build(&self, values: &FormValues) -> Result<NewProductionArticle, ValidationErrors> {
        Ok(NewProductionArticle {
            production_id: self.production_id,
            article_id: values.number(ARTICLE)? as Id,
            article_name: self.article_name.trim().to_string(),
            quantity: values.number(QUANTITY)?,
            unit_price: values.number(UNIT_PRICE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_allocation() {
        let payload = AllocationForm::new(1, "7", "4", "3.5")
            .with_article_name("Bolt")
            .submit()
            .unwrap();
        assert_eq!(payload.article_id, 7);
        assert_eq!(payload.quantity, 4.0);
        assert_eq!(payload.unit_price, 3.5);
        assert_eq!(payload.article_name, "Bolt");
    }

    #[test]
    fn test_unselected_article_is_rejected() {
        let errors = AllocationForm::new(1, "0", "1", "1").submit().unwrap_err();
        assert_eq!(
            errors.get(ARTICLE).unwrap(),
            &vec!["Please select an article".to_string()]
        );
    }

    #[test]
    fn test_price_below_one_is_rejected() {
        let errors = AllocationForm::new(1, "7", "2", "0.5").submit().unwrap_err();
        assert!(errors.has_error(UNIT_PRICE));
        assert!(!errors.has_error(QUANTITY));
    }

    #[test]
    fn test_update_payload_keeps_allocation_id() {
        let update = AllocationForm::new(1, "7", "4", "3.5")
            .submit_update(2)
            .unwrap();
        assert_eq!(
            update,
            UpdateProductionArticle {
                id: 2,
                article_id: 7,
                unit_price: 3.5,
                quantity: 4.0,
            }
        );
    }
}
