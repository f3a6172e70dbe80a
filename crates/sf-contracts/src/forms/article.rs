//! Article create/edit form

use sf_core::error::ValidationErrors;
use sf_models::ArticlePayload;

use super::Form;
use crate::rules::{FieldRules, FormValues, Rule, RuleSet};

pub const NAME: &str = "articleName";
pub const QUANTITY: &str = "articleQte";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleForm {
    pub name: String,
    pub quantity: String,
}

impl ArticleForm {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

impl Form for ArticleForm {
    type Payload = ArticlePayload;

    fn rules() -> RuleSet {
        RuleSet::new()
            .field(FieldRules::new(NAME).rule(Rule::Required, "Article name is required"))
            .field(
                FieldRules::new(QUANTITY)
                    .rule(Rule::Required, "Quantity is required")
                    .rule(Rule::Number, "Quantity must be a number")
                    .rule(Rule::Positive, "Quantity must be greater than 0")
                    .rule(Rule::Integer, "Quantity must be a whole number"),
            )
    }

    fn values(&self) -> FormValues {
        FormValues::new()
            .with(NAME, self.name.as_str())
            .with(QUANTITY, self.quantity.as_str())
    }

    fn build(&self, values: &FormValues) -> Result<ArticlePayload, ValidationErrors> {
        Ok(ArticlePayload::new(
            values.text(NAME),
            values.number(QUANTITY)? as i64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_article_form() {
        let payload = ArticleForm::new(" Bolt ", "10").submit().unwrap();
        assert_eq!(payload, ArticlePayload::new("Bolt", 10));
    }

    #[test]
    fn test_article_form_errors() {
        let errors = ArticleForm::new("", "0").submit().unwrap_err();
        assert_eq!(
            errors.get(NAME).unwrap(),
            &vec!["Article name is required".to_string()]
        );
        assert_eq!(
            errors.get(QUANTITY).unwrap(),
            &vec!["Quantity must be greater than 0".to_string()]
        );

        let errors = ArticleForm::new("Nut", "1.5").submit().unwrap_err();
        assert!(!errors.has_error(NAME));
        assert!(errors.has_error(QUANTITY));
    }
}
