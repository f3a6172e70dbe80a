//! Workforce detail form

use sf_core::error::ValidationErrors;
use sf_core::traits::Id;
use sf_models::WorkforcePayload;

use super::Form;
use crate::rules::{FieldRules, FormValues, Rule, RuleSet};

pub const WORKERS: &str = "number";
pub const PRICE_PER_HEAD: &str = "pricePerP";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkforceForm {
    pub production_id: Id,
    pub worker_count: String,
    pub price_per_head: String,
}

impl WorkforceForm {
    pub fn new(
        production_id: Id,
        worker_count: impl Into<String>,
        price_per_head: impl Into<String>,
    ) -> Self {
        Self {
            production_id,
            worker_count: worker_count.into(),
            price_per_head: price_per_head.into(),
        }
    }
}

impl Form for WorkforceForm {
    type Payload = WorkforcePayload;

    fn rules() -> RuleSet {
        RuleSet::new()
            .field(
                FieldRules::new(WORKERS)
                    .rule(Rule::Required, "This field is required")
                    .rule(Rule::Number, "The number of workers must be a number")
                    .rule(Rule::Integer, "The number of workers must be a whole number")
                    .rule(Rule::Min(1.0), "The number of workers must be greater than 0"),
            )
            .field(
                FieldRules::new(PRICE_PER_HEAD)
                    .rule(Rule::Required, "This field is required")
                    .rule(Rule::Number, "The price must be a number")
                    .rule(Rule::Min(1.0), "The price must be greater than 0"),
            )
    }

    fn values(&self) -> FormValues {
        FormValues::new()
            .with(WORKERS, self.worker_count.as_str())
            .with(PRICE_PER_HEAD, self.price_per_head.as_str())
    }

    fn build(&self, values: &FormValues) -> Result<WorkforcePayload, ValidationErrors> {
        Ok(WorkforcePayload {
            production_id: self.production_id,
            worker_count: values.number(WORKERS)? as i64,
            price_per_head: values.number(PRICE_PER_HEAD)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_workforce_form() {
        let payload = WorkforceForm::new(3, "12", "80.5").submit().unwrap();
        assert_eq!(payload.production_id, 3);
        assert_eq!(payload.worker_count, 12);
        assert_eq!(payload.price_per_head, 80.5);
    }

    #[test]
    fn test_zero_values_rejected() {
        let errors = WorkforceForm::new(3, "0", "").submit().unwrap_err();
        assert_eq!(
            errors.get(WORKERS).unwrap(),
            &vec!["The number of workers must be greater than 0".to_string()]
        );
        assert_eq!(
            errors.get(PRICE_PER_HEAD).unwrap(),
            &vec!["This field is required".to_string()]
        );
    }
}
