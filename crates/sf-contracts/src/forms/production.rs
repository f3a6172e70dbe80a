//! Production create form

use chrono::NaiveDate;
use sf_core::error::ValidationErrors;
use sf_models::NewProduction;

use super::Form;
use crate::rules::{FieldRules, FormValues, Rule, RuleSet};

pub const DATE: &str = "productionDate";
pub const QUANTITY: &str = "productionQte";
pub const TITLE: &str = "productionTitle";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductionForm {
    pub date: String,
    pub quantity: String,
    pub title: String,
}

impl ProductionForm {
    pub fn new(
        date: impl Into<String>,
        quantity: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            quantity: quantity.into(),
            title: title.into(),
        }
    }
}

impl Form for ProductionForm {
    type Payload = NewProduction;

    fn rules() -> RuleSet {
        RuleSet::new()
            .field(
                FieldRules::new(DATE)
                    .rule(Rule::Required, "Date is required")
                    .rule(Rule::Date, "Date must be formatted YYYY-MM-DD"),
            )
            .field(
                FieldRules::new(QUANTITY)
                    .rule(Rule::Required, "Quantity is required")
                    .rule(Rule::Number, "Quantity must be a number")
                    .rule(Rule::Positive, "Quantity must be greater than 0"),
            )
            .field(
                FieldRules::new(TITLE)
                    .rule(Rule::Required, "Production name is required")
                    .rule(Rule::MaxLength(255), "Production name is too long"),
            )
    }

    fn values(&self) -> FormValues {
        FormValues::new()
            .with(DATE, self.date.as_str())
            .with(QUANTITY, self.quantity.as_str())
            .with(TITLE, self.title.as_str())
    }

    fn build(&self, values: &FormValues) -> Result<NewProduction, ValidationErrors> {
        let date = NaiveDate::parse_from_str(&values.text(DATE), "%Y-%m-%d").map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.add(DATE, "Date must be formatted YYYY-MM-DD");
            errors
        })?;

        Ok(NewProduction {
            date,
            quantity: values.number(QUANTITY)?,
            title: values.text(TITLE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_production_form() {
        let payload = ProductionForm::new("2024-05-01", "120", "Spring run")
            .submit()
            .unwrap();
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(payload.quantity, 120.0);
        assert_eq!(payload.title, "Spring run");
    }

    #[test]
    fn test_all_fields_reported() {
        let errors = ProductionForm::default().submit().unwrap_err();
        assert!(errors.has_error(DATE));
        assert!(errors.has_error(QUANTITY));
        assert!(errors.has_error(TITLE));
    }

    #[test]
    fn test_bad_date() {
        let errors = ProductionForm::new("01/05/2024", "1", "x")
            .submit()
            .unwrap_err();
        assert_eq!(
            errors.get(DATE).unwrap(),
            &vec!["Date must be formatted YYYY-MM-DD".to_string()]
        );
    }
}
