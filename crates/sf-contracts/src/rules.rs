//! Declarative field rules and the generic validator

use std::collections::BTreeMap;

use chrono::NaiveDate;
use sf_core::error::ValidationErrors;

use crate::base::{Contract, ValidationResult};

/// A single constraint on a form field
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Value must be present and not blank
    Required,
    /// Value must parse as a finite number
    Number,
    /// Numeric value must have no fractional part
    Integer,
    /// Numeric value must be greater than or equal to the bound
    Min(f64),
    /// Numeric value must be strictly greater than zero
    Positive,
    /// Value must be a `YYYY-MM-DD` calendar date
    Date,
    /// Text must not exceed the given number of characters
    MaxLength(usize),
}

/// Raw value of a form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(n) => n.is_nan(),
        }
    }

    /// Numeric reading of the value, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            FieldValue::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.trim().to_string(),
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

/// Submitted values of a form, keyed by wire field name. Absent keys are missing values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Numeric value of a field, reported as a field error when absent or malformed
    pub fn number(&self, field: &str) -> Result<f64, ValidationErrors> {
        self.get(field)
            .and_then(FieldValue::as_number)
            .ok_or_else(|| single_error(field, "must be a number"))
    }

    /// Trimmed text of a field; missing fields read as empty
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(FieldValue::as_text).unwrap_or_default()
    }
}

fn single_error(field: &str, message: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, message);
    errors
}

/// Ordered rules for one field, each with the message shown when it fails
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: Vec<(Rule, &'static str)>,
}

impl FieldRules {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule, message: &'static str) -> Self {
        self.rules.push((rule, message));
        self
    }

    /// First failing rule's message, if any.
    ///
    /// A missing optional value passes; only `Required` inspects absence.
    pub fn check(&self, value: Option<&FieldValue>) -> Option<&'static str> {
        let value = match value {
            Some(v) if !v.is_blank() => v,
            _ => {
                return self
                    .rules
                    .iter()
                    .find(|(rule, _)| *rule == Rule::Required)
                    .map(|(_, message)| *message);
            }
        };

        self.rules
            .iter()
            .find(|(rule, _)| !rule_holds(rule, value))
            .map(|(_, message)| *message)
    }
}

fn rule_holds(rule: &Rule, value: &FieldValue) -> bool {
    match rule {
        Rule::Required => true,
        Rule::Number => value.as_number().is_some(),
        Rule::Integer => value.as_number().is_some_and(|n| n.fract() == 0.0),
        Rule::Min(bound) => value.as_number().is_some_and(|n| n >= *bound),
        Rule::Positive => value.as_number().is_some_and(|n| n > 0.0),
        Rule::Date => NaiveDate::parse_from_str(&value.as_text(), "%Y-%m-%d").is_ok(),
        Rule::MaxLength(max) => value.as_text().chars().count() <= *max,
    }
}

/// Rule set for a whole form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }
}

impl Contract<FormValues> for RuleSet {
    fn validate(&self, values: &FormValues) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        for field in &self.fields {
            if let Some(message) = field.check(values.get(field.field)) {
                errors.add(field.field, message);
            }
        }
        errors.into_result()
    }

    fn is_writable(&self, attribute: &str) -> bool {
        self.fields.iter().any(|f| f.field == attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity_rules() -> RuleSet {
        RuleSet::new().field(
            FieldRules::new("qty")
                .rule(Rule::Required, "required")
                .rule(Rule::Number, "not a number")
                .rule(Rule::Positive, "not positive")
                .rule(Rule::Integer, "not an integer"),
        )
    }

    fn first_error(rules: &RuleSet, values: &FormValues, field: &str) -> Option<String> {
        rules
            .validate(values)
            .err()
            .and_then(|e| e.get(field).and_then(|m| m.first().cloned()))
    }

    #[test]
    fn test_rules_stop_at_first_failure() {
        let rules = quantity_rules();
        assert_eq!(
            first_error(&rules, &FormValues::new(), "qty").as_deref(),
            Some("required")
        );
        assert_eq!(
            first_error(&rules, &FormValues::new().with("qty", "  "), "qty").as_deref(),
            Some("required")
        );
        assert_eq!(
            first_error(&rules, &FormValues::new().with("qty", "abc"), "qty").as_deref(),
            Some("not a number")
        );
        assert_eq!(
            first_error(&rules, &FormValues::new().with("qty", "-2"), "qty").as_deref(),
            Some("not positive")
        );
        assert_eq!(
            first_error(&rules, &FormValues::new().with("qty", "2.5"), "qty").as_deref(),
            Some("not an integer")
        );
        assert!(rules.validate(&FormValues::new().with("qty", 10i64)).is_ok());
    }

    #[test]
    fn test_optional_field_may_be_missing() {
        let rules = RuleSet::new().field(
            FieldRules::new("note").rule(Rule::MaxLength(5), "too long"),
        );
        assert!(rules.validate(&FormValues::new()).is_ok());
        assert!(rules.validate(&FormValues::new().with("note", "abcdef")).is_err());
    }

    #[test]
    fn test_min_and_date_rules() {
        let rules = RuleSet::new()
            .field(FieldRules::new("price").rule(Rule::Min(1.0), "at least 1"))
            .field(FieldRules::new("day").rule(Rule::Date, "not a date"));

        let errors = rules
            .validate(&FormValues::new().with("price", 0.5).with("day", "2024-13-01"))
            .unwrap_err();
        assert!(errors.has_error("price"));
        assert!(errors.has_error("day"));

        assert!(rules
            .validate(&FormValues::new().with("price", 1.0).with("day", "2024-02-29"))
            .is_ok());
    }

    #[test]
    fn test_is_writable_lists_declared_fields() {
        let rules = quantity_rules();
        assert!(rules.is_writable("qty"));
        assert!(!rules.is_writable("id"));
    }
}
