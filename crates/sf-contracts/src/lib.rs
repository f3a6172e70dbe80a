//! # sf-contracts
//!
//! Client-side form validation for Stockflow.
//!
//! Each form is described by a plain [`RuleSet`]: an ordered list of per-field rules
//! (required, number, integer, minimum, ...). A single generic validator interprets any
//! rule set against a [`FormValues`] map. A form that fails validation never turns into
//! a request payload.

pub mod base;
pub mod forms;
pub mod rules;

pub use base::*;
pub use forms::{AllocationForm, ArticleForm, Form, ProductionForm, WorkforceForm};
pub use rules::{FieldRules, FieldValue, FormValues, Rule, RuleSet};
