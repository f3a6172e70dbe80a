//! Form definitions
//!
//! One module per form of the dashboard. Each form exposes its rule set and turns
//! validated values into the request payload of its endpoint.

mod allocation;
mod article;
mod production;
mod workforce;

pub use allocation::AllocationForm;
pub use article::ArticleForm;
pub use production::ProductionForm;
pub use workforce::WorkforceForm;

use sf_core::error::ValidationErrors;

use crate::base::Contract;
use crate::rules::{FormValues, RuleSet};

/// A submittable form
pub trait Form {
    /// Request body produced by a valid submission
    type Payload;

    /// Declarative rules for this form's fields
    fn rules() -> RuleSet;

    /// Current field values, keyed by wire field name
    fn values(&self) -> FormValues;

    /// Build the payload from values that already passed validation
    fn build(&self, values: &FormValues) -> Result<Self::Payload, ValidationErrors>;

    /// Validate, then build the payload. Invalid forms never yield a payload.
    fn submit(&self) -> Result<Self::Payload, ValidationErrors> {
        let values = self.values();
        Self::rules().validate(&values)?;
        self.build(&values)
    }
}
