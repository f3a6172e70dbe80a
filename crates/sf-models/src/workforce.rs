//! Workforce detail model
//!
//! Headcount and per-head price for a production; the total labor cost is derived.

use serde::{Deserialize, Serialize};
use sf_core::traits::{Costed, Id, Identifiable, Resource};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkforceDetail {
    pub id: Id,

    pub production_id: Id,

    #[serde(rename = "number")]
    pub worker_count: i64,

    #[serde(rename = "pricePerP")]
    pub price_per_head: f64,
}

impl Identifiable for WorkforceDetail {
    fn id(&self) -> Id {
        self.id
    }
}

impl Resource for WorkforceDetail {
    const NAME: &'static str = "workforce_detail";
}

impl Costed for WorkforceDetail {
    fn factors(&self) -> (f64, f64) {
        (self.worker_count as f64, self.price_per_head)
    }
}

/// Body of the workforce create and update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct WorkforcePayload {
    #[validate(range(min = 1, message = "must reference a production"))]
    pub production_id: i64,

    #[serde(rename = "number")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub worker_count: i64,

    #[serde(rename = "pricePerP")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price_per_head: f64,
}

impl WorkforcePayload {
    pub fn into_detail(self, id: Id) -> WorkforceDetail {
        WorkforceDetail {
            id,
            production_id: self.production_id,
            worker_count: self.worker_count,
            price_per_head: self.price_per_head,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workforce_wire_format_and_cost() {
        let detail: WorkforceDetail = serde_json::from_str(
            r#"{"id":5,"production_id":1,"number":12,"pricePerP":80.5}"#,
        )
        .unwrap();
        assert_eq!(detail.worker_count, 12);
        assert_eq!(detail.amount(), 966.0);
    }

    #[test]
    fn test_payload_requires_production() {
        let payload = WorkforcePayload {
            production_id: 0,
            worker_count: 3,
            price_per_head: 10.0,
        };
        assert!(payload.validate().is_err());
    }
}
