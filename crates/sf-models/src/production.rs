//! Production model
//!
//! A production run: a date, a target quantity, and a title.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sf_core::traits::{Id, Identifiable, Resource};
use validator::Validate;

/// A production run as returned by `GET /api/liste-productions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Production {
    pub id: Id,

    /// Date as the backend formats it (kept verbatim for display)
    #[serde(rename = "productionDate")]
    pub date: String,

    #[serde(rename = "productionQte")]
    pub quantity: f64,

    #[serde(rename = "productionTitle")]
    pub title: String,
}

impl Production {
    /// The calendar date, when the backend value starts with `YYYY-MM-DD`
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    }
}

impl Identifiable for Production {
    fn id(&self) -> Id {
        self.id
    }
}

impl Resource for Production {
    const NAME: &'static str = "production";
}

/// Body of `POST /api/create-production`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProduction {
    #[serde(rename = "productionDate")]
    pub date: NaiveDate,

    #[serde(rename = "productionQte")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub quantity: f64,

    #[serde(rename = "productionTitle")]
    #[validate(length(min = 1, message = "is required"))]
    pub title: String,
}
