//! JSON shapes of the HTTP API that are not plain engine records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response body of every successful create.
#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
    pub id: Uuid,
}

/// Response body of every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub mod records {
    use chrono::NaiveDate;

    use super::*;

    /// Inclusive date range for record listings. Both ends are optional.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct DateRangeQuery {
        pub start: Option<NaiveDate>,
        pub end: Option<NaiveDate>,
    }
}

pub mod summary {
    use super::*;

    /// `GET /summary/monthly` filter. Either part may be omitted.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct MonthlySummaryQuery {
        pub month: Option<u32>,
        pub year: Option<i32>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct YearQuery {
        pub year: Option<i32>,
    }
}

pub mod production {
    use super::*;

    /// Preview of a day's clay/dust split. Nothing is stored.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReconcileRequest {
        pub gravel_cft: f64,
        /// Falls back to the configured default.
        pub clay_dust_percent: Option<f64>,
    }

    /// Sales figures entered when a month is finalised.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct FinalizeRequest {
        #[serde(default)]
        pub sold_at_site_cft: f64,
        #[serde(default)]
        pub sold_at_site_amount: f64,
        #[serde(default)]
        pub approx_per_cft_cost: f64,
        /// Falls back to the configured default.
        pub allowance_percent: Option<f64>,
    }
}
