//! Monthly and yearly expense reports.

use api_types::summary::MonthlySummaryQuery;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use engine::{
    CostBreakdown, EngineError, ExpenseSummary, MonthlyBucket, PeriodFilter,
    ProductionBreakdown, UnattributedRecord,
};
use serde::Serialize;

use crate::{ServerError, server::ServerState};

#[derive(Debug, Serialize)]
pub struct MonthlyReport {
    /// Display key, e.g. `"Feb-25"`.
    pub key: String,
    pub year: i32,
    pub month: u32,
    pub costs: CostBreakdown,
    pub summary: ExpenseSummary,
    pub production: ProductionBreakdown,
}

impl From<MonthlyBucket> for MonthlyReport {
    fn from(bucket: MonthlyBucket) -> Self {
        Self {
            summary: ExpenseSummary::from(&bucket),
            year: bucket.period.year(),
            month: bucket.period.month(),
            key: bucket.key,
            costs: bucket.costs,
            production: bucket.production,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MonthlySummaryResponse {
    /// Newest month first.
    pub months: Vec<MonthlyReport>,
    /// Dumper records whose equipment is not registered anymore.
    pub unattributed: Vec<UnattributedRecord>,
    pub total: f64,
    pub grand_total: f64,
}

#[derive(Debug, Serialize)]
pub struct YearlyReport {
    pub year: i32,
    pub months: u32,
    pub costs: CostBreakdown,
    pub summary: ExpenseSummary,
    pub production: ProductionBreakdown,
}

pub async fn monthly(
    State(state): State<ServerState>,
    Query(query): Query<MonthlySummaryQuery>,
) -> Result<Json<MonthlySummaryResponse>, ServerError> {
    let filter = PeriodFilter::new(query.month, query.year)?;
    let aggregation = state.engine.monthly_aggregation(&filter).await?;
    let total = aggregation.total();
    let grand_total = aggregation.grand_total();
    let unattributed = aggregation.unattributed.clone();

    Ok(Json(MonthlySummaryResponse {
        months: aggregation
            .into_months_desc()
            .into_iter()
            .map(MonthlyReport::from)
            .collect(),
        unattributed,
        total,
        grand_total,
    }))
}

pub async fn yearly(
    State(state): State<ServerState>,
    Path(year): Path<i32>,
) -> Result<Json<YearlyReport>, ServerError> {
    let bucket = state
        .engine
        .yearly_bucket(year)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("records of {year}")))?;

    Ok(Json(YearlyReport {
        summary: ExpenseSummary::from(&bucket),
        year: bucket.year,
        months: bucket.months,
        costs: bucket.costs,
        production: bucket.production,
    }))
}
