//! Stored monthly production/sales summaries.
//!
//! One row per `(summary_year, summary_month)`, where the month is stored by
//! name. Saving the same period again overwrites the row in place.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, period::Period, reconciliation::MonthlySalesSnapshot};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProductionSummary {
    pub id: Uuid,
    #[serde(flatten)]
    pub snapshot: MonthlySalesSnapshot,
    /// Operational expense total of the month when it was saved.
    pub total_cost: f64,
    pub saved_at: DateTime<Utc>,
}

impl MonthlyProductionSummary {
    pub fn period(&self) -> Period {
        self.snapshot.period
    }
}

pub(crate) fn active_model(
    id: Uuid,
    snapshot: &MonthlySalesSnapshot,
    total_cost: f64,
    saved_at: DateTime<Utc>,
) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::Set(id),
        summary_year: ActiveValue::Set(snapshot.period.year()),
        summary_month: ActiveValue::Set(snapshot.period.month_name().to_string()),
        sold_at_site_cft: ActiveValue::Set(snapshot.sold_at_site_cft),
        sold_at_site_amount: ActiveValue::Set(snapshot.sold_at_site_amount),
        approx_per_cft_cost: ActiveValue::Set(snapshot.approx_per_cft_cost),
        allowance_percent: ActiveValue::Set(snapshot.allowance_percent),
        total_net_aggregate_cft: ActiveValue::Set(snapshot.total_produced_raw),
        allowance_deduction_cft: ActiveValue::Set(snapshot.allowance_deduction),
        total_produced_cft: ActiveValue::Set(snapshot.total_produced),
        stock_at_site_cft: ActiveValue::Set(snapshot.stock_at_site_cft),
        per_cft_selling_price: ActiveValue::Set(snapshot.per_cft_selling_price),
        stock_value: ActiveValue::Set(snapshot.stock_value),
        total_cost: ActiveValue::Set(total_cost),
        total_revenue: ActiveValue::Set(snapshot.total_revenue),
        saved_at: ActiveValue::Set(saved_at),
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "monthly_production_summaries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub summary_year: i32,
    pub summary_month: String,
    pub sold_at_site_cft: f64,
    pub sold_at_site_amount: f64,
    pub approx_per_cft_cost: f64,
    pub allowance_percent: f64,
    /// Frozen net production (rounded) for the month.
    pub total_net_aggregate_cft: f64,
    pub allowance_deduction_cft: f64,
    pub total_produced_cft: f64,
    pub stock_at_site_cft: f64,
    pub per_cft_selling_price: f64,
    pub stock_value: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub saved_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for MonthlyProductionSummary {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let period = Period::from_month_name(model.summary_year, &model.summary_month)?;
        Ok(Self {
            id: model.id,
            snapshot: MonthlySalesSnapshot {
                period,
                sold_at_site_cft: model.sold_at_site_cft,
                sold_at_site_amount: model.sold_at_site_amount,
                approx_per_cft_cost: model.approx_per_cft_cost,
                allowance_percent: model.allowance_percent,
                total_produced_raw: model.total_net_aggregate_cft,
                allowance_deduction: model.allowance_deduction_cft,
                total_produced: model.total_produced_cft,
                stock_at_site_cft: model.stock_at_site_cft,
                per_cft_selling_price: model.per_cft_selling_price,
                stock_value: model.stock_value,
                total_revenue: model.total_revenue,
            },
            total_cost: model.total_cost,
            saved_at: model.saved_at,
        })
    }
}
