//! Stored profit sharing snapshots, one per `(period_month, period_year)`.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError,
    period::Period,
    profit::{Partner, ProfitSharingResult},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfitSharingRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub result: ProfitSharingResult,
    pub saved_at: DateTime<Utc>,
}

pub(crate) fn active_model(
    id: Uuid,
    result: &ProfitSharingResult,
    saved_at: DateTime<Utc>,
) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::Set(id),
        period_month: ActiveValue::Set(result.period.month_name().to_string()),
        period_year: ActiveValue::Set(result.period.year()),
        total_expense: ActiveValue::Set(result.total_expense),
        total_revenue: ActiveValue::Set(result.total_revenue),
        net_profit: ActiveValue::Set(result.net_profit),
        partner_a_name: ActiveValue::Set(result.partner_a.name.clone()),
        partner_a_percent: ActiveValue::Set(result.partner_a.percent),
        partner_a_share: ActiveValue::Set(result.partner_a_share),
        partner_b_name: ActiveValue::Set(result.partner_b.name.clone()),
        partner_b_percent: ActiveValue::Set(result.partner_b.percent),
        partner_b_share: ActiveValue::Set(result.partner_b_share),
        saved_at: ActiveValue::Set(saved_at),
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profit_sharing_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub period_month: String,
    pub period_year: i32,
    pub total_expense: f64,
    pub total_revenue: f64,
    pub net_profit: f64,
    pub partner_a_name: String,
    pub partner_a_percent: f64,
    pub partner_a_share: f64,
    pub partner_b_name: String,
    pub partner_b_percent: f64,
    pub partner_b_share: f64,
    pub saved_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ProfitSharingRecord {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            result: ProfitSharingResult {
                period: Period::from_month_name(model.period_year, &model.period_month)?,
                total_expense: model.total_expense,
                total_revenue: model.total_revenue,
                net_profit: model.net_profit,
                partner_a: Partner {
                    name: model.partner_a_name,
                    percent: model.partner_a_percent,
                },
                partner_b: Partner {
                    name: model.partner_b_name,
                    percent: model.partner_b_percent,
                },
                partner_a_share: model.partner_a_share,
                partner_b_share: model.partner_b_share,
            },
            saved_at: model.saved_at,
        })
    }
}
