//! Daily production entries.
//!
//! Each entry keeps the clay/dust percentage it was recorded with, so
//! changing the default later never rewrites past days.

use chrono::NaiveDate;
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    aggregation::{RecordKind, TransactionRecord},
    reconciliation::reconcile_daily_production,
    util::normalize_optional_text,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyProductionEntry {
    pub id: Uuid,
    pub production_date: NaiveDate,
    pub gravel_cft: f64,
    pub clay_dust_percent: f64,
    pub clay_dust_cft: f64,
    pub net_aggregate_cft: f64,
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyProductionInput {
    pub production_date: NaiveDate,
    pub gravel_cft: f64,
    /// Defaults to [`DEFAULT_CLAY_DUST_PERCENT`](crate::DEFAULT_CLAY_DUST_PERCENT).
    #[serde(default)]
    pub clay_dust_percent: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

impl DailyProductionInput {
    pub(crate) fn to_active(&self, id: Uuid) -> ResultEngine<ActiveModel> {
        let daily = reconcile_daily_production(self.gravel_cft, self.clay_dust_percent)?;

        Ok(ActiveModel {
            id: ActiveValue::Set(id),
            production_date: ActiveValue::Set(self.production_date),
            gravel_cft: ActiveValue::Set(daily.gravel_cft),
            clay_dust_percent: ActiveValue::Set(daily.clay_dust_percent),
            clay_dust_cft: ActiveValue::Set(daily.clay_dust_cft),
            net_aggregate_cft: ActiveValue::Set(daily.net_aggregate_cft),
            note: ActiveValue::Set(normalize_optional_text(self.note.as_deref())),
        })
    }
}

impl From<&DailyProductionEntry> for TransactionRecord {
    fn from(entry: &DailyProductionEntry) -> Self {
        Self {
            id: entry.id,
            date: Some(entry.production_date),
            kind: RecordKind::Production {
                gravel_cft: entry.gravel_cft,
                clay_dust_cft: entry.clay_dust_cft,
                net_aggregate_cft: entry.net_aggregate_cft,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_production")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub production_date: NaiveDate,
    pub gravel_cft: f64,
    pub clay_dust_percent: f64,
    pub clay_dust_cft: f64,
    pub net_aggregate_cft: f64,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for DailyProductionEntry {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            production_date: model.production_date,
            gravel_cft: model.gravel_cft,
            clay_dust_percent: model.clay_dust_percent,
            clay_dust_cft: model.clay_dust_cft,
            net_aggregate_cft: model.net_aggregate_cft,
            note: model.note,
        })
    }
}
