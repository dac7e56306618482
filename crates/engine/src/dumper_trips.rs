//! Dumper trip logs.

use chrono::NaiveDate;
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    aggregation::{EquipmentRef, RecordKind, TransactionRecord},
    util::{ensure_non_negative, normalize_optional_text},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DumperTrip {
    pub id: Uuid,
    pub trip_date: NaiveDate,
    pub dumper_id: Option<Uuid>,
    /// Display name at the time of the trip, used when the id no longer
    /// resolves.
    pub dumper_name: Option<String>,
    pub trips: i32,
    pub cft_carried: f64,
    pub amount: f64,
    pub misc_expense: f64,
    pub note: Option<String>,
}

impl DumperTrip {
    pub fn dumper(&self) -> EquipmentRef {
        EquipmentRef {
            id: self.dumper_id,
            name: self.dumper_name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DumperTripInput {
    pub trip_date: NaiveDate,
    #[serde(default)]
    pub dumper_id: Option<Uuid>,
    #[serde(default)]
    pub dumper_name: Option<String>,
    #[serde(default)]
    pub trips: i32,
    #[serde(default)]
    pub cft_carried: f64,
    pub amount: f64,
    #[serde(default)]
    pub misc_expense: f64,
    #[serde(default)]
    pub note: Option<String>,
}

/// Every dumper record needs something to attribute it by.
pub(crate) fn ensure_dumper_reference(
    dumper_id: Option<Uuid>,
    dumper_name: Option<&str>,
) -> ResultEngine<Option<String>> {
    let name = normalize_optional_text(dumper_name);
    if dumper_id.is_none() && name.is_none() {
        return Err(EngineError::validation(
            "dumper",
            "either dumper_id or dumper_name is required",
        ));
    }
    Ok(name)
}

impl DumperTripInput {
    pub(crate) fn to_active(&self, id: Uuid) -> ResultEngine<ActiveModel> {
        let dumper_name = ensure_dumper_reference(self.dumper_id, self.dumper_name.as_deref())?;
        if self.trips < 0 {
            return Err(EngineError::validation("trips", "must be >= 0"));
        }
        ensure_non_negative("cft_carried", self.cft_carried)?;
        ensure_non_negative("amount", self.amount)?;
        ensure_non_negative("misc_expense", self.misc_expense)?;

        Ok(ActiveModel {
            id: ActiveValue::Set(id),
            trip_date: ActiveValue::Set(self.trip_date),
            dumper_id: ActiveValue::Set(self.dumper_id),
            dumper_name: ActiveValue::Set(dumper_name),
            trips: ActiveValue::Set(self.trips),
            cft_carried: ActiveValue::Set(self.cft_carried),
            amount: ActiveValue::Set(self.amount),
            misc_expense: ActiveValue::Set(self.misc_expense),
            note: ActiveValue::Set(normalize_optional_text(self.note.as_deref())),
        })
    }
}

impl From<&DumperTrip> for TransactionRecord {
    fn from(trip: &DumperTrip) -> Self {
        Self {
            id: trip.id,
            date: Some(trip.trip_date),
            kind: RecordKind::DumperTrip {
                dumper: trip.dumper(),
                amount: trip.amount,
                misc_expense: trip.misc_expense,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dumper_trips")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub trip_date: NaiveDate,
    pub dumper_id: Option<Uuid>,
    pub dumper_name: Option<String>,
    pub trips: i32,
    pub cft_carried: f64,
    pub amount: f64,
    pub misc_expense: f64,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for DumperTrip {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            trip_date: model.trip_date,
            dumper_id: model.dumper_id,
            dumper_name: model.dumper_name,
            trips: model.trips,
            cft_carried: model.cft_carried,
            amount: model.amount,
            misc_expense: model.misc_expense,
            note: model.note,
        })
    }
}
