//! Generator, excavator and loader operation logs.
//!
//! The three machine types share one table, discriminated by `machine`.

use chrono::NaiveDate;
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    aggregation::{RecordKind, TransactionRecord},
    util::{ensure_non_negative, normalize_optional_text},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineKind {
    Generator,
    Excavator,
    Loader,
}

impl MachineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::Excavator => "excavator",
            Self::Loader => "loader",
        }
    }
}

impl TryFrom<&str> for MachineKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "generator" => Ok(Self::Generator),
            "excavator" => Ok(Self::Excavator),
            "loader" => Ok(Self::Loader),
            other => Err(EngineError::validation(
                "machine",
                format!("invalid machine kind: {other}"),
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineOperation {
    pub id: Uuid,
    pub machine: MachineKind,
    pub operation_date: NaiveDate,
    pub equipment_id: Option<Uuid>,
    pub hours_run: f64,
    pub fuel_litres: f64,
    pub amount: f64,
    /// Excavators and loaders only; never part of the cost total.
    pub misc_expense: f64,
    pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineOperationInput {
    pub machine: MachineKind,
    pub operation_date: NaiveDate,
    #[serde(default)]
    pub equipment_id: Option<Uuid>,
    #[serde(default)]
    pub hours_run: f64,
    #[serde(default)]
    pub fuel_litres: f64,
    pub amount: f64,
    #[serde(default)]
    pub misc_expense: f64,
    #[serde(default)]
    pub note: Option<String>,
}

impl MachineOperationInput {
    pub(crate) fn to_active(&self, id: Uuid) -> ResultEngine<ActiveModel> {
        ensure_non_negative("hours_run", self.hours_run)?;
        ensure_non_negative("fuel_litres", self.fuel_litres)?;
        ensure_non_negative("amount", self.amount)?;
        ensure_non_negative("misc_expense", self.misc_expense)?;
        if self.machine == MachineKind::Generator && self.misc_expense != 0.0 {
            return Err(EngineError::validation(
                "misc_expense",
                "generators do not track misc expense",
            ));
        }

        Ok(ActiveModel {
            id: ActiveValue::Set(id),
            machine: ActiveValue::Set(self.machine.as_str().to_string()),
            operation_date: ActiveValue::Set(self.operation_date),
            equipment_id: ActiveValue::Set(self.equipment_id),
            hours_run: ActiveValue::Set(self.hours_run),
            fuel_litres: ActiveValue::Set(self.fuel_litres),
            amount: ActiveValue::Set(self.amount),
            misc_expense: ActiveValue::Set(self.misc_expense),
            note: ActiveValue::Set(normalize_optional_text(self.note.as_deref())),
        })
    }
}

impl From<&MachineOperation> for TransactionRecord {
    fn from(op: &MachineOperation) -> Self {
        let kind = match op.machine {
            MachineKind::Generator => RecordKind::Generator { amount: op.amount },
            MachineKind::Excavator => RecordKind::Excavator {
                amount: op.amount,
                misc_expense: op.misc_expense,
            },
            MachineKind::Loader => RecordKind::Loader {
                amount: op.amount,
                misc_expense: op.misc_expense,
            },
        };
        Self {
            id: op.id,
            date: Some(op.operation_date),
            kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "machine_operations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub machine: String,
    pub operation_date: NaiveDate,
    pub equipment_id: Option<Uuid>,
    pub hours_run: f64,
    pub fuel_litres: f64,
    pub amount: f64,
    pub misc_expense: f64,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for MachineOperation {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            machine: MachineKind::try_from(model.machine.as_str())?,
            operation_date: model.operation_date,
            equipment_id: model.equipment_id,
            hours_run: model.hours_run,
            fuel_litres: model.fuel_litres,
            amount: model.amount,
            misc_expense: model.misc_expense,
            note: model.note,
        })
    }
}
