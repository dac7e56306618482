//! Standalone dumper misc expenses (tyres, repairs, tolls).
//!
//! These only ever feed the dumper's `_misc` slot.

use chrono::NaiveDate;
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    aggregation::{EquipmentRef, RecordKind, TransactionRecord},
    dumper_trips::ensure_dumper_reference,
    util::{ensure_non_negative, normalize_optional_text},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DumperMiscExpense {
    pub id: Uuid,
    pub expense_date: NaiveDate,
    pub dumper_id: Option<Uuid>,
    pub dumper_name: Option<String>,
    pub description: Option<String>,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DumperMiscExpenseInput {
    pub expense_date: NaiveDate,
    #[serde(default)]
    pub dumper_id: Option<Uuid>,
    #[serde(default)]
    pub dumper_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
}

impl DumperMiscExpenseInput {
    pub(crate) fn to_active(&self, id: Uuid) -> ResultEngine<ActiveModel> {
        let dumper_name = ensure_dumper_reference(self.dumper_id, self.dumper_name.as_deref())?;
        ensure_non_negative("amount", self.amount)?;

        Ok(ActiveModel {
            id: ActiveValue::Set(id),
            expense_date: ActiveValue::Set(self.expense_date),
            dumper_id: ActiveValue::Set(self.dumper_id),
            dumper_name: ActiveValue::Set(dumper_name),
            description: ActiveValue::Set(normalize_optional_text(self.description.as_deref())),
            amount: ActiveValue::Set(self.amount),
        })
    }
}

impl From<&DumperMiscExpense> for TransactionRecord {
    fn from(expense: &DumperMiscExpense) -> Self {
        Self {
            id: expense.id,
            date: Some(expense.expense_date),
            kind: RecordKind::DumperMisc {
                dumper: EquipmentRef {
                    id: expense.dumper_id,
                    name: expense.dumper_name.clone(),
                },
                amount: expense.amount,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dumper_misc_expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub expense_date: NaiveDate,
    pub dumper_id: Option<Uuid>,
    pub dumper_name: Option<String>,
    pub description: Option<String>,
    pub amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for DumperMiscExpense {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            expense_date: model.expense_date,
            dumper_id: model.dumper_id,
            dumper_name: model.dumper_name,
            description: model.description,
            amount: model.amount,
        })
    }
}
