//! Blasting material purchases.

use chrono::NaiveDate;
use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine,
    aggregation::{RecordKind, TransactionRecord},
    util::{ensure_non_negative, normalize_optional_text, normalize_required_text},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlastingPurchase {
    pub id: Uuid,
    pub purchase_date: NaiveDate,
    pub material: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlastingPurchaseInput {
    pub purchase_date: NaiveDate,
    pub material: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    pub amount: f64,
}

impl BlastingPurchaseInput {
    pub(crate) fn to_active(&self, id: Uuid) -> ResultEngine<ActiveModel> {
        ensure_non_negative("quantity", self.quantity)?;
        ensure_non_negative("amount", self.amount)?;

        Ok(ActiveModel {
            id: ActiveValue::Set(id),
            purchase_date: ActiveValue::Set(self.purchase_date),
            material: ActiveValue::Set(normalize_required_text("material", &self.material)?),
            quantity: ActiveValue::Set(self.quantity),
            unit: ActiveValue::Set(normalize_optional_text(self.unit.as_deref())),
            supplier: ActiveValue::Set(normalize_optional_text(self.supplier.as_deref())),
            amount: ActiveValue::Set(self.amount),
        })
    }
}

impl From<&BlastingPurchase> for TransactionRecord {
    fn from(purchase: &BlastingPurchase) -> Self {
        Self {
            id: purchase.id,
            date: Some(purchase.purchase_date),
            kind: RecordKind::Blasting {
                amount: purchase.amount,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blasting_purchases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub purchase_date: NaiveDate,
    pub material: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub supplier: Option<String>,
    pub amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for BlastingPurchase {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            purchase_date: model.purchase_date,
            material: model.material,
            quantity: model.quantity,
            unit: model.unit,
            supplier: model.supplier,
            amount: model.amount,
        })
    }
}
