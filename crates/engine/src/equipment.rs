//! Equipment registry (generators, excavators, loaders, dumpers).

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    EngineError, ResultEngine, aggregation::Dumper, util::normalize_required_text,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    Generator,
    Excavator,
    Loader,
    Dumper,
}

impl EquipmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::Excavator => "excavator",
            Self::Loader => "loader",
            Self::Dumper => "dumper",
        }
    }
}

impl TryFrom<&str> for EquipmentKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "generator" => Ok(Self::Generator),
            "excavator" => Ok(Self::Excavator),
            "loader" => Ok(Self::Loader),
            "dumper" => Ok(Self::Dumper),
            other => Err(EngineError::validation(
                "kind",
                format!("invalid equipment kind: {other}"),
            )),
        }
    }
}

/// A piece of registered equipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: Uuid,
    /// Short unique code, e.g. `"D-07"`.
    pub code: String,
    pub name: String,
    pub kind: EquipmentKind,
}

impl Equipment {
    pub fn as_dumper(&self) -> Option<Dumper> {
        (self.kind == EquipmentKind::Dumper).then(|| Dumper {
            id: self.id,
            code: self.code.clone(),
            name: self.name.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentInput {
    pub code: String,
    pub name: String,
    pub kind: EquipmentKind,
}

impl EquipmentInput {
    pub(crate) fn to_active(&self, id: Uuid) -> ResultEngine<ActiveModel> {
        Ok(ActiveModel {
            id: ActiveValue::Set(id),
            code: ActiveValue::Set(normalize_required_text("code", &self.code)?),
            name: ActiveValue::Set(normalize_required_text("name", &self.name)?),
            kind: ActiveValue::Set(self.kind.as_str().to_string()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Equipment {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            code: model.code,
            name: model.name,
            kind: EquipmentKind::try_from(model.kind.as_str())?,
        })
    }
}
