use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    Dumper, DumperRegistry, EngineError, Equipment, EquipmentInput, EquipmentKind, ResultEngine,
    equipment,
};

use super::{Engine, delete_existing, with_tx};

impl Engine {
    /// Register a piece of equipment. Codes are unique.
    pub async fn add_equipment(&self, input: &EquipmentInput) -> ResultEngine<Uuid> {
        let id = Uuid::new_v4();
        let active = input.to_active(id)?;
        let code = input.code.trim().to_string();
        with_tx!(self, |db_tx| {
            let exists = equipment::Entity::find()
                .filter(equipment::Column::Code.eq(code.clone()))
                .one(&db_tx)
                .await?;
            if exists.is_some() {
                return Err(EngineError::ExistingKey(code));
            }
            active.insert(&db_tx).await?;
            Ok(id)
        })
    }

    /// Every registered equipment, ordered by code.
    pub async fn list_equipment(&self) -> ResultEngine<Vec<Equipment>> {
        equipment::Entity::find()
            .order_by_asc(equipment::Column::Code)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Equipment::try_from)
            .collect()
    }

    /// Remove equipment from the registry.
    ///
    /// Records logged against a deleted dumper are kept; the aggregation
    /// reports them as unattributed.
    pub async fn delete_equipment(&self, id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            delete_existing::<equipment::Entity>(&db_tx, id, "equipment").await
        })
    }

    /// Registered dumpers ordered by code.
    pub async fn list_registered_dumpers(&self) -> ResultEngine<Vec<Dumper>> {
        let models = equipment::Entity::find()
            .filter(equipment::Column::Kind.eq(EquipmentKind::Dumper.as_str()))
            .order_by_asc(equipment::Column::Code)
            .all(&self.database)
            .await?;

        let mut dumpers = Vec::with_capacity(models.len());
        for model in models {
            if let Some(dumper) = Equipment::try_from(model)?.as_dumper() {
                dumpers.push(dumper);
            }
        }
        Ok(dumpers)
    }

    pub(crate) async fn dumper_registry(&self) -> ResultEngine<DumperRegistry> {
        Ok(DumperRegistry::new(self.list_registered_dumpers().await?))
    }
}
