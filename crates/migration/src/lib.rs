pub use sea_orm_migration::prelude::*;

mod m20261018_000001_records;
mod m20261018_000002_summaries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_records::Migration),
            Box::new(m20261018_000002_summaries::Migration),
        ]
    }
}
