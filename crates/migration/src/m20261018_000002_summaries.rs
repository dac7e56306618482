//! Frozen monthly figures.
//!
//! Both tables are keyed by period through a unique index, so saving a
//! month again has to update the existing row.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum MonthlyProductionSummaries {
    Table,
    Id,
    SummaryYear,
    SummaryMonth,
    SoldAtSiteCft,
    SoldAtSiteAmount,
    ApproxPerCftCost,
    AllowancePercent,
    TotalNetAggregateCft,
    AllowanceDeductionCft,
    TotalProducedCft,
    StockAtSiteCft,
    PerCftSellingPrice,
    StockValue,
    TotalCost,
    TotalRevenue,
    SavedAt,
}

#[derive(Iden)]
enum ProfitSharingRecords {
    Table,
    Id,
    PeriodMonth,
    PeriodYear,
    TotalExpense,
    TotalRevenue,
    NetProfit,
    PartnerAName,
    PartnerAPercent,
    PartnerAShare,
    PartnerBName,
    PartnerBPercent,
    PartnerBShare,
    SavedAt,
}

fn amount<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column).double().not_null().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        use MonthlyProductionSummaries as Mps;

        manager
            .create_table(
                Table::create()
                    .table(Mps::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Mps::Id).blob().not_null().primary_key())
                    .col(ColumnDef::new(Mps::SummaryYear).integer().not_null())
                    .col(ColumnDef::new(Mps::SummaryMonth).string().not_null())
                    .col(&mut amount(Mps::SoldAtSiteCft))
                    .col(&mut amount(Mps::SoldAtSiteAmount))
                    .col(&mut amount(Mps::ApproxPerCftCost))
                    .col(&mut amount(Mps::AllowancePercent))
                    .col(&mut amount(Mps::TotalNetAggregateCft))
                    .col(&mut amount(Mps::AllowanceDeductionCft))
                    .col(&mut amount(Mps::TotalProducedCft))
                    .col(&mut amount(Mps::StockAtSiteCft))
                    .col(&mut amount(Mps::PerCftSellingPrice))
                    .col(&mut amount(Mps::StockValue))
                    .col(&mut amount(Mps::TotalCost))
                    .col(&mut amount(Mps::TotalRevenue))
                    .col(ColumnDef::new(Mps::SavedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-monthly_production_summaries-year-month-unique")
                    .table(Mps::Table)
                    .col(Mps::SummaryYear)
                    .col(Mps::SummaryMonth)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProfitSharingRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfitSharingRecords::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProfitSharingRecords::PeriodMonth)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfitSharingRecords::PeriodYear)
                            .integer()
                            .not_null(),
                    )
                    .col(&mut amount(ProfitSharingRecords::TotalExpense))
                    .col(&mut amount(ProfitSharingRecords::TotalRevenue))
                    .col(&mut amount(ProfitSharingRecords::NetProfit))
                    .col(
                        ColumnDef::new(ProfitSharingRecords::PartnerAName)
                            .string()
                            .not_null(),
                    )
                    .col(&mut amount(ProfitSharingRecords::PartnerAPercent))
                    .col(&mut amount(ProfitSharingRecords::PartnerAShare))
                    .col(
                        ColumnDef::new(ProfitSharingRecords::PartnerBName)
                            .string()
                            .not_null(),
                    )
                    .col(&mut amount(ProfitSharingRecords::PartnerBPercent))
                    .col(&mut amount(ProfitSharingRecords::PartnerBShare))
                    .col(
                        ColumnDef::new(ProfitSharingRecords::SavedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-profit_sharing_records-month-year-unique")
                    .table(ProfitSharingRecords::Table)
                    .col(ProfitSharingRecords::PeriodMonth)
                    .col(ProfitSharingRecords::PeriodYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfitSharingRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(MonthlyProductionSummaries::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
