//! Registry and daily record tables.
//!
//! - `equipment`: generators, excavators, loaders and dumpers
//! - `expense_categories`: reference list for expenses
//! - `machine_operations`: generator/excavator/loader logs
//! - `dumper_trips`, `dumper_misc_expenses`: dumper costs
//! - `blasting_purchases`
//! - `expenses`: langar, plant and misc ledgers
//! - `salaries`: one row per employee and month
//! - `daily_production`: crushed gravel with its clay/dust split
//!
//! Dumper rows reference equipment by id or name without a foreign key, so
//! deleting a dumper keeps its history.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Equipment {
    Table,
    Id,
    Code,
    Name,
    Kind,
}

#[derive(Iden)]
enum ExpenseCategories {
    Table,
    Id,
    CategoryCode,
    CategoryName,
}

#[derive(Iden)]
enum MachineOperations {
    Table,
    Id,
    Machine,
    OperationDate,
    EquipmentId,
    HoursRun,
    FuelLitres,
    Amount,
    MiscExpense,
    Note,
}

#[derive(Iden)]
enum DumperTrips {
    Table,
    Id,
    TripDate,
    DumperId,
    DumperName,
    Trips,
    CftCarried,
    Amount,
    MiscExpense,
    Note,
}

#[derive(Iden)]
enum DumperMiscExpenses {
    Table,
    Id,
    ExpenseDate,
    DumperId,
    DumperName,
    Description,
    Amount,
}

#[derive(Iden)]
enum BlastingPurchases {
    Table,
    Id,
    PurchaseDate,
    Material,
    Quantity,
    Unit,
    Supplier,
    Amount,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    Ledger,
    ExpenseDate,
    CategoryCode,
    Description,
    Amount,
}

#[derive(Iden)]
enum Salaries {
    Table,
    Id,
    EmployeeName,
    Designation,
    SalaryYear,
    SalaryMonth,
    Amount,
}

#[derive(Iden)]
enum DailyProduction {
    Table,
    Id,
    ProductionDate,
    GravelCft,
    ClayDustPercent,
    ClayDustCft,
    NetAggregateCft,
    Note,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Equipment::Id).blob().not_null().primary_key())
                    .col(ColumnDef::new(Equipment::Code).string().not_null())
                    .col(ColumnDef::new(Equipment::Name).string().not_null())
                    .col(ColumnDef::new(Equipment::Kind).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-equipment-code-unique")
                    .table(Equipment::Table)
                    .col(Equipment::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExpenseCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExpenseCategories::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExpenseCategories::CategoryCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExpenseCategories::CategoryName)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expense_categories-code-unique")
                    .table(ExpenseCategories::Table)
                    .col(ExpenseCategories::CategoryCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MachineOperations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MachineOperations::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MachineOperations::Machine).string().not_null())
                    .col(
                        ColumnDef::new(MachineOperations::OperationDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MachineOperations::EquipmentId).blob())
                    .col(
                        ColumnDef::new(MachineOperations::HoursRun)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MachineOperations::FuelLitres)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(MachineOperations::Amount).double().not_null())
                    .col(
                        ColumnDef::new(MachineOperations::MiscExpense)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(MachineOperations::Note).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-machine_operations-operation_date")
                    .table(MachineOperations::Table)
                    .col(MachineOperations::OperationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DumperTrips::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(DumperTrips::Id).blob().not_null().primary_key())
                    .col(ColumnDef::new(DumperTrips::TripDate).date().not_null())
                    .col(ColumnDef::new(DumperTrips::DumperId).blob())
                    .col(ColumnDef::new(DumperTrips::DumperName).string())
                    .col(
                        ColumnDef::new(DumperTrips::Trips)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DumperTrips::CftCarried)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(DumperTrips::Amount).double().not_null())
                    .col(
                        ColumnDef::new(DumperTrips::MiscExpense)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(DumperTrips::Note).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-dumper_trips-trip_date")
                    .table(DumperTrips::Table)
                    .col(DumperTrips::TripDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DumperMiscExpenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DumperMiscExpenses::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DumperMiscExpenses::ExpenseDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DumperMiscExpenses::DumperId).blob())
                    .col(ColumnDef::new(DumperMiscExpenses::DumperName).string())
                    .col(ColumnDef::new(DumperMiscExpenses::Description).string())
                    .col(
                        ColumnDef::new(DumperMiscExpenses::Amount)
                            .double()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-dumper_misc_expenses-expense_date")
                    .table(DumperMiscExpenses::Table)
                    .col(DumperMiscExpenses::ExpenseDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlastingPurchases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlastingPurchases::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BlastingPurchases::PurchaseDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlastingPurchases::Material).string().not_null())
                    .col(
                        ColumnDef::new(BlastingPurchases::Quantity)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(BlastingPurchases::Unit).string())
                    .col(ColumnDef::new(BlastingPurchases::Supplier).string())
                    .col(ColumnDef::new(BlastingPurchases::Amount).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-blasting_purchases-purchase_date")
                    .table(BlastingPurchases::Table)
                    .col(BlastingPurchases::PurchaseDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Expenses::Id).blob().not_null().primary_key())
                    .col(ColumnDef::new(Expenses::Ledger).string().not_null())
                    .col(ColumnDef::new(Expenses::ExpenseDate).date().not_null())
                    .col(ColumnDef::new(Expenses::CategoryCode).string())
                    .col(ColumnDef::new(Expenses::Description).string())
                    .col(ColumnDef::new(Expenses::Amount).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-expense_date")
                    .table(Expenses::Table)
                    .col(Expenses::ExpenseDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Salaries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Salaries::Id).blob().not_null().primary_key())
                    .col(ColumnDef::new(Salaries::EmployeeName).string().not_null())
                    .col(ColumnDef::new(Salaries::Designation).string())
                    .col(ColumnDef::new(Salaries::SalaryYear).integer().not_null())
                    .col(ColumnDef::new(Salaries::SalaryMonth).integer().not_null())
                    .col(ColumnDef::new(Salaries::Amount).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-salaries-year-month")
                    .table(Salaries::Table)
                    .col(Salaries::SalaryYear)
                    .col(Salaries::SalaryMonth)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DailyProduction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyProduction::Id)
                            .blob()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DailyProduction::ProductionDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DailyProduction::GravelCft).double().not_null())
                    .col(
                        ColumnDef::new(DailyProduction::ClayDustPercent)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DailyProduction::ClayDustCft)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DailyProduction::NetAggregateCft)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DailyProduction::Note).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-daily_production-production_date")
                    .table(DailyProduction::Table)
                    .col(DailyProduction::ProductionDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyProduction::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Salaries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlastingPurchases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DumperMiscExpenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DumperTrips::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MachineOperations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExpenseCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;
        Ok(())
    }
}
