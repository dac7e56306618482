//! Monthly aggregation of heterogeneous plant records.
//!
//! Every stored record is first lowered into a [`TransactionRecord`]: an id,
//! the date it counts on and a [`RecordKind`] carrying only the numbers the
//! fold needs. [`aggregate_months`] then buckets them by calendar month.
//!
//! Each bucket keeps one field per cost category. Fields ending in `_misc`
//! are reference-only sub-amounts: they never enter [`CostBreakdown::total`]
//! and only show up in [`CostBreakdown::grand_total`].
//!
//! Dumper records are attributed through a [`DumperRegistry`] built from the
//! currently registered dumpers. Records that match no dumper are kept out
//! of both totals but are listed in [`MonthlyAggregation::unattributed`] and
//! summed per month, so renamed or deleted equipment never loses data
//! silently.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    period::{Period, PeriodFilter},
    util::finite_or_zero,
};

/// Reference from a dumper record to the equipment it was logged against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRef {
    pub id: Option<Uuid>,
    pub name: Option<String>,
}

/// A registered dumper, as listed by the record store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dumper {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

/// Lookup from dumper id (or display name) to its bucket slot.
///
/// Built once per aggregation; slot `i` of every bucket's
/// [`CostBreakdown::dumpers`] belongs to `dumpers()[i]`.
#[derive(Clone, Debug, Default)]
pub struct DumperRegistry {
    dumpers: Vec<Dumper>,
    by_id: HashMap<Uuid, usize>,
    by_name: HashMap<String, usize>,
}

impl DumperRegistry {
    pub fn new(dumpers: Vec<Dumper>) -> Self {
        let mut by_id = HashMap::with_capacity(dumpers.len());
        let mut by_name = HashMap::with_capacity(dumpers.len());
        for (index, dumper) in dumpers.iter().enumerate() {
            by_id.insert(dumper.id, index);
            by_name.entry(name_key(&dumper.name)).or_insert(index);
        }
        Self {
            dumpers,
            by_id,
            by_name,
        }
    }

    pub fn dumpers(&self) -> &[Dumper] {
        &self.dumpers
    }

    /// Match by id first, then by display name (trimmed, case-insensitive).
    pub fn resolve(&self, reference: &EquipmentRef) -> Option<usize> {
        if let Some(index) = reference.id.and_then(|id| self.by_id.get(&id)) {
            return Some(*index);
        }
        reference
            .name
            .as_deref()
            .and_then(|name| self.by_name.get(&name_key(name)))
            .copied()
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The numbers one record contributes, by category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum RecordKind {
    Generator {
        amount: f64,
    },
    Excavator {
        amount: f64,
        misc_expense: f64,
    },
    Loader {
        amount: f64,
        misc_expense: f64,
    },
    DumperTrip {
        dumper: EquipmentRef,
        amount: f64,
        misc_expense: f64,
    },
    DumperMisc {
        dumper: EquipmentRef,
        amount: f64,
    },
    Blasting {
        amount: f64,
    },
    Langar {
        amount: f64,
    },
    PlantExpense {
        amount: f64,
    },
    MiscExpense {
        amount: f64,
    },
    Salary {
        amount: f64,
    },
    Production {
        gravel_cft: f64,
        clay_dust_cft: f64,
        net_aggregate_cft: f64,
    },
}

impl RecordKind {
    /// Amount that counts towards the operational total.
    pub fn primary_amount(&self) -> f64 {
        match self {
            Self::Generator { amount }
            | Self::Excavator { amount, .. }
            | Self::Loader { amount, .. }
            | Self::DumperTrip { amount, .. }
            | Self::Blasting { amount }
            | Self::Langar { amount }
            | Self::PlantExpense { amount }
            | Self::MiscExpense { amount }
            | Self::Salary { amount } => finite_or_zero(*amount),
            Self::DumperMisc { .. } | Self::Production { .. } => 0.0,
        }
    }

    /// Reference-only misc sub-amount.
    pub fn misc_amount(&self) -> f64 {
        match self {
            Self::Excavator { misc_expense, .. }
            | Self::Loader { misc_expense, .. }
            | Self::DumperTrip { misc_expense, .. } => finite_or_zero(*misc_expense),
            Self::DumperMisc { amount, .. } => finite_or_zero(*amount),
            _ => 0.0,
        }
    }
}

/// A record lowered for aggregation.
///
/// `date` is the date the record counts on: the operation, trip, expense,
/// purchase or production date, or day 1 of a salary's month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub date: Option<NaiveDate>,
    pub kind: RecordKind,
}

/// Per-dumper totals inside a bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DumperTotals {
    pub dumper_id: Uuid,
    pub code: String,
    pub name: String,
    pub amount: f64,
    pub misc: f64,
}

/// Cost fields of one bucket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub generator: f64,
    pub excavator: f64,
    pub excavator_misc: f64,
    pub loaders: f64,
    pub loaders_misc: f64,
    pub dumpers: Vec<DumperTotals>,
    pub blasting: f64,
    pub langar: f64,
    pub plant_exp: f64,
    pub human_res: f64,
    pub misc_exp: f64,
    /// Dumper amounts whose equipment is no longer registered.
    pub unattributed_dumper: f64,
    pub unattributed_dumper_misc: f64,
}

impl CostBreakdown {
    /// Zeroed breakdown with one slot per registered dumper.
    pub fn empty(registry: &DumperRegistry) -> Self {
        Self {
            dumpers: registry
                .dumpers()
                .iter()
                .map(|dumper| DumperTotals {
                    dumper_id: dumper.id,
                    code: dumper.code.clone(),
                    name: dumper.name.clone(),
                    amount: 0.0,
                    misc: 0.0,
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn dumper_total(&self) -> f64 {
        self.dumpers.iter().map(|d| d.amount).sum()
    }

    pub fn dumper_misc_total(&self) -> f64 {
        self.dumpers.iter().map(|d| d.misc).sum()
    }

    /// Sum of every primary category, `_misc` fields excluded.
    pub fn total(&self) -> f64 {
        self.generator
            + self.excavator
            + self.loaders
            + self.dumper_total()
            + self.blasting
            + self.langar
            + self.plant_exp
            + self.human_res
            + self.misc_exp
    }

    /// Sum of every `_misc` field.
    pub fn misc_total(&self) -> f64 {
        self.excavator_misc + self.loaders_misc + self.dumper_misc_total()
    }

    pub fn grand_total(&self) -> f64 {
        self.total() + self.misc_total()
    }

    /// Add another breakdown built from the same registry.
    pub fn absorb(&mut self, other: &CostBreakdown) {
        self.generator += other.generator;
        self.excavator += other.excavator;
        self.excavator_misc += other.excavator_misc;
        self.loaders += other.loaders;
        self.loaders_misc += other.loaders_misc;
        self.blasting += other.blasting;
        self.langar += other.langar;
        self.plant_exp += other.plant_exp;
        self.human_res += other.human_res;
        self.misc_exp += other.misc_exp;
        self.unattributed_dumper += other.unattributed_dumper;
        self.unattributed_dumper_misc += other.unattributed_dumper_misc;
        for theirs in &other.dumpers {
            match self
                .dumpers
                .iter_mut()
                .find(|ours| ours.dumper_id == theirs.dumper_id)
            {
                Some(ours) => {
                    ours.amount += theirs.amount;
                    ours.misc += theirs.misc;
                }
                None => self.dumpers.push(theirs.clone()),
            }
        }
    }
}

/// Production figures of one bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionBreakdown {
    pub entries: u32,
    pub gravel_cft: f64,
    pub clay_dust_cft: f64,
    pub net_aggregate_cft: f64,
}

impl ProductionBreakdown {
    pub fn absorb(&mut self, other: &ProductionBreakdown) {
        self.entries += other.entries;
        self.gravel_cft += other.gravel_cft;
        self.clay_dust_cft += other.clay_dust_cft;
        self.net_aggregate_cft += other.net_aggregate_cft;
    }
}

/// One calendar month of costs and production.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub period: Period,
    /// Display key such as `"Feb-25"`. Use `period` for ordering.
    pub key: String,
    pub costs: CostBreakdown,
    pub production: ProductionBreakdown,
}

impl MonthlyBucket {
    fn new(period: Period, registry: &DumperRegistry) -> Self {
        Self {
            period,
            key: period.label(),
            costs: CostBreakdown::empty(registry),
            production: ProductionBreakdown::default(),
        }
    }

    pub fn total(&self) -> f64 {
        self.costs.total()
    }

    pub fn grand_total(&self) -> f64 {
        self.costs.grand_total()
    }
}

/// Every month of one year folded together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearlyBucket {
    pub year: i32,
    pub months: u32,
    pub costs: CostBreakdown,
    pub production: ProductionBreakdown,
}

/// A dumper record that matched no registered dumper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnattributedRecord {
    pub record_id: Uuid,
    pub date: NaiveDate,
    pub reference: EquipmentRef,
    pub amount: f64,
    pub misc_expense: f64,
}

/// Result of [`aggregate_months`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MonthlyAggregation {
    pub dumpers: Vec<Dumper>,
    pub months: BTreeMap<Period, MonthlyBucket>,
    pub unattributed: Vec<UnattributedRecord>,
    /// Records dropped because they had no resolvable date.
    pub undated: usize,
}

impl MonthlyAggregation {
    pub fn bucket(&self, period: Period) -> Option<&MonthlyBucket> {
        self.months.get(&period)
    }

    /// Buckets newest first.
    pub fn months_desc(&self) -> impl Iterator<Item = &MonthlyBucket> {
        self.months.values().rev()
    }

    pub fn into_months_desc(self) -> Vec<MonthlyBucket> {
        self.months.into_values().rev().collect()
    }

    /// Fold every bucket of `year`, `None` when the year has no bucket.
    pub fn year(&self, year: i32) -> Option<YearlyBucket> {
        let mut months = self
            .months
            .values()
            .filter(|bucket| bucket.period.year() == year)
            .peekable();
        let first = months.peek()?;
        let mut yearly = YearlyBucket {
            year,
            months: 0,
            costs: CostBreakdown {
                dumpers: first
                    .costs
                    .dumpers
                    .iter()
                    .map(|d| DumperTotals {
                        amount: 0.0,
                        misc: 0.0,
                        ..d.clone()
                    })
                    .collect(),
                ..CostBreakdown::default()
            },
            production: ProductionBreakdown::default(),
        };
        for bucket in months {
            yearly.months += 1;
            yearly.costs.absorb(&bucket.costs);
            yearly.production.absorb(&bucket.production);
        }
        Some(yearly)
    }

    pub fn total(&self) -> f64 {
        self.months.values().map(MonthlyBucket::total).sum()
    }

    pub fn grand_total(&self) -> f64 {
        self.months.values().map(MonthlyBucket::grand_total).sum()
    }
}

/// Bucket `records` by calendar month.
///
/// When `filter` is given, each record's own month/year is checked against it
/// before bucketing. Records without a date are counted in
/// [`MonthlyAggregation::undated`] and otherwise ignored.
pub fn aggregate_months<'a, I>(
    records: I,
    registry: &DumperRegistry,
    filter: Option<&PeriodFilter>,
) -> MonthlyAggregation
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut aggregation = MonthlyAggregation {
        dumpers: registry.dumpers().to_vec(),
        ..MonthlyAggregation::default()
    };

    for record in records {
        let Some(date) = record.date else {
            aggregation.undated += 1;
            continue;
        };
        let period = Period::from_date(date);
        if filter.is_some_and(|filter| !filter.matches(period)) {
            continue;
        }

        let bucket = aggregation
            .months
            .entry(period)
            .or_insert_with(|| MonthlyBucket::new(period, registry));
        let costs = &mut bucket.costs;

        match &record.kind {
            RecordKind::Generator { amount } => costs.generator += finite_or_zero(*amount),
            RecordKind::Excavator {
                amount,
                misc_expense,
            } => {
                costs.excavator += finite_or_zero(*amount);
                costs.excavator_misc += finite_or_zero(*misc_expense);
            }
            RecordKind::Loader {
                amount,
                misc_expense,
            } => {
                costs.loaders += finite_or_zero(*amount);
                costs.loaders_misc += finite_or_zero(*misc_expense);
            }
            RecordKind::DumperTrip { dumper, .. } | RecordKind::DumperMisc { dumper, .. } => {
                let amount = record.kind.primary_amount();
                let misc = record.kind.misc_amount();
                match registry.resolve(dumper) {
                    Some(index) => {
                        let slot = &mut costs.dumpers[index];
                        slot.amount += amount;
                        slot.misc += misc;
                    }
                    None => {
                        tracing::warn!(
                            record_id = %record.id,
                            %date,
                            dumper_id = ?dumper.id,
                            dumper_name = ?dumper.name,
                            "dumper record matches no registered dumper"
                        );
                        costs.unattributed_dumper += amount;
                        costs.unattributed_dumper_misc += misc;
                        aggregation.unattributed.push(UnattributedRecord {
                            record_id: record.id,
                            date,
                            reference: dumper.clone(),
                            amount,
                            misc_expense: misc,
                        });
                    }
                }
            }
            RecordKind::Blasting { amount } => costs.blasting += finite_or_zero(*amount),
            RecordKind::Langar { amount } => costs.langar += finite_or_zero(*amount),
            RecordKind::PlantExpense { amount } => costs.plant_exp += finite_or_zero(*amount),
            RecordKind::MiscExpense { amount } => costs.misc_exp += finite_or_zero(*amount),
            RecordKind::Salary { amount } => costs.human_res += finite_or_zero(*amount),
            RecordKind::Production {
                gravel_cft,
                clay_dust_cft,
                net_aggregate_cft,
            } => {
                let production = &mut bucket.production;
                production.entries += 1;
                production.gravel_cft += finite_or_zero(*gravel_cft);
                production.clay_dust_cft += finite_or_zero(*clay_dust_cft);
                production.net_aggregate_cft += finite_or_zero(*net_aggregate_cft);
            }
        }
    }

    if aggregation.undated > 0 {
        tracing::debug!(count = aggregation.undated, "dropped undated records");
    }

    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn record(date: Option<NaiveDate>, kind: RecordKind) -> TransactionRecord {
        TransactionRecord {
            id: Uuid::new_v4(),
            date,
            kind,
        }
    }

    fn registry() -> (DumperRegistry, Uuid, Uuid) {
        let d1 = Uuid::new_v4();
        let d2 = Uuid::new_v4();
        let registry = DumperRegistry::new(vec![
            Dumper {
                id: d1,
                code: "D1".to_string(),
                name: "Dumper One".to_string(),
            },
            Dumper {
                id: d2,
                code: "D2".to_string(),
                name: "Dumper Two".to_string(),
            },
        ]);
        (registry, d1, d2)
    }

    fn by_id(id: Uuid) -> EquipmentRef {
        EquipmentRef {
            id: Some(id),
            name: None,
        }
    }

    fn by_name(name: &str) -> EquipmentRef {
        EquipmentRef {
            id: None,
            name: Some(name.to_string()),
        }
    }

    fn sample(d1: Uuid) -> Vec<TransactionRecord> {
        vec![
            record(date(2025, 2, 3), RecordKind::Generator { amount: 1000.0 }),
            record(
                date(2025, 2, 4),
                RecordKind::Excavator {
                    amount: 5000.0,
                    misc_expense: 300.0,
                },
            ),
            record(
                date(2025, 2, 5),
                RecordKind::Loader {
                    amount: 2000.0,
                    misc_expense: 50.0,
                },
            ),
            record(
                date(2025, 2, 6),
                RecordKind::DumperTrip {
                    dumper: by_id(d1),
                    amount: 1500.0,
                    misc_expense: 100.0,
                },
            ),
            record(
                date(2025, 2, 7),
                RecordKind::DumperMisc {
                    dumper: by_name("  dumper two "),
                    amount: 75.0,
                },
            ),
            record(date(2025, 2, 8), RecordKind::Blasting { amount: 8000.0 }),
            record(date(2025, 2, 9), RecordKind::Langar { amount: 400.0 }),
            record(date(2025, 2, 10), RecordKind::PlantExpense { amount: 600.0 }),
            record(date(2025, 2, 11), RecordKind::MiscExpense { amount: 250.0 }),
            record(date(2025, 2, 1), RecordKind::Salary { amount: 30000.0 }),
            record(date(2025, 3, 1), RecordKind::Salary { amount: 31000.0 }),
            record(
                date(2025, 3, 2),
                RecordKind::Production {
                    gravel_cft: 300.0,
                    clay_dust_cft: 100.0,
                    net_aggregate_cft: 200.0,
                },
            ),
        ]
    }

    #[test]
    fn buckets_every_category_into_its_field() {
        let (registry, d1, d2) = registry();
        let records = sample(d1);
        let aggregation = aggregate_months(&records, &registry, None);

        let feb = aggregation
            .bucket(Period::new(2025, 2).unwrap())
            .unwrap();
        assert_eq!(feb.key, "Feb-25");
        let costs = &feb.costs;
        assert_eq!(costs.generator, 1000.0);
        assert_eq!(costs.excavator, 5000.0);
        assert_eq!(costs.excavator_misc, 300.0);
        assert_eq!(costs.loaders, 2000.0);
        assert_eq!(costs.loaders_misc, 50.0);
        assert_eq!(costs.dumpers[0].dumper_id, d1);
        assert_eq!(costs.dumpers[0].amount, 1500.0);
        assert_eq!(costs.dumpers[0].misc, 100.0);
        assert_eq!(costs.dumpers[1].dumper_id, d2);
        assert_eq!(costs.dumpers[1].amount, 0.0);
        assert_eq!(costs.dumpers[1].misc, 75.0);
        assert_eq!(costs.blasting, 8000.0);
        assert_eq!(costs.langar, 400.0);
        assert_eq!(costs.plant_exp, 600.0);
        assert_eq!(costs.misc_exp, 250.0);
        assert_eq!(costs.human_res, 30000.0);

        assert_eq!(feb.total(), 48750.0);
        assert_eq!(feb.grand_total(), 48750.0 + 300.0 + 50.0 + 100.0 + 75.0);

        let mar = aggregation
            .bucket(Period::new(2025, 3).unwrap())
            .unwrap();
        assert_eq!(mar.costs.human_res, 31000.0);
        assert_eq!(mar.production.entries, 1);
        assert_eq!(mar.production.net_aggregate_cft, 200.0);
        assert_eq!(mar.total(), 31000.0);
    }

    #[test]
    fn total_matches_sum_of_contributing_records() {
        let (registry, d1, _) = registry();
        let records = sample(d1);
        let aggregation = aggregate_months(&records, &registry, None);

        let expected: f64 = records.iter().map(|r| r.kind.primary_amount()).sum();
        let expected_misc: f64 = records.iter().map(|r| r.kind.misc_amount()).sum();
        assert!((aggregation.total() - expected).abs() < EPS);
        assert!((aggregation.grand_total() - aggregation.total() - expected_misc).abs() < EPS);
        for bucket in aggregation.months.values() {
            assert!(
                (bucket.grand_total() - bucket.total() - bucket.costs.misc_total()).abs() < EPS
            );
        }
    }

    #[test]
    fn undated_records_are_dropped_and_counted() {
        let (registry, _, _) = registry();
        let records = vec![
            record(None, RecordKind::Generator { amount: 99.0 }),
            record(date(2025, 1, 1), RecordKind::Generator { amount: 1.0 }),
        ];
        let aggregation = aggregate_months(&records, &registry, None);
        assert_eq!(aggregation.undated, 1);
        assert_eq!(aggregation.total(), 1.0);
    }

    #[test]
    fn unregistered_dumper_is_reported_not_totalled() {
        let (registry, d1, _) = registry();
        let ghost = Uuid::new_v4();
        let records = vec![
            record(
                date(2025, 2, 6),
                RecordKind::DumperTrip {
                    dumper: EquipmentRef {
                        id: Some(ghost),
                        name: Some("Scrapped".to_string()),
                    },
                    amount: 900.0,
                    misc_expense: 20.0,
                },
            ),
            record(
                date(2025, 2, 6),
                RecordKind::DumperTrip {
                    dumper: EquipmentRef {
                        id: Some(ghost),
                        name: Some("Dumper One".to_string()),
                    },
                    amount: 100.0,
                    misc_expense: 0.0,
                },
            ),
        ];
        let aggregation = aggregate_months(&records, &registry, None);
        let feb = aggregation
            .bucket(Period::new(2025, 2).unwrap())
            .unwrap();

        // second record falls back to the display name
        assert_eq!(feb.costs.dumpers[0].dumper_id, d1);
        assert_eq!(feb.costs.dumpers[0].amount, 100.0);
        assert_eq!(feb.total(), 100.0);
        assert_eq!(feb.grand_total(), 100.0);
        assert_eq!(feb.costs.unattributed_dumper, 900.0);
        assert_eq!(feb.costs.unattributed_dumper_misc, 20.0);
        assert_eq!(aggregation.unattributed.len(), 1);
        assert_eq!(aggregation.unattributed[0].amount, 900.0);
        assert_eq!(aggregation.unattributed[0].misc_expense, 20.0);
    }

    #[test]
    fn filter_is_applied_per_record() {
        let (registry, _, _) = registry();
        let records = vec![
            record(date(2024, 2, 10), RecordKind::Langar { amount: 1.0 }),
            record(date(2025, 2, 10), RecordKind::Langar { amount: 2.0 }),
            record(date(2025, 3, 10), RecordKind::Langar { amount: 4.0 }),
        ];

        let feb_any_year = PeriodFilter::new(Some(2), None).unwrap();
        let aggregation = aggregate_months(&records, &registry, Some(&feb_any_year));
        assert_eq!(aggregation.months.len(), 2);
        assert_eq!(aggregation.total(), 3.0);

        let only_2025 = PeriodFilter::year(2025);
        let aggregation = aggregate_months(&records, &registry, Some(&only_2025));
        assert_eq!(aggregation.total(), 6.0);

        let feb_2025 = PeriodFilter::new(Some(2), Some(2025)).unwrap();
        let aggregation = aggregate_months(&records, &registry, Some(&feb_2025));
        assert_eq!(aggregation.total(), 2.0);
    }

    #[test]
    fn months_iterate_newest_first_across_decades() {
        let (registry, _, _) = registry();
        let records = vec![
            record(date(2009, 12, 1), RecordKind::Langar { amount: 1.0 }),
            record(date(2010, 1, 1), RecordKind::Langar { amount: 1.0 }),
            record(date(2099, 6, 1), RecordKind::Langar { amount: 1.0 }),
            record(date(2100, 1, 1), RecordKind::Langar { amount: 1.0 }),
        ];
        let aggregation = aggregate_months(&records, &registry, None);
        let keys: Vec<_> = aggregation.months_desc().map(|b| b.key.clone()).collect();
        assert_eq!(keys, ["Jan-00", "Jun-99", "Jan-10", "Dec-09"]);
    }

    #[test]
    fn non_finite_amounts_count_as_zero() {
        let (registry, _, _) = registry();
        let records = vec![
            record(date(2025, 1, 1), RecordKind::Generator { amount: f64::NAN }),
            record(date(2025, 1, 2), RecordKind::Generator { amount: 5.0 }),
        ];
        let aggregation = aggregate_months(&records, &registry, None);
        assert_eq!(aggregation.total(), 5.0);
    }

    #[test]
    fn year_folds_every_month_of_that_year() {
        let (registry, d1, _) = registry();
        let mut records = sample(d1);
        records.push(record(date(2024, 12, 1), RecordKind::Salary { amount: 7.0 }));
        let aggregation = aggregate_months(&records, &registry, None);

        let year = aggregation.year(2025).unwrap();
        assert_eq!(year.months, 2);
        assert_eq!(year.costs.human_res, 61000.0);
        assert_eq!(year.costs.dumpers[0].amount, 1500.0);
        assert_eq!(year.production.gravel_cft, 300.0);
        assert!(aggregation.year(2023).is_none());
    }
}
