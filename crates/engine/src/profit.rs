//! Partner profit sharing.
//!
//! The split is an explicit [`ProfitShares`] value handed to every
//! calculation. Its constructor guarantees both percentages are in
//! `[0, 100]` and add up to 100, so the two shares always reconcile to the
//! net profit.

use serde::{Deserialize, Serialize};

use crate::{
    EngineError, ResultEngine,
    period::Period,
    util::{ensure_non_negative, ensure_percent, normalize_required_text},
};

const SHARE_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    pub percent: f64,
}

/// Validated partner split.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfitShares {
    partner_a: Partner,
    partner_b: Partner,
}

impl ProfitShares {
    pub fn new(partner_a: Partner, partner_b: Partner) -> ResultEngine<Self> {
        ensure_percent("partner_a_percent", partner_a.percent)?;
        ensure_percent("partner_b_percent", partner_b.percent)?;
        let sum = partner_a.percent + partner_b.percent;
        if (sum - 100.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(EngineError::validation(
                "partner_shares",
                format!("percentages must add up to 100, got {sum}"),
            ));
        }
        Ok(Self {
            partner_a: Partner {
                name: normalize_required_text("partner_a_name", &partner_a.name)?,
                percent: partner_a.percent,
            },
            partner_b: Partner {
                name: normalize_required_text("partner_b_name", &partner_b.name)?,
                percent: partner_b.percent,
            },
        })
    }

    pub fn partner_a(&self) -> &Partner {
        &self.partner_a
    }

    pub fn partner_b(&self) -> &Partner {
        &self.partner_b
    }
}

impl Default for ProfitShares {
    fn default() -> Self {
        Self {
            partner_a: Partner {
                name: "Partner A".to_string(),
                percent: 50.0,
            },
            partner_b: Partner {
                name: "Partner B".to_string(),
                percent: 50.0,
            },
        }
    }
}

/// One month's profit split.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfitSharingResult {
    pub period: Period,
    pub total_expense: f64,
    pub total_revenue: f64,
    /// Negative for a loss.
    pub net_profit: f64,
    pub partner_a: Partner,
    pub partner_b: Partner,
    pub partner_a_share: f64,
    pub partner_b_share: f64,
}

pub fn calculate_profit_sharing(
    period: Period,
    total_expense: f64,
    total_revenue: f64,
    shares: &ProfitShares,
) -> ResultEngine<ProfitSharingResult> {
    ensure_non_negative("total_expense", total_expense)?;
    if !total_revenue.is_finite() {
        return Err(EngineError::validation(
            "total_revenue",
            "must be a finite number",
        ));
    }

    let net_profit = total_revenue - total_expense;
    Ok(ProfitSharingResult {
        period,
        total_expense,
        total_revenue,
        net_profit,
        partner_a: shares.partner_a.clone(),
        partner_b: shares.partner_b.clone(),
        partner_a_share: net_profit * shares.partner_a.percent / 100.0,
        partner_b_share: net_profit * shares.partner_b.percent / 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner(name: &str, percent: f64) -> Partner {
        Partner {
            name: name.to_string(),
            percent,
        }
    }

    fn period() -> Period {
        Period::new(2025, 2).unwrap()
    }

    #[test]
    fn even_split_scenario() {
        let shares = ProfitShares::new(partner("Asif", 50.0), partner("Bilal", 50.0)).unwrap();
        let result = calculate_profit_sharing(period(), 700000.0, 924400.0, &shares).unwrap();
        assert_eq!(result.net_profit, 224400.0);
        assert_eq!(result.partner_a_share, 112200.0);
        assert_eq!(result.partner_b_share, 112200.0);
    }

    #[test]
    fn loss_is_shared_too() {
        let shares = ProfitShares::new(partner("A", 60.0), partner("B", 40.0)).unwrap();
        let result = calculate_profit_sharing(period(), 1000.0, 500.0, &shares).unwrap();
        assert_eq!(result.net_profit, -500.0);
        assert_eq!(result.partner_a_share, -300.0);
        assert_eq!(result.partner_b_share, -200.0);
    }

    #[test]
    fn uneven_split_reconciles_to_net_profit() {
        let shares = ProfitShares::new(partner("A", 33.3), partner("B", 66.7)).unwrap();
        let result = calculate_profit_sharing(period(), 123.45, 98765.43, &shares).unwrap();
        assert!(
            (result.partner_a_share + result.partner_b_share - result.net_profit).abs() < 1e-6
        );
    }

    #[test]
    fn rejects_shares_not_adding_to_100() {
        let err = ProfitShares::new(partner("A", 50.0), partner("B", 40.0)).unwrap_err();
        assert_eq!(err.field(), Some("partner_shares"));
        let err = ProfitShares::new(partner("A", 150.0), partner("B", -50.0)).unwrap_err();
        assert_eq!(err.field(), Some("partner_a_percent"));
        let err = ProfitShares::new(partner(" ", 50.0), partner("B", 50.0)).unwrap_err();
        assert_eq!(err.field(), Some("partner_a_name"));
    }

    #[test]
    fn rejects_negative_expense() {
        let shares = ProfitShares::default();
        let err = calculate_profit_sharing(period(), -1.0, 0.0, &shares).unwrap_err();
        assert_eq!(err.field(), Some("total_expense"));
    }
}
