use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of `get_donation_stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DonationStats {
    pub total_donations: i64,
    /// `SUM` over an empty range is null; read as 0.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub average_donation: f64,
    /// Keyed by objective type name; objectives without donations may be absent.
    #[serde(default)]
    pub by_objective: BTreeMap<String, f64>,
    /// Keyed by month label as produced by the procedure.
    #[serde(default)]
    pub by_month: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryImpact {
    pub programs: i64,
    pub beneficiaries: i64,
    pub budget: f64,
}

/// Result of `get_program_impact`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramImpact {
    pub total_programs: i64,
    pub active_programs: i64,
    pub total_beneficiaries: i64,
    pub total_volunteers: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_budget: f64,
    #[serde(default)]
    pub by_category: BTreeMap<String, CategoryImpact>,
}

/// One row of `search_programs`. The procedure returns a program subset plus a
/// relevance rank; unknown columns are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgramSearchHit {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub category_id: Option<Uuid>,
    pub rank: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub fiscal_year: String,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_surplus: f64,
    #[serde(default)]
    pub income_sources: BTreeMap<String, f64>,
    #[serde(default)]
    pub expense_categories: BTreeMap<String, f64>,
}

impl From<&crate::model::FinancialReport> for FinancialSummary {
    fn from(r: &crate::model::FinancialReport) -> Self {
        let total_income = r.total_income.unwrap_or(0.0);
        let total_expenses = r.total_expenses.unwrap_or(0.0);
        FinancialSummary {
            fiscal_year: r.fiscal_year.clone(),
            total_income,
            total_expenses,
            net_surplus: total_income - total_expenses,
            income_sources: r.income_breakdown.clone().unwrap_or_default(),
            expense_categories: r.expense_breakdown.clone().unwrap_or_default(),
        }
    }
}
