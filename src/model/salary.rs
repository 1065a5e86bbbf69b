use serde::{Deserialize, Serialize};

/// Monthly salary breakdown derived from a basic salary figure.
///
/// Computed on demand by the payroll estimator and handed to the
/// persistence layer as-is; nothing in this crate stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub basic: f64,
    pub hra: f64,
    pub conveyance: f64,
    pub lta: f64,
    pub medical: f64,
    pub total_earnings: f64,
    pub pf: f64,
    pub professional_tax: f64,
    pub income_tax: f64,
    pub total_deductions: f64,
    pub net_salary: f64,
}

/// One slab of the progressive annual income-tax schedule.
///
/// `base_tax` is the tax accumulated over all lower slabs, so the tax for
/// an income inside this slab is `base_tax + (income - lower) * rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: f64,
    /// `None` marks the open-ended top slab.
    pub upper: Option<f64>,
    pub rate: f64,
    pub base_tax: f64,
}

impl TaxBracket {
    /// Lower bound exclusive, upper bound inclusive.
    pub fn contains(&self, annual_income: f64) -> bool {
        annual_income > self.lower && self.upper.is_none_or(|u| annual_income <= u)
    }
}
