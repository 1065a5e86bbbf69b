//! Statutory-style payroll estimation.
//!
//! Fixed formulaic approximation, not a configurable rules engine. The
//! rates and the four-slab tax schedule below are the authoritative
//! figures for this estimator; they intentionally simplify the real
//! statutory schedule.

use crate::model::salary::{SalaryBreakdown, TaxBracket};

/// House rent allowance, share of basic.
const HRA_RATE: f64 = 0.40;
/// Conveyance allowance share of basic, subject to the statutory cap.
const CONVEYANCE_RATE: f64 = 0.10;
const CONVEYANCE_CAP: f64 = 19_200.0;
/// Leave travel allowance, roughly one month's basic spread over twelve.
const LTA_RATE: f64 = 0.0833;
/// Flat monthly medical allowance.
const MEDICAL_ALLOWANCE: f64 = 5_000.0;
/// Employee provident-fund share, computed on basic only.
const PF_RATE: f64 = 0.12;
/// Flat monthly professional tax.
const PROFESSIONAL_TAX: f64 = 235.0;

/// Progressive annual income-tax schedule. Slabs are contiguous and
/// ordered; each carries the tax already accumulated below it.
pub const TAX_BRACKETS: [TaxBracket; 4] = [
    TaxBracket { lower: 0.0, upper: Some(250_000.0), rate: 0.0, base_tax: 0.0 },
    TaxBracket { lower: 250_000.0, upper: Some(500_000.0), rate: 0.05, base_tax: 0.0 },
    TaxBracket { lower: 500_000.0, upper: Some(1_000_000.0), rate: 0.20, base_tax: 12_500.0 },
    TaxBracket { lower: 1_000_000.0, upper: None, rate: 0.30, base_tax: 112_500.0 },
];

/// Annual income tax under the slab schedule above. Continuous at slab
/// boundaries; zero for incomes at or below the exemption limit.
pub fn annual_income_tax(annual_income: f64) -> f64 {
    TAX_BRACKETS
        .iter()
        .rev()
        .find(|bracket| annual_income > bracket.lower)
        .map(|bracket| bracket.base_tax + (annual_income - bracket.lower) * bracket.rate)
        .unwrap_or(0.0)
}

/// Derives the monthly salary breakdown from a basic salary figure.
///
/// Assumes a non-negative input; validating user-supplied figures is the
/// caller's job. No rounding is applied here, display formatting decides
/// how many decimals to show.
pub fn compute_salary_breakdown(basic_salary: f64) -> SalaryBreakdown {
    let hra = basic_salary * HRA_RATE;
    let conveyance = (basic_salary * CONVEYANCE_RATE).min(CONVEYANCE_CAP);
    let lta = basic_salary * LTA_RATE;
    let medical = MEDICAL_ALLOWANCE;
    let total_earnings = basic_salary + hra + conveyance + lta + medical;

    let pf = basic_salary * PF_RATE;
    let professional_tax = PROFESSIONAL_TAX;
    let income_tax = annual_income_tax(total_earnings * 12.0) / 12.0;
    let total_deductions = pf + professional_tax + income_tax;

    SalaryBreakdown {
        basic: basic_salary,
        hra,
        conveyance,
        lta,
        medical,
        total_earnings,
        pf,
        professional_tax,
        income_tax,
        total_deductions,
        net_salary: total_earnings - total_deductions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_basic_still_pays_medical_and_owes_professional_tax() {
        let breakdown = compute_salary_breakdown(0.0);
        assert_eq!(breakdown.hra, 0.0);
        assert_eq!(breakdown.conveyance, 0.0);
        assert_eq!(breakdown.lta, 0.0);
        assert_eq!(breakdown.medical, 5_000.0);
        assert_eq!(breakdown.total_earnings, 5_000.0);
        assert_eq!(breakdown.pf, 0.0);
        // annualized 60k is under the exemption limit
        assert_eq!(breakdown.income_tax, 0.0);
        assert_eq!(breakdown.total_deductions, 235.0);
        assert_eq!(breakdown.net_salary, 4_765.0);
    }

    #[test]
    fn thirty_thousand_basic_reference_figures() {
        let breakdown = compute_salary_breakdown(30_000.0);
        assert_close(breakdown.hra, 12_000.0);
        assert_close(breakdown.conveyance, 3_000.0);
        assert_close(breakdown.lta, 2_499.0);
        assert_close(breakdown.medical, 5_000.0);
        assert_close(breakdown.total_earnings, 52_499.0);
        assert_close(breakdown.pf, 3_600.0);
        // 52_499 * 12 = 629_988 lands in the 20% slab:
        // 12_500 + 129_988 * 0.20 = 38_497.6 annually
        assert!((breakdown.income_tax - 38_497.6 / 12.0).abs() < 1e-3);
        assert!((breakdown.total_deductions - 7_043.133_333).abs() < 1e-3);
        assert!((breakdown.net_salary - 45_455.866_667).abs() < 1e-3);
    }

    #[test]
    fn conveyance_never_exceeds_cap() {
        let breakdown = compute_salary_breakdown(500_000.0);
        assert_eq!(breakdown.conveyance, 19_200.0);

        let breakdown = compute_salary_breakdown(192_000.0);
        assert_close(breakdown.conveyance, 19_200.0);
    }

    #[test]
    fn tax_is_continuous_at_slab_boundaries() {
        assert_eq!(annual_income_tax(250_000.0), 0.0);
        assert_close(annual_income_tax(500_000.0), 12_500.0);
        assert_close(annual_income_tax(1_000_000.0), 112_500.0);
    }

    #[test]
    fn tax_slab_spot_checks() {
        assert_eq!(annual_income_tax(0.0), 0.0);
        assert_eq!(annual_income_tax(100_000.0), 0.0);
        assert_close(annual_income_tax(300_000.0), 2_500.0);
        assert_close(annual_income_tax(750_000.0), 62_500.0);
        assert_close(annual_income_tax(2_000_000.0), 412_500.0);
    }

    #[test]
    fn slabs_are_contiguous_and_increasing() {
        for pair in TAX_BRACKETS.windows(2) {
            assert_eq!(pair[0].upper, Some(pair[1].lower));
            assert!(pair[0].rate <= pair[1].rate);
        }
        assert!(TAX_BRACKETS[0].contains(1.0));
        assert!(TAX_BRACKETS[3].contains(f64::MAX));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = compute_salary_breakdown(73_412.55);
        let second = compute_salary_breakdown(73_412.55);
        assert_eq!(first, second);
    }
}
