//! Schedule output structures for projections
//!
//! All monetary fields hold whole-unit values (rounded at emission by the
//! engine); JSON field names match the calculator's results format.

use serde::{Deserialize, Serialize};

/// A single row of projection output for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRow {
    /// Projected year (1-indexed)
    pub year: u32,

    /// Rent net of vacancy, grown from year 2 onwards
    pub net_rent: f64,

    /// Operating costs: owner costs, management, maintenance, other annual
    pub ops: f64,

    /// Debt service actually paid this year (interest + principal)
    pub annuity: f64,

    /// Interest on the balance outstanding at the start of the year
    pub interest: f64,

    /// Principal repayment, capped at the outstanding balance
    pub principal: f64,

    /// Income tax on the operating result; negative values are an offset
    pub tax: f64,

    /// Net rent minus operating costs minus debt service
    pub cf_before_tax: f64,

    /// Cash flow before tax minus the tax amount
    pub cf_after_tax: f64,

    /// Outstanding balance after this year's principal payment
    pub remaining_loan: f64,

    /// Property market value at the end of the year
    pub market_value: f64,

    /// Running sum of after-tax cash flow up to and including this year
    pub cumulated_cash: f64,

    /// Market value minus remaining loan plus cumulated cash
    pub net_wealth: f64,
}

/// Complete projection result: acquisition aggregates, the year schedule,
/// and the summary KPIs derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    /// One-time transaction costs (transfer tax, notary, registry, other)
    pub ancillary_costs: f64,

    /// Full acquisition outlay including furniture and ancillary costs
    pub total_costs: f64,

    /// Equity committed at acquisition
    pub equity: f64,

    /// Initial loan principal
    pub loan0: f64,

    /// Constant annual depreciation allowance (straight-line)
    pub afa_annual: f64,

    /// Year-by-year schedule, ordered 1..=horizonYears
    pub rows: Vec<YearRow>,

    /// Annualized gross rent over purchase price (unrounded ratio)
    pub brutto_yield: f64,

    /// First year's after-tax cash flow per month
    #[serde(rename = "monthlyCF1")]
    pub monthly_cf1: f64,

    /// Total net-wealth gain over initial equity; +infinity when no equity
    /// was committed (serializes to JSON null)
    pub coc_return: f64,

    /// Net wealth at the end of the horizon minus the equity committed
    pub total_profit: f64,

    /// Last row's market value (0 on an empty schedule)
    pub market_value_end: f64,

    /// Last row's remaining loan (the initial principal on an empty schedule)
    pub remaining_loan_end: f64,

    /// Last row's cumulated cash (0 on an empty schedule)
    pub cumulated_cash_end: f64,
}
