//! Projection state carried across the year loop

/// State carried between projected years
///
/// Balances stay unrounded here; rounding happens once per emitted row.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projected year (1-indexed; 0 before the first iteration)
    pub year: u32,

    /// Outstanding loan balance at the start of the current year
    pub remaining_loan: f64,

    /// Running sum of after-tax cash flow
    pub cumulated_cash: f64,
}

impl ProjectionState {
    /// Initialize state at projection start from the initial principal
    pub fn new(loan0: f64) -> Self {
        Self {
            year: 0,
            remaining_loan: loan0,
            cumulated_cash: 0.0,
        }
    }

    /// Advance to the next year
    pub fn advance_year(&mut self) {
        self.year += 1;
    }

    /// Record a year's after-tax cash flow in the running sum
    pub fn accumulate_cash(&mut self, cf_after_tax: f64) {
        self.cumulated_cash += cf_after_tax;
    }

    /// Apply this year's principal payment, flooring the balance at zero
    pub fn repay(&mut self, principal: f64) {
        self.remaining_loan = (self.remaining_loan - principal).max(0.0);
    }
}
