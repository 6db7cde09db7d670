use serde::Serialize;

/// Solved per-second rate and its annual projection for one accrual model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelOutcome {
    /// Accrual per second, in the same unit scale as the goal.
    pub per_sec: f64,
    /// Projection of `per_sec` over the 52-week year.
    pub annual_total: f64,
    /// Search iterations taken to reach `per_sec`; 0 for analytic models.
    pub iterations: u64,
}

/// Outcome of a full comparison run: both models plus their rate ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonReport {
    pub linear: ModelOutcome,
    pub compound: ModelOutcome,
    /// `compound.per_sec / linear.per_sec`.
    pub ratio: f64,
}

/// As written to output CSV
#[derive(Debug, Serialize)]
pub struct OutputRow {
    pub model: &'static str,
    pub per_sec: f64,
    pub projected_annual: f64,
    pub ratio_to_linear: f64,
}

impl From<(&'static str, &ModelOutcome, f64)> for OutputRow {
    fn from((model, outcome, ratio_to_linear): (&'static str, &ModelOutcome, f64)) -> Self {
        Self {
            model,
            per_sec: outcome.per_sec,
            projected_annual: outcome.annual_total,
            ratio_to_linear,
        }
    }
}
