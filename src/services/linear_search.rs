use crate::errors::{AppErrors, AppResult};
use crate::models::params::ComparisonParams;
use crate::models::projection::ModelOutcome;
use crate::services::rate_model::{RateModel, project_annual};
use log::debug;

/// Brute-force model: raise the per-second rate by a fixed step until its
/// annual projection reaches the goal.
pub struct LinearSearch;

impl RateModel for LinearSearch {
    fn label(&self) -> &'static str {
        "linear"
    }

    fn solve(&self, params: &ComparisonParams) -> AppResult<ModelOutcome> {
        search_linear_rate(params)
    }
}

/// Searches for the smallest positive multiple of `params.step` whose
/// 52-week projection reaches `params.goal_per_unit`.
///
/// The projection grows strictly each iteration and is unbounded, so the
/// loop terminates for every validated parameter set.
///
/// # Arguments
/// * `params` - The numeric inputs of the comparison run.
///
/// # Returns
/// * `AppResult<ModelOutcome>` - Returns the found rate, its projection and
///   the iteration count, or an `AppErrors` variant if the inputs are
///   invalid or the projection overflows f64.
fn search_linear_rate(params: &ComparisonParams) -> AppResult<ModelOutcome> {
    params.validate()?;

    let mut per_sec = 0.0;
    let mut annual_total = 0.0;
    let mut iterations: u64 = 0;
    while annual_total < params.goal_per_unit {
        per_sec += params.step;
        annual_total = project_annual(per_sec);
        iterations += 1;
        if !annual_total.is_finite() {
            return Err(AppErrors::NonFinite("linear projection overflowed f64"));
        }
    }

    debug!("linear search finished after {iterations} iterations at {per_sec}/s");
    Ok(ModelOutcome {
        per_sec,
        annual_total,
        iterations,
    })
}
