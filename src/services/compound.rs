use crate::consts::{SECONDS_PER_YEAR, UNIT};
use crate::errors::{AppErrors, AppResult};
use crate::models::params::ComparisonParams;
use crate::models::projection::ModelOutcome;
use crate::services::rate_model::{RateModel, project_annual};

/// Analytic model: the per-second rate implied by continuous compounding of
/// the annual yield, amortized over a 365-day year.
pub struct ContinuousCompound;

impl RateModel for ContinuousCompound {
    fn label(&self) -> &'static str {
        "compound"
    }

    fn solve(&self, params: &ComparisonParams) -> AppResult<ModelOutcome> {
        derive_compound_rate(params)
    }
}

/// Derives the compound per-second rate and projects it over 52 weeks.
///
/// The rate amortizes one year of continuous growth on `UNIT` of principal:
/// `(UNIT * e^yield - UNIT) / SECONDS_PER_YEAR`. The projection then uses
/// the 364-day weekly convention shared with the linear model, one day
/// short of the year the rate was derived over.
///
/// # Arguments
/// * `params` - The numeric inputs of the comparison run.
///
/// # Returns
/// * `AppResult<ModelOutcome>` - Returns the derived rate and its
///   projection, or an `AppErrors` variant if the inputs are invalid or the
///   arithmetic overflows f64.
fn derive_compound_rate(params: &ComparisonParams) -> AppResult<ModelOutcome> {
    params.validate()?;

    let grown = UNIT * params.annual_yield.exp();
    let per_sec = (grown - UNIT) / SECONDS_PER_YEAR;
    if !per_sec.is_finite() {
        return Err(AppErrors::NonFinite("compound rate overflowed f64"));
    }

    let annual_total = project_annual(per_sec);
    if !annual_total.is_finite() {
        return Err(AppErrors::NonFinite("compound projection overflowed f64"));
    }

    Ok(ModelOutcome {
        per_sec,
        annual_total,
        iterations: 0,
    })
}
