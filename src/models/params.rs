use crate::consts::{ANNUAL_YIELD, GOAL_PER_UNIT, RATE_STEP};
use crate::errors::{AppErrors, AppResult};

/// Numeric inputs for one comparison run.
///
/// `Default` reproduces the canonical constants, so a run built from it is
/// the reference computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonParams {
    /// Target annual accrual per unit of principal.
    pub goal_per_unit: f64,
    /// Increment applied to the linear per-second rate each iteration.
    pub step: f64,
    /// Continuously-compounded annual yield.
    pub annual_yield: f64,
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self {
            goal_per_unit: GOAL_PER_UNIT,
            step: RATE_STEP,
            annual_yield: ANNUAL_YIELD,
        }
    }
}

impl ComparisonParams {
    /// Checks the arithmetic domain rules the models rely on.
    ///
    /// The brute-force search terminates only if both the step and the goal
    /// are strictly positive finite numbers, and the compound derivation
    /// needs a non-negative finite yield.
    ///
    /// # Returns
    /// * `AppResult<()>` - Returns `Ok(())` if every field is usable,
    ///   or `AppErrors::InvalidInput` naming the offending field.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(AppErrors::InvalidInput(
                "step must be a strictly positive finite number",
            ));
        }
        if !(self.goal_per_unit.is_finite() && self.goal_per_unit > 0.0) {
            return Err(AppErrors::InvalidInput(
                "goal-per-unit must be a strictly positive finite number",
            ));
        }
        if !(self.annual_yield.is_finite() && self.annual_yield >= 0.0) {
            return Err(AppErrors::InvalidInput(
                "annual-yield must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let params = ComparisonParams::default();

        assert!(params.validate().is_ok());
        assert_eq!(params.goal_per_unit, GOAL_PER_UNIT);
        assert_eq!(params.step, RATE_STEP);
        assert_eq!(params.annual_yield, ANNUAL_YIELD);
    }

    #[test]
    fn zero_step_is_rejected() {
        let params = ComparisonParams {
            step: 0.0,
            ..Default::default()
        };

        assert!(matches!(
            params.validate(),
            Err(AppErrors::InvalidInput(_))
        ));
    }

    #[test]
    fn nan_step_is_rejected() {
        let params = ComparisonParams {
            step: f64::NAN,
            ..Default::default()
        };

        assert!(matches!(
            params.validate(),
            Err(AppErrors::InvalidInput(_))
        ));
    }

    #[test]
    fn non_positive_goal_is_rejected() {
        let params = ComparisonParams {
            goal_per_unit: -5e16,
            ..Default::default()
        };

        assert!(matches!(
            params.validate(),
            Err(AppErrors::InvalidInput(_))
        ));
    }

    #[test]
    fn negative_yield_is_rejected() {
        let params = ComparisonParams {
            annual_yield: -0.05,
            ..Default::default()
        };

        assert!(matches!(
            params.validate(),
            Err(AppErrors::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_yield_is_allowed() {
        let params = ComparisonParams {
            annual_yield: 0.0,
            ..Default::default()
        };

        assert!(params.validate().is_ok());
    }
}
