use crate::consts::{ANNUAL_YIELD, GOAL_PER_UNIT, RATE_STEP};
use crate::models::params::ComparisonParams;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target annual accrual per unit of principal
    #[arg(long, default_value_t = GOAL_PER_UNIT)]
    pub goal_per_unit: f64,

    /// Increment applied to the linear per-second rate each iteration
    #[arg(long, default_value_t = RATE_STEP)]
    pub step: f64,

    /// Continuously-compounded annual yield
    #[arg(long, default_value_t = ANNUAL_YIELD)]
    pub annual_yield: f64,

    /// Emit the report as CSV rows instead of plain text
    #[arg(long)]
    pub csv: bool,
}

impl From<&Cli> for ComparisonParams {
    fn from(cli: &Cli) -> Self {
        Self {
            goal_per_unit: cli.goal_per_unit,
            step: cli.step,
            annual_yield: cli.annual_yield,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_yield_the_canonical_params() {
        // arrange
        let cli = Cli::parse_from(["rate-comparator"]);

        // act
        let params = ComparisonParams::from(&cli);

        // assert
        assert_eq!(params, ComparisonParams::default());
        assert!(!cli.csv);
    }

    #[test]
    fn overrides_are_carried_into_params() {
        // arrange
        let cli = Cli::parse_from([
            "rate-comparator",
            "--goal-per-unit",
            "1e12",
            "--step",
            "50",
            "--annual-yield",
            "0.03",
            "--csv",
        ]);

        // act
        let params = ComparisonParams::from(&cli);

        // assert
        assert_eq!(params.goal_per_unit, 1e12);
        assert_eq!(params.step, 50.0);
        assert_eq!(params.annual_yield, 0.03);
        assert!(cli.csv);
    }
}
