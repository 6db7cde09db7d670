/// Normalization constant for one unit of principal.
/// It cancels algebraically in every projection and is kept in the
/// arithmetic for clarity of units only.
pub const UNIT: f64 = 1e18;

/// Default target annual accrual per unit of principal.
pub const GOAL_PER_UNIT: f64 = 5e16;

/// Seconds in one week.
pub const SECONDS_PER_WEEK: f64 = 604_800.0;

/// Weeks used in the annual projection. 52 full weeks is a 364-day year,
/// one day short of the year used to derive the compound rate.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Seconds in a 365-day year, used to amortize the compound yield.
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Default increment applied to the linear per-second rate each iteration
/// of the brute-force search.
pub const RATE_STEP: f64 = 1e2;

/// Default continuously-compounded annual yield.
pub const ANNUAL_YIELD: f64 = 0.05;
