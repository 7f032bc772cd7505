/// Multiplier applied when only the lower bound is known.
pub const LOWER_BOUND_FACTOR: f64 = 1.2;
/// Divisor applied when only the upper bound is known.
pub const UPPER_BOUND_FACTOR: f64 = 0.8;

fn present(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| *value != 0.0)
}

/// Estimates a single salary figure from a possibly partial range.
/// Zero bounds count as absent.
pub fn predict_salary(salary_from: Option<f64>, salary_to: Option<f64>) -> Option<f64> {
    match (present(salary_from), present(salary_to)) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * LOWER_BOUND_FACTOR),
        (None, Some(to)) => Some(to / UPPER_BOUND_FACTOR),
        (None, None) => None,
    }
}
