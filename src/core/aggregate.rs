use crate::domain::model::{Page, SalaryStats};
use crate::domain::salary::predict_salary;

/// Averages salary estimates over every vacancy paid in `currency`.
///
/// Vacancies in other currencies, or with no usable bounds, are not counted.
/// With nothing usable the average is unknown and the processed count is zero.
pub fn aggregate(pages: &[Page], currency: &str) -> SalaryStats {
    let estimates: Vec<f64> = pages
        .iter()
        .flat_map(|page| page.vacancies.iter())
        .filter(|vacancy| vacancy.currency.as_deref() == Some(currency))
        .filter_map(|vacancy| predict_salary(vacancy.salary_from, vacancy.salary_to))
        .collect();

    if estimates.is_empty() {
        return SalaryStats::default();
    }

    let processed = estimates.len() as u64;
    let sum: f64 = estimates.iter().sum();

    SalaryStats {
        // Truncated, like the figures the boards show.
        average: Some((sum / processed as f64) as u64),
        processed,
    }
}
