use crate::domain::model::Page;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A job board that can be searched for vacancies.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Platform name used in logs, errors and exports.
    fn name(&self) -> &str;

    /// Table title, e.g. `" HeadHunter Moscow "`.
    fn title(&self) -> String;

    /// Currency code salaries are averaged in.
    fn currency(&self) -> &str;

    /// Total number of vacancies matching `query`, unfiltered.
    async fn count_found(&self, query: &str) -> Result<u64>;

    /// Every result page for `query`, in page order.
    async fn collect_pages(&self, query: &str) -> Result<Vec<Page>>;
}
