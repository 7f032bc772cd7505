use crate::core::aggregate::aggregate;
use crate::domain::model::{LanguageResult, Report};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

pub const DEFAULT_QUERY_PREFIX: &str = "программист";

/// Builds one platform's report, one language at a time.
pub struct ReportBuilder<S: VacancySource> {
    source: S,
    query_prefix: String,
}

impl<S: VacancySource> ReportBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            query_prefix: DEFAULT_QUERY_PREFIX.to_string(),
        }
    }

    pub fn with_query_prefix(mut self, query_prefix: impl Into<String>) -> Self {
        self.query_prefix = query_prefix.into();
        self
    }

    pub fn search_phrase(&self, language: &str) -> String {
        let prefix = self.query_prefix.trim();
        if prefix.is_empty() {
            language.to_string()
        } else {
            format!("{} {}", prefix, language)
        }
    }

    /// One found-count search, then the full paged collection for the same phrase.
    pub async fn language_result(&self, language: &str) -> Result<LanguageResult> {
        let query = self.search_phrase(language);

        let found = self.source.count_found(&query).await?;
        let pages = self.source.collect_pages(&query).await?;
        let stats = aggregate(&pages, self.source.currency());

        tracing::info!(
            "{} '{}': {} found, {} processed over {} pages, average {:?}",
            self.source.name(),
            language,
            found,
            stats.processed,
            pages.len(),
            stats.average
        );

        Ok(LanguageResult::new(found, stats))
    }

    pub async fn build(&self, languages: &[String]) -> Result<Report> {
        tracing::info!(
            "Building {} report for {} languages",
            self.source.name(),
            languages.len()
        );

        let mut report = Report::new(self.source.name(), self.source.title());
        for language in languages {
            let result = self.language_result(language).await?;
            report.insert(language.as_str(), result);
        }

        Ok(report)
    }
}
