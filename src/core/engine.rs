use crate::adapters::{build_client, HeadHunter, SuperJob};
use crate::config::SurveyConfig;
use crate::core::report::ReportBuilder;
use crate::domain::model::Report;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// Runs the survey against every enabled job board, one after another.
pub struct SurveyEngine {
    config: SurveyConfig,
}

impl SurveyEngine {
    pub fn new(config: SurveyConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<Vec<Report>> {
        tracing::info!(
            "Starting survey for {} languages: {}",
            self.config.languages.len(),
            self.config.languages.join(", ")
        );

        let client = build_client(&self.config.http)?;
        let mut reports = Vec::new();

        if self.config.headhunter.enabled {
            let source = HeadHunter::new(client.clone(), self.config.headhunter.clone());
            reports.push(self.build_report(source).await?);
        }

        if self.config.superjob.enabled {
            let source = SuperJob::new(client, self.config.superjob.clone())?;
            reports.push(self.build_report(source).await?);
        }

        tracing::info!("✅ Survey finished with {} reports", reports.len());
        Ok(reports)
    }

    async fn build_report<S: VacancySource>(&self, source: S) -> Result<Report> {
        ReportBuilder::new(source)
            .with_query_prefix(self.config.query_prefix.clone())
            .build(&self.config.languages)
            .await
    }
}
