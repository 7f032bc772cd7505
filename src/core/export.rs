use crate::core::table::render_table;
use crate::domain::model::Report;
use crate::utils::error::{Result, SurveyError};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    generated_at: DateTime<Utc>,
    reports: &'a [Report],
}

pub fn render(reports: &[Report], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(reports
            .iter()
            .map(render_table)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Csv => render_csv(reports),
        OutputFormat::Json => render_json(reports),
    }
}

/// One record per platform and language; an unknown average is an empty field.
pub fn render_csv(reports: &[Report]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "platform",
        "language",
        "vacancies_found",
        "vacancies_processed",
        "average_salary",
    ])?;

    for report in reports {
        for row in &report.rows {
            writer.write_record([
                report.platform.clone(),
                row.language.clone(),
                row.result.vacancies_found.to_string(),
                row.result.vacancies_processed.to_string(),
                row.result
                    .average_salary
                    .map(|salary| salary.to_string())
                    .unwrap_or_default(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SurveyError::ProcessingError {
            message: format!("failed to flush CSV output: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| SurveyError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

pub fn render_json(reports: &[Report]) -> Result<String> {
    let export = JsonExport {
        generated_at: Utc::now(),
        reports,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}
