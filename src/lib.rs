pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{PlatformSelection, SurveyConfig};
pub use crate::core::{
    engine::SurveyEngine,
    export::{render, OutputFormat},
    report::ReportBuilder,
    table::render_table,
};
pub use domain::model::{LanguageResult, Report};
pub use utils::error::{Result, SurveyError};
