use crate::config::toml_config::{PlatformSelection, SurveyConfig};
use crate::core::export::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Vacancy counts and average salaries per programming language")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Languages to track, overrides the config file
    #[arg(short, long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Job boards to query
    #[arg(short, long, value_enum, default_value_t = PlatformSelection::All)]
    pub platform: PlatformSelection,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// SuperJob application key
    #[arg(long, env = "SJ_SECRET_KEY", hide_env_values = true)]
    pub sj_secret_key: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file (or defaults) and applies command-line overrides.
    pub fn load_config(&self) -> Result<SurveyConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                SurveyConfig::from_file(path)?
            }
            None => SurveyConfig::default(),
        };

        if !self.languages.is_empty() {
            config.languages = self.languages.clone();
        }
        if let Some(key) = &self.sj_secret_key {
            config.superjob.secret_key = Some(key.clone());
        }
        config.apply_platform_selection(self.platform);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_parse_defaults() {
        let cli = CliConfig::try_parse_from(["vacancy-stats", "--sj-secret-key", "abc"]).unwrap();

        assert_eq!(cli.platform, PlatformSelection::All);
        assert_eq!(cli.format, OutputFormat::Table);

        let config = cli.load_config().unwrap();
        assert_eq!(config.languages.len(), 6);
        assert_eq!(config.superjob.secret_key.as_deref(), Some("abc"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let cli = CliConfig::try_parse_from([
            "vacancy-stats",
            "--languages",
            "rust,go",
            "--platform",
            "headhunter",
            "--format",
            "csv",
        ])
        .unwrap();

        let config = cli.load_config().unwrap();
        assert_eq!(config.languages, vec!["rust", "go"]);
        assert!(!config.superjob.enabled);
        assert_eq!(cli.format, OutputFormat::Csv);
    }

    #[test]
    fn test_loaded_config_debug_hides_cli_secret() {
        let cli =
            CliConfig::try_parse_from(["vacancy-stats", "--sj-secret-key", "v3.r.TOPSECRET"])
                .unwrap();
        let config = cli.load_config().unwrap();

        let line = format!("Survey config: {:?}", config);
        assert!(!line.contains("v3.r.TOPSECRET"));
    }
}
