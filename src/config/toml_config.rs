use crate::core::report::DEFAULT_QUERY_PREFIX;
use crate::utils::error::{Result, SurveyError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const DEFAULT_LANGUAGES: [&str; 6] = ["python", "php", "java", "ruby", "c++", "c#"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub languages: Vec<String>,
    /// Prepended to each language to form the search phrase.
    pub query_prefix: String,
    pub http: HttpConfig,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    /// Per-request timeout, `0` disables it.
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub enabled: bool,
    pub endpoint: String,
    /// Region id, `1` is Moscow.
    pub area: String,
    /// Publication window in days.
    pub period: u32,
    pub per_page: u32,
    pub currency: String,
    pub city: String,
    pub max_pages: u32,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub enabled: bool,
    pub endpoint: String,
    /// Town id, `4` is Moscow.
    pub town: String,
    /// Catalogue id, `48` is software development.
    pub catalogues: String,
    /// `0` means the whole period the API keeps.
    pub period: u32,
    pub count: u32,
    pub currency: String,
    pub city: String,
    pub max_pages: u32,
    pub secret_key: Option<String>,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            query_prefix: DEFAULT_QUERY_PREFIX.to_string(),
            http: HttpConfig::default(),
            headhunter: HeadHunterConfig::default(),
            superjob: SuperJobConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("vacancy-stats/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            area: "1".to_string(),
            period: 30,
            per_page: 100,
            currency: "RUR".to_string(),
            city: "Moscow".to_string(),
            max_pages: 50,
        }
    }
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://api.superjob.ru/2.30/vacancies/".to_string(),
            town: "4".to_string(),
            catalogues: "48".to_string(),
            period: 0,
            count: 100,
            currency: "rub".to_string(),
            city: "Moscow".to_string(),
            max_pages: 50,
            secret_key: None,
        }
    }
}

// The application key never reaches logs.
impl fmt::Debug for SuperJobConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuperJobConfig")
            .field("enabled", &self.enabled)
            .field("endpoint", &self.endpoint)
            .field("town", &self.town)
            .field("catalogues", &self.catalogues)
            .field("period", &self.period)
            .field("count", &self.count)
            .field("currency", &self.currency)
            .field("city", &self.city)
            .field("max_pages", &self.max_pages)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Which job boards a run should query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PlatformSelection {
    #[default]
    All,
    Headhunter,
    Superjob,
}

impl SurveyConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SurveyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SurveyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SurveyError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_platform_selection(&mut self, selection: PlatformSelection) {
        match selection {
            PlatformSelection::All => {}
            PlatformSelection::Headhunter => self.superjob.enabled = false,
            PlatformSelection::Superjob => self.headhunter.enabled = false,
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(SurveyError::ConfigValidationError {
                field: "languages".to_string(),
                message: "at least one language must be tracked".to_string(),
            });
        }
        for language in &self.languages {
            validation::validate_non_empty_string("languages", language)?;
        }
        validation::validate_non_empty_string("http.user_agent", &self.http.user_agent)?;

        if !self.headhunter.enabled && !self.superjob.enabled {
            return Err(SurveyError::ConfigValidationError {
                field: "platforms".to_string(),
                message: "both platforms are disabled".to_string(),
            });
        }

        if self.headhunter.enabled {
            let hh = &self.headhunter;
            validation::validate_url("headhunter.endpoint", &hh.endpoint)?;
            validation::validate_range("headhunter.per_page", hh.per_page, 1, 100)?;
            validation::validate_positive_number("headhunter.max_pages", hh.max_pages, 1)?;
            validation::validate_non_empty_string("headhunter.currency", &hh.currency)?;
        }

        if self.superjob.enabled {
            let sj = &self.superjob;
            validation::validate_url("superjob.endpoint", &sj.endpoint)?;
            validation::validate_range("superjob.count", sj.count, 1, 100)?;
            validation::validate_positive_number("superjob.max_pages", sj.max_pages, 1)?;
            validation::validate_non_empty_string("superjob.currency", &sj.currency)?;
            validation::validate_secret("superjob.secret_key", sj.secret_key.as_deref())?;
        }

        Ok(())
    }
}

impl Validate for SurveyConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_moscow_survey() {
        let config = SurveyConfig::default();

        assert_eq!(config.languages.len(), 6);
        assert_eq!(config.headhunter.area, "1");
        assert_eq!(config.headhunter.currency, "RUR");
        assert_eq!(config.superjob.town, "4");
        assert_eq!(config.superjob.catalogues, "48");
        assert_eq!(config.superjob.currency, "rub");
        assert_eq!(config.query_prefix, "программист");
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
languages = ["rust", "go"]

[headhunter]
area = "2"
city = "Saint Petersburg"

[superjob]
enabled = false
"#;

        let config = SurveyConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.languages, vec!["rust", "go"]);
        assert_eq!(config.headhunter.area, "2");
        assert_eq!(config.headhunter.per_page, 100);
        assert_eq!(config.headhunter.endpoint, "https://api.hh.ru/vacancies");
        assert!(!config.superjob.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VACANCY_STATS_TEST_SJ_KEY", "v3.r.secret");

        let toml_content = r#"
[superjob]
secret_key = "${VACANCY_STATS_TEST_SJ_KEY}"
"#;

        let config = SurveyConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.superjob.secret_key.as_deref(), Some("v3.r.secret"));

        std::env::remove_var("VACANCY_STATS_TEST_SJ_KEY");
    }

    #[test]
    fn test_unresolved_secret_fails_validation() {
        let toml_content = r#"
[superjob]
secret_key = "${VACANCY_STATS_TEST_UNSET_KEY}"
"#;

        let config = SurveyConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(SurveyError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let mut config = SurveyConfig::default();
        config.superjob.secret_key = Some("key".to_string());
        assert!(config.validate().is_ok());

        config.headhunter.endpoint = "invalid-url".to_string();
        assert!(config.validate().is_err());

        let mut config = SurveyConfig::default();
        config.superjob.enabled = false;
        config.headhunter.per_page = 500;
        assert!(config.validate().is_err());

        let mut config = SurveyConfig::default();
        config.superjob.enabled = false;
        config.languages = vec!["python".to_string(), " ".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_output_redacts_secret_key() {
        let mut config = SurveyConfig::default();
        config.superjob.secret_key = Some("v3.r.do-not-log".to_string());

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("v3.r.do-not-log"));
        assert!(rendered.contains(r#"secret_key: Some("***")"#));

        config.superjob.secret_key = None;
        assert!(format!("{:?}", config).contains("secret_key: None"));
    }

    #[test]
    fn test_zero_timeout_parses() {
        let config = SurveyConfig::from_toml_str("[http]\ntimeout_seconds = 0\n").unwrap();
        assert_eq!(config.http.timeout_seconds, 0);
        assert_eq!(SurveyConfig::default().http.timeout_seconds, 30);
    }

    #[test]
    fn test_platform_selection() {
        let mut config = SurveyConfig::default();
        config.apply_platform_selection(PlatformSelection::Headhunter);

        assert!(config.headhunter.enabled);
        assert!(!config.superjob.enabled);
        // No SuperJob key needed when SuperJob is not queried.
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = SurveyConfig::from_toml_str("languages = [");
        assert!(matches!(
            result,
            Err(SurveyError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
query_prefix = "developer"

[http]
user_agent = "file-test/1.0"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SurveyConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.http.user_agent, "file-test/1.0");
        assert_eq!(config.query_prefix, "developer");
    }
}
