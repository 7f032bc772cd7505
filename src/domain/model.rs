use serde::{Deserialize, Serialize};

/// One vacancy as far as salary statistics care about it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub salary_from: Option<f64>,
    pub salary_to: Option<f64>,
    pub currency: Option<String>,
}

impl Vacancy {
    pub fn new(salary_from: Option<f64>, salary_to: Option<f64>, currency: &str) -> Self {
        Self {
            salary_from,
            salary_to,
            currency: Some(currency.to_string()),
        }
    }
}

/// A single page of search results. The platform's continuation signal is
/// consumed by the collector and not kept here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub vacancies: Vec<Vacancy>,
}

impl Page {
    pub fn new(vacancies: Vec<Vacancy>) -> Self {
        Self { vacancies }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SalaryStats {
    pub average: Option<u64>,
    pub processed: u64,
}

/// Figures for one tracked language on one platform.
///
/// `vacancies_processed` may exceed `vacancies_found`: the found count comes
/// from an unfiltered search while the processed count comes from the paged,
/// currency-filtered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageResult {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: Option<u64>,
}

impl LanguageResult {
    pub fn new(vacancies_found: u64, stats: SalaryStats) -> Self {
        Self {
            vacancies_found,
            vacancies_processed: stats.processed,
            average_salary: stats.average,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageRow {
    pub language: String,
    #[serde(flatten)]
    pub result: LanguageResult,
}

/// Per-platform results, kept in tracked-language order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub platform: String,
    pub title: String,
    pub rows: Vec<LanguageRow>,
}

impl Report {
    pub fn new(platform: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Inserts or replaces the row for `language`, keeping the first insertion position.
    pub fn insert(&mut self, language: impl Into<String>, result: LanguageResult) {
        let language = language.into();
        match self.rows.iter_mut().find(|row| row.language == language) {
            Some(row) => row.result = result,
            None => self.rows.push(LanguageRow { language, result }),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageResult> {
        self.rows
            .iter()
            .find(|row| row.language == language)
            .map(|row| &row.result)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.language.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
