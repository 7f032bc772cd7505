use crate::adapters::http::fetch_json;
use crate::config::SuperJobConfig;
use crate::domain::model::{Page, Vacancy};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use crate::utils::validation::validate_secret;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const PLATFORM: &str = "SuperJob";
const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct FoundResponse {
    total: u64,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    #[serde(default)]
    objects: Vec<Object>,
    #[serde(default)]
    more: bool,
}

#[derive(Debug, Deserialize)]
struct Object {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

impl From<Object> for Vacancy {
    fn from(object: Object) -> Self {
        Vacancy {
            salary_from: object.payment_from,
            salary_to: object.payment_to,
            currency: object.currency,
        }
    }
}

/// superjob.ru catalogue search. Paging ends on the first page with `more: false`.
pub struct SuperJob {
    client: Client,
    config: SuperJobConfig,
    secret_key: String,
}

impl SuperJob {
    /// Fails with a missing-config error when no application key is configured.
    pub fn new(client: Client, config: SuperJobConfig) -> Result<Self> {
        let secret_key =
            validate_secret("superjob.secret_key", config.secret_key.as_deref())?.to_string();
        Ok(Self {
            client,
            config,
            secret_key,
        })
    }

    fn base_params(&self, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("keyword", query.to_string()),
            ("town", self.config.town.clone()),
            ("catalogues", self.config.catalogues.clone()),
            ("period", self.config.period.to_string()),
        ]
    }

    fn request(&self, params: &[(&'static str, String)]) -> reqwest::RequestBuilder {
        self.client
            .get(self.config.endpoint.as_str())
            .header(APP_ID_HEADER, self.secret_key.as_str())
            .query(params)
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    fn name(&self) -> &str {
        PLATFORM
    }

    fn title(&self) -> String {
        format!(" {} {} ", PLATFORM, self.config.city)
    }

    fn currency(&self) -> &str {
        &self.config.currency
    }

    async fn count_found(&self, query: &str) -> Result<u64> {
        let mut params = self.base_params(query);
        // Only `total` is read, so ask for the smallest page.
        params.push(("count", "1".to_string()));

        let response: FoundResponse = fetch_json(self.request(&params), PLATFORM).await?;
        Ok(response.total)
    }

    async fn collect_pages(&self, query: &str) -> Result<Vec<Page>> {
        let mut pages = Vec::new();
        let mut page: u32 = 0;

        loop {
            if page >= self.config.max_pages {
                tracing::warn!(
                    "{} stopped at the page limit ({}) for '{}'",
                    PLATFORM,
                    self.config.max_pages,
                    query
                );
                break;
            }

            let mut params = self.base_params(query);
            params.push(("page", page.to_string()));
            params.push(("count", self.config.count.to_string()));

            let response: PageResponse = fetch_json(self.request(&params), PLATFORM).await?;
            let more = response.more;

            tracing::debug!(
                "{} '{}': page {}, {} objects, more: {}",
                PLATFORM,
                query,
                page,
                response.objects.len(),
                more
            );

            pages.push(Page::new(
                response.objects.into_iter().map(Vacancy::from).collect(),
            ));

            if !more {
                break;
            }
            page += 1;
        }

        Ok(pages)
    }
}
