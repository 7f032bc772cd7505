use crate::adapters::http::fetch_json;
use crate::config::HeadHunterConfig;
use crate::domain::model::{Page, Vacancy};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const PLATFORM: &str = "HeadHunter";

#[derive(Debug, Deserialize)]
struct FoundResponse {
    found: u64,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct Item {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl From<Item> for Vacancy {
    fn from(item: Item) -> Self {
        match item.salary {
            Some(salary) => Vacancy {
                salary_from: salary.from,
                salary_to: salary.to,
                currency: salary.currency,
            },
            None => Vacancy::default(),
        }
    }
}

/// hh.ru public vacancy search. Paging ends on the reported page count.
pub struct HeadHunter {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(client: Client, config: HeadHunterConfig) -> Self {
        Self { client, config }
    }

    fn base_params(&self, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("text", query.to_string()),
            ("area", self.config.area.clone()),
            ("period", self.config.period.to_string()),
        ]
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
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
        params.push(("clusters", "true".to_string()));
        params.push(("per_page", "0".to_string()));

        let request = self.client.get(self.config.endpoint.as_str()).query(&params);
        let response: FoundResponse = fetch_json(request, PLATFORM).await?;
        Ok(response.found)
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
            params.push(("per_page", self.config.per_page.to_string()));

            let request = self.client.get(self.config.endpoint.as_str()).query(&params);
            let response: PageResponse = fetch_json(request, PLATFORM).await?;
            let total_pages = response.pages;

            tracing::debug!(
                "{} '{}': page {} of {}, {} items",
                PLATFORM,
                query,
                page,
                total_pages,
                response.items.len()
            );

            pages.push(Page::new(
                response.items.into_iter().map(Vacancy::from).collect(),
            ));

            // The page at index `pages` is requested too and kept.
            if page >= total_pages {
                break;
            }
            page += 1;
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::build_client;
    use crate::config::HttpConfig;
    use crate::utils::error::SurveyError;
    use httpmock::prelude::*;

    fn source(endpoint: String, max_pages: u32) -> HeadHunter {
        let client = build_client(&HttpConfig::default()).unwrap();
        HeadHunter::new(
            client,
            HeadHunterConfig {
                endpoint,
                max_pages,
                ..HeadHunterConfig::default()
            },
        )
    }

    #[tokio::test]
    async fn test_count_found_uses_lightweight_search() {
        let server = MockServer::start_async().await;
        let found_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/vacancies")
                    .query_param("clusters", "true")
                    .query_param("per_page", "0")
                    .query_param("area", "1")
                    .query_param("period", "30");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"found": 1234, "items": [], "pages": 0}));
            })
            .await;

        let hh = source(server.url("/vacancies"), 50);
        let found = hh.count_found("программист python").await.unwrap();

        found_mock.assert_async().await;
        assert_eq!(found, 1234);
    }

    #[tokio::test]
    async fn test_collect_fetches_through_reported_page_count() {
        let server = MockServer::start_async().await;
        let mut page_mocks = Vec::new();
        for page in 0..3u32 {
            let items = if page < 2 {
                serde_json::json!([
                    {"salary": {"from": 100000, "to": 200000, "currency": "RUR"}},
                    {"salary": null}
                ])
            } else {
                serde_json::json!([])
            };
            let page_str = page.to_string();
            let mock = server
                .mock_async(|when, then| {
                    when.method(GET)
                        .path("/vacancies")
                        .query_param("page", page_str.as_str())
                        .query_param("per_page", "100");
                    then.status(200)
                        .header("Content-Type", "application/json")
                        .json_body(serde_json::json!({"items": items.clone(), "pages": 2, "page": page}));
                })
                .await;
            page_mocks.push(mock);
        }

        let hh = source(server.url("/vacancies"), 50);
        let pages = hh.collect_pages("программист python").await.unwrap();

        for mock in &page_mocks {
            mock.assert_async().await;
        }
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].vacancies.len(), 2);
        assert!(pages[2].vacancies.is_empty());
        assert_eq!(
            pages[0].vacancies[0],
            Vacancy::new(Some(100000.0), Some(200000.0), "RUR")
        );
        assert_eq!(pages[0].vacancies[1], Vacancy::default());
    }

    #[tokio::test]
    async fn test_collect_single_page_when_no_results() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/vacancies").query_param("page", "0");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"items": [], "pages": 0}));
            })
            .await;

        let hh = source(server.url("/vacancies"), 50);
        let pages = hh.collect_pages("программист cobol").await.unwrap();

        mock.assert_async().await;
        assert_eq!(pages.len(), 1);
    }

    #[tokio::test]
    async fn test_collect_respects_page_limit() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/vacancies").query_param_exists("page");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"items": [], "pages": 99}));
            })
            .await;

        let hh = source(server.url("/vacancies"), 3);
        let pages = hh.collect_pages("программист java").await.unwrap();

        mock.assert_hits_async(3).await;
        assert_eq!(pages.len(), 3);
    }

    #[tokio::test]
    async fn test_non_success_status_is_fatal() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/vacancies");
                then.status(500);
            })
            .await;

        let hh = source(server.url("/vacancies"), 50);
        let result = hh.collect_pages("программист php").await;

        mock.assert_async().await;
        match result {
            Err(SurveyError::HttpStatusError {
                platform, status, ..
            }) => {
                assert_eq!(platform, "HeadHunter");
                assert_eq!(status, 500);
            }
            other => panic!("expected HttpStatusError, got {:?}", other),
        }
    }

    #[test]
    fn test_title_uses_city() {
        let hh = source("https://api.hh.ru/vacancies".to_string(), 50);
        assert_eq!(hh.title(), " HeadHunter Moscow ");
        assert_eq!(hh.currency(), "RUR");
    }
}
