use crate::config::HttpConfig;
use crate::utils::error::{Result, SurveyError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Builds the client shared by every source in a run.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if config.timeout_seconds > 0 {
        builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
    }
    Ok(builder.build()?)
}

/// Sends `request` and decodes a JSON body. Any non-success status is an error.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    platform: &str,
) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    tracing::debug!("{} response status: {}", platform, status);

    if !status.is_success() {
        return Err(SurveyError::HttpStatusError {
            platform: platform.to_string(),
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_with_and_without_timeout() {
        assert!(build_client(&HttpConfig::default()).is_ok());

        let config = HttpConfig {
            timeout_seconds: 0,
            ..HttpConfig::default()
        };
        assert!(build_client(&config).is_ok());
    }
}
