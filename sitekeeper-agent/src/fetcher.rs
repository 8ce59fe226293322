use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT},
    StatusCode, Url,
};
use thiserror::Error;

const FETCH_TIMEOUT_SECS: u64 = 30;

// some sources reject clients that don't look like a browser
const FETCH_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FETCH_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const FETCH_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Couldn't retrieve the source content! Reason: {}", .0)]
    RequestError(reqwest::Error),
    #[error("Source responded with HTTP {}!", .0)]
    StatusError(StatusCode),
}

#[async_trait]
pub trait FetchContent: Send + Sync {
    async fn fetch(&self, url: Url) -> Result<String, FetchError>;
}

pub struct HttpContentFetcher {
    client: reqwest::Client,
}

impl HttpContentFetcher {
    pub fn new() -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(FETCH_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(FETCH_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(FETCH_ACCEPT_LANGUAGE),
        );
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FetchContent for HttpContentFetcher {
    async fn fetch(&self, url: Url) -> Result<String, FetchError> {
        debug!("Fetching site content from '{url}'...");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::RequestError)?;

        if !response.status().is_success() {
            return Err(FetchError::StatusError(response.status()));
        }

        response.text().await.map_err(FetchError::RequestError)
    }
}
