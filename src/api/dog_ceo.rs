//! Dog CEO API client for fetching random dog images
//!
//! Uses async reqwest; failed requests are retried with exponential backoff.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;

use crate::error::{DogApiError, DogApiResult, TransportFailure};
use crate::models::DogImage;

/// Public Dog CEO API endpoint
pub const DOG_API_BASE: &str = "https://dog.ceo/api";

/// Label used when a URL carries no breed segment
pub const UNKNOWN_BREED: &str = "Unknown Breed";

const USER_AGENT: &str = "DogViewer/1.0";

/// Retry settings for the HTTP transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of requests made before giving up
    pub max_attempts: u32,
    /// Wait before the second attempt; doubles for every following one
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Backoff after the failed attempt with index `attempt` (0-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Wait before the next request once `failed_attempts` requests failed
    pub fn delay_after_failures(&self, failed_attempts: u32) -> Duration {
        self.delay_for(failed_attempts.saturating_sub(1))
    }
}

/// Raw response of `/breeds/image/random/<count>`
#[derive(Debug, Deserialize)]
struct RandomImagesResponse {
    message: ImageMessage,
    status: String,
}

/// `message` is a list for batches, a single string for one image,
/// and an error text when `status` is not "success"
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageMessage {
    Many(Vec<String>),
    One(String),
    Other(serde_json::Value),
}

pub struct DogApiClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DogApiClient {
    /// Client against the public Dog CEO API with the default retry policy
    pub fn new() -> Self {
        Self::with_base_url(DOG_API_BASE)
    }

    /// Client against another API base (mirrors, test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        log::debug!("Creating Dog API client for {}", base_url);
        Self {
            client: Client::new(),
            base_url,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Fetch `count` random dog images, in the order the API returns them
    pub async fn get_random_dogs(&self, count: u32) -> DogApiResult<Vec<DogImage>> {
        if count == 0 {
            return Err(DogApiError::InvalidCount(count));
        }

        let url = format!("{}/breeds/image/random/{}", self.base_url, count);
        log::info!("Fetching {} random dog image(s)", count);

        let response = self.fetch_with_retry(&url).await?;
        let body = response.text().await.map_err(DogApiError::ResponseBody)?;

        let urls = parse_random_images(&body, count)?;
        log::debug!("Received {} image URL(s)", urls.len());

        Ok(urls.into_iter().map(DogImage::from_url).collect())
    }

    /// GET `url`, retrying non-success statuses and network errors
    ///
    /// Waits `base_delay * 2^i` after failed attempt `i`. The last failure
    /// is returned once `max_attempts` requests have been made.
    pub async fn fetch_with_retry(&self, url: &str) -> DogApiResult<Response> {
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            let failure = match self
                .client
                .get(url)
                .header("User-Agent", USER_AGENT)
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => TransportFailure::Status(response.status()),
                Err(e) => TransportFailure::Network(e),
            };

            attempt += 1;
            if attempt >= max_attempts {
                log::error!(
                    "Giving up on {} after {} attempt(s): {}",
                    url,
                    attempt,
                    failure
                );
                return Err(DogApiError::Transport {
                    attempts: attempt,
                    failure,
                });
            }

            let delay = self.retry.delay_after_failures(attempt);
            log::warn!(
                "Attempt {}/{} for {} failed ({}), retrying in {:?}",
                attempt,
                max_attempts,
                url,
                failure,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }
}

/// Decode a random-images payload into image URLs
fn parse_random_images(body: &str, count: u32) -> DogApiResult<Vec<String>> {
    let data: RandomImagesResponse = serde_json::from_str(body)
        .map_err(|e| DogApiError::MalformedResponse(format!("unexpected body: {}", e)))?;

    if data.status != "success" {
        return Err(DogApiError::MalformedResponse(format!(
            "status was \"{}\"",
            data.status
        )));
    }

    match data.message {
        ImageMessage::Many(urls) => Ok(urls),
        ImageMessage::One(url) if count == 1 => Ok(vec![url]),
        ImageMessage::One(_) => Err(DogApiError::MalformedResponse(format!(
            "expected {} image URLs, got a single string",
            count
        ))),
        ImageMessage::Other(value) => Err(DogApiError::MalformedResponse(format!(
            "message is not a list of image URLs: {}",
            value
        ))),
    }
}

/// Derive a readable breed name from a Dog CEO image URL
///
/// The API lists sub-breed before breed (`terrier-australian`), so the
/// parts are reversed: "Australian Terrier".
pub fn extract_breed_from_url(url: &str) -> String {
    let segments: Vec<&str> = url.split('/').collect();

    let breed_segment = segments
        .iter()
        .position(|segment| *segment == "breeds")
        .and_then(|index| segments.get(index + 1));

    let Some(breed_segment) = breed_segment else {
        return UNKNOWN_BREED.to_string();
    };

    let parts: Vec<&str> = breed_segment.split('-').collect();
    if parts.len() > 1 {
        return parts
            .iter()
            .rev()
            .map(|part| capitalize_first(part))
            .collect::<Vec<_>>()
            .join(" ");
    }

    capitalize_first(breed_segment)
}

/// Uppercase the first character, leave the rest untouched
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "dog_ceo_tests.rs"]
mod tests;
