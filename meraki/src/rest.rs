use crate::error::MerakiError;
use reqwest::header::{HeaderMap, LINK, RETRY_AFTER};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Maximum number of times a single request is retried after a 429
/// before the rate-limit budget is considered exhausted.
const MAX_RATE_LIMIT_RETRIES: usize = 100;

fn url_fixup(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.contains("/api/v1") {
        base.to_string()
    } else {
        format!("{base}/api/v1")
    }
}

/// Reads the wait the dashboard asked for from a 429 response.
/// Defaults to one second when the header is absent or unparseable.
fn retry_after_delay(headers: &HeaderMap) -> Duration {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(1))
}

/// Extracts the rel=next target from an RFC 5988 Link header, as sent by
/// the dashboard on paginated endpoints.
fn parse_next_link(link_header: &str) -> Option<String> {
    for part in link_header.split(',') {
        let mut sections = part.trim().splitn(2, ';');
        let url = sections.next().unwrap_or("").trim();
        let rel = sections.next().unwrap_or("").trim();
        if rel == "rel=next" || rel == "rel=\"next\"" {
            return Some(
                url.trim_start_matches('<')
                    .trim_end_matches('>')
                    .to_string(),
            );
        }
    }
    None
}

/// Submits a GET to the dashboard, waiting out 429 responses per the
/// Retry-After header. Any other error status is surfaced as an API error.
async fn dashboard_get(
    client: &reqwest::Client,
    full_url: &str,
    key: &str,
) -> Result<reqwest::Response, MerakiError> {
    for _ in 0..MAX_RATE_LIMIT_RETRIES {
        let res = client
            .get(full_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {key}"))
            .send()
            .await?;

        if res.status() == StatusCode::TOO_MANY_REQUESTS {
            tokio::time::sleep(retry_after_delay(res.headers())).await;
            continue;
        }
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(MerakiError::Api { status, body });
        }
        return Ok(res);
    }
    Err(MerakiError::RateLimitExhausted)
}

/// Submits a request to the dashboard API, returning a single deserialized
/// object of type T.
pub async fn dashboard_request_get_one<T>(
    url: &str,
    key: &str,
    api: &str,
) -> Result<T, MerakiError>
where
    T: DeserializeOwned,
{
    let full_url = format!("{}/{}", url_fixup(api), url);
    let client = reqwest::Client::new();

    let res = dashboard_get(&client, &full_url, key).await?;
    Ok(res.json::<T>().await?)
}

/// Submits a request to a paginated dashboard endpoint, following rel=next
/// Link headers until every page has been collected.
pub async fn dashboard_request_get_all_pages<T>(
    url: &str,
    key: &str,
    api: &str,
) -> Result<Vec<T>, MerakiError>
where
    T: DeserializeOwned,
{
    let client = reqwest::Client::new();
    let mut full_url = format!("{}/{}", url_fixup(api), url);
    let mut results = Vec::new();

    loop {
        let res = dashboard_get(&client, &full_url, key).await?;
        let next = res
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_next_link);
        results.extend(res.json::<Vec<T>>().await?);
        match next {
            Some(n) => full_url = n,
            None => break,
        }
    }
    Ok(results)
}
