// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thin client for the CMS delivery API.
//!
//! One fire-and-forget GET per caller; no retries, no timeout, no shared
//! cache. Sections that need the same content type each issue their own
//! fetch and observe it through a local resource.

use reqwasm::http::Request;

use crate::config::site_config;
use crate::content::model::{ContentEntry, EntriesResponse};
use crate::errors::FetchError;

pub async fn fetch_entries(content_type: &str) -> Result<Vec<ContentEntry>, FetchError> {
    let config = site_config();
    if config.api_key.is_empty() || config.delivery_token.is_empty() {
        return Err(FetchError::Setup(
            "CMS credentials are not configured".to_string(),
        ));
    }

    let url = format!(
        "{}/v3/content_types/{}/entries?environment={}",
        config.cdn_base_url, content_type, config.environment
    );
    log::info!("fetching {content_type} entries");

    let response = Request::get(&url)
        .header("api_key", config.api_key)
        .header("access_token", config.delivery_token)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|error| {
            log::error!("fetching {content_type} failed: {error}");
            FetchError::Network(error.to_string())
        })?;

    let status = response.status();
    if !(200..300).contains(&status) {
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error_message")
                    .and_then(|m| m.as_str())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| "request failed".to_string());
        log::error!("fetching {content_type} failed: {status} {message}");
        return Err(FetchError::Server { status, message });
    }

    let body: EntriesResponse = response.json().await.map_err(|error| {
        log::error!("decoding {content_type} response failed: {error}");
        FetchError::Network(error.to_string())
    })?;
    log::info!("fetched {} {content_type} entries", body.entries.len());
    Ok(body.entries)
}
