//! Shared reqwest plumbing for the endpoint-backed adapters.

use explorer_common::ExplorerError;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Client with the endpoint's overall timeout applied. Connect failures
/// get a shorter window so a dead host fails fast.
pub(crate) fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(5))
        .timeout(timeout)
        .build()
        .unwrap()
}

/// POST a JSON payload and parse the JSON reply. Non-2xx replies become
/// upstream errors carrying the status code and body.
pub(crate) async fn post_json<T: Serialize>(
    client: &Client,
    api_label: &str,
    url: &str,
    token: Option<&str>,
    payload: &T,
) -> Result<serde_json::Value, ExplorerError> {
    let mut request = client
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .json(payload);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .await
        .map_err(|e| classify_transport(api_label, &e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!(api = api_label, status = status.as_u16(), body = %body, "Upstream API error");
        return Err(ExplorerError::upstream_status(
            api_label,
            status.as_u16(),
            &body,
        ));
    }

    response.json().await.map_err(|e| {
        ExplorerError::Upstream(format!("{} returned unparseable JSON: {}", api_label, e))
    })
}

fn classify_transport(api_label: &str, error: &reqwest::Error) -> ExplorerError {
    if error.is_timeout() {
        ExplorerError::Upstream(format!("{} request timed out", api_label))
    } else if error.is_connect() {
        ExplorerError::Upstream(format!("Cannot connect to {}", api_label))
    } else {
        ExplorerError::Upstream(format!("{} request failed: {}", api_label, error))
    }
}
