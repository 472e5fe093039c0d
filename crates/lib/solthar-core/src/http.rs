use std::time::Duration;

use reqwest::Response;
use serde_json::Value;

use crate::error::ClientError;

pub(crate) const API_KEY_HEADER: &str = "x-api-key";

/// Issues a single JSON POST with a fixed timeout.
///
/// Transport faults are mapped to connectivity errors; status handling is
/// left to the caller.
pub(crate) async fn post_json(
    http: &reqwest::Client,
    url: &str,
    api_key: Option<&str>,
    payload: &Value,
    timeout: Duration,
    context: &str,
) -> Result<Response, ClientError> {
    let mut request = http.post(url).json(payload).timeout(timeout);
    if let Some(key) = api_key {
        request = request.header(API_KEY_HEADER, key);
    }
    request
        .send()
        .await
        .map_err(|err| ClientError::transport(context, &err))
}
