//! Client for the MOAD documentation generation service.

use std::time::Duration;

use serde_json::Value;
use tracing::warn;

use crate::endpoint::RemoteEndpoint;
use crate::error::ClientError;
use crate::http::post_json;

const DOC_GEN_TIMEOUT: Duration = Duration::from_secs(15);

pub const DEFAULT_DOC_FORMAT: &str = "markdown";

/// One documentation generation request.
#[derive(Debug, Clone)]
pub struct DocGenRequest {
    pub project_path: String,
    pub output_path: String,
    pub format: String,
}

impl DocGenRequest {
    #[must_use]
    pub fn new(project_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
            output_path: output_path.into(),
            format: DEFAULT_DOC_FORMAT.to_string(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

/// Client for the MOAD service.
#[derive(Debug, Clone)]
pub struct MoadClient {
    endpoint: RemoteEndpoint,
    http: reqwest::Client,
}

impl MoadClient {
    #[must_use]
    pub fn new(endpoint: RemoteEndpoint) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// Requests documentation generation and wraps the remote payload in a
    /// `{status, data}` envelope.
    ///
    /// # Errors
    /// Returns a configuration error when no base URL is set. Every other
    /// failure collapses into one uniform service-call failure; the cause is
    /// logged, not surfaced.
    pub async fn generate_documentation(
        &self,
        request: DocGenRequest,
    ) -> Result<Value, ClientError> {
        let base_url = self.endpoint.require_base_url("MOAD_URL")?;

        let payload = serde_json::json!({
            "projectPath": request.project_path,
            "outputPath": request.output_path,
            "format": request.format,
        });

        match self.post_generate(base_url, &payload).await {
            Ok(data) => Ok(serde_json::json!({ "status": "success", "data": data })),
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "MOAD documentation request failed");
                Err(ClientError::Application {
                    status: None,
                    message: "MOAD service call failed".to_string(),
                })
            }
        }
    }

    async fn post_generate(&self, base_url: &str, payload: &Value) -> Result<Value, ClientError> {
        let response = post_json(
            &self.http,
            &format!("{base_url}/"),
            self.endpoint.api_key(),
            payload,
            DOC_GEN_TIMEOUT,
            "MOAD request failed",
        )
        .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::transport("MOAD request failed", &err))?;
        if !status.is_success() {
            return Err(ClientError::Application {
                status: Some(status.as_u16()),
                message: format!("MOAD request failed: {} {body}", status.as_u16()),
            });
        }
        serde_json::from_str(&body)
            .map_err(|_| ClientError::Decode(format!("MOAD returned non-JSON body: {body}")))
    }
}
