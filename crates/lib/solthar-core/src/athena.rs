//! Client for the Athena knowledge ingestion and query service.

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

use crate::endpoint::RemoteEndpoint;
use crate::error::ClientError;
use crate::http::{API_KEY_HEADER, post_json};

const INGEST_TIMEOUT: Duration = Duration::from_secs(60);
const QUERY_TIMEOUT: Duration = Duration::from_secs(20);
const UPLOAD_CONTENT_TYPE: &str = "application/octet-stream";
const DEFAULT_UPLOAD_STEM: &str = "upload";
const UPLOAD_EXTENSION: &str = "bin";

/// File content for ingestion: exactly one form per request.
#[derive(Debug, Clone)]
pub enum FileInput {
    /// Path to a readable regular file on the local host.
    Path(String),
    /// Raw file content supplied inline.
    Bytes(Vec<u8>),
}

/// Tags as supplied by the caller, normalized to one comma-joined string on
/// the wire.
#[derive(Debug, Clone)]
pub enum TagsInput {
    Delimited(String),
    List(Vec<String>),
}

impl TagsInput {
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Delimited(tags) => tags.trim().to_string(),
            Self::List(tags) => tags
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// One file upload with its metadata.
#[derive(Debug, Clone)]
pub struct IngestRequest {
    pub file: FileInput,
    pub source_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<TagsInput>,
}

/// Client for the Athena service.
#[derive(Debug, Clone)]
pub struct AthenaClient {
    endpoint: RemoteEndpoint,
    http: reqwest::Client,
}

impl AthenaClient {
    #[must_use]
    pub fn new(endpoint: RemoteEndpoint) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// Uploads a file with metadata to `{base_url}/ingest` and returns the
    /// remote's JSON payload unmodified.
    ///
    /// Validation runs before any I/O: `source_type` must be non-empty after
    /// trimming, the endpoint needs both a base URL and an API key, and the
    /// file input must name a readable regular file or carry non-empty bytes.
    ///
    /// # Errors
    /// Returns a validation, configuration, connectivity, application, or
    /// decode error depending on where the call failed.
    pub async fn ingest_file(&self, request: IngestRequest) -> Result<Value, ClientError> {
        let source_type = request.source_type.trim();
        if source_type.is_empty() {
            return Err(ClientError::Validation(
                "source_type is required".to_string(),
            ));
        }
        let base_url = self.endpoint.require_base_url("ATHENA_BASE_URL")?;
        let api_key = self.endpoint.require_api_key("ATHENA_API_KEY")?;

        let (filename, content) = load_upload(&request.file, request.title.as_deref()).await?;

        let file_part = Part::bytes(content)
            .file_name(filename)
            .mime_str(UPLOAD_CONTENT_TYPE)
            .expect("valid upload content type");
        let mut form = Form::new()
            .part("file", file_part)
            .text("title", request.title.unwrap_or_default())
            .text("source_type", source_type.to_string())
            .text("description", request.description.unwrap_or_default());
        if let Some(tags) = request.tags.as_ref() {
            let joined = tags.to_wire();
            if !joined.is_empty() {
                form = form.text("tags", joined);
            }
        }

        debug!(source_type, "sending athena ingest request");
        let response = self
            .http
            .post(format!("{base_url}/ingest"))
            .header(API_KEY_HEADER, api_key)
            .multipart(form)
            .timeout(INGEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| ClientError::transport("Athena ingest failed", &err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::transport("Athena ingest failed", &err))?;
        if !status.is_success() {
            return Err(ClientError::Application {
                status: Some(status.as_u16()),
                message: format!("Athena ingest failed: {} {body}", status.as_u16()),
            });
        }
        serde_json::from_str(&body).map_err(|_| {
            ClientError::Decode(format!("Athena ingest returned non-JSON body: {body}"))
        })
    }

    /// Sends a prompt to `{base_url}/query` and returns the remote's textual
    /// answer.
    ///
    /// A JSON body with a `response` field yields that field; JSON without it
    /// yields a string rendering of the whole payload; a non-JSON body is
    /// returned as-is.
    ///
    /// # Errors
    /// Returns a validation, configuration, connectivity, or application
    /// error depending on where the call failed.
    pub async fn query_prompt(&self, prompt: &str) -> Result<String, ClientError> {
        if prompt.trim().is_empty() {
            return Err(ClientError::Validation("prompt is required".to_string()));
        }
        let base_url = self.endpoint.require_base_url("ATHENA_BASE_URL")?;

        let payload = serde_json::json!({ "prompt": prompt });
        let response = post_json(
            &self.http,
            &format!("{base_url}/query"),
            self.endpoint.api_key(),
            &payload,
            QUERY_TIMEOUT,
            "Athena query failed",
        )
        .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::transport("Athena query failed", &err))?;
        if !status.is_success() {
            return Err(ClientError::Application {
                status: Some(status.as_u16()),
                message: format!("Athena query failed: {} {body}", status.as_u16()),
            });
        }

        let Ok(value) = serde_json::from_str::<Value>(&body) else {
            return Ok(body);
        };
        match value.get("response") {
            Some(Value::String(answer)) => Ok(answer.clone()),
            Some(other) => Ok(other.to_string()),
            None => Ok(value.to_string()),
        }
    }
}

/// Resolves the upload filename and content, reading path inputs from disk.
///
/// The read buffers the whole file; no handle outlives this call on any exit
/// path.
async fn load_upload(
    file: &FileInput,
    title: Option<&str>,
) -> Result<(String, Vec<u8>), ClientError> {
    match file {
        FileInput::Path(path) => {
            let path = path.trim();
            if path.is_empty() {
                return Err(ClientError::Validation("file path is empty".to_string()));
            }
            let metadata = tokio::fs::metadata(path).await.map_err(|err| {
                ClientError::Validation(format!("file not readable: {path}: {err}"))
            })?;
            if !metadata.is_file() {
                return Err(ClientError::Validation(format!(
                    "not a regular file: {path}"
                )));
            }
            let content = tokio::fs::read(path).await.map_err(|err| {
                ClientError::Validation(format!("failed to read file: {path}: {err}"))
            })?;
            let filename = Path::new(path).file_name().map_or_else(
                || default_upload_name(title),
                |name| name.to_string_lossy().into_owned(),
            );
            Ok((filename, content))
        }
        FileInput::Bytes(bytes) => {
            if bytes.is_empty() {
                return Err(ClientError::Validation("file content is empty".to_string()));
            }
            Ok((default_upload_name(title), bytes.clone()))
        }
    }
}

fn default_upload_name(title: Option<&str>) -> String {
    let stem = title
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map_or_else(
            || DEFAULT_UPLOAD_STEM.to_string(),
            |title| title.replace(' ', "_"),
        );
    format!("{stem}.{UPLOAD_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured_client() -> AthenaClient {
        AthenaClient::new(RemoteEndpoint::default())
    }

    fn configured_client() -> AthenaClient {
        AthenaClient::new(RemoteEndpoint::new(
            Some("http://127.0.0.1:1".to_string()),
            Some("secret".to_string()),
        ))
    }

    fn bytes_request(source_type: &str) -> IngestRequest {
        IngestRequest {
            file: FileInput::Bytes(b"content".to_vec()),
            source_type: source_type.to_string(),
            title: None,
            description: None,
            tags: None,
        }
    }

    #[tokio::test]
    async fn blank_source_type_fails_before_configuration_checks() {
        // The endpoint is unconfigured, so a configuration error here would
        // mean validation ran in the wrong order.
        let err = unconfigured_client()
            .ingest_file(bytes_request("   "))
            .await
            .expect_err("blank source_type should fail");

        assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn missing_endpoint_is_a_configuration_error() {
        let err = unconfigured_client()
            .ingest_file(bytes_request("notes"))
            .await
            .expect_err("unconfigured endpoint should fail");

        assert!(matches!(err, ClientError::Configuration(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn nonexistent_path_fails_validation_before_any_network_io() {
        let request = IngestRequest {
            file: FileInput::Path("/no/such/file.txt".to_string()),
            source_type: "notes".to_string(),
            title: None,
            description: None,
            tags: None,
        };

        let err = configured_client()
            .ingest_file(request)
            .await
            .expect_err("missing file should fail");

        assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
        assert!(err.to_string().contains("/no/such/file.txt"));
    }

    #[tokio::test]
    async fn empty_bytes_fail_validation() {
        let request = IngestRequest {
            file: FileInput::Bytes(Vec::new()),
            source_type: "notes".to_string(),
            title: None,
            description: None,
            tags: None,
        };

        let err = configured_client()
            .ingest_file(request)
            .await
            .expect_err("empty bytes should fail");

        assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn blank_prompt_fails_validation() {
        let err = configured_client()
            .query_prompt("  ")
            .await
            .expect_err("blank prompt should fail");

        assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn upload_name_derives_from_title() {
        assert_eq!(default_upload_name(Some("My Report")), "My_Report.bin");
        assert_eq!(default_upload_name(Some("  ")), "upload.bin");
        assert_eq!(default_upload_name(None), "upload.bin");
    }

    #[test]
    fn tags_normalize_to_comma_joined_strings() {
        let list = TagsInput::List(vec![
            "rust".to_string(),
            " mcp ".to_string(),
            String::new(),
        ]);
        assert_eq!(list.to_wire(), "rust,mcp");

        let delimited = TagsInput::Delimited(" a,b,c ".to_string());
        assert_eq!(delimited.to_wire(), "a,b,c");

        assert!(TagsInput::List(Vec::new()).to_wire().is_empty());
    }
}
