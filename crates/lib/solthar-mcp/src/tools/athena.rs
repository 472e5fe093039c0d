use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ErrorCode},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use solthar_core::{FileInput, IngestRequest, TagsInput};

use crate::{SoltharMcp, helpers};

/// Tags accept either a single delimited string or a list of tag strings.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum TagsParam {
    Delimited(String),
    List(Vec<String>),
}

impl From<TagsParam> for TagsInput {
    fn from(tags: TagsParam) -> Self {
        match tags {
            TagsParam::Delimited(tags) => Self::Delimited(tags),
            TagsParam::List(tags) => Self::List(tags),
        }
    }
}

/// Parameters for ingesting a file into Athena.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AthenaIngestParams {
    /// Path to a readable file on the server host. Mutually exclusive with `file_base64`.
    pub file_path: Option<String>,
    /// Base64-encoded raw file content. Mutually exclusive with `file_path`.
    pub file_base64: Option<String>,
    /// Label for the kind of source being ingested. Required, non-empty.
    pub source_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<TagsParam>,
}

/// Parameters for querying Athena.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AthenaQueryParams {
    pub prompt: String,
}

#[tool_router(router = tool_router_athena, vis = "pub")]
impl SoltharMcp {
    #[tool(
        name = "athenaIngest",
        description = "Ingest a file into Athena with metadata. Provide file_path or file_base64."
    )]
    async fn athena_ingest(
        &self,
        Parameters(params): Parameters<AthenaIngestParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let file = file_input(params.file_path, params.file_base64)?;
        let result = self
            .athena()
            .ingest_file(IngestRequest {
                file,
                source_type: params.source_type,
                title: params.title,
                description: params.description,
                tags: params.tags.map(TagsInput::from),
            })
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(result)?]))
    }

    #[tool(name = "athenaQuery", description = "Query Athena with a text prompt")]
    async fn athena_query(
        &self,
        Parameters(params): Parameters<AthenaQueryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let answer = self
            .athena()
            .query_prompt(&params.prompt)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::text(answer)]))
    }
}

/// Resolves the two file argument forms into one closed input, rejecting
/// anything other than exactly one form.
fn file_input(
    file_path: Option<String>,
    file_base64: Option<String>,
) -> Result<FileInput, ErrorData> {
    let file_path = normalize_payload(file_path);
    let file_base64 = normalize_payload(file_base64);
    match (file_path, file_base64) {
        (Some(path), None) => Ok(FileInput::Path(path)),
        (None, Some(encoded)) => {
            let bytes = BASE64.decode(encoded.trim()).map_err(|err| {
                helpers::mcp_err(
                    ErrorCode::INVALID_PARAMS,
                    format!("file_base64 is not valid base64: {err}"),
                )
            })?;
            Ok(FileInput::Bytes(bytes))
        }
        (Some(_), Some(_)) => Err(helpers::mcp_err(
            ErrorCode::INVALID_PARAMS,
            "provide exactly one of file_path or file_base64",
        )),
        (None, None) => Err(helpers::mcp_err(
            ErrorCode::INVALID_PARAMS,
            "file is required (provide file_path or file_base64)",
        )),
    }
}

fn normalize_payload(value: Option<String>) -> Option<String> {
    value.and_then(|payload| {
        let trimmed = payload.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(payload)
        }
    })
}
