use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use solthar_core::DocGenRequest;

use crate::{SoltharMcp, helpers};

/// Parameters for generating documentation via MOAD.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MoadParams {
    /// Path to the code project.
    pub project_path: String,
    /// Path where generated docs should be saved.
    pub output_path: String,
    /// Output format for generated docs. Defaults to markdown.
    pub format: Option<String>,
}

#[tool_router(router = tool_router_moad, vis = "pub")]
impl SoltharMcp {
    #[tool(name = "moad", description = "Generate documentation for a given codebase")]
    async fn moad_generate(
        &self,
        Parameters(params): Parameters<MoadParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let mut request = DocGenRequest::new(params.project_path, params.output_path);
        if let Some(format) = params.format.filter(|format| !format.trim().is_empty()) {
            request = request.with_format(format);
        }
        let envelope = self
            .moad()
            .generate_documentation(request)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(envelope)?]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_optional_in_the_schema() {
        let params: MoadParams = serde_json::from_value(serde_json::json!({
            "project_path": "/p",
            "output_path": "/o",
        }))
        .expect("format should default");
        assert!(params.format.is_none());
    }
}
