use std::borrow::Cow;

use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use solthar_core::ClientError;

pub(crate) fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Normalizes a client failure into the single tool-execution error surfaced
/// to MCP callers. The structured kind stays internal.
pub(crate) fn map_err(err: ClientError) -> ErrorData {
    let code = match err {
        ClientError::Validation(_) => ErrorCode::INVALID_PARAMS,
        _ => ErrorCode::INTERNAL_ERROR,
    };
    mcp_err(code, err.to_string())
}
