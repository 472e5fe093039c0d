//! MCP tool modules.
//!
//! Tools are grouped by remote service: Athena knowledge ingestion/query and
//! MOAD documentation generation.

mod athena;
mod moad;
