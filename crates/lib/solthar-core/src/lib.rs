//! Remote service clients for solthar-mcp.
//!
//! Wraps the Athena knowledge service and the MOAD documentation service
//! behind typed clients with a shared error taxonomy.

pub mod athena;
pub mod endpoint;
pub mod error;
mod http;
pub mod moad;

pub use athena::{AthenaClient, FileInput, IngestRequest, TagsInput};
pub use endpoint::RemoteEndpoint;
pub use error::ClientError;
pub use moad::{DEFAULT_DOC_FORMAT, DocGenRequest, MoadClient};
