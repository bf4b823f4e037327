//! Request and response types for the RagFlow HTTP API.
//!
//! Response models are immutable snapshots of server state. Request types are
//! explicit structs whose unset optional fields never reach the wire.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chat`] | OpenAI-compatible chat completion |
//! | [`chunk`] | Chunks, retrieval and parse triggers |
//! | [`dataset`] | Dataset CRUD |
//! | [`document`] | Document update and multipart upload |
//! | [`message`] | Chat messages |
//! | [`timestamp`] | RFC-1123 date parsing |

pub mod chat;
pub mod chunk;
pub mod dataset;
pub mod document;
pub mod message;
pub mod timestamp;

pub use chat::{ChatCompletionRequest, ChatCompletionResponse, ChatCompletionUsage, CompletionTokensDetails};
pub use chunk::{Chunk, ListChunksQuery, ParseDocumentsRequest, RetrievalRequest, UpdateChunkRequest};
pub use dataset::{CreateDatasetRequest, Dataset, DeleteDatasetsRequest, ListDatasetsQuery, UpdateDatasetRequest};
pub use document::{Document, UpdateDocumentRequest, UploadFile};
pub use message::{Message, MessageRole};
