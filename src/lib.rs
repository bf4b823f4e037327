//! # ragflow-client
//!
//! Typed async client for the RagFlow document-retrieval HTTP API.
//!
//! ## Overview
//!
//! Each [`RagFlowClient`] method maps one REST endpoint: it builds the URL,
//! serializes a JSON body or multipart form, calls the server, unwraps the
//! `{code, message, data}` envelope and deserializes the payload into a model.
//! Nothing is cached; every call is a fresh round trip.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ragflow_client::types::{ChatCompletionRequest, ListDatasetsQuery, Message};
//! use ragflow_client::{ClientConfig, RagFlowClient};
//!
//! #[tokio::main]
//! async fn main() -> ragflow_client::Result<()> {
//!     let config = ClientConfig::builder()
//!         .api_key("ragflow-xxxx")
//!         .base_url("http://localhost:9380")
//!         .build()?;
//!     let client = RagFlowClient::new(&config)?;
//!
//!     for ds in client.list_datasets(&ListDatasetsQuery::new()).await? {
//!         println!("{} ({} documents)", ds.name, ds.document_count);
//!     }
//!
//!     let reply = client
//!         .create_chat_completion("chat-id", ChatCompletionRequest::new(vec![Message::user("Hi")]))
//!         .await?;
//!     println!("{:?}", reply.first_content());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Explicit client configuration, optionally from the environment |
//! | [`client`] | The client facade and response interpreter |
//! | [`transport`] | HTTP plumbing (auth, bodies, streaming) |
//! | [`stream`] | Line decoder for streamed chat completions |
//! | [`types`] | Request / response models |
//! | [`batch`] | Directory batch upload |

pub mod batch;
pub mod client;
pub mod config;
pub mod stream;
pub mod transport;
pub mod types;

pub use client::RagFlowClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use types::{Chunk, Dataset, Document, Message, MessageRole};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
