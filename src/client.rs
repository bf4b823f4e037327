//! RagFlow client facade.
//!
//! One async method per remote operation; the implementation is split by
//! resource under `src/client/`.

mod chat;
mod chunks;
pub mod core;
mod datasets;
mod documents;
pub mod response;

pub use core::RagFlowClient;
