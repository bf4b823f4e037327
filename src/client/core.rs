use crate::config::ClientConfig;
use crate::transport::{ApiRequest, HttpTransport};
use crate::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Client for a single RagFlow server.
///
/// Every method is one fresh round trip; nothing is cached between calls.
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct RagFlowClient {
    pub(crate) transport: Arc<HttpTransport>,
}

impl RagFlowClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        info!(base_url = %config.base_url(), "ragflow client ready");
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Build a client from `RAGFLOW_API_KEY` / `RAGFLOW_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<Value> {
        self.transport.execute_json(request).await
    }

    pub(crate) async fn execute_as<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let value = self.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl std::fmt::Debug for RagFlowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RagFlowClient").finish_non_exhaustive()
    }
}
