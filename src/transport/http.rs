use crate::client::response;
use crate::config::ClientConfig;
use crate::{BoxStream, Error, Result};
use bytes::Bytes;
use futures::TryStreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Request payload shapes understood by the transport.
pub enum RequestBody {
    Empty,
    Json(Value),
    /// Multipart bodies leave `Content-Type` to reqwest so the boundary is set.
    Multipart(reqwest::multipart::Form),
}

/// A single call against the RagFlow API, relative to the configured base URL.
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Option<Value>,
    body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query<T: Serialize + ?Sized>(mut self, query: &T) -> Result<Self> {
        self.query = Some(serde_json::to_value(query)?);
        Ok(self)
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Join an API path onto the base URL, keeping any path prefix of the base.
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::Transport(TransportError::Other(format!("Invalid path {}: {}", path, e))))
    }

    /// Send the request and hand back the raw response, whatever its status.
    pub async fn send(&self, request: ApiRequest) -> Result<reqwest::Response> {
        let url = self.url(&request.path)?;
        debug!(method = %request.method, %url, "ragflow request");

        let mut req = self
            .client
            .request(request.method, url)
            .bearer_auth(&self.api_key);

        if let Some(query) = &request.query {
            req = req.query(query);
        }

        req = match request.body {
            RequestBody::Empty => req.header(CONTENT_TYPE, "application/json"),
            RequestBody::Json(body) => req.header(CONTENT_TYPE, "application/json").json(&body),
            RequestBody::Multipart(form) => req.multipart(form),
        };

        let response = req.send().await.map_err(TransportError::Http)?;
        debug!(status = response.status().as_u16(), "ragflow response");
        Ok(response)
    }

    /// Send the request and run the body through the response interpreter.
    pub async fn execute_json(&self, request: ApiRequest) -> Result<Value> {
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::Http)?;
        response::interpret(status, &body)
    }

    /// Send the request and return the live body once the status is known to be good.
    pub async fn execute_stream(&self, request: ApiRequest) -> Result<BoxStream<'static, Bytes>> {
        let response = self.send(request).await?;
        let response = Self::ensure_success(response).await?;
        let byte_stream = response
            .bytes_stream()
            .map_err(|e| Error::Transport(TransportError::Http(e)));
        Ok(Box::pin(byte_stream))
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status().as_u16();
        if status < 400 {
            return Ok(response);
        }
        let body = response.text().await.map_err(TransportError::Http)?;
        Err(match response::interpret(status, &body) {
            Err(e) => e,
            Ok(_) => response::status_error(status, None),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
