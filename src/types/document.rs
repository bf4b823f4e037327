//! Document model, update request and upload payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// A document stored in a dataset.
///
/// Parsing runs server-side after upload; its progress is not reflected back
/// into a `Document` already held by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub dataset_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub chunk_method: String,
    #[serde(default)]
    pub parser_config: Map<String, Value>,
    /// Processing state, e.g. `UNSTART`, `RUNNING`, `DONE`.
    #[serde(default)]
    pub run: String,
    #[serde(default)]
    pub created_by: String,
}

/// Body of `PUT /api/v1/datasets/{id}/documents/{doc}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDocumentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_config: Option<Map<String, Value>>,
}

impl UpdateDocumentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn meta_fields(mut self, fields: Map<String, Value>) -> Self {
        self.meta_fields = Some(fields);
        self
    }

    pub fn chunk_method(mut self, method: impl Into<String>) -> Self {
        self.chunk_method = Some(method.into());
        self
    }

    pub fn parser_config(mut self, config: Map<String, Value>) -> Self {
        self.parser_config = Some(config);
        self
    }
}

/// One file part of a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file fully; the handle is closed before this returns.
    pub async fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self { file_name, bytes })
    }

    pub fn media_type(&self) -> &'static str {
        guess_media_type(Path::new(&self.file_name))
    }

    pub(crate) fn into_part(self) -> crate::Result<reqwest::multipart::Part> {
        let media_type = self.media_type();
        reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(media_type)
            .map_err(|e| crate::Error::Transport(crate::transport::TransportError::Http(e)))
    }
}

fn guess_media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "md" => "text/markdown",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
