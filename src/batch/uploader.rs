//! Four-stage batch upload: resolve dataset, scan, upload, trigger parse.

use super::scan::scan_directory;
use crate::client::RagFlowClient;
use crate::types::UploadFile;
use crate::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub path: PathBuf,
    pub document_id: String,
}

#[derive(Debug, Clone)]
pub struct FailedUpload {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of a batch run that got past dataset resolution and scanning.
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    pub dataset_id: String,
    pub uploaded: Vec<UploadedDocument>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<FailedUpload>,
    /// Server acknowledgement of the parse trigger; `None` when nothing was uploaded.
    pub parse: Option<Value>,
}

impl UploadReport {
    pub fn document_ids(&self) -> Vec<String> {
        self.uploaded.iter().map(|d| d.document_id.clone()).collect()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Drives a [`RagFlowClient`] through one directory upload.
///
/// Uploads run strictly one file at a time so at most one file is open or
/// held in memory.
pub struct BatchUploader<'a> {
    client: &'a RagFlowClient,
}

impl<'a> BatchUploader<'a> {
    pub fn new(client: &'a RagFlowClient) -> Self {
        Self { client }
    }

    /// Run all stages. Dataset resolution, scanning and the parse trigger
    /// abort the run on error; a single failed upload is only logged.
    pub async fn run(&self, dataset_name: &str, doc_dir: &Path) -> Result<UploadReport> {
        info!(dataset = dataset_name, "resolving dataset");
        let dataset = self.client.find_dataset_by_name(dataset_name).await?;
        info!(dataset_id = %dataset.id, "found dataset");

        info!(dir = %doc_dir.display(), "scanning directory");
        let scan = scan_directory(doc_dir).await?;

        let mut report = UploadReport {
            dataset_id: dataset.id.clone(),
            skipped: scan.skipped,
            ..Default::default()
        };

        if scan.selected.is_empty() {
            info!("no supported files to upload");
            return Ok(report);
        }

        info!(count = scan.selected.len(), "uploading files");
        for path in scan.selected {
            match self.upload_one(&dataset.id, &path).await {
                Ok(Some(document_id)) => {
                    info!(file = %path.display(), %document_id, "uploaded");
                    report.uploaded.push(UploadedDocument { path, document_id });
                }
                Ok(None) => {
                    warn!(file = %path.display(), "upload returned no document");
                    report.failed.push(FailedUpload {
                        path,
                        message: "upload returned no document".to_string(),
                    });
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "upload failed");
                    report.failed.push(FailedUpload {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        if report.uploaded.is_empty() {
            info!("nothing uploaded, skipping parse");
            return Ok(report);
        }

        let document_ids = report.document_ids();
        info!(count = document_ids.len(), "triggering parse");
        let ack = self
            .client
            .parse_documents(&dataset.id, document_ids)
            .await?;
        info!(response = %ack, "parse request accepted");
        report.parse = Some(ack);
        Ok(report)
    }

    async fn upload_one(&self, dataset_id: &str, path: &Path) -> Result<Option<String>> {
        let file = UploadFile::from_path(path).await?;
        let docs = self.client.upload_documents(dataset_id, vec![file]).await?;
        Ok(docs.into_iter().next().map(|d| d.id))
    }
}
