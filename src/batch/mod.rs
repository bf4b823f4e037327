//! Batch upload of a document directory into a dataset.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`scan_directory`] | Non-recursive scan filtered by [`SUPPORTED_FILE_TYPES`] |
//! | [`BatchUploader`] | Resolve dataset, upload sequentially, trigger parse |
//! | [`UploadReport`] | Per-file outcome of a run |
//!
//! The dataset must already exist: a name with no match fails with
//! [`crate::Error::NotFound`] before any file is touched.
//!
//! ```rust,no_run
//! use ragflow_client::batch::BatchUploader;
//! use ragflow_client::RagFlowClient;
//! use std::path::Path;
//!
//! # async fn run() -> ragflow_client::Result<()> {
//! let client = RagFlowClient::from_env()?;
//! let report = BatchUploader::new(&client)
//!     .run("manuals", Path::new("./docs"))
//!     .await?;
//! println!("uploaded {} documents", report.uploaded.len());
//! # Ok(())
//! # }
//! ```

mod scan;
mod uploader;

pub use scan::{is_supported, scan_directory, ScanResult, SUPPORTED_FILE_TYPES};
pub use uploader::{BatchUploader, FailedUpload, UploadReport, UploadedDocument};
