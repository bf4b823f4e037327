//! ragflow-upload — upload a directory of documents into a RagFlow dataset and trigger parsing
//!
//! Usage:
//!   ragflow-upload <DATASET_NAME> <DOC_DIR>
//!
//! The dataset must already exist. Only .doc .docx .pdf .xls .xlsx .md .txt
//! files directly inside DOC_DIR are uploaded.
//!
//! Environment:
//!   RAGFLOW_API_KEY             API key (required)
//!   RAGFLOW_API_URL             Server base URL (default http://localhost:9380)
//!   RAGFLOW_HTTP_TIMEOUT_SECS   Optional per-request timeout
//!   RUST_LOG                    Log filter (default info)

use anyhow::Context;
use clap::Parser;
use ragflow_client::batch::BatchUploader;
use ragflow_client::{ClientConfig, RagFlowClient};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "ragflow-upload",
    version,
    about = "Batch-upload a document directory to a RagFlow dataset and trigger parsing"
)]
struct Cli {
    /// Name of the target dataset (must already exist)
    dataset_name: String,

    /// Directory containing the documents to upload
    doc_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::from_env().context("failed to load client configuration")?;
    let client = RagFlowClient::new(&config)?;
    info!("client initialized");

    let report = match BatchUploader::new(&client)
        .run(&cli.dataset_name, &cli.doc_dir)
        .await
    {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "batch upload aborted");
            return Err(e.into());
        }
    };

    info!(
        dataset_id = %report.dataset_id,
        uploaded = report.uploaded.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        parse_triggered = report.parse.is_some(),
        "batch upload finished"
    );
    Ok(())
}
