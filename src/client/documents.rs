use super::core::RagFlowClient;
use super::response;
use crate::transport::{ApiRequest, TransportError};
use crate::types::{Document, UpdateDocumentRequest, UploadFile};
use crate::Result;
use futures::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

fn documents_path(dataset_id: &str) -> String {
    format!("/api/v1/datasets/{}/documents", dataset_id)
}

fn document_path(dataset_id: &str, document_id: &str) -> String {
    format!("/api/v1/datasets/{}/documents/{}", dataset_id, document_id)
}

impl RagFlowClient {
    /// Upload files as one multipart request, one `file` part per file.
    pub async fn upload_documents(
        &self,
        dataset_id: &str,
        files: Vec<UploadFile>,
    ) -> Result<Vec<Document>> {
        let names: Vec<String> = files.iter().map(|f| f.file_name.clone()).collect();
        debug!(dataset_id, files = ?names, "uploading documents");

        let mut form = reqwest::multipart::Form::new();
        for file in files {
            form = form.part("file", file.into_part()?);
        }
        let data = self
            .execute(ApiRequest::post(documents_path(dataset_id)).multipart(form))
            .await?;
        // The envelope comes back whole when it carries no `data`: nothing was stored.
        if data.get("code").is_some() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(data)?)
    }

    pub async fn update_document(
        &self,
        dataset_id: &str,
        document_id: &str,
        request: &UpdateDocumentRequest,
    ) -> Result<()> {
        self.execute(ApiRequest::put(document_path(dataset_id, document_id)).json(request)?)
            .await?;
        Ok(())
    }

    /// Stream a document's content into `sink` frame by frame.
    ///
    /// Returns the number of bytes written. The body is never held in memory
    /// as a whole.
    pub async fn download_document<W>(
        &self,
        dataset_id: &str,
        document_id: &str,
        sink: &mut W,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let response = self
            .transport
            .send(ApiRequest::get(document_path(dataset_id, document_id)))
            .await?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.map_err(TransportError::Http)?;
            return Err(response::download_error(status, &body));
        }

        let mut written = 0u64;
        let mut body = response.bytes_stream();
        while let Some(frame) = body.next().await {
            let frame = frame.map_err(TransportError::Http)?;
            sink.write_all(&frame).await?;
            written += frame.len() as u64;
        }
        sink.flush().await?;
        debug!(dataset_id, document_id, bytes = written, "document downloaded");
        Ok(written)
    }
}
