use super::core::RagFlowClient;
use crate::transport::ApiRequest;
use crate::types::{Chunk, ListChunksQuery, ParseDocumentsRequest, RetrievalRequest, UpdateChunkRequest};
use crate::Result;
use serde_json::Value;

fn chunks_path(dataset_id: &str) -> String {
    format!("/api/v1/datasets/{}/chunks", dataset_id)
}

fn chunk_path(dataset_id: &str, chunk_id: &str) -> String {
    format!("/api/v1/datasets/{}/chunks/{}", dataset_id, chunk_id)
}

impl RagFlowClient {
    /// Chunks of one document, returned as the raw `data` payload
    /// (`chunks`, `doc`, `total`).
    pub async fn list_chunks(
        &self,
        dataset_id: &str,
        document_id: &str,
        query: &ListChunksQuery,
    ) -> Result<Value> {
        let path = format!(
            "/api/v1/datasets/{}/documents/{}/chunks",
            dataset_id, document_id
        );
        self.execute(ApiRequest::get(path).query(query)?).await
    }

    /// Semantic retrieval across datasets / documents, as the raw `data`
    /// payload (`chunks`, `doc_aggs`, `total`).
    pub async fn retrieve_chunks(&self, request: &RetrievalRequest) -> Result<Value> {
        self.execute(ApiRequest::post("/api/v1/retrieval").json(request)?)
            .await
    }

    pub async fn get_chunk(&self, dataset_id: &str, chunk_id: &str) -> Result<Chunk> {
        self.execute_as(ApiRequest::get(chunk_path(dataset_id, chunk_id)))
            .await
    }

    pub async fn update_chunk(
        &self,
        dataset_id: &str,
        chunk_id: &str,
        request: &UpdateChunkRequest,
    ) -> Result<()> {
        self.execute(ApiRequest::put(chunk_path(dataset_id, chunk_id)).json(request)?)
            .await?;
        Ok(())
    }

    pub async fn delete_chunk(&self, dataset_id: &str, chunk_id: &str) -> Result<()> {
        self.execute(ApiRequest::delete(chunk_path(dataset_id, chunk_id)))
            .await?;
        Ok(())
    }

    /// Start server-side parsing of the given documents.
    ///
    /// Parsing is asynchronous; the returned value is the server's
    /// acknowledgement, not the parse result.
    pub async fn parse_documents(&self, dataset_id: &str, document_ids: Vec<String>) -> Result<Value> {
        let body = ParseDocumentsRequest { document_ids };
        self.execute(ApiRequest::post(chunks_path(dataset_id)).json(&body)?)
            .await
    }
}
