//! Shared mock-server fixtures for integration tests.

#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use ragflow_client::{ClientConfig, RagFlowClient};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-key";
pub const BEARER: &str = "Bearer test-key";

/// Client pointed at the mock server.
pub fn client_for(server: &ServerGuard) -> RagFlowClient {
    let config = ClientConfig::builder()
        .api_key(API_KEY)
        .base_url(server.url())
        .build()
        .expect("valid test config");
    RagFlowClient::new(&config).expect("client")
}

pub fn envelope(data: Value) -> String {
    json!({"code": 0, "data": data}).to_string()
}

pub fn dataset_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "avatar": null,
        "description": "test dataset",
        "embedding_model": "BAAI/bge-large-zh-v1.5",
        "chunk_method": "naive",
        "parser_config": {"chunk_token_num": 128, "delimiter": "\\n"},
        "permission": "me",
        "create_date": "Wed, 28 May 2025 14:30:33 GMT",
        "update_date": "Wed, 28 May 2025 14:30:33 GMT",
        "chunk_count": 0,
        "document_count": 0,
        "token_num": 0,
        "status": "1"
    })
}

pub fn document_json(id: &str, dataset_id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "dataset_id": dataset_id,
        "location": name,
        "size": 1,
        "type": "doc",
        "chunk_method": "naive",
        "parser_config": {},
        "run": "UNSTART",
        "created_by": "user-1"
    })
}

/// Mock a JSON endpoint answering with `status` and `body`.
pub async fn mock_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock(method, path)
        .match_query(mockito::Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
