//! Facade tests against a local mockito server.

mod common;

use chrono::{TimeZone, Utc};
use common::{client_for, dataset_json, document_json, envelope, mock_json, BEARER};
use mockito::Matcher;
use ragflow_client::types::{
    ChatCompletionRequest, CreateDatasetRequest, ListChunksQuery, ListDatasetsQuery, RetrievalRequest, UpdateChunkRequest,
    UpdateDatasetRequest, UpdateDocumentRequest, UploadFile,
};
use ragflow_client::{Error, Message};
use serde_json::json;

#[tokio::test]
async fn create_dataset_sends_only_set_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/datasets")
        .match_header("authorization", BEARER)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "manuals",
            "description": "product manuals",
            "chunk_method": "naive",
            "parser_config": {},
            "permission": "me"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(dataset_json("ds-1", "manuals")))
        .create_async()
        .await;

    let client = client_for(&server);
    let ds = client
        .create_dataset(&CreateDatasetRequest::new("manuals").description("product manuals"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(ds.id, "ds-1");
    assert_eq!(
        ds.create_date,
        Utc.with_ymd_and_hms(2025, 5, 28, 14, 30, 33).unwrap()
    );
}

#[tokio::test]
async fn create_dataset_non_zero_code_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_json(
        &mut server,
        "POST",
        "/api/v1/datasets",
        200,
        r#"{"code":102,"message":"Duplicated dataset name"}"#,
    )
    .await;

    let err = client_for(&server)
        .create_dataset(&CreateDatasetRequest::new("manuals"))
        .await
        .unwrap_err();
    match err {
        Error::Api { message, code, .. } => {
            assert_eq!(message, "API request failed: Duplicated dataset name");
            assert_eq!(code, Some(102));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_datasets_sends_paging_and_filters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/datasets")
        .match_header("authorization", BEARER)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("page_size".into(), "10".into()),
            Matcher::UrlEncoded("orderby".into(), "create_time".into()),
            Matcher::UrlEncoded("desc".into(), "true".into()),
            Matcher::UrlEncoded("id".into(), "ds-1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!([dataset_json("ds-1", "manuals")])))
        .create_async()
        .await;

    let datasets = client_for(&server)
        .list_datasets(&ListDatasetsQuery::new().page(2).page_size(10).id("ds-1"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets[0].name, "manuals");
}

#[tokio::test]
async fn find_dataset_by_name_requires_exact_match() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v1/datasets")
        .match_query(Matcher::UrlEncoded("name".into(), "manuals".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!([
            dataset_json("ds-2", "manuals-archive"),
            dataset_json("ds-1", "manuals")
        ])))
        .create_async()
        .await;

    let client = client_for(&server);
    let ds = client.find_dataset_by_name("manuals").await.unwrap();
    assert_eq!(ds.id, "ds-1");
}

#[tokio::test]
async fn find_dataset_by_name_without_match_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_json(&mut server, "GET", "/api/v1/datasets", 200, &envelope(json!([]))).await;

    let err = client_for(&server)
        .find_dataset_by_name("missing")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn http_status_maps_to_error_kind() {
    let mut server = mockito::Server::new_async().await;
    let _m401 = mock_json(
        &mut server,
        "GET",
        "/api/v1/datasets",
        401,
        r#"{"code":109,"message":"Authentication error: API key is invalid!"}"#,
    )
    .await;
    let _m404 = mock_json(
        &mut server,
        "GET",
        "/api/v1/datasets/ds-1/chunks/c-404",
        404,
        r#"{"message":"chunk not found"}"#,
    )
    .await;
    let _m500 = mock_json(
        &mut server,
        "DELETE",
        "/api/v1/datasets/ds-1/chunks/c-500",
        500,
        r#"{"message":"internal"}"#,
    )
    .await;

    let client = client_for(&server);

    match client.list_datasets(&ListDatasetsQuery::new()).await.unwrap_err() {
        Error::Authentication { message } => {
            assert_eq!(message, "Authentication error: API key is invalid!")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    match client.get_chunk("ds-1", "c-404").await.unwrap_err() {
        Error::NotFound { message } => assert_eq!(message, "chunk not found"),
        other => panic!("unexpected error: {other:?}"),
    }
    match client.delete_chunk("ds-1", "c-500").await.unwrap_err() {
        Error::Api { message, status, .. } => {
            assert_eq!(message, "API request failed: internal");
            assert_eq!(status, Some(500));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v1/datasets")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let err = client_for(&server)
        .list_datasets(&ListDatasetsQuery::new())
        .await
        .unwrap_err();
    match err {
        Error::Api { message, .. } => assert_eq!(message, "Invalid JSON response: Bad Gateway"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn delete_and_update_dataset_bodies() {
    let mut server = mockito::Server::new_async().await;
    let delete = server
        .mock("DELETE", "/api/v1/datasets")
        .match_body(Matcher::Json(json!({"ids": ["ds-1", "ds-2"]})))
        .with_status(200)
        .with_body(r#"{"code":0}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/v1/datasets/ds-1")
        .match_body(Matcher::Json(json!({"name": "renamed", "chunk_method": "qa"})))
        .with_status(200)
        .with_body(r#"{"code":0}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .delete_datasets(vec!["ds-1".into(), "ds-2".into()])
        .await
        .unwrap();
    client
        .update_dataset(
            "ds-1",
            &UpdateDatasetRequest::new().name("renamed").chunk_method("qa"),
        )
        .await
        .unwrap();

    delete.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn update_with_non_zero_code_surfaces() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_json(
        &mut server,
        "PUT",
        "/api/v1/datasets/ds-1",
        200,
        r#"{"code":102,"message":"Can't change chunk method"}"#,
    )
    .await;

    let err = client_for(&server)
        .update_dataset("ds-1", &UpdateDatasetRequest::new().chunk_method("qa"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { code: Some(102), .. }), "got {err:?}");
}

#[tokio::test]
async fn upload_documents_uses_multipart() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/datasets/ds-1/documents")
        .match_header("authorization", BEARER)
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="a.pdf""#.into()),
            Matcher::Regex(r#"name="file"; filename="notes.md""#.into()),
            Matcher::Regex("hello world".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!([
            document_json("doc-a", "ds-1", "a.pdf"),
            document_json("doc-n", "ds-1", "notes.md")
        ])))
        .create_async()
        .await;

    let docs = client_for(&server)
        .upload_documents(
            "ds-1",
            vec![
                UploadFile::new("a.pdf", b"%PDF-1.4".to_vec()),
                UploadFile::new("notes.md", b"hello world".to_vec()),
            ],
        )
        .await
        .unwrap();

    mock.assert_async().await;
    let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["doc-a", "doc-n"]);
    assert_eq!(docs[0].run, "UNSTART");
}

#[tokio::test]
async fn upload_without_data_yields_no_documents() {
    let mut server = mockito::Server::new_async().await;
    let _bare = server
        .mock("POST", "/api/v1/datasets/ds-1/documents")
        .match_body(Matcher::Regex(r#"filename="bare\.pdf""#.into()))
        .with_status(200)
        .with_body(r#"{"code":0}"#)
        .create_async()
        .await;
    let _null = server
        .mock("POST", "/api/v1/datasets/ds-1/documents")
        .match_body(Matcher::Regex(r#"filename="null\.pdf""#.into()))
        .with_status(200)
        .with_body(r#"{"code":0,"data":null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    for name in ["bare.pdf", "null.pdf"] {
        let docs = client
            .upload_documents("ds-1", vec![UploadFile::new(name, b"%PDF".to_vec())])
            .await
            .unwrap();
        assert!(docs.is_empty(), "{name}");
    }
}

#[tokio::test]
async fn update_document_sends_meta_fields() {
    let mut server = mockito::Server::new_async().await;
    let mut meta = serde_json::Map::new();
    meta.insert("author".into(), json!("ops"));
    let mock = server
        .mock("PUT", "/api/v1/datasets/ds-1/documents/doc-1")
        .match_body(Matcher::Json(json!({"meta_fields": {"author": "ops"}})))
        .with_status(200)
        .with_body(r#"{"code":0}"#)
        .create_async()
        .await;

    client_for(&server)
        .update_document("ds-1", "doc-1", &UpdateDocumentRequest::new().meta_fields(meta))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn download_document_streams_into_sink() {
    let mut server = mockito::Server::new_async().await;
    let payload: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
    let _m = server
        .mock("GET", "/api/v1/datasets/ds-1/documents/doc-1")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(payload.clone())
        .create_async()
        .await;

    let mut sink: Vec<u8> = Vec::new();
    let written = client_for(&server)
        .download_document("ds-1", "doc-1", &mut sink)
        .await
        .unwrap();
    assert_eq!(written, payload.len() as u64);
    assert_eq!(sink, payload);
}

#[tokio::test]
async fn download_document_failure_reports_message() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/v1/datasets/ds-1/documents/missing")
        .with_status(404)
        .with_body(r#"{"code":102,"message":"The dataset not own the document missing."}"#)
        .create_async()
        .await;
    let _m2 = server
        .mock("GET", "/api/v1/datasets/ds-1/documents/broken")
        .with_status(500)
        .with_body("upstream failure")
        .create_async()
        .await;

    let client = client_for(&server);
    let mut sink: Vec<u8> = Vec::new();
    match client
        .download_document("ds-1", "missing", &mut sink)
        .await
        .unwrap_err()
    {
        Error::NotFound { message } => assert_eq!(
            message,
            "Failed to download document: The dataset not own the document missing."
        ),
        other => panic!("unexpected error: {other:?}"),
    }
    match client
        .download_document("ds-1", "broken", &mut sink)
        .await
        .unwrap_err()
    {
        Error::Api { message, .. } => {
            assert_eq!(message, "Failed to download document: upstream failure")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(sink.is_empty());
}

#[tokio::test]
async fn list_chunks_returns_data_payload() {
    let mut server = mockito::Server::new_async().await;
    let data = json!({"chunks": [{"id": "c-1", "content": "hello"}], "doc": {"id": "doc-1"}, "total": 1});
    let mock = server
        .mock("GET", "/api/v1/datasets/ds-1/documents/doc-1/chunks")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("page_size".into(), "30".into()),
            Matcher::UrlEncoded("keywords".into(), "hello".into()),
        ]))
        .with_status(200)
        .with_body(envelope(data.clone()))
        .create_async()
        .await;

    let out = client_for(&server)
        .list_chunks("ds-1", "doc-1", &ListChunksQuery::new().keywords("hello"))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(out, data);
}

#[tokio::test]
async fn retrieve_chunks_omits_unset_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/retrieval")
        .match_body(Matcher::Json(json!({
            "question": "what is ragflow?",
            "dataset_ids": ["ds-1"],
            "page": 1,
            "page_size": 30,
            "similarity_threshold": 0.2,
            "vector_similarity_weight": 0.3,
            "top_k": 1024,
            "keyword": true,
            "highlight": false
        })))
        .with_status(200)
        .with_body(envelope(json!({"chunks": [], "doc_aggs": [], "total": 0})))
        .create_async()
        .await;

    let out = client_for(&server)
        .retrieve_chunks(
            &RetrievalRequest::new("what is ragflow?")
                .dataset_ids(vec!["ds-1".into()])
                .keyword(true),
        )
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(out["total"], json!(0));
}

#[tokio::test]
async fn chunk_get_update_delete() {
    let mut server = mockito::Server::new_async().await;
    let get = mock_json(
        &mut server,
        "GET",
        "/api/v1/datasets/ds-1/chunks/c-1",
        200,
        &envelope(json!({
            "id": "c-1",
            "dataset_id": "ds-1",
            "document_id": "doc-1",
            "content": "hello",
            "chunk_token_count": 2,
            "delimiter": "\\n",
            "create_time": 1748442633,
            "update_time": 1748442633
        })),
    )
    .await;
    let update = server
        .mock("PUT", "/api/v1/datasets/ds-1/chunks/c-1")
        .match_body(Matcher::Json(json!({"chunk_token_count": 256, "delimiter": "\n"})))
        .with_status(200)
        .with_body(r#"{"code":0}"#)
        .create_async()
        .await;
    let delete = mock_json(
        &mut server,
        "DELETE",
        "/api/v1/datasets/ds-1/chunks/c-1",
        200,
        r#"{"code":0}"#,
    )
    .await;

    let client = client_for(&server);
    let chunk = client.get_chunk("ds-1", "c-1").await.unwrap();
    assert_eq!(chunk.content, "hello");
    assert_eq!(chunk.chunk_token_count, 2);
    client
        .update_chunk(
            "ds-1",
            "c-1",
            &UpdateChunkRequest::new().chunk_token_count(256).delimiter("\n"),
        )
        .await
        .unwrap();
    client.delete_chunk("ds-1", "c-1").await.unwrap();

    get.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn parse_documents_returns_envelope_without_data() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/datasets/ds-1/chunks")
        .match_body(Matcher::Json(json!({"document_ids": ["doc-1", "doc-2"]})))
        .with_status(200)
        .with_body(r#"{"code":0}"#)
        .create_async()
        .await;

    let ack = client_for(&server)
        .parse_documents("ds-1", vec!["doc-1".into(), "doc-2".into()])
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(ack, json!({"code": 0}));
}

#[tokio::test]
async fn chat_completion_returns_typed_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/chats_openai/chat-1/chat/completions")
        .match_header("authorization", BEARER)
        .match_body(Matcher::Json(json!({
            "model": "model",
            "messages": [{"role": "user", "content": "hi"}],
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "choices": [{"index": 0, "finish_reason": "stop", "message": {"role": "assistant", "content": "hello"}}],
                "created": 1748442633,
                "model": "model",
                "object": "chat.completion",
                "usage": {"completion_tokens": 3, "prompt_tokens": 2, "total_tokens": 5}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let reply = client_for(&server)
        .create_chat_completion("chat-1", ChatCompletionRequest::new(vec![Message::user("hi")]))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(reply.first_content(), Some("hello"));
    assert_eq!(reply.usage.total_tokens, Some(5));
    assert_eq!(reply.usage.completion_tokens_details.reasoning_tokens, 0);
}

#[tokio::test]
async fn chat_completion_failure_propagates() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_json(
        &mut server,
        "POST",
        "/api/v1/chats_openai/chat-1/chat/completions",
        500,
        r#"{"message":"model unavailable"}"#,
    )
    .await;

    let err = client_for(&server)
        .create_chat_completion("chat-1", ChatCompletionRequest::new(vec![Message::user("hi")]))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn chat_stream_yields_decoded_lines_in_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/chats_openai/chat-1/chat/completions")
        .match_body(Matcher::PartialJson(json!({"stream": true})))
        .with_status(200)
        .with_header("content-type", "text/event-stream")
        .with_body(
            "data: {\"id\":\"1\",\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n\n\
             garbage\n\
             data: {\"id\":\"2\",\"choices\":[{\"delta\":{\"content\":\"lo\"}}]}\n\n",
        )
        .create_async()
        .await;

    let chunks = client_for(&server)
        .create_chat_completion_chunks("chat-1", ChatCompletionRequest::new(vec![Message::user("hi")]))
        .await
        .unwrap();
    mock.assert_async().await;
    let ids: Vec<_> = chunks.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(chunks[1]["choices"][0]["delta"]["content"], json!("lo"));
}

#[tokio::test]
async fn chat_stream_unauthorized_fails_before_streaming() {
    let mut server = mockito::Server::new_async().await;
    let _m = mock_json(
        &mut server,
        "POST",
        "/api/v1/chats_openai/chat-1/chat/completions",
        401,
        r#"{"code":109,"message":"invalid key"}"#,
    )
    .await;

    let result = client_for(&server)
        .chat_completion_stream("chat-1", ChatCompletionRequest::new(vec![Message::user("hi")]))
        .await;
    match result {
        Err(Error::Authentication { message }) => assert_eq!(message, "invalid key"),
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(_) => panic!("expected an authentication error"),
    }
}
