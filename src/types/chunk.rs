//! Chunk model and the chunk / retrieval / parse request shapes.

use serde::{Deserialize, Serialize};

/// A segment of a parsed document, the unit of retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub dataset_id: String,
    pub document_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub chunk_token_count: u64,
    #[serde(default)]
    pub delimiter: String,
    #[serde(default)]
    pub create_time: i64,
    #[serde(default)]
    pub update_time: i64,
}

/// Query of `GET /api/v1/datasets/{id}/documents/{doc}/chunks`.
#[derive(Debug, Clone, Serialize)]
pub struct ListChunksQuery {
    pub page: u32,
    pub page_size: u32,
    pub orderby: String,
    pub desc: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Default for ListChunksQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 30,
            orderby: "create_time".to_string(),
            desc: true,
            keywords: None,
            id: None,
        }
    }
}

impl ListChunksQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// `create_time` or `update_time`.
    pub fn orderby(mut self, field: impl Into<String>) -> Self {
        self.orderby = field.into();
        self
    }

    pub fn desc(mut self, desc: bool) -> Self {
        self.desc = desc;
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn id(mut self, chunk_id: impl Into<String>) -> Self {
        self.id = Some(chunk_id.into());
        self
    }
}

/// Body of `POST /api/v1/retrieval`.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_ids: Option<Vec<String>>,
    /// Documents must share one embedding model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_ids: Option<Vec<String>>,
    pub page: u32,
    pub page_size: u32,
    pub similarity_threshold: f64,
    pub vector_similarity_weight: f64,
    pub top_k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank_id: Option<String>,
    pub keyword: bool,
    pub highlight: bool,
}

impl RetrievalRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            dataset_ids: None,
            document_ids: None,
            page: 1,
            page_size: 30,
            similarity_threshold: 0.2,
            vector_similarity_weight: 0.3,
            top_k: 1024,
            rerank_id: None,
            keyword: false,
            highlight: false,
        }
    }

    pub fn dataset_ids(mut self, ids: Vec<String>) -> Self {
        self.dataset_ids = Some(ids);
        self
    }

    pub fn document_ids(mut self, ids: Vec<String>) -> Self {
        self.document_ids = Some(ids);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn vector_similarity_weight(mut self, weight: f64) -> Self {
        self.vector_similarity_weight = weight;
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn rerank_id(mut self, rerank_id: impl Into<String>) -> Self {
        self.rerank_id = Some(rerank_id.into());
        self
    }

    pub fn keyword(mut self, enable: bool) -> Self {
        self.keyword = enable;
        self
    }

    pub fn highlight(mut self, enable: bool) -> Self {
        self.highlight = enable;
        self
    }
}

/// Body of `PUT /api/v1/datasets/{id}/chunks/{chunk}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChunkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_token_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
}

impl UpdateChunkRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn important_keywords(mut self, keywords: Vec<String>) -> Self {
        self.important_keywords = Some(keywords);
        self
    }

    pub fn chunk_token_count(mut self, count: u64) -> Self {
        self.chunk_token_count = Some(count);
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }
}

/// Body of `POST /api/v1/datasets/{id}/chunks`, which starts parsing.
#[derive(Debug, Clone, Serialize)]
pub struct ParseDocumentsRequest {
    pub document_ids: Vec<String>,
}
