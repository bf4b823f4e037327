//! Dataset model and the request shapes of the dataset endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-side collection of documents sharing chunking and embedding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub embedding_model: String,
    pub chunk_method: String,
    #[serde(default)]
    pub parser_config: Map<String, Value>,
    #[serde(default = "default_permission")]
    pub permission: String,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub create_date: DateTime<Utc>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub update_date: DateTime<Utc>,
    pub chunk_count: u64,
    pub document_count: u64,
    pub token_num: u64,
    pub status: String,
}

fn default_permission() -> String {
    "me".to_string()
}

fn default_chunk_method() -> String {
    "naive".to_string()
}

fn default_orderby() -> String {
    "create_time".to_string()
}

/// Body of `POST /api/v1/datasets`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDatasetRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    pub chunk_method: String,
    pub parser_config: Map<String, Value>,
    pub permission: String,
}

impl CreateDatasetRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
            description: None,
            embedding_model: None,
            chunk_method: default_chunk_method(),
            parser_config: Map::new(),
            permission: default_permission(),
        }
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = Some(model.into());
        self
    }

    pub fn chunk_method(mut self, method: impl Into<String>) -> Self {
        self.chunk_method = method.into();
        self
    }

    pub fn parser_config(mut self, config: Map<String, Value>) -> Self {
        self.parser_config = config;
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = permission.into();
        self
    }
}

/// Query of `GET /api/v1/datasets`.
#[derive(Debug, Clone, Serialize)]
pub struct ListDatasetsQuery {
    pub page: u32,
    pub page_size: u32,
    pub orderby: String,
    pub desc: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Default for ListDatasetsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 30,
            orderby: default_orderby(),
            desc: true,
            name: None,
            id: None,
        }
    }
}

impl ListDatasetsQuery {
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

    pub fn orderby(mut self, field: impl Into<String>) -> Self {
        self.orderby = field.into();
        self
    }

    pub fn desc(mut self, desc: bool) -> Self {
        self.desc = desc;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Body of `PUT /api/v1/datasets/{id}`. Unset fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDatasetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_config: Option<Map<String, Value>>,
}

impl UpdateDatasetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = Some(model.into());
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
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

#[derive(Debug, Clone, Serialize)]
pub struct DeleteDatasetsRequest {
    pub ids: Vec<String>,
}
