use super::core::RagFlowClient;
use crate::transport::ApiRequest;
use crate::types::{
    CreateDatasetRequest, Dataset, DeleteDatasetsRequest, ListDatasetsQuery, UpdateDatasetRequest,
};
use crate::{Error, Result};
use tracing::debug;

const DATASETS_PATH: &str = "/api/v1/datasets";

impl RagFlowClient {
    pub async fn create_dataset(&self, request: &CreateDatasetRequest) -> Result<Dataset> {
        self.execute_as(ApiRequest::post(DATASETS_PATH).json(request)?)
            .await
    }

    pub async fn list_datasets(&self, query: &ListDatasetsQuery) -> Result<Vec<Dataset>> {
        self.execute_as(ApiRequest::get(DATASETS_PATH).query(query)?)
            .await
    }

    /// Look a dataset up by exact name. No match is [`Error::NotFound`].
    pub async fn find_dataset_by_name(&self, name: &str) -> Result<Dataset> {
        let datasets = self
            .list_datasets(&ListDatasetsQuery::new().name(name))
            .await?;
        debug!(name, candidates = datasets.len(), "dataset lookup");
        datasets
            .into_iter()
            .find(|d| d.name == name)
            .ok_or_else(|| Error::not_found(format!("Dataset {} does not exist", name)))
    }

    pub async fn delete_datasets(&self, ids: Vec<String>) -> Result<()> {
        let body = DeleteDatasetsRequest { ids };
        self.execute(ApiRequest::delete(DATASETS_PATH).json(&body)?)
            .await?;
        Ok(())
    }

    pub async fn update_dataset(&self, dataset_id: &str, request: &UpdateDatasetRequest) -> Result<()> {
        let path = format!("{}/{}", DATASETS_PATH, dataset_id);
        self.execute(ApiRequest::put(path).json(request)?).await?;
        Ok(())
    }
}
