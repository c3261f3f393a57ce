use crate::core::endpoints::{self, resource};
use crate::domain::model::{Endpoint, EndpointGroup, Options, QueryId};
use crate::domain::ports::RestClient;
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// `genomic/region`: lookups keyed by regions such as `13:32315474-32400266`.
#[derive(Clone)]
pub struct GenomicRegionClient {
    rest: Arc<dyn RestClient>,
}

impl GenomicRegionClient {
    pub fn new(rest: Arc<dyn RestClient>) -> Self {
        Self { rest }
    }

    pub fn group(&self) -> EndpointGroup {
        endpoints::REGION
    }

    async fn fetch(&self, resource: &'static str, query_id: QueryId, options: &Options) -> Result<Value> {
        let endpoint = Endpoint::new(endpoints::REGION, resource);
        tracing::debug!("🧬 {}: region {}", endpoint, query_id);
        self.rest.get(&endpoint, Some(&query_id), options).await
    }

    pub async fn get_gene(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.fetch(resource::GENE, query_id.into(), options).await
    }

    pub async fn get_transcript(
        &self,
        query_id: impl Into<QueryId>,
        options: &Options,
    ) -> Result<Value> {
        self.fetch(resource::TRANSCRIPT, query_id.into(), options).await
    }

    pub async fn get_variation(
        &self,
        query_id: impl Into<QueryId>,
        options: &Options,
    ) -> Result<Value> {
        self.fetch(resource::VARIATION, query_id.into(), options).await
    }

    pub async fn get_sequence(
        &self,
        query_id: impl Into<QueryId>,
        options: &Options,
    ) -> Result<Value> {
        self.fetch(resource::SEQUENCE, query_id.into(), options).await
    }

    pub async fn get_regulatory(
        &self,
        query_id: impl Into<QueryId>,
        options: &Options,
    ) -> Result<Value> {
        self.fetch(resource::REGULATORY, query_id.into(), options).await
    }

    pub async fn get_tfbs(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.fetch(resource::TFBS, query_id.into(), options).await
    }

    pub async fn get_conservation(
        &self,
        query_id: impl Into<QueryId>,
        options: &Options,
    ) -> Result<Value> {
        self.fetch(resource::CONSERVATION, query_id.into(), options).await
    }
}
