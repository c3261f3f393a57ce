use crate::core::endpoints::{self, resource, FEATURE};
use crate::domain::model::{Endpoint, EndpointGroup, Options, QueryId};
use crate::domain::ports::RestClient;
use crate::utils::error::Result;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

/// Client for one `feature/{subcategory}` group.
///
/// Every method issues exactly one [`RestClient::get`] and returns its
/// result untouched.
#[derive(Clone)]
pub struct FeatureClient {
    rest: Arc<dyn RestClient>,
    group: EndpointGroup,
}

impl FeatureClient {
    pub fn new(rest: Arc<dyn RestClient>, subcategory: impl Into<Cow<'static, str>>) -> Self {
        Self::for_group(rest, EndpointGroup::with_subcategory(FEATURE, subcategory))
    }

    pub(crate) fn for_group(rest: Arc<dyn RestClient>, group: EndpointGroup) -> Self {
        Self { rest, group }
    }

    pub fn group(&self) -> EndpointGroup {
        self.group.clone()
    }

    pub(crate) async fn fetch(
        &self,
        resource: &'static str,
        query_id: Option<QueryId>,
        options: &Options,
    ) -> Result<Value> {
        let endpoint = Endpoint::new(self.group.clone(), resource);
        tracing::debug!("🔎 {}: query {:?}", endpoint, query_id.as_ref().map(QueryId::as_segment));
        self.rest.get(&endpoint, query_id.as_ref(), options).await
    }

    pub async fn get_next(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.fetch(resource::NEXT, Some(query_id.into()), options).await
    }

    pub async fn get_info(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.fetch(resource::INFO, Some(query_id.into()), options).await
    }

    /// Collection-wide query; filters travel in `options`.
    pub async fn search(&self, options: &Options) -> Result<Value> {
        self.fetch(resource::SEARCH, None, options).await
    }
}

/// `feature/gene`
#[derive(Clone)]
pub struct GeneClient {
    feature: FeatureClient,
}

impl GeneClient {
    pub fn new(rest: Arc<dyn RestClient>) -> Self {
        Self {
            feature: FeatureClient::for_group(rest, endpoints::GENE),
        }
    }

    pub fn group(&self) -> EndpointGroup {
        self.feature.group()
    }

    pub async fn get_next(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.feature.get_next(query_id, options).await
    }

    pub async fn get_info(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.feature.get_info(query_id, options).await
    }

    pub async fn search(&self, options: &Options) -> Result<Value> {
        self.feature.search(options).await
    }

    pub async fn get_protein(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.feature
            .fetch(resource::PROTEIN, Some(query_id.into()), options)
            .await
    }

    pub async fn get_transcript(
        &self,
        query_id: impl Into<QueryId>,
        options: &Options,
    ) -> Result<Value> {
        self.feature
            .fetch(resource::TRANSCRIPT, Some(query_id.into()), options)
            .await
    }

    pub async fn get_tfbs(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.feature
            .fetch(resource::TFBS, Some(query_id.into()), options)
            .await
    }

    pub async fn get_variation(
        &self,
        query_id: impl Into<QueryId>,
        options: &Options,
    ) -> Result<Value> {
        self.feature
            .fetch(resource::VARIATION, Some(query_id.into()), options)
            .await
    }

    /// Genomic sequence spanned by a gene.
    pub async fn get_sequence(
        &self,
        query_id: impl Into<QueryId>,
        options: &Options,
    ) -> Result<Value> {
        self.feature
            .fetch(resource::SEQUENCE, Some(query_id.into()), options)
            .await
    }
}

/// `feature/protein`
#[derive(Clone)]
pub struct ProteinClient {
    feature: FeatureClient,
}

impl ProteinClient {
    pub fn new(rest: Arc<dyn RestClient>) -> Self {
        Self {
            feature: FeatureClient::for_group(rest, endpoints::PROTEIN),
        }
    }

    pub fn group(&self) -> EndpointGroup {
        self.feature.group()
    }

    pub async fn get_next(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.feature.get_next(query_id, options).await
    }

    pub async fn get_info(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.feature.get_info(query_id, options).await
    }

    pub async fn search(&self, options: &Options) -> Result<Value> {
        self.feature.search(options).await
    }
}

/// `feature/variation`
#[derive(Clone)]
pub struct VariationClient {
    feature: FeatureClient,
}

impl VariationClient {
    pub fn new(rest: Arc<dyn RestClient>) -> Self {
        Self {
            feature: FeatureClient::for_group(rest, endpoints::VARIATION),
        }
    }

    pub fn group(&self) -> EndpointGroup {
        self.feature.group()
    }

    pub async fn get_next(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.feature.get_next(query_id, options).await
    }

    pub async fn get_info(&self, query_id: impl Into<QueryId>, options: &Options) -> Result<Value> {
        self.feature.get_info(query_id, options).await
    }

    pub async fn search(&self, options: &Options) -> Result<Value> {
        self.feature.search(options).await
    }
}
