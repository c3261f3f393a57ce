use crate::adapters::http::HttpRestClient;
use crate::config::ClientConfig;
use crate::core::features::{FeatureClient, GeneClient, ProteinClient, VariationClient};
use crate::core::genomic::GenomicRegionClient;
use crate::domain::model::{Endpoint, Options, QueryId};
use crate::domain::ports::RestClient;
use crate::utils::error::Result;
use std::borrow::Cow;
use std::sync::Arc;

/// Entry point: owns one [`RestClient`] and hands out typed clients sharing it.
///
/// ```no_run
/// use cellbase_client::{CellBaseClient, ClientConfig, Options};
///
/// # async fn run() -> cellbase_client::Result<()> {
/// let cellbase = CellBaseClient::new(ClientConfig::default())?;
/// let transcripts = cellbase
///     .gene()
///     .get_transcript("BRCA2", &Options::new().include(&["id", "name"]))
///     .await?;
/// println!("{transcripts}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CellBaseClient {
    rest: Arc<dyn RestClient>,
}

impl CellBaseClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let rest = HttpRestClient::new(&config)?;
        tracing::debug!("CellBase client ready at {}", rest.base_url());
        Ok(Self::with_rest_client(Arc::new(rest)))
    }

    pub fn with_rest_client(rest: Arc<dyn RestClient>) -> Self {
        Self { rest }
    }

    pub fn gene(&self) -> GeneClient {
        GeneClient::new(self.rest.clone())
    }

    pub fn protein(&self) -> ProteinClient {
        ProteinClient::new(self.rest.clone())
    }

    pub fn variation(&self) -> VariationClient {
        VariationClient::new(self.rest.clone())
    }

    pub fn genomic_region(&self) -> GenomicRegionClient {
        GenomicRegionClient::new(self.rest.clone())
    }

    /// Any other `feature/{subcategory}` group.
    pub fn feature(&self, subcategory: impl Into<Cow<'static, str>>) -> FeatureClient {
        FeatureClient::new(self.rest.clone(), subcategory)
    }

    /// Untyped access for endpoints resolved at runtime, e.g. from the command line.
    pub async fn get(
        &self,
        endpoint: &Endpoint,
        query_id: Option<QueryId>,
        options: &Options,
    ) -> Result<serde_json::Value> {
        self.rest.get(endpoint, query_id.as_ref(), options).await
    }
}
