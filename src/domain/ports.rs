use crate::domain::model::{Endpoint, Options, QueryId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Performs one GET against a CellBase endpoint and returns the parsed body.
///
/// Feature and region clients only compose the endpoint triple and hand
/// everything else to an implementation of this trait.
#[async_trait]
pub trait RestClient: Send + Sync {
    async fn get(
        &self,
        endpoint: &Endpoint,
        query_id: Option<&QueryId>,
        options: &Options,
    ) -> Result<serde_json::Value>;
}

