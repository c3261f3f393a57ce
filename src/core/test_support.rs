use crate::domain::model::{Endpoint, Options, QueryId};
use crate::domain::ports::RestClient;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: Endpoint,
    pub query_id: Option<QueryId>,
    pub options: Options,
}

/// Remembers every call and answers with the endpoint it was asked for.
#[derive(Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingClient {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Asserts exactly one call was made since the last check and returns it.
    pub fn single_call(&self) -> RecordedCall {
        let calls = std::mem::take(&mut *self.calls.lock().unwrap());
        assert_eq!(calls.len(), 1, "expected exactly one delegate call: {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl RestClient for RecordingClient {
    async fn get(
        &self,
        endpoint: &Endpoint,
        query_id: Option<&QueryId>,
        options: &Options,
    ) -> Result<serde_json::Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.clone(),
            query_id: query_id.cloned(),
            options: options.clone(),
        });

        Ok(serde_json::json!({ "endpoint": endpoint.to_string() }))
    }
}
