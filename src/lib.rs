//! Typed client for the CellBase REST web services.
//!
//! Each client binds one `(category, subcategory)` endpoint group and
//! forwards a query id and query-string options to a [`RestClient`].

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ClientConfig;

pub use crate::adapters::http::HttpRestClient;
pub use crate::core::{
    client::CellBaseClient,
    features::{FeatureClient, GeneClient, ProteinClient, VariationClient},
    genomic::GenomicRegionClient,
};
pub use crate::domain::model::{
    response_results, Endpoint, EndpointGroup, Options, PathLayout, QueryId, QueryResponse,
};
pub use crate::domain::ports::RestClient;
pub use crate::utils::error::{CellBaseError, Result};
