pub mod client;
pub mod endpoints;
pub mod features;
pub mod genomic;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{Endpoint, EndpointGroup, Options, QueryId};
pub use crate::domain::ports::RestClient;
pub use crate::utils::error::Result;
