//! The CellBase endpoint taxonomy as a lookup table.
//!
//! Clients build their endpoints from the group and resource constants here;
//! the command line looks them up by name in [`ENDPOINTS`].

use crate::domain::model::{Endpoint, EndpointGroup};
use crate::utils::error::{CellBaseError, Result};

pub const FEATURE: &str = "feature";
pub const GENOMIC: &str = "genomic";

pub const GENE: EndpointGroup = EndpointGroup::new(FEATURE, "gene");
pub const PROTEIN: EndpointGroup = EndpointGroup::new(FEATURE, "protein");
pub const VARIATION: EndpointGroup = EndpointGroup::new(FEATURE, "variation");
pub const REGION: EndpointGroup = EndpointGroup::new(GENOMIC, "region");

pub mod resource {
    pub const NEXT: &str = "next";
    pub const INFO: &str = "info";
    pub const SEARCH: &str = "search";
    pub const PROTEIN: &str = "protein";
    pub const TRANSCRIPT: &str = "transcript";
    pub const TFBS: &str = "tfbs";
    pub const VARIATION: &str = "variation";
    pub const GENE: &str = "gene";
    pub const SEQUENCE: &str = "sequence";
    pub const REGULATORY: &str = "regulatory";
    pub const CONSERVATION: &str = "conservation";
}

/// Resources every `feature/*` group answers.
pub const FEATURE_RESOURCES: &[&str] = &[resource::NEXT, resource::INFO, resource::SEARCH];

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(GENE, resource::NEXT),
    Endpoint::new(GENE, resource::INFO),
    Endpoint::new(GENE, resource::SEARCH),
    Endpoint::new(GENE, resource::PROTEIN),
    Endpoint::new(GENE, resource::TRANSCRIPT),
    Endpoint::new(GENE, resource::TFBS),
    Endpoint::new(GENE, resource::VARIATION),
    Endpoint::new(GENE, resource::SEQUENCE),
    Endpoint::new(PROTEIN, resource::NEXT),
    Endpoint::new(PROTEIN, resource::INFO),
    Endpoint::new(PROTEIN, resource::SEARCH),
    Endpoint::new(VARIATION, resource::NEXT),
    Endpoint::new(VARIATION, resource::INFO),
    Endpoint::new(VARIATION, resource::SEARCH),
    Endpoint::new(REGION, resource::GENE),
    Endpoint::new(REGION, resource::TRANSCRIPT),
    Endpoint::new(REGION, resource::VARIATION),
    Endpoint::new(REGION, resource::SEQUENCE),
    Endpoint::new(REGION, resource::REGULATORY),
    Endpoint::new(REGION, resource::TFBS),
    Endpoint::new(REGION, resource::CONSERVATION),
];

/// Resolve a short group name (`gene`, `protein`, `variation`, `region`).
pub fn group_by_name(name: &str) -> Option<EndpointGroup> {
    [GENE, PROTEIN, VARIATION, REGION]
        .into_iter()
        .find(|group| group.subcategory == name)
}

pub fn lookup(group: &EndpointGroup, resource: &str) -> Result<Endpoint> {
    ENDPOINTS
        .iter()
        .find(|endpoint| &endpoint.group == group && endpoint.resource == resource)
        .cloned()
        .ok_or_else(|| CellBaseError::UnknownEndpoint {
            group: group.to_string(),
            resource: resource.to_string(),
        })
}

pub fn resources(group: EndpointGroup) -> impl Iterator<Item = &'static str> {
    ENDPOINTS
        .iter()
        .filter(move |endpoint| endpoint.group == group)
        .map(|endpoint| endpoint.resource)
}
