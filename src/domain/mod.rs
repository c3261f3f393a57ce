// Domain layer: request/response models and the RestClient port. Nothing here talks to the network.

pub mod model;
pub mod ports;
