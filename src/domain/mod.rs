// Domain layer: request-scoped models and the strategy port. No I/O here.

pub mod model;
pub mod ports;
