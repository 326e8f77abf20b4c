// Domain layer: record types and ports (interfaces).

pub mod model;
pub mod ports;
