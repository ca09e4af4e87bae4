// Domain layer: name records, batch results and ports (interfaces).

pub mod model;
pub mod ports;
