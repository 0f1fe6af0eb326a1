// Domain layer: value objects, the emission factor table and ports (interfaces).

pub mod factors;
pub mod model;
pub mod ports;
