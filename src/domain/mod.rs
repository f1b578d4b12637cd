// Domain layer: core models and ports (interfaces). No web or client
// dependencies beyond serde.

pub mod model;
pub mod ports;
