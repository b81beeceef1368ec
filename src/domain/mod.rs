// Domain layer: salary models, the estimator and ports. No HTTP or config here.

pub mod estimate;
pub mod model;
pub mod ports;
