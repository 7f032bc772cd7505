// Domain layer: models, the salary estimator and the source port.

pub mod model;
pub mod ports;
pub mod salary;
