// Domain layer: lot and quote models plus the ports the adapters implement.

pub mod model;
pub mod ports;
