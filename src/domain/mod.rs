// Domain layer: value types, the zone table and the normalizer seam. No I/O.

pub mod model;
pub mod ports;
