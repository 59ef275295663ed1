// Domain layer: the lot allocator, fee schedule, value types and ports.

pub mod fee;
pub mod lot;
pub mod model;
pub mod ports;
