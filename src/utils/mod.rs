pub mod constants;
pub mod coordinates;

pub use constants::*;
pub use coordinates::haversine_distance;
