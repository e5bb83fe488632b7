//! Pool profile helpers: shapes, materials and volume estimation.

mod models;
mod routes;
mod volume;

pub use models::{Dimension, PoolMaterial, PoolShape, VolumeRequest, VolumeResponse};
pub use routes::router;
pub use volume::{estimate_volume_liters, parse_dimension, VolumeError};
