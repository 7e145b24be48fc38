//! Travel distance between exam rooms.
//!
//! - [`metric`]: the geographic distance function and its settings
//! - [`resolver`]: room and placement distances with the same-room and
//!   ignore-too-far short-circuits

pub mod metric;
pub mod resolver;

pub use metric::{DistanceMetric, DistanceSettings, Ellipsoid, GeoDistanceMetric};
pub use resolver::DistanceResolver;
