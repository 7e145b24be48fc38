//! Geographic distance between two rooms.
//!
//! [`DistanceMetric`] is the seam used by the resolver; [`GeoDistanceMetric`]
//! is the stock implementation driven by [`DistanceSettings`].

use serde::{Deserialize, Serialize};

use crate::core::domain::RoomId;

/// Mean earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Travel distance between two located rooms.
///
/// Coordinates are optional; how a missing coordinate is priced is up to the
/// implementation.
pub trait DistanceMetric: Send + Sync {
    fn distance_in_meters(
        &self,
        id1: RoomId,
        x1: Option<f64>,
        y1: Option<f64>,
        id2: RoomId,
        x2: Option<f64>,
        y2: Option<f64>,
    ) -> f64;

    fn distance_in_minutes(
        &self,
        id1: RoomId,
        x1: Option<f64>,
        y1: Option<f64>,
        id2: RoomId,
        x2: Option<f64>,
        y2: Option<f64>,
    ) -> u32;
}

/// Coordinate model used by [`GeoDistanceMetric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ellipsoid {
    /// Planar coordinates, one unit is ten meters.
    #[default]
    Legacy,
    /// Latitude (x) and longitude (y) in degrees.
    Wgs84,
}

impl std::str::FromStr for Ellipsoid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(Ellipsoid::Legacy),
            "wgs84" | "wgs-84" => Ok(Ellipsoid::Wgs84),
            other => Err(format!("Unknown ellipsoid: {}. Use 'legacy' or 'wgs84'", other)),
        }
    }
}

/// Distance settings, usually read from the `[distance]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceSettings {
    #[serde(default)]
    pub ellipsoid: Ellipsoid,
    /// Walking speed in meters per minute.
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Distance assumed when a coordinate is missing.
    #[serde(default = "default_null_distance")]
    pub null_distance: f64,
}

fn default_speed() -> f64 {
    67.0
}

fn default_null_distance() -> f64 {
    10_000.0
}

impl Default for DistanceSettings {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::default(),
            speed: default_speed(),
            null_distance: default_null_distance(),
        }
    }
}

/// Stock [`DistanceMetric`].
///
/// # Examples
///
/// ```
/// use examtt_reports::core::domain::RoomId;
/// use examtt_reports::distance::{DistanceMetric, GeoDistanceMetric};
///
/// let metric = GeoDistanceMetric::default();
/// let meters = metric.distance_in_meters(
///     RoomId(1), Some(0.0), Some(0.0),
///     RoomId(2), Some(3.0), Some(4.0),
/// );
/// assert_eq!(meters, 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeoDistanceMetric {
    settings: DistanceSettings,
}

impl GeoDistanceMetric {
    pub fn new(settings: DistanceSettings) -> Self {
        Self { settings }
    }

    fn between(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        match self.settings.ellipsoid {
            Ellipsoid::Legacy => {
                let dx = x1 - x2;
                let dy = y1 - y2;
                (dx * dx + dy * dy).sqrt() * 10.0
            }
            Ellipsoid::Wgs84 => haversine(x1, y1, x2, y2),
        }
    }

    /// Convert meters to whole walking minutes.
    pub fn minutes_for(&self, meters: f64) -> u32 {
        if self.settings.speed <= 0.0 {
            return 0;
        }
        (meters / self.settings.speed).round().max(0.0) as u32
    }
}

impl DistanceMetric for GeoDistanceMetric {
    fn distance_in_meters(
        &self,
        _id1: RoomId,
        x1: Option<f64>,
        y1: Option<f64>,
        _id2: RoomId,
        x2: Option<f64>,
        y2: Option<f64>,
    ) -> f64 {
        match (x1, y1, x2, y2) {
            (Some(x1), Some(y1), Some(x2), Some(y2)) => self.between(x1, y1, x2, y2),
            _ => self.settings.null_distance,
        }
    }

    fn distance_in_minutes(
        &self,
        id1: RoomId,
        x1: Option<f64>,
        y1: Option<f64>,
        id2: RoomId,
        x2: Option<f64>,
        y2: Option<f64>,
    ) -> u32 {
        self.minutes_for(self.distance_in_meters(id1, x1, y1, id2, x2, y2))
    }
}

/// Great-circle distance in meters between two latitude/longitude pairs.
fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * a.sqrt().min(1.0).asin()
}
