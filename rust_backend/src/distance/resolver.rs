//! Travel distance between placed rooms.
//!
//! The same room is always zero meters away from itself and a room flagged
//! `ignore_too_far` is zero meters away from everything. Every other pair is
//! priced by the underlying [`DistanceMetric`].

use crate::core::domain::{Placement, RoomPlacement};

use super::metric::DistanceMetric;

/// Resolves room and placement distances through a [`DistanceMetric`].
///
/// Stateless apart from the borrowed metric; safe to share across threads.
#[derive(Clone, Copy)]
pub struct DistanceResolver<'a> {
    metric: &'a dyn DistanceMetric,
}

impl<'a> DistanceResolver<'a> {
    pub fn new(metric: &'a dyn DistanceMetric) -> Self {
        Self { metric }
    }

    /// Distance in meters between two rooms.
    pub fn distance_in_meters(&self, a: &RoomPlacement, b: &RoomPlacement) -> f64 {
        if a.id == b.id || a.ignore_too_far || b.ignore_too_far {
            return 0.0;
        }
        self.metric
            .distance_in_meters(a.id, a.x, a.y, b.id, b.x, b.y)
    }

    /// Distance in walking minutes between two rooms.
    pub fn distance_in_minutes(&self, a: &RoomPlacement, b: &RoomPlacement) -> u32 {
        if a.id == b.id || a.ignore_too_far || b.ignore_too_far {
            return 0;
        }
        self.metric
            .distance_in_minutes(a.id, a.x, a.y, b.id, b.x, b.y)
    }

    /// Largest room-to-room distance in meters between two placements.
    ///
    /// Zero when either placement has no rooms.
    pub fn placement_distance_in_meters(&self, a: &Placement, b: &Placement) -> f64 {
        let mut max = 0.0_f64;
        for r1 in &a.rooms {
            for r2 in &b.rooms {
                max = max.max(self.distance_in_meters(r1, r2));
            }
        }
        max
    }

    /// Largest room-to-room distance in minutes between two placements.
    pub fn placement_distance_in_minutes(&self, a: &Placement, b: &Placement) -> u32 {
        a.rooms
            .iter()
            .flat_map(|r1| b.rooms.iter().map(move |r2| (r1, r2)))
            .map(|(r1, r2)| self.distance_in_minutes(r1, r2))
            .max()
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for DistanceResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistanceResolver").finish_non_exhaustive()
    }
}
