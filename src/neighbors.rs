//! Neighborhood collection around sample points.
//!
//! For each sample point the collector scans every bar and records the bar
//! direction and the endpoint distance for any endpoint falling strictly
//! inside the neighborhood radius. Both endpoints of a bar are tested
//! independently, so a short bar can contribute twice to the same point,
//! and a bar can contribute to several points. Nothing is deduplicated.
//!
//! The scan is brute force, O(bars) per point. Inputs are expected to stay
//! in the tens-to-low-thousands range where an index would not pay off.

use nalgebra::{Point3, Vector3};
use smallvec::SmallVec;

use crate::types::Bar;

/// One bar endpoint detected near a sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Bar direction, oriented from the near endpoint toward the far one.
    pub direction: Vector3<f64>,
    /// Euclidean distance from the sample point to the near endpoint.
    pub distance: f64,
}

/// The neighbors collected around one sample point.
///
/// Entries keep bar scan order and preserve duplicates. Most truss nodes
/// connect only a handful of bars, so storage is inline up to eight
/// entries.
#[derive(Debug, Clone, Default)]
pub struct NeighborSet {
    neighbors: SmallVec<[Neighbor; 8]>,
}

impl NeighborSet {
    /// Number of collected neighbors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if no bar endpoint was found inside the radius.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Iterates over the neighbors in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &Neighbor> {
        self.neighbors.iter()
    }
}

/// Collects the neighbors of a single sample point.
///
/// Tests both endpoints of every bar independently against a strict
/// `< radius` bound. An endpoint at exactly `radius` is excluded.
///
/// # Example
///
/// ```
/// use stress_conformity::{collect_neighbors, Bar};
/// use nalgebra::Point3;
///
/// let bars = vec![Bar::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0))];
/// let set = collect_neighbors(&bars, Point3::origin(), 0.2);
///
/// assert_eq!(set.len(), 1);
/// let neighbor = set.iter().next().unwrap();
/// assert!((neighbor.direction.x - 1.0).abs() < 1e-12);
/// assert!(neighbor.distance.abs() < 1e-12);
/// ```
#[must_use]
pub fn collect_neighbors(bars: &[Bar], point: Point3<f64>, radius: f64) -> NeighborSet {
    let mut set = NeighborSet::default();

    for bar in bars {
        let from_dist = (bar.from - point).norm();
        if from_dist < radius {
            set.neighbors.push(Neighbor {
                direction: bar.to - bar.from,
                distance: from_dist,
            });
        }

        let to_dist = (bar.to - point).norm();
        if to_dist < radius {
            set.neighbors.push(Neighbor {
                direction: bar.from - bar.to,
                distance: to_dist,
            });
        }
    }

    set
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_single_endpoint_in_radius() {
        let bars = vec![Bar::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0))];
        let set = collect_neighbors(&bars, Point3::origin(), 0.2);

        assert_eq!(set.len(), 1);
        let n = set.iter().next().unwrap();
        assert!((n.direction - Vector3::x()).norm() < 1e-12);
        assert!(n.distance.abs() < 1e-12);
    }

    #[test]
    fn test_far_endpoint_orientation() {
        // Point sits near the `to` endpoint; direction must flip.
        let bars = vec![Bar::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0))];
        let set = collect_neighbors(&bars, Point3::new(1.05, 0.0, 0.0), 0.2);

        assert_eq!(set.len(), 1);
        let n = set.iter().next().unwrap();
        assert!((n.direction + Vector3::x()).norm() < 1e-12);
        assert!((n.distance - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_both_endpoints_contribute() {
        // Bar shorter than the radius: both endpoints are neighbors of the
        // same point, with opposite directions.
        let bars = vec![Bar::new(
            Point3::new(-0.05, 0.0, 0.0),
            Point3::new(0.05, 0.0, 0.0),
        )];
        let set = collect_neighbors(&bars, Point3::origin(), 0.2);

        assert_eq!(set.len(), 2);
        let entries: Vec<&Neighbor> = set.iter().collect();
        assert!((entries[0].direction + entries[1].direction).norm() < 1e-12);
        assert!((entries[0].distance - 0.05).abs() < 1e-12);
        assert!((entries[1].distance - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_tie_at_radius_excluded() {
        let bars = vec![Bar::new(
            Point3::new(0.2, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        )];
        let set = collect_neighbors(&bars, Point3::origin(), 0.2);
        assert!(set.is_empty());
    }

    #[test]
    fn test_no_bars() {
        let set = collect_neighbors(&[], Point3::origin(), 0.2);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_multiple_bars_keep_scan_order() {
        let bars = vec![
            Bar::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0)),
            Bar::new(Point3::origin(), Point3::new(0.0, 1.0, 0.0)),
        ];
        let set = collect_neighbors(&bars, Point3::origin(), 0.1);

        assert_eq!(set.len(), 2);
        let entries: Vec<&Neighbor> = set.iter().collect();
        assert!((entries[0].direction - Vector3::x()).norm() < 1e-12);
        assert!((entries[1].direction - Vector3::y()).norm() < 1e-12);
    }

    #[test]
    fn test_bar_shared_by_two_points() {
        let bars = vec![Bar::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0))];

        let near_from = collect_neighbors(&bars, Point3::new(0.01, 0.0, 0.0), 0.1);
        let near_to = collect_neighbors(&bars, Point3::new(0.99, 0.0, 0.0), 0.1);

        assert_eq!(near_from.len(), 1);
        assert_eq!(near_to.len(), 1);
    }
}
