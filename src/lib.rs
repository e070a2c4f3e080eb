//! Conformity scoring of bar topologies against principal stress fields.
//!
//! This crate evaluates how well a discrete structural topology (a set of
//! straight [`Bar`] elements) conforms to a continuous principal-stress
//! vector field sampled at a set of points. For each sample point it
//! collects the bar endpoints falling inside a neighborhood radius and
//! scores the local alignment between bar direction and the two principal
//! stress directions under fifteen competing formulations. The scores are
//! used to compare candidate topologies against an "ideal" stress-aligned
//! structure, e.g. in generative design of trusses and frames.
//!
//! # Pipeline
//!
//! 1. **Neighborhood collection** ([`collect_neighbors`]): for every sample
//!    point, scan all bars and record the direction and distance of each
//!    endpoint strictly inside the radius.
//! 2. **Formulation scoring** ([`evaluate_conformity`]): combine
//!    angle-alignment, magnitude, and exponential distance-decay terms per
//!    neighbor, then aggregate (sum or average) per point.
//!
//! Points with no nearby bar endpoint score exactly zero in every
//! formulation. Output rows are index-aligned with the input points.
//!
//! # Example
//!
//! ```
//! use stress_conformity::{evaluate_conformity, Bar, ConformityParams, StressField};
//! use nalgebra::{Point3, Vector3};
//!
//! // One bar leaving the origin along +X, sampled at the origin.
//! let bars = vec![Bar::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0))];
//! let field = StressField::from_lists(
//!     vec![Point3::origin()],
//!     vec![Vector3::x()],
//!     vec![Vector3::y()],
//!     vec![true],
//! )
//! .unwrap();
//!
//! let params = ConformityParams::with_radius(0.2);
//! let scores = evaluate_conformity(&bars, &field, &params).unwrap();
//!
//! assert_eq!(scores.len(), 1);
//! // Perfectly aligned with the primary direction at zero distance:
//! // formulation 1 scores the full primary magnitude.
//! let values = scores.formulation_values(1).unwrap();
//! assert!((values[0] - 1.0).abs() < 1e-12);
//! ```
//!
//! # Scale
//!
//! The neighborhood search is a brute-force O(points x bars) scan; inputs
//! are expected to be modest (tens to low thousands of elements). Per-point
//! work is independent and runs on a rayon parallel iterator, with output
//! order matching input order.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod evaluate;
mod formulation;
mod neighbors;
mod params;
mod result;
mod types;

// Re-export main types and functions
pub use error::{ConformityError, ConformityResult};
pub use evaluate::evaluate_conformity;
pub use formulation::{aggregation_of, Aggregation, FORMULATION_COUNT};
pub use neighbors::{collect_neighbors, Neighbor, NeighborSet};
pub use params::{ConformityParams, DECAY_CONSTANT, DEFAULT_RADIUS};
pub use result::ConformityScores;
pub use types::{Bar, StressField, StressSample};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
