//! Top-level conformity evaluation.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::ConformityResult;
use crate::formulation::score_sample;
use crate::neighbors::collect_neighbors;
use crate::params::ConformityParams;
use crate::result::ConformityScores;
use crate::types::{Bar, StressField};

/// Evaluates how well a bar topology conforms to a sampled stress field.
///
/// For every sample point, collects the bar endpoints strictly inside the
/// neighborhood radius and scores the alignment of those bars against the
/// point's principal stress directions under all fifteen formulations.
/// Points are independent and are processed in parallel; the result rows
/// match input point order.
///
/// The evaluation is a pure function of its inputs: no state survives
/// between calls.
///
/// # Arguments
///
/// * `bars` - Bar elements to evaluate conformity against
/// * `field` - Sample points with their principal stress data
/// * `params` - Neighborhood radius and decay constant
///
/// # Errors
///
/// Returns an error if `params` fails validation (non-positive or
/// non-finite radius or decay constant). Mismatched input lists are
/// rejected earlier, by [`StressField::from_lists`].
///
/// # Example
///
/// ```
/// use stress_conformity::{evaluate_conformity, Bar, ConformityParams, StressField};
/// use nalgebra::{Point3, Vector3};
///
/// let bars = vec![Bar::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0))];
/// let field = StressField::from_lists(
///     vec![Point3::origin(), Point3::new(5.0, 5.0, 5.0)],
///     vec![Vector3::x(), Vector3::x()],
///     vec![Vector3::y(), Vector3::y()],
///     vec![true, true],
/// )
/// .unwrap();
///
/// let scores = evaluate_conformity(&bars, &field, &ConformityParams::with_radius(0.2)).unwrap();
///
/// assert_eq!(scores.len(), 2);
/// // The far point saw no bar endpoint: its row is all zeros.
/// assert!(scores.point(1).unwrap().iter().all(|&s| s == 0.0));
/// ```
pub fn evaluate_conformity(
    bars: &[Bar],
    field: &StressField,
    params: &ConformityParams,
) -> ConformityResult<ConformityScores> {
    params.validate()?;

    info!(
        bars = bars.len(),
        points = field.len(),
        radius = params.radius,
        "Evaluating topology conformity"
    );

    let per_point: Vec<_> = field
        .samples()
        .par_iter()
        .map(|sample| {
            let neighbors = collect_neighbors(bars, sample.point, params.radius);
            let scores = score_sample(sample, &neighbors, params);
            (scores, neighbors.len())
        })
        .collect();

    let mut rows = Vec::with_capacity(per_point.len());
    let mut neighbor_counts = Vec::with_capacity(per_point.len());
    for (row, count) in per_point {
        rows.push(row);
        neighbor_counts.push(count);
    }

    let result = ConformityScores::new(rows, neighbor_counts);

    if result.points_with_neighbors() == 0 && !bars.is_empty() && !result.is_empty() {
        // Usually a unit or radius mistake on the host side.
        warn!(
            radius = params.radius,
            "No bar endpoint fell inside any sample neighborhood"
        );
    } else {
        debug!(
            points_with_neighbors = result.points_with_neighbors(),
            max_neighbors = result.max_neighbors(),
            "Neighborhood collection complete"
        );
    }

    info!(points = result.len(), "Conformity evaluation complete");

    Ok(result)
}
