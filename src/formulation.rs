//! The conformity scoring formulations.
//!
//! Every neighbor contributes to eleven accumulation channels; the fifteen
//! published outputs are read off those channels either as the plain sum
//! over the neighborhood or as the average over the neighbor count. The
//! mapping lives in a single table so the sum-versus-average choice of each
//! output is data rather than control flow, and so near-duplicate
//! accumulator code cannot drift apart.
//!
//! Two bar-direction values are computed per neighbor: `raw` keeps the
//! original bar length (its magnitude participates in several channels) and
//! `unit` is a separately computed unit-length copy. Channels name which
//! one they consume, so no ordering between them matters.

// Neighbor counts are small; the f64 cast for averaging is exact far beyond
// any realistic valence.
#![allow(clippy::cast_precision_loss)]

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use nalgebra::Vector3;

use crate::neighbors::NeighborSet;
use crate::params::ConformityParams;
use crate::types::StressSample;

/// Number of published conformity formulations.
pub const FORMULATION_COUNT: usize = 15;

/// Number of per-neighbor accumulation channels.
const CHANNEL_COUNT: usize = 11;

/// How per-neighbor contributions fold into a per-point output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Plain sum over all neighbors.
    Sum,
    /// Sum divided by the neighbor count.
    Average,
}

/// Per-neighbor accumulation channels.
///
/// Names describe the shape of the contribution; several published outputs
/// share a channel and differ only in aggregation.
#[derive(Debug, Clone, Copy)]
enum Channel {
    /// `r_j * (1 - theta_j / (pi/4))`, decayed. `theta_j` and `r_j` belong
    /// to whichever principal direction the bar is closer to.
    AlignedRamp,
    /// Linear blend of the two magnitudes over `theta_A`, decayed. The
    /// blend slope depends on whether the principal stresses share a sign;
    /// with opposing signs the blend can cross zero, so its absolute value
    /// is taken.
    SignBlend,
    /// [`Channel::AlignedRamp`] without the distance decay.
    AlignedRampFlat,
    /// `|raw . sigma1| + |raw . sigma2|`, decayed.
    RawDot,
    /// `|unit . sigma1| + |unit . sigma2|`, decayed.
    UnitDot,
    /// [`Channel::RawDot`] without the distance decay.
    RawDotFlat,
    /// [`Channel::UnitDot`] without the distance decay.
    UnitDotFlat,
    /// Piecewise `cos(4 theta_A)` lobe scaled by bar length and the
    /// primary magnitude.
    CosLobe,
    /// Piecewise `cos(4 theta_A)` lobe blending both magnitudes on the
    /// secondary branch.
    CosLobeBlend,
    /// Piecewise `-2 sin(2 theta_A) + 1` ramp.
    SinRamp,
    /// `r_A * (1 - theta_A / (pi/2))`, decayed.
    PrimaryRamp,
}

/// Published output table: formulation ids 1-15, by position, mapped to
/// their channel and aggregation rule.
///
/// Formulation 14 aggregates by sum while 15 averages the same channel.
/// The asymmetry is deliberate and pinned by tests; every other channel
/// that appears twice does so as a clean sum/average pair.
const OUTPUTS: [(Channel, Aggregation); FORMULATION_COUNT] = [
    (Channel::AlignedRamp, Aggregation::Sum),         // 1
    (Channel::SignBlend, Aggregation::Sum),           // 2
    (Channel::AlignedRamp, Aggregation::Average),     // 3
    (Channel::SignBlend, Aggregation::Average),       // 4
    (Channel::AlignedRampFlat, Aggregation::Sum),     // 5
    (Channel::AlignedRampFlat, Aggregation::Average), // 6
    (Channel::RawDot, Aggregation::Average),          // 7
    (Channel::UnitDot, Aggregation::Average),         // 8
    (Channel::RawDotFlat, Aggregation::Average),      // 9
    (Channel::UnitDotFlat, Aggregation::Average),     // 10
    (Channel::CosLobe, Aggregation::Average),         // 11
    (Channel::CosLobeBlend, Aggregation::Average),    // 12
    (Channel::SinRamp, Aggregation::Average),         // 13
    (Channel::PrimaryRamp, Aggregation::Sum),         // 14
    (Channel::PrimaryRamp, Aggregation::Average),     // 15
];

/// Aggregation rule of a published formulation (1-based id).
///
/// Returns `None` for ids outside `1..=FORMULATION_COUNT`.
///
/// # Example
///
/// ```
/// use stress_conformity::{aggregation_of, Aggregation};
///
/// assert_eq!(aggregation_of(14), Some(Aggregation::Sum));
/// assert_eq!(aggregation_of(15), Some(Aggregation::Average));
/// assert_eq!(aggregation_of(16), None);
/// ```
#[must_use]
pub fn aggregation_of(formulation: usize) -> Option<Aggregation> {
    if (1..=FORMULATION_COUNT).contains(&formulation) {
        Some(OUTPUTS[formulation - 1].1)
    } else {
        None
    }
}

/// Alignment of one bar direction against a sample's principal directions.
struct Alignment {
    /// Angle to the primary direction, folded into `[0, pi/2]`.
    theta_primary: f64,
    /// Angle to whichever principal direction the bar is closer to.
    theta_aligned: f64,
    /// Magnitude of that closer principal stress.
    magnitude: f64,
    /// True when the bar is closer to the secondary direction.
    secondary: bool,
}

/// Folds the bar/primary angle into `[0, pi/2]` and picks the closer
/// principal direction. The `theta_A == pi/4` boundary counts as primary.
fn classify(
    sigma1: &Vector3<f64>,
    direction: &Vector3<f64>,
    r_primary: f64,
    r_secondary: f64,
) -> Alignment {
    let mut theta = sigma1.angle(direction);
    if theta > FRAC_PI_2 {
        theta = PI - theta;
    }

    if theta <= FRAC_PI_4 {
        Alignment {
            theta_primary: theta,
            theta_aligned: theta,
            magnitude: r_primary,
            secondary: false,
        }
    } else {
        Alignment {
            theta_primary: theta,
            theta_aligned: FRAC_PI_2 - theta,
            magnitude: r_secondary,
            secondary: true,
        }
    }
}

/// Contributions of a single neighbor to every channel.
fn contributions(
    sample: &StressSample,
    direction: Vector3<f64>,
    distance: f64,
    params: &ConformityParams,
) -> [f64; CHANNEL_COUNT] {
    let r_primary = sample.sigma1.norm();
    let r_secondary = sample.sigma2.norm();

    let raw = direction;
    // Zero-safe: a degenerate bar yields a zero unit vector, so the unit
    // dot channels contribute nothing for it.
    let unit = raw.try_normalize(0.0).unwrap_or_else(Vector3::zeros);

    let align = classify(&sample.sigma1, &raw, r_primary, r_secondary);
    let decay = (-distance * params.decay_constant / params.radius).exp();

    let aligned_ramp = align.magnitude * (1.0 - align.theta_aligned / FRAC_PI_4);

    let sign_blend = if sample.signs_agree {
        -(r_primary - r_secondary) / FRAC_PI_2 * align.theta_primary + r_primary
    } else {
        (-(r_primary + r_secondary) / FRAC_PI_2 * align.theta_primary + r_primary).abs()
    };

    let raw_dot = raw.dot(&sample.sigma1).abs() + raw.dot(&sample.sigma2).abs();
    let unit_dot = unit.dot(&sample.sigma1).abs() + unit.dot(&sample.sigma2).abs();

    let bar_len = raw.norm();
    let quad = (4.0 * align.theta_primary).cos();
    let twice = (2.0 * align.theta_primary).sin();

    let (cos_lobe, cos_lobe_blend, sin_ramp) = if align.secondary {
        (
            0.5 * bar_len * r_primary * (quad - 1.0),
            0.5 * bar_len * ((r_primary + r_secondary) * quad - r_secondary),
            bar_len * (-(r_primary + r_secondary) * twice + r_secondary),
        )
    } else {
        let lobe = bar_len * r_primary * quad;
        (lobe, lobe, bar_len * r_primary * (-2.0 * twice + 1.0))
    };

    let primary_ramp = r_primary * (1.0 - align.theta_primary / FRAC_PI_2);

    let mut out = [0.0; CHANNEL_COUNT];
    out[Channel::AlignedRamp as usize] = aligned_ramp * decay;
    out[Channel::SignBlend as usize] = sign_blend * decay;
    out[Channel::AlignedRampFlat as usize] = aligned_ramp;
    out[Channel::RawDot as usize] = raw_dot * decay;
    out[Channel::UnitDot as usize] = unit_dot * decay;
    out[Channel::RawDotFlat as usize] = raw_dot;
    out[Channel::UnitDotFlat as usize] = unit_dot;
    out[Channel::CosLobe as usize] = cos_lobe * decay;
    out[Channel::CosLobeBlend as usize] = cos_lobe_blend * decay;
    out[Channel::SinRamp as usize] = sin_ramp * decay;
    out[Channel::PrimaryRamp as usize] = primary_ramp * decay;
    out
}

/// Scores one sample point against its collected neighborhood.
///
/// An empty neighborhood scores exactly zero in every formulation; no
/// division by the neighbor count occurs in that case.
pub(crate) fn score_sample(
    sample: &StressSample,
    neighbors: &NeighborSet,
    params: &ConformityParams,
) -> [f64; FORMULATION_COUNT] {
    if neighbors.is_empty() {
        return [0.0; FORMULATION_COUNT];
    }

    let mut sums = [0.0; CHANNEL_COUNT];
    for neighbor in neighbors.iter() {
        let contrib = contributions(sample, neighbor.direction, neighbor.distance, params);
        for (sum, value) in sums.iter_mut().zip(contrib) {
            *sum += value;
        }
    }

    let count = neighbors.len() as f64;
    let mut scores = [0.0; FORMULATION_COUNT];
    for (score, (channel, aggregation)) in scores.iter_mut().zip(OUTPUTS) {
        *score = match aggregation {
            Aggregation::Sum => sums[channel as usize],
            Aggregation::Average => sums[channel as usize] / count,
        };
    }
    scores
}
