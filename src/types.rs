//! Input types: bar elements and sampled stress fields.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ConformityError, ConformityResult};

/// A straight structural element given by its two endpoints.
///
/// Bars are immutable inputs; their orientation (`from` -> `to`) matters
/// only for bookkeeping, since the neighborhood collector re-orients the
/// direction away from whichever endpoint is near a sample point.
///
/// # Example
///
/// ```
/// use stress_conformity::Bar;
/// use nalgebra::Point3;
///
/// let bar = Bar::new(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
/// assert!((bar.length() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bar {
    /// Start endpoint.
    pub from: Point3<f64>,
    /// End endpoint.
    pub to: Point3<f64>,
}

impl Bar {
    /// Creates a bar from its two endpoints.
    #[must_use]
    pub const fn new(from: Point3<f64>, to: Point3<f64>) -> Self {
        Self { from, to }
    }

    /// Direction vector from `from` to `to` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector3<f64> {
        self.to - self.from
    }

    /// Euclidean length of the bar.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Midpoint between the two endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point3<f64> {
        Point3::from((self.from.coords + self.to.coords) / 2.0)
    }
}

/// A sample location with its principal stress state.
///
/// The vector lengths of `sigma1` and `sigma2` encode the stress
/// magnitudes; the directions are the two (orthogonal) principal
/// directions at the point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StressSample {
    /// Location of the sample.
    pub point: Point3<f64>,
    /// Primary principal stress vector.
    pub sigma1: Vector3<f64>,
    /// Secondary principal stress vector.
    pub sigma2: Vector3<f64>,
    /// Whether the two principal stresses carry the same sign.
    pub signs_agree: bool,
}

impl StressSample {
    /// Creates a sample from its location and field data.
    #[must_use]
    pub const fn new(
        point: Point3<f64>,
        sigma1: Vector3<f64>,
        sigma2: Vector3<f64>,
        signs_agree: bool,
    ) -> Self {
        Self {
            point,
            sigma1,
            sigma2,
            signs_agree,
        }
    }
}

/// A validated collection of stress samples.
///
/// Hosts typically hold four index-aligned lists (points, primary vectors,
/// secondary vectors, sign flags). [`StressField::from_lists`] checks the
/// alignment once and fuses the lists into [`StressSample`] records, so a
/// length mismatch can never surface as an out-of-bounds read later.
///
/// # Example
///
/// ```
/// use stress_conformity::StressField;
/// use nalgebra::{Point3, Vector3};
///
/// let field = StressField::from_lists(
///     vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
///     vec![Vector3::x(), Vector3::x()],
///     vec![Vector3::y(), Vector3::y()],
///     vec![true, false],
/// )
/// .unwrap();
///
/// assert_eq!(field.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StressField {
    samples: Vec<StressSample>,
}

impl StressField {
    /// Builds a field from index-aligned input lists.
    ///
    /// # Errors
    ///
    /// Returns [`ConformityError::LengthMismatch`] naming the first input
    /// whose length differs from the point list.
    pub fn from_lists(
        points: Vec<Point3<f64>>,
        sigma1: Vec<Vector3<f64>>,
        sigma2: Vec<Vector3<f64>>,
        signs_agree: Vec<bool>,
    ) -> ConformityResult<Self> {
        let expected = points.len();
        check_len("sigma1", expected, sigma1.len())?;
        check_len("sigma2", expected, sigma2.len())?;
        check_len("signs_agree", expected, signs_agree.len())?;

        let samples = points
            .into_iter()
            .zip(sigma1)
            .zip(sigma2)
            .zip(signs_agree)
            .map(|(((point, sigma1), sigma2), signs_agree)| StressSample {
                point,
                sigma1,
                sigma2,
                signs_agree,
            })
            .collect();

        Ok(Self { samples })
    }

    /// Builds a field from already-fused samples.
    #[must_use]
    pub fn from_samples(samples: Vec<StressSample>) -> Self {
        Self { samples }
    }

    /// Number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the field has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples, in input order.
    #[must_use]
    pub fn samples(&self) -> &[StressSample] {
        &self.samples
    }
}

fn check_len(input: &'static str, expected: usize, actual: usize) -> ConformityResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(ConformityError::LengthMismatch {
            input,
            expected,
            actual,
        })
    }
}
