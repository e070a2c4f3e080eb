//! Parameters for conformity evaluation.

use crate::error::{ConformityError, ConformityResult};

/// Default neighborhood radius.
pub const DEFAULT_RADIUS: f64 = 0.1;

/// Default exponential decay constant.
///
/// `exp(-DECAY_CONSTANT)` (about 1e-4) is the weight of a bar endpoint
/// detected exactly at the neighborhood radius.
pub const DECAY_CONSTANT: f64 = 9.21;

/// Parameters for conformity evaluation.
///
/// # Example
///
/// ```
/// use stress_conformity::ConformityParams;
///
/// let params = ConformityParams::default();
/// assert!((params.radius - 0.1).abs() < 1e-10);
///
/// let params = ConformityParams::with_radius(0.5).decay_constant(6.0);
/// assert!((params.radius - 0.5).abs() < 1e-10);
/// assert!((params.decay_constant - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConformityParams {
    /// Radius of the neighborhood used to detect bar endpoints around each
    /// sample point. Endpoints at exactly this distance are excluded.
    /// Also sets the length scale of the distance decay.
    pub radius: f64,

    /// Decay constant `k` in the per-neighbor weight
    /// `exp(-distance * k / radius)`.
    pub decay_constant: f64,
}

impl Default for ConformityParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            decay_constant: DECAY_CONSTANT,
        }
    }
}

impl ConformityParams {
    /// Creates params with a custom neighborhood radius.
    #[must_use]
    pub const fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            decay_constant: DECAY_CONSTANT,
        }
    }

    /// Sets the neighborhood radius.
    #[must_use]
    pub const fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the decay constant.
    #[must_use]
    pub const fn decay_constant(mut self, decay_constant: f64) -> Self {
        self.decay_constant = decay_constant;
        self
    }

    /// Checks that the parameters define a usable evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`ConformityError::NonPositiveRadius`] if the radius is not
    /// a positive finite number, and [`ConformityError::InvalidParameter`]
    /// if the decay constant is not a positive finite number.
    pub fn validate(&self) -> ConformityResult<()> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(ConformityError::NonPositiveRadius {
                radius: self.radius,
            });
        }
        if !(self.decay_constant > 0.0 && self.decay_constant.is_finite()) {
            return Err(ConformityError::InvalidParameter(format!(
                "decay constant must be positive and finite, got {}",
                self.decay_constant
            )));
        }
        Ok(())
    }
}
