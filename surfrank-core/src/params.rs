//! Validated ranking parameters.

use std::num::NonZeroUsize;

use thiserror::Error;

/// Damping factor used when no value is configured.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Sample count used when no value is configured.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Errors raised when a ranking parameter is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    /// The damping factor was not strictly between zero and one.
    #[error("damping factor must lie strictly between 0 and 1, got {0}")]
    DampingOutOfRange(f64),
    /// A sampling run was requested with zero samples.
    #[error("sample count must be at least 1")]
    ZeroSamples,
    /// The convergence tolerance was not a positive, finite number.
    #[error("convergence tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
    /// The iteration cap was zero.
    #[error("iteration cap must be at least 1")]
    ZeroIterationCap,
}

/// Probability that the random surfer follows a link rather than jumping to
/// a uniformly chosen page.
///
/// # Examples
///
/// ```
/// use surfrank_core::DampingFactor;
///
/// let damping = DampingFactor::new(0.85).expect("valid damping");
/// assert_eq!(damping.get(), 0.85);
/// assert!(DampingFactor::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DampingFactor(f64);

impl DampingFactor {
    /// Validate a damping factor in the open interval `(0, 1)`.
    ///
    /// # Errors
    /// Returns [`ParameterError::DampingOutOfRange`] for values outside the
    /// interval, including `NaN`.
    pub fn new(value: f64) -> Result<Self, ParameterError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(ParameterError::DampingOutOfRange(value))
        }
    }

    /// Return the raw factor.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Probability of a uniform random jump, `1 - d`.
    #[expect(
        clippy::float_arithmetic,
        reason = "the jump probability complements the damping factor"
    )]
    #[must_use]
    pub fn jump_probability(self) -> f64 {
        1.0 - self.0
    }
}

impl Default for DampingFactor {
    fn default() -> Self {
        Self(DEFAULT_DAMPING)
    }
}

impl TryFrom<f64> for DampingFactor {
    type Error = ParameterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Number of pages a sampling run draws; always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SampleCount(NonZeroUsize);

impl SampleCount {
    /// Validate a sample count.
    ///
    /// # Errors
    /// Returns [`ParameterError::ZeroSamples`] when `count` is zero.
    pub fn new(count: usize) -> Result<Self, ParameterError> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or(ParameterError::ZeroSamples)
    }

    /// Return the count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for SampleCount {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_SAMPLES).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for SampleCount {
    type Error = ParameterError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.01)]
    #[case(0.5)]
    #[case(0.85)]
    #[case(0.99)]
    fn accepts_damping_inside_the_open_interval(#[case] value: f64) {
        let damping = DampingFactor::new(value).expect("valid damping");
        assert_eq!(damping.get(), value);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-0.2)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn rejects_damping_outside_the_open_interval(#[case] value: f64) {
        let err = DampingFactor::new(value).expect_err("invalid damping");
        assert!(matches!(err, ParameterError::DampingOutOfRange(_)));
    }

    #[rstest]
    fn jump_probability_complements_damping() {
        let damping = DampingFactor::default();
        assert!((damping.jump_probability() - 0.15).abs() < 1e-12);
    }

    #[rstest]
    fn sample_count_rejects_zero() {
        assert_eq!(SampleCount::new(0), Err(ParameterError::ZeroSamples));
        assert_eq!(SampleCount::new(1).map(SampleCount::get), Ok(1));
    }

    #[rstest]
    fn defaults_match_the_documented_values() {
        assert_eq!(DampingFactor::default().get(), DEFAULT_DAMPING);
        assert_eq!(SampleCount::default().get(), DEFAULT_SAMPLES);
    }
}
