//! Feature scaling.
//!
//! ## Purpose
//!
//! This module scales design-matrix columns so gradient descent sees
//! features of comparable magnitude, and records the per-column
//! parameters needed to map raw feature vectors into the scaled space
//! at prediction time.
//!
//! ## Design notes
//!
//! * **Three techniques**: identity (`None`), normalization
//!   (mean / range) and standardization (mean / population standard
//!   deviation — sum of squares divided by m, then square root).
//! * **Zero spread is rejected**: a column whose range or variance is
//!   zero fails with `InvalidDesignMatrix` before any division.
//! * **Parameters outlive the fit**: `ScalingParams` computed on a
//!   training matrix scale arbitrary future feature vectors; there is
//!   no implicit re-fit.
//!
//! ## Key concepts
//!
//! * **Identity parameters**: U = 0, S = 1 make `scale_vector` a no-op,
//!   so the unscaled path composes with the same prediction code.
//!
//! ## Invariants
//!
//! * `ScalingParams` vectors have equal length = feature count of the
//!   matrix they were fitted on (dummy column excluded).
//!
//! ## Non-goals
//!
//! * This module does not scale target values.
//! * This module does not decide *whether* to scale; that is
//!   configuration.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::math::matrix::is_regular;
use crate::primitives::errors::RegressionError;

// ============================================================================
// Technique and Parameters
// ============================================================================

/// Feature scaling technique applied before gradient descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingTechnique {
    /// Leave features unchanged; identity parameters are recorded.
    #[default]
    None,

    /// Per column: U = mean, S = max − min.
    Normalization,

    /// Per column: U = mean, S = population standard deviation.
    Standardization,
}

impl fmt::Display for ScalingTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Normalization => write!(f, "normalization"),
            Self::Standardization => write!(f, "standardization"),
        }
    }
}

impl FromStr for ScalingTechnique {
    type Err = RegressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "normalization" => Ok(Self::Normalization),
            "standardization" => Ok(Self::Standardization),
            other => Err(RegressionError::UnsupportedScalingTechnique(String::from(
                other,
            ))),
        }
    }
}

/// Per-feature scaling parameters: `u` the centers, `s` the spreads.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingParams<T: Float> {
    /// Per-column mean.
    pub u: Vec<T>,

    /// Per-column range or standard deviation.
    pub s: Vec<T>,
}

impl<T: Float> ScalingParams<T> {
    /// Identity parameters (U = 0, S = 1) for `n` features.
    pub fn identity(n: usize) -> Self {
        Self {
            u: vec![T::zero(); n],
            s: vec![T::one(); n],
        }
    }

    /// Number of features these parameters were fitted on.
    pub fn len(&self) -> usize {
        self.u.len()
    }

    /// Whether the parameter vectors are empty.
    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }
}

// ============================================================================
// Scaling Operations
// ============================================================================

/// Scale a single feature vector with previously fitted parameters:
/// `(v[i] − u[i]) / s[i]` elementwise.
pub fn scale_vector<T: Float>(
    v: &[T],
    params: &ScalingParams<T>,
) -> Result<Vec<T>, RegressionError> {
    if params.u.len() != params.s.len() {
        return Err(RegressionError::InvalidScalingParameters);
    }
    if v.len() != params.u.len() {
        return Err(RegressionError::InvalidFeatureVector {
            expected: params.u.len(),
            got: v.len(),
        });
    }
    Ok(v.iter()
        .zip(params.u.iter().zip(params.s.iter()))
        .map(|(&x, (&u, &s))| (x - u) / s)
        .collect())
}

/// The scaled matrix together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingResult<T: Float> {
    /// Scaled design matrix, same shape as the input.
    pub x: Vec<Vec<T>>,

    /// Parameters mapping raw feature vectors into the scaled space.
    pub params: ScalingParams<T>,
}

/// Scale a raw design matrix (dummy column excluded) with the given
/// technique.
pub fn scale_design_matrix<T: Float>(
    technique: ScalingTechnique,
    x: &[Vec<T>],
) -> Result<ScalingResult<T>, RegressionError> {
    if !is_regular(x) {
        return Err(RegressionError::InvalidDesignMatrix);
    }
    match technique {
        ScalingTechnique::None => Ok(ScalingResult {
            x: x.to_vec(),
            params: ScalingParams::identity(x[0].len()),
        }),
        ScalingTechnique::Normalization => normalize(x),
        ScalingTechnique::Standardization => standardize(x),
    }
}

/// Normalization: center on the mean, divide by the range.
fn normalize<T: Float>(x: &[Vec<T>]) -> Result<ScalingResult<T>, RegressionError> {
    let m = x.len();
    let n = x[0].len();
    let mut min = vec![T::infinity(); n];
    let mut max = vec![T::neg_infinity(); n];
    let mut mean = vec![T::zero(); n];
    for row in x {
        for j in 0..n {
            mean[j] = mean[j] + row[j];
            if max[j] < row[j] {
                max[j] = row[j];
            }
            if min[j] > row[j] {
                min[j] = row[j];
            }
        }
    }
    let count = T::from(m).unwrap_or_else(T::one);
    let mut range = vec![T::zero(); n];
    for j in 0..n {
        mean[j] = mean[j] / count;
        range[j] = max[j] - min[j];
        if range[j] == T::zero() {
            return Err(RegressionError::InvalidDesignMatrix);
        }
    }
    let params = ScalingParams { u: mean, s: range };
    let scaled = scale_rows(x, &params)?;
    Ok(ScalingResult { x: scaled, params })
}

/// Standardization: center on the mean, divide by the population
/// standard deviation.
fn standardize<T: Float>(x: &[Vec<T>]) -> Result<ScalingResult<T>, RegressionError> {
    let m = x.len();
    let n = x[0].len();
    let count = T::from(m).unwrap_or_else(T::one);
    let mut mean = vec![T::zero(); n];
    for row in x {
        for j in 0..n {
            mean[j] = mean[j] + row[j];
        }
    }
    for item in mean.iter_mut() {
        *item = *item / count;
    }
    let mut dev = vec![T::zero(); n];
    for row in x {
        for j in 0..n {
            let d = row[j] - mean[j];
            dev[j] = dev[j] + d * d;
        }
    }
    for item in dev.iter_mut() {
        if *item == T::zero() {
            return Err(RegressionError::InvalidDesignMatrix);
        }
        *item = (*item / count).sqrt();
    }
    let params = ScalingParams { u: mean, s: dev };
    let scaled = scale_rows(x, &params)?;
    Ok(ScalingResult { x: scaled, params })
}

fn scale_rows<T: Float>(
    x: &[Vec<T>],
    params: &ScalingParams<T>,
) -> Result<Vec<Vec<T>>, RegressionError> {
    x.iter().map(|row| scale_vector(row, params)).collect()
}
