use crate::LabError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, LabError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LabError::NonFinite { what, value: v })
    }
}

/// Arithmetic mean. Errors on an empty slice.
pub fn mean(values: &[Real]) -> Result<Real, LabError> {
    if values.is_empty() {
        return Err(LabError::TooFewSamples {
            what: "mean",
            needed: 1,
            got: 0,
        });
    }
    let sum: Real = values.iter().sum();
    ensure_finite(sum / values.len() as Real, "mean")
}

/// Sample standard deviation (divisor n - 1).
pub fn sample_stddev(values: &[Real]) -> Result<Real, LabError> {
    if values.len() < 2 {
        return Err(LabError::TooFewSamples {
            what: "sample standard deviation",
            needed: 2,
            got: values.len(),
        });
    }
    let avg = mean(values)?;
    let ss: Real = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    ensure_finite((ss / (values.len() - 1) as Real).sqrt(), "stddev")
}

/// Upper bound on the number of grid points `arange` will allocate.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Evenly spaced samples on the half-open interval `[0, stop)`.
///
/// Same count rule as `arange`: `ceil(stop / step)` points.
pub fn arange(stop: Real, step: Real) -> Result<Vec<Real>, LabError> {
    ensure_finite(stop, "stop")?;
    ensure_finite(step, "step")?;
    if step <= 0.0 {
        return Err(LabError::InvalidArg {
            what: "step must be positive",
        });
    }
    if stop <= 0.0 {
        return Ok(Vec::new());
    }
    let n = (stop / step).ceil();
    if n > MAX_GRID_POINTS as Real {
        return Err(LabError::InvalidArg {
            what: "grid has too many points",
        });
    }
    let n = n as usize;
    Ok((0..n).map(|k| k as Real * step).collect())
}
