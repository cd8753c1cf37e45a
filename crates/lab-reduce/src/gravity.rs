//! Gravitational acceleration from pendulum periods.
//!
//! Small-angle period `T = 2π sqrt(L / g)`, hence `g = 4π² L / T²`.
//! Uncertainty follows from linear propagation of δL and δT:
//!
//! ```text
//! δg = 4π² sqrt( (δL / T²)² + (2 L δT / T³)² )
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::path::Path;

use lab_core::units::{self, Accel, Length, Time, si};
use lab_core::{ensure_finite, mean, sample_stddev};
use serde::{Deserialize, Serialize};

use crate::error::{ReduceError, ReduceResult};
use crate::table::SampleTable;

const FOUR_PI_SQ: f64 = 4.0 * PI * PI;

/// Pendulum geometry for the reduction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    /// Arm length (cm)
    pub length_cm: f64,
    /// Arm length uncertainty (cm)
    pub dlength_cm: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            length_cm: 59.0,
            dlength_cm: 0.0,
        }
    }
}

impl GravityConfig {
    pub fn length(&self) -> Length {
        units::cm(self.length_cm)
    }

    pub fn dlength(&self) -> Length {
        units::cm(self.dlength_cm)
    }

    pub fn validate(&self) -> ReduceResult<()> {
        ensure_finite(self.length_cm, "length_cm")?;
        ensure_finite(self.dlength_cm, "dlength_cm")?;
        if self.length_cm <= 0.0 {
            return Err(lab_core::LabError::InvalidArg {
                what: "length_cm must be positive",
            }
            .into());
        }
        if self.dlength_cm < 0.0 {
            return Err(lab_core::LabError::InvalidArg {
                what: "dlength_cm must be non-negative",
            }
            .into());
        }
        Ok(())
    }

    pub fn from_yaml_str(text: &str) -> ReduceResult<Self> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_yaml(path: &Path) -> ReduceResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ReduceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}

/// `g = 4π² L / T²` in SI base units.
pub fn gravity_from_period(period_s: f64, length_m: f64) -> f64 {
    FOUR_PI_SQ * length_m / (period_s * period_s)
}

/// Linear error propagation of `gravity_from_period`.
pub fn gravity_uncertainty(period_s: f64, dperiod_s: f64, length_m: f64, dlength_m: f64) -> f64 {
    let dl = dlength_m / period_s.powi(2);
    let dt = -2.0 * length_m * dperiod_s / period_s.powi(3);
    FOUR_PI_SQ * (dl * dl + dt * dt).sqrt()
}

/// Result of reducing a sample table.
#[derive(Clone, Copy, Debug)]
pub struct GravityEstimate {
    pub mean_period: Time,
    pub stddev_period: Time,
    pub gravity: Accel,
    pub gravity_uncertainty: Accel,
}

/// Flat SI view of [`GravityEstimate`] for machine-readable output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GravityReport {
    pub mean_period_s: f64,
    pub stddev_period_s: f64,
    pub gravity_mps2: f64,
    pub gravity_uncertainty_mps2: f64,
}

impl GravityEstimate {
    pub fn report(&self) -> GravityReport {
        GravityReport {
            mean_period_s: si::seconds(self.mean_period),
            stddev_period_s: si::seconds(self.stddev_period),
            gravity_mps2: si::mps2(self.gravity),
            gravity_uncertainty_mps2: si::mps2(self.gravity_uncertainty),
        }
    }
}

impl fmt::Display for GravityEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report();
        writeln!(f, "Average: {:.4} [s]", r.mean_period_s)?;
        writeln!(f, "Stddev:  {:.4} [s]", r.stddev_period_s)?;
        writeln!(f, "Gravity: {:.4} [m/s**2]", r.gravity_mps2)?;
        write!(f, "Gr RMS:  {:.4} [m/s**2]", r.gravity_uncertainty_mps2)
    }
}

/// Reduce per-swing periods to an estimate of g.
pub fn estimate_from_periods(
    periods_s: &[f64],
    length: Length,
    dlength: Length,
) -> ReduceResult<GravityEstimate> {
    let t = mean(periods_s)?;
    let dt = sample_stddev(periods_s)?;
    let l = si::meters(length);
    let dl = si::meters(dlength);

    let g = ensure_finite(gravity_from_period(t, l), "gravity")?;
    let dg = ensure_finite(gravity_uncertainty(t, dt, l, dl), "gravity uncertainty")?;

    tracing::debug!(mean_period_s = t, stddev_period_s = dt, g, dg, "reduced periods");

    Ok(GravityEstimate {
        mean_period: units::s(t),
        stddev_period: units::s(dt),
        gravity: units::mps2(g),
        gravity_uncertainty: units::mps2(dg),
    })
}

pub fn estimate_gravity(table: &SampleTable, cfg: &GravityConfig) -> ReduceResult<GravityEstimate> {
    cfg.validate()?;
    let periods = table.periods();
    for (i, p) in periods.iter().enumerate() {
        tracing::debug!(row = i, period_s = p);
    }
    estimate_from_periods(&periods, cfg.length(), cfg.dlength())
}
