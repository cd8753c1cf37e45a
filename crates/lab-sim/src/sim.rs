//! Fixed-grid simulation runner and result recording.

use lab_core::arange;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator, RK4};
use crate::model::TransientModel;

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, 4 rhs calls per substep).
    #[default]
    RK4,
    /// Forward Euler (1st-order, 1 rhs call per substep).
    ForwardEuler,
}

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Output sample spacing (seconds)
    pub dt: f64,
    /// End of the half-open output grid `[0, t_stop)` (seconds)
    pub t_stop: f64,
    /// Integrator steps per output interval
    pub substeps: usize,
    /// Integrator type (default: RK4)
    pub integrator: IntegratorType,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 0.02,
            t_stop: 1.0,
            substeps: 1,
            integrator: IntegratorType::default(),
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "dt must be positive",
            });
        }
        if !(self.t_stop >= 0.0) {
            return Err(SimError::InvalidArg {
                what: "t_stop must be non-negative",
            });
        }
        if self.substeps == 0 {
            return Err(SimError::InvalidArg {
                what: "substeps must be positive",
            });
        }
        Ok(())
    }
}

/// Record of simulation results, one state per output sample.
#[derive(Clone, Debug)]
pub struct SimRecord<S> {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<S>,
}

impl<S> SimRecord<S> {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Run a transient simulation over the fixed output grid.
pub fn run_sim<M: TransientModel>(
    model: &mut M,
    opts: &SimOptions,
) -> SimResult<SimRecord<M::State>> {
    opts.validate()?;

    let t = arange(opts.t_stop, opts.dt)?;
    let mut x_record: Vec<M::State> = Vec::with_capacity(t.len());
    if t.is_empty() {
        return Ok(SimRecord { t, x: x_record });
    }
    x_record.push(model.initial_state());

    let h = opts.dt / opts.substeps as f64;
    tracing::debug!(
        samples = t.len(),
        dt = opts.dt,
        substeps = opts.substeps,
        integrator = ?opts.integrator,
        "starting run"
    );

    for k in 1..t.len() {
        let last = x_record.len() - 1;
        let prev = &mut x_record[last];
        model.apply_events(k - 1, t[k - 1], prev)?;

        let mut x = prev.clone();
        let mut tau = t[k - 1];
        for _ in 0..opts.substeps {
            x = match opts.integrator {
                IntegratorType::RK4 => RK4.step(model, tau, &x, h)?,
                IntegratorType::ForwardEuler => ForwardEuler.step(model, tau, &x, h)?,
            };
            tau += h;
        }
        x_record.push(x);
    }

    Ok(SimRecord { t, x: x_record })
}
