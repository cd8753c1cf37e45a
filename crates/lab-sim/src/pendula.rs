//! Two independent plane pendula hanging from a common pivot.
//!
//! State layout: `[θ1, ω1, θ2, ω2]`, angles measured from the downward
//! vertical. Each pendulum obeys `θ'' = f(θ)` with `f` chosen by
//! [`RestoringForce`]; the two never interact.

use std::f64::consts::PI;

use lab_core::ensure_finite;
use nalgebra::SVector;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::frame::Frame;
use crate::model::TransientModel;
use crate::sim::{IntegratorType, SimOptions, SimRecord, run_sim};

pub type PendulaState = SVector<f64, 4>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoringForce {
    /// `-g sin θ / L`
    #[default]
    Nonlinear,
    /// Small-angle form `-g θ / L`
    Linear,
}

impl RestoringForce {
    pub fn angular_accel(self, theta: f64, g: f64, length: f64) -> f64 {
        match self {
            RestoringForce::Nonlinear => -g * theta.sin() / length,
            RestoringForce::Linear => -g * theta / length,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulaConfig {
    pub g_mps2: f64,
    pub length1_m: f64,
    pub length2_m: f64,
    pub theta1_rad: f64,
    pub omega1_radps: f64,
    pub theta2_rad: f64,
    pub omega2_radps: f64,
    pub dt_s: f64,
    pub t_stop_s: f64,
    /// Integrator steps per output sample
    pub substeps: usize,
    pub integrator: IntegratorType,
    pub force: RestoringForce,
}

impl Default for PendulaConfig {
    fn default() -> Self {
        let theta0 = -PI / 8.0;
        Self {
            g_mps2: lab_core::constants::G_LECTURE_MPS2,
            length1_m: 1.0,
            length2_m: 1.0,
            theta1_rad: theta0 / 2.0,
            omega1_radps: 0.0,
            theta2_rad: theta0,
            omega2_radps: 0.0,
            dt_s: 0.02,
            t_stop_s: 5.0,
            substeps: 10,
            integrator: IntegratorType::RK4,
            force: RestoringForce::Nonlinear,
        }
    }
}

impl PendulaConfig {
    pub fn validate(&self) -> SimResult<()> {
        for (v, what) in [
            (self.g_mps2, "g_mps2"),
            (self.length1_m, "length1_m"),
            (self.length2_m, "length2_m"),
            (self.theta1_rad, "theta1_rad"),
            (self.omega1_radps, "omega1_radps"),
            (self.theta2_rad, "theta2_rad"),
            (self.omega2_radps, "omega2_radps"),
        ] {
            ensure_finite(v, what)?;
        }
        if self.length1_m <= 0.0 || self.length2_m <= 0.0 {
            return Err(SimError::NonPhysical {
                what: "pendulum lengths must be positive",
            });
        }
        self.sim_options().validate()
    }

    pub fn sim_options(&self) -> SimOptions {
        SimOptions {
            dt: self.dt_s,
            t_stop: self.t_stop_s,
            substeps: self.substeps,
            integrator: self.integrator,
        }
    }

    pub fn initial_state(&self) -> PendulaState {
        PendulaState::new(
            self.theta1_rad,
            self.omega1_radps,
            self.theta2_rad,
            self.omega2_radps,
        )
    }
}

/// Energy per unit mass and unit squared length: `½ω² - (g/L) cos θ`.
pub fn specific_energy(theta: f64, omega: f64, g: f64, length: f64) -> f64 {
    0.5 * omega * omega - g / length * theta.cos()
}

/// Bob position relative to the pivot, y pointing up.
pub fn to_cartesian(theta: f64, length: f64) -> [f64; 2] {
    [length * theta.sin(), -length * theta.cos()]
}

pub struct Pendula {
    g: f64,
    length1: f64,
    length2: f64,
    force: RestoringForce,
    initial: PendulaState,
}

impl Pendula {
    pub fn new(cfg: &PendulaConfig) -> SimResult<Self> {
        cfg.validate()?;
        Ok(Self {
            g: cfg.g_mps2,
            length1: cfg.length1_m,
            length2: cfg.length2_m,
            force: cfg.force,
            initial: cfg.initial_state(),
        })
    }
}

impl TransientModel for Pendula {
    type State = PendulaState;

    fn initial_state(&self) -> PendulaState {
        self.initial
    }

    fn rhs(&mut self, _t: f64, x: &PendulaState) -> SimResult<PendulaState> {
        Ok(PendulaState::new(
            x[1],
            self.force.angular_accel(x[0], self.g, self.length1),
            x[3],
            self.force.angular_accel(x[2], self.g, self.length2),
        ))
    }

    fn add(&self, a: &PendulaState, b: &PendulaState) -> PendulaState {
        a + b
    }

    fn scale(&self, a: &PendulaState, scale: f64) -> PendulaState {
        a * scale
    }
}

#[derive(Clone, Debug)]
pub struct PendulaRun {
    pub record: SimRecord<PendulaState>,
    pub g_mps2: f64,
    pub length1_m: f64,
    pub length2_m: f64,
}

impl PendulaRun {
    pub fn frames(&self) -> Vec<Frame> {
        self.record
            .t
            .iter()
            .zip(&self.record.x)
            .map(|(&t, x)| Frame {
                t,
                p1: to_cartesian(x[0], self.length1_m),
                p2: to_cartesian(x[2], self.length2_m),
            })
            .collect()
    }

    /// Specific energies of both pendula at every sample.
    pub fn energies(&self) -> Vec<[f64; 2]> {
        self.record
            .x
            .iter()
            .map(|x| {
                [
                    specific_energy(x[0], x[1], self.g_mps2, self.length1_m),
                    specific_energy(x[2], x[3], self.g_mps2, self.length2_m),
                ]
            })
            .collect()
    }
}

pub fn run_pendula(cfg: &PendulaConfig) -> SimResult<PendulaRun> {
    let mut model = Pendula::new(cfg)?;
    let record = run_sim(&mut model, &cfg.sim_options())?;
    if let Some(last) = record.x.last() {
        for v in last.iter() {
            ensure_finite(*v, "pendulum state")?;
        }
    }
    Ok(PendulaRun {
        record,
        g_mps2: cfg.g_mps2,
        length1_m: cfg.length1_m,
        length2_m: cfg.length2_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_lecture_setup() {
        let cfg = PendulaConfig::default();
        let x = cfg.initial_state();
        assert!((x[0] - (-PI / 16.0)).abs() < 1e-15);
        assert!((x[2] - (-PI / 8.0)).abs() < 1e-15);
        assert_eq!(x[1], 0.0);
        assert_eq!(x[3], 0.0);
    }

    #[test]
    fn pendula_are_uncoupled() {
        let mut model = Pendula::new(&PendulaConfig::default()).unwrap();
        let a = model.rhs(0.0, &PendulaState::new(0.3, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(a[3], 0.0);
        assert!(a[1] < 0.0);
    }

    #[test]
    fn linear_and_nonlinear_agree_for_tiny_angles() {
        let nl = RestoringForce::Nonlinear.angular_accel(1e-4, 9.8, 1.0);
        let li = RestoringForce::Linear.angular_accel(1e-4, 9.8, 1.0);
        assert!((nl - li).abs() < 1e-10);
    }

    #[test]
    fn cartesian_hangs_down_at_zero_angle() {
        assert_eq!(to_cartesian(0.0, 2.0), [0.0, -2.0]);
        let [x, y] = to_cartesian(PI / 2.0, 1.0);
        assert!((x - 1.0).abs() < 1e-15 && y.abs() < 1e-15);
    }

    #[test]
    fn config_from_yaml_overrides_fields() {
        let cfg: PendulaConfig =
            serde_yaml::from_str("force: linear\nintegrator: forward_euler\nt_stop_s: 1.0\n")
                .unwrap();
        assert_eq!(cfg.force, RestoringForce::Linear);
        assert_eq!(cfg.integrator, IntegratorType::ForwardEuler);
        assert_eq!(cfg.length1_m, 1.0);
    }
}
