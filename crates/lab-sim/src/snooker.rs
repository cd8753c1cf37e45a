//! Two discs, one moving, one at rest: explicit Euler with an inline
//! elastic collision.
//!
//! Disc 1 starts `offset` along x from the resting disc 2 and moves at
//! `speed` under angle `alpha` to the x axis. Positions advance by
//! `x += v * dt`; velocities change only on the step a contact crossing is
//! detected. One crossing is resolved per step, without locating the exact
//! contact time inside the step.

use std::f64::consts::FRAC_PI_2;

use lab_core::units::{self, si};
use lab_core::ensure_finite;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::collision::{self, DiscPairState};
use crate::error::{SimError, SimResult};
use crate::frame::Frame;
use crate::model::TransientModel;
use crate::sim::{IntegratorType, SimOptions, SimRecord, run_sim};

pub type SnookerState = DiscPairState;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnookerConfig {
    /// Initial speed of disc 1 (m/s)
    pub speed_mps: f64,
    /// Direction of disc 1 relative to the x axis (degrees)
    pub alpha_deg: f64,
    /// Scene length scale (m)
    pub scale_m: f64,
    /// Starting x of disc 1 as a fraction of `scale_m`
    pub offset_frac: f64,
    /// Disc radius (m)
    pub radius_m: f64,
    pub mass1_kg: f64,
    pub mass2_kg: f64,
    pub dt_s: f64,
    pub t_stop_s: f64,
}

impl Default for SnookerConfig {
    fn default() -> Self {
        Self {
            speed_mps: 0.8,
            alpha_deg: 10.0,
            scale_m: 1.0,
            offset_frac: -0.4,
            radius_m: 0.05,
            mass1_kg: 1.0,
            mass2_kg: 1.0,
            dt_s: 0.02,
            t_stop_s: 1.3,
        }
    }
}

impl SnookerConfig {
    pub fn validate(&self) -> SimResult<()> {
        for (v, what) in [
            (self.speed_mps, "speed_mps"),
            (self.alpha_deg, "alpha_deg"),
            (self.scale_m, "scale_m"),
            (self.offset_frac, "offset_frac"),
            (self.radius_m, "radius_m"),
            (self.mass1_kg, "mass1_kg"),
            (self.mass2_kg, "mass2_kg"),
        ] {
            ensure_finite(v, what)?;
        }
        if self.radius_m <= 0.0 {
            return Err(SimError::NonPhysical {
                what: "radius_m must be positive",
            });
        }
        if self.mass1_kg <= 0.0 || self.mass2_kg <= 0.0 {
            return Err(SimError::NonPhysical {
                what: "masses must be positive",
            });
        }
        self.sim_options().validate()
    }

    pub fn sim_options(&self) -> SimOptions {
        SimOptions {
            dt: self.dt_s,
            t_stop: self.t_stop_s,
            substeps: 1,
            integrator: IntegratorType::ForwardEuler,
        }
    }

    pub fn initial_state(&self) -> SnookerState {
        let alpha = si::radians(units::deg(self.alpha_deg));
        let x0 = self.offset_frac * self.scale_m;
        SnookerState::from_row_slice(&[
            x0,
            0.0,
            self.speed_mps * alpha.cos(),
            self.speed_mps * alpha.sin(),
            0.0,
            0.0,
            0.0,
            0.0,
        ])
    }
}

/// A resolved contact.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    /// Index of the recorded state the collision was applied to
    pub step: usize,
    pub t_s: f64,
    /// Angle of the contact normal (rad)
    pub beta_rad: f64,
    /// Direction of disc 2 after the collision (deg)
    pub scattering_deg: f64,
}

pub struct Snooker {
    radius: f64,
    m1: f64,
    m2: f64,
    dt: f64,
    alpha_deg: f64,
    initial: SnookerState,
    events: Vec<CollisionEvent>,
}

impl Snooker {
    pub fn new(cfg: &SnookerConfig) -> SimResult<Self> {
        cfg.validate()?;
        Ok(Self {
            radius: cfg.radius_m,
            m1: cfg.mass1_kg,
            m2: cfg.mass2_kg,
            dt: cfg.dt_s,
            alpha_deg: cfg.alpha_deg,
            initial: cfg.initial_state(),
            events: Vec::new(),
        })
    }

    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    fn collide(&mut self, step: usize, t: f64, x: &mut SnookerState) {
        let beta = collision::normal_angle(x);
        let (p1, p2) = collision::exchange_normal(
            Vector2::new(x[2], x[3]) * self.m1,
            Vector2::new(x[6], x[7]) * self.m2,
            FRAC_PI_2 - beta,
        );
        x[2] = p1.x / self.m1;
        x[3] = p1.y / self.m1;
        x[6] = p2.x / self.m2;
        x[7] = p2.y / self.m2;

        let scattering_deg = p2.y.atan2(p2.x).to_degrees();
        tracing::info!(
            "collision at t = {:.2} s: initial angle = {:.2} [deg], scattering angle = {:.2} [deg]",
            t,
            self.alpha_deg,
            scattering_deg
        );
        self.events.push(CollisionEvent {
            step,
            t_s: t,
            beta_rad: beta,
            scattering_deg,
        });
    }
}

impl TransientModel for Snooker {
    type State = SnookerState;

    fn initial_state(&self) -> SnookerState {
        self.initial
    }

    fn rhs(&mut self, _t: f64, x: &SnookerState) -> SimResult<SnookerState> {
        let mut dxdt = SnookerState::zeros();
        dxdt[0] = x[2];
        dxdt[1] = x[3];
        dxdt[4] = x[6];
        dxdt[5] = x[7];
        Ok(dxdt)
    }

    fn add(&self, a: &SnookerState, b: &SnookerState) -> SnookerState {
        a + b
    }

    fn scale(&self, a: &SnookerState, scale: f64) -> SnookerState {
        a * scale
    }

    fn apply_events(&mut self, step: usize, t: f64, x: &mut SnookerState) -> SimResult<()> {
        if collision::is_contact_crossing(x, self.dt, self.radius) {
            self.collide(step, t, x);
        }
        Ok(())
    }
}

/// Trajectory plus the collisions resolved along it.
#[derive(Clone, Debug)]
pub struct SnookerRun {
    pub record: SimRecord<SnookerState>,
    pub events: Vec<CollisionEvent>,
    pub mass1_kg: f64,
    pub mass2_kg: f64,
}

impl SnookerRun {
    pub fn frames(&self) -> Vec<Frame> {
        self.record
            .t
            .iter()
            .zip(&self.record.x)
            .map(|(&t, x)| Frame {
                t,
                p1: [x[0], x[1]],
                p2: [x[4], x[5]],
            })
            .collect()
    }

    pub fn momentum(&self, k: usize) -> Option<Vector2<f64>> {
        self.record
            .x
            .get(k)
            .map(|x| collision::momentum(x, self.mass1_kg, self.mass2_kg))
    }

    pub fn kinetic_energy(&self, k: usize) -> Option<f64> {
        self.record
            .x
            .get(k)
            .map(|x| collision::kinetic_energy(x, self.mass1_kg, self.mass2_kg))
    }
}

pub fn run_snooker(cfg: &SnookerConfig) -> SimResult<SnookerRun> {
    let mut model = Snooker::new(cfg)?;
    let record = run_sim(&mut model, &cfg.sim_options())?;
    Ok(SnookerRun {
        record,
        events: model.events,
        mass1_kg: cfg.mass1_kg,
        mass2_kg: cfg.mass2_kg,
    })
}
