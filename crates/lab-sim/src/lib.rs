//! Fixed-grid integrators for the lecture demonstrations.
//!
//! Provides:
//! - `TransientModel` / `Integrator` seams with RK4 and forward Euler
//! - A driver over the half-open output grid `[0, t_stop)`
//! - Two uncoupled nonlinear pendula
//! - Two discs with an inline elastic collision ("snooker")

pub mod collision;
pub mod config;
pub mod error;
pub mod frame;
pub mod integrator;
pub mod model;
pub mod pendula;
pub mod sim;
pub mod snooker;

pub use error::{SimError, SimResult};
pub use frame::{Frame, frames_csv};
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use model::TransientModel;
pub use pendula::{PendulaConfig, PendulaRun, PendulaState, RestoringForce, run_pendula};
pub use sim::{IntegratorType, SimOptions, SimRecord, run_sim};
pub use snooker::{CollisionEvent, SnookerConfig, SnookerRun, SnookerState, run_snooker};
