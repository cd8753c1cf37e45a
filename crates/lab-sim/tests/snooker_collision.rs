//! Conservation and boundary behaviour of the colliding-disc integrator.

use lab_core::{Tolerances, nearly_equal};
use lab_sim::{SimError, SnookerConfig, run_snooker};
use proptest::prelude::*;

fn same_vec(a: nalgebra::Vector2<f64>, b: nalgebra::Vector2<f64>) -> bool {
    let tol = Tolerances::default();
    nearly_equal(a.x, b.x, tol) && nearly_equal(a.y, b.y, tol)
}

#[test]
fn lecture_collision_conserves_momentum_and_energy() {
    let run = run_snooker(&SnookerConfig::default()).unwrap();
    assert_eq!(run.events.len(), 1);

    let p0 = run.momentum(0).unwrap();
    let e0 = run.kinetic_energy(0).unwrap();
    let last = run.record.len() - 1;
    assert!(same_vec(run.momentum(last).unwrap(), p0));
    assert!(nearly_equal(run.kinetic_energy(last).unwrap(), e0, Tolerances::default()));

    // Disc 2 starts moving only after the contact.
    let step = run.events[0].step;
    assert_eq!(run.record.x[step - 1][6], 0.0);
    assert!(run.record.x[step][6] > 0.0);
}

#[test]
fn no_crossing_keeps_velocities_exact() {
    // Moving away from disc 2 along -x.
    let cfg = SnookerConfig {
        alpha_deg: 180.0,
        ..SnookerConfig::default()
    };
    let run = run_snooker(&cfg).unwrap();
    assert!(run.events.is_empty());

    let v0 = cfg.initial_state();
    for x in &run.record.x {
        for i in [2, 3, 6, 7] {
            assert_eq!(x[i], v0[i]);
        }
        assert_eq!(x[4], 0.0);
        assert_eq!(x[5], 0.0);
    }
}

#[test]
fn prediction_uses_x_gap_only() {
    // Passes well above disc 2, yet the x gap closes below 2R.
    let cfg = SnookerConfig {
        alpha_deg: 30.0,
        ..SnookerConfig::default()
    };
    let run = run_snooker(&cfg).unwrap();
    assert!(!run.events.is_empty());
    let ev = &run.events[0];
    let x = run.record.x[ev.step];
    let gap = ((x[0] - x[4]).powi(2) + (x[1] - x[5]).powi(2)).sqrt();
    assert!(gap > 2.0 * cfg.radius_m);
}

#[test]
fn positions_follow_explicit_euler() {
    let cfg = SnookerConfig::default();
    let run = run_snooker(&cfg).unwrap();
    for k in 1..run.record.len() {
        let prev = run.record.x[k - 1];
        let next = run.record.x[k];
        assert_eq!(next[0], prev[0] + cfg.dt_s * prev[2]);
        assert_eq!(next[1], prev[1] + cfg.dt_s * prev[3]);
        assert_eq!(next[4], prev[4] + cfg.dt_s * prev[6]);
        assert_eq!(next[5], prev[5] + cfg.dt_s * prev[7]);
    }
}

#[test]
fn tiny_step_is_rejected_not_allocated() {
    let cfg = SnookerConfig {
        dt_s: 1e-300,
        ..SnookerConfig::default()
    };
    assert!(matches!(run_snooker(&cfg), Err(SimError::Core(_))));
}

proptest! {
    #[test]
    fn momentum_conserved_for_any_shot(
        alpha in -15.0f64..15.0,
        speed in 0.3f64..1.5,
        m2 in 0.5f64..3.0,
    ) {
        let cfg = SnookerConfig {
            alpha_deg: alpha,
            speed_mps: speed,
            mass2_kg: m2,
            ..SnookerConfig::default()
        };
        let run = run_snooker(&cfg).unwrap();
        let p0 = run.momentum(0).unwrap();
        for k in 0..run.record.len() {
            prop_assert!(same_vec(run.momentum(k).unwrap(), p0));
        }
    }

    #[test]
    fn equal_masses_conserve_kinetic_energy(
        alpha in -15.0f64..15.0,
        speed in 0.3f64..1.5,
    ) {
        let cfg = SnookerConfig {
            alpha_deg: alpha,
            speed_mps: speed,
            ..SnookerConfig::default()
        };
        let run = run_snooker(&cfg).unwrap();
        let e0 = run.kinetic_energy(0).unwrap();
        for k in 0..run.record.len() {
            prop_assert!(nearly_equal(run.kinetic_energy(k).unwrap(), e0, Tolerances::default()));
        }
    }
}
