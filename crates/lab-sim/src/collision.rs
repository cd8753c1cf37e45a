//! Two-disc contact detection and elastic momentum exchange.
//!
//! State layout: `[x1, y1, vx1, vy1, x2, y2, vx2, vy2]`.

use nalgebra::{Rotation2, SVector, Vector2};

pub type DiscPairState = SVector<f64, 8>;

/// Current centre-to-centre distance squared.
pub fn separation2(x: &DiscPairState) -> f64 {
    (x[0] - x[4]).powi(2) + (x[1] - x[5]).powi(2)
}

/// Predicted distance squared after one step of `dt`.
///
/// Only the x offset enters the prediction; the y term is not part of it.
pub fn predicted_separation2(x: &DiscPairState, dt: f64) -> f64 {
    (x[0] + dt * (x[2] - x[6]) - x[4]).powi(2)
}

/// True on the step where the predicted separation falls to contact
/// (`2R`) while the current one has not.
pub fn is_contact_crossing(x: &DiscPairState, dt: f64, radius: f64) -> bool {
    let contact2 = 4.0 * radius * radius;
    predicted_separation2(x, dt) <= contact2 && separation2(x) >= contact2
}

/// Angle of the line from disc 2 to disc 1.
pub fn normal_angle(x: &DiscPairState) -> f64 {
    (x[1] - x[5]).atan2(x[0] - x[4])
}

/// Rotate both momenta by `theta`, swap their y components, rotate back.
///
/// With `theta = π/2 - β` the contact normal at angle `β` maps onto the y
/// axis, so the swap exchanges the normal components and keeps the
/// tangential ones.
pub fn exchange_normal(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    theta: f64,
) -> (Vector2<f64>, Vector2<f64>) {
    let rot = Rotation2::new(theta);
    let mut a = rot * p1;
    let mut b = rot * p2;
    std::mem::swap(&mut a.y, &mut b.y);
    let back = rot.inverse();
    (back * a, back * b)
}

/// Total linear momentum of the pair.
pub fn momentum(x: &DiscPairState, m1: f64, m2: f64) -> Vector2<f64> {
    Vector2::new(x[2], x[3]) * m1 + Vector2::new(x[6], x[7]) * m2
}

/// Total kinetic energy of the pair.
pub fn kinetic_energy(x: &DiscPairState, m1: f64, m2: f64) -> f64 {
    0.5 * m1 * (x[2].powi(2) + x[3].powi(2)) + 0.5 * m2 * (x[6].powi(2) + x[7].powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn head_on_exchange_swaps_velocities() {
        // Normal along x: β = 0.
        let (a, b) = exchange_normal(Vector2::new(1.0, 0.0), Vector2::new(0.0, 0.0), FRAC_PI_2);
        assert!((a - Vector2::new(0.0, 0.0)).norm() < 1e-12);
        assert!((b - Vector2::new(1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn tangential_component_is_kept() {
        // Normal along x, disc 1 also moving along y.
        let (a, b) = exchange_normal(Vector2::new(1.0, 0.5), Vector2::zeros(), FRAC_PI_2);
        assert!((a - Vector2::new(0.0, 0.5)).norm() < 1e-12);
        assert!((b - Vector2::new(1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn crossing_needs_both_conditions() {
        let r = 0.05;
        // Approaching, currently apart, next step within contact.
        let x = DiscPairState::from_row_slice(&[-0.11, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(is_contact_crossing(&x, 0.02, r));
        // Already overlapping.
        let x = DiscPairState::from_row_slice(&[-0.05, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(!is_contact_crossing(&x, 0.02, r));
        // Far away.
        let x = DiscPairState::from_row_slice(&[-0.5, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(!is_contact_crossing(&x, 0.02, r));
    }

    #[test]
    fn prediction_ignores_y_offset() {
        let x = DiscPairState::from_row_slice(&[-0.2, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((predicted_separation2(&x, 0.02) - 0.04).abs() < 1e-12);
        assert!((separation2(&x) - 25.04).abs() < 1e-12);
    }

    #[test]
    fn normal_angle_points_from_disc_two() {
        let x = DiscPairState::from_row_slice(&[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((normal_angle(&x) - FRAC_PI_2).abs() < 1e-12);
    }
}
