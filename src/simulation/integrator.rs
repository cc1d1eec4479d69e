//! Fixed-step time integrators for the N-body system
//!
//! Provides semi-implicit Euler and velocity-Verlet steps, both driven by
//! `AccelSet`. Bodies that are not movable keep their position and velocity
//! but still attract everything else.

use super::forces::AccelSet;
use super::states::{CelestialBody, NVec2};
use crate::error::SimError;

/// Advance `bodies` by one Euler step of length `dt`
///
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
///
/// All accelerations are computed before any body moves, so on error the
/// bodies are unchanged.
pub fn euler_integrator(bodies: &mut [CelestialBody], forces: &AccelSet, dt: f64) -> Result<(), SimError> {
    let n = bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    // Allocate a vector of accelerations, one per body, initialized to zero
    // a[i] will hold a_n for body i at the current positions
    let mut a = vec![NVec2::zeros(); n];

    // Ask the force set for a_n; a degenerate pair fails here, before
    // anything below has touched the bodies
    forces.accumulate_accels(bodies, &mut a)?;

    for (b, a) in bodies.iter_mut().zip(a.iter()) {
        // Stars are pinned: no velocity or position update
        if !b.is_movable() {
            continue;
        }

        // Velocity first: v_n+1 = v_n + dt * a_n
        let v = b.velocity() + dt * *a;
        b.set_velocity(v);

        // Then position from the new velocity: x_n+1 = x_n + dt * v_n+1
        b.set_position(b.position() + dt * v);
    }
    Ok(())
}

/// Advance `bodies` by one velocity-Verlet step of length `dt`
///
/// Two force evaluations per step. If the second evaluation fails the
/// bodies are restored to their state before the step.
pub fn verlet_integrator(bodies: &mut [CelestialBody], forces: &AccelSet, dt: f64) -> Result<(), SimError> {
    let n = bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    let half_dt = 0.5 * dt; // half step dt/2, half update for verlet

    // a_n from x_n at the start of the step
    let mut a_old = vec![NVec2::zeros(); n];
    forces.accumulate_accels(bodies, &mut a_old)?;

    // Keep the state at x_n so a failure at x_n+1 can be undone
    let snapshot = bodies.to_vec();

    for (b, a) in bodies.iter_mut().zip(a_old.iter()) {
        // Pinned bodies skip both kicks and the drift
        if !b.is_movable() {
            continue;
        }

        // Kick: v_n+1/2 = v_n + (dt/2) * a_n
        let v_half = b.velocity() + half_dt * *a;
        b.set_velocity(v_half);

        // Drift: x_n+1 = x_n + dt * v_n+1/2
        b.set_position(b.position() + dt * v_half);
    }

    // a_n+1 from the drifted positions x_n+1
    let mut a_new = vec![NVec2::zeros(); n];
    if let Err(e) = forces.accumulate_accels(bodies, &mut a_new) {
        // Bodies drifted into a degenerate configuration: roll back
        bodies.clone_from_slice(&snapshot);
        return Err(e);
    }

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (b, a) in bodies.iter_mut().zip(a_new.iter()) {
        if !b.is_movable() {
            continue;
        }
        b.set_velocity(b.velocity() + half_dt * *a);
    }
    Ok(())
}
