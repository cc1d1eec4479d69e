//! Core state types for the N-body simulation.
//!
//! - `CelestialBody` is a point mass with 2D position and velocity (`NVec2`)
//! - `BodyKind` tags a body as a `Planet` (integrated) or a `Star` (pinned)
//! - `BodyId` is the arena handle handed out by the simulation
//!
//! Units are km, kg and s throughout.

use nalgebra::Vector2;

use crate::error::SimError;

pub type NVec2 = Vector2<f64>;

/// Handle to a body owned by a `PhysicsSimulation`.
/// Bodies are never removed, so a handle stays valid for the simulation's lifetime.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Planet, // moves under gravity
    Star,   // fixed in place, still attracts others
}

impl BodyKind {
    pub fn is_movable(self) -> bool {
        match self {
            BodyKind::Planet => true,
            BodyKind::Star => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    kind: BodyKind,
    movable: bool,
    m: f64,    // mass
    x: NVec2,  // position
    v: NVec2,  // velocity
}

impl CelestialBody {
    /// Build a body, rejecting masses that are not finite and positive
    pub fn new(kind: BodyKind, m: f64, x: NVec2, v: NVec2) -> Result<Self, SimError> {
        if !m.is_finite() || m <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "mass must be finite and positive, got {m}"
            )));
        }
        if !(x.iter().all(|c| c.is_finite()) && v.iter().all(|c| c.is_finite())) {
            return Err(SimError::InvalidParameter(
                "position and velocity must be finite".to_string(),
            ));
        }

        Ok(Self {
            kind,
            movable: kind.is_movable(),
            m,
            x,
            v,
        })
    }

    pub fn planet(m: f64, x: NVec2, v: NVec2) -> Result<Self, SimError> {
        Self::new(BodyKind::Planet, m, x, v)
    }

    pub fn star(m: f64, x: NVec2, v: NVec2) -> Result<Self, SimError> {
        Self::new(BodyKind::Star, m, x, v)
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Whether the integrator may change this body's position and velocity
    pub fn is_movable(&self) -> bool {
        self.movable
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn set_position(&mut self, x: NVec2) {
        self.x = x;
    }

    pub fn set_velocity(&mut self, v: NVec2) {
        self.v = v;
    }

    /// Linear momentum m * v (kg km/s)
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    /// Kinetic energy 1/2 m |v|^2 (kg km^2/s^2)
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}
