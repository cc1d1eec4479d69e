//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (integrator)
//! - [`ParametersConfig`] – step size, end time, softening, optional G override
//! - [`BodyConfig`]       – kind and initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Units are km, kg and s. A Sun–Earth scenario matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "euler"     # or "verlet"
//!
//! parameters:
//!   dt: 3600.0              # time step
//!   t_end: 31557600.0       # total simulation time
//!   eps2: 0.0               # softening epsilon^2, optional
//!   G: 6.67408e-20          # gravitational constant, optional
//!
//! bodies:
//!   - kind: "star"
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.9885e30
//!   - kind: "planet"
//!     x: [ 1.495978707e8, 0.0 ]
//!     v: [ 0.0, 29.78 ]
//!     m: 5.9726e24
//! ```
//!
//! [`crate::Scenario::build_scenario`] maps this into a ready simulation.

use serde::Deserialize;

/// Which integrator the engine uses
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler, first order, drifts in energy over long runs
    #[default]
    Euler,

    #[serde(rename = "verlet")] // Velocity Verlet, symplectic, better long-term energy behavior
    Verlet,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub dt: f64,        // time step size (s)
    pub t_end: f64,     // time end (s)
    #[serde(default)]
    pub eps2: f64,      // softening (km^2)
    #[serde(default)]
    pub G: Option<f64>, // overrides the default gravitational constant
}

/// `planet` bodies move, `star` bodies stay pinned
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKindConfig {
    #[serde(rename = "planet")]
    Planet,
    #[serde(rename = "star")]
    Star,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub kind: BodyKindConfig,
    pub x: Vec<f64>, // Initial position (km), two components
    pub v: Vec<f64>, // Initial velocity (km/s), two components
    pub m: f64,      // Mass (kg)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}
