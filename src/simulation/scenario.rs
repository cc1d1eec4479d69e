//! Build a ready-to-run simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` holding
//! the `PhysicsSimulation` with every configured body added in file order,
//! plus the end time to run to.

use log::info;

use crate::configuration::config::{BodyConfig, BodyKindConfig, IntegratorConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::PhysicsSimulation;
use crate::simulation::params::{Integrator, Parameters, PhysicalConstants};
use crate::simulation::states::{BodyKind, CelestialBody, NVec2};

pub struct Scenario {
    pub simulation: PhysicsSimulation,
    pub t_end: f64,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let p_cfg = cfg.parameters;

        let mut constants = PhysicalConstants::default();
        if let Some(g) = p_cfg.G {
            if !g.is_finite() || g <= 0.0 {
                return Err(SimError::InvalidParameter(format!(
                    "G must be finite and positive, got {g}"
                )));
            }
            constants.G = g;
        }

        let parameters = Parameters {
            dt: p_cfg.dt,
            t_end: p_cfg.t_end,
            eps2: p_cfg.eps2,
            integrator: match cfg.engine.integrator {
                IntegratorConfig::Euler => Integrator::Euler,
                IntegratorConfig::Verlet => Integrator::Verlet,
            },
        };

        let mut simulation = PhysicsSimulation::new(constants, parameters)?;
        for (i, bc) in cfg.bodies.iter().enumerate() {
            simulation.add_body(body_from_config(i, bc)?);
        }

        info!(
            "scenario built: {} bodies, dt = {} s, t_end = {} s, {:?}",
            simulation.len(),
            p_cfg.dt,
            p_cfg.t_end,
            cfg.engine.integrator
        );

        Ok(Self {
            simulation,
            t_end: p_cfg.t_end,
        })
    }
}

fn body_from_config(i: usize, bc: &BodyConfig) -> Result<CelestialBody, SimError> {
    let kind = match bc.kind {
        BodyKindConfig::Planet => BodyKind::Planet,
        BodyKindConfig::Star => BodyKind::Star,
    };
    CelestialBody::new(kind, bc.m, vec2(i, "x", &bc.x)?, vec2(i, "v", &bc.v)?)
}

fn vec2(i: usize, field: &str, c: &[f64]) -> Result<NVec2, SimError> {
    match c {
        [a, b] => Ok(NVec2::new(*a, *b)),
        _ => Err(SimError::InvalidParameter(format!(
            "body {i}: `{field}` needs 2 components, got {}",
            c.len()
        ))),
    }
}
