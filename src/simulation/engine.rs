//! The simulation runtime
//!
//! `PhysicsSimulation` owns an arena of bodies addressed by `BodyId`, the
//! injected constants and parameters, and the force set built from them.
//! Each `update` advances every movable body by one time step.

use log::{trace, warn};

use crate::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{euler_integrator, verlet_integrator};
use crate::simulation::params::{check_dt, Integrator, Parameters, PhysicalConstants};
use crate::simulation::states::{BodyId, CelestialBody, NVec2};

pub struct PhysicsSimulation {
    constants: PhysicalConstants,
    parameters: Parameters,
    forces: AccelSet,
    bodies: Vec<CelestialBody>, // insertion order = simulation order
    t: f64, // elapsed time (s)
    steps: u64,
}

impl PhysicsSimulation {
    /// Empty simulation using `constants.G` and the softening in `parameters`
    pub fn new(constants: PhysicalConstants, parameters: Parameters) -> Result<Self, SimError> {
        parameters.validate()?;

        let forces = AccelSet::new().with(NewtonianGravity {
            G: constants.G,
            eps2: parameters.eps2,
        });

        Ok(Self {
            constants,
            parameters,
            forces,
            bodies: Vec::new(),
            t: 0.0,
            steps: 0,
        })
    }

    /// Append a body and return its handle. No duplicate check is made
    pub fn add_body(&mut self, body: CelestialBody) -> BodyId {
        self.bodies.push(body);
        BodyId(self.bodies.len() - 1)
    }

    pub fn body(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(id.0)
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Elapsed simulation time in seconds
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advance by the configured time step
    pub fn update(&mut self) -> Result<(), SimError> {
        self.update_by(self.parameters.dt)
    }

    /// Advance by `dt` seconds. On error no body, time or step count changes
    pub fn update_by(&mut self, dt: f64) -> Result<(), SimError> {
        check_dt(dt)?;

        let res = match self.parameters.integrator {
            Integrator::Euler => euler_integrator(&mut self.bodies, &self.forces, dt),
            Integrator::Verlet => verlet_integrator(&mut self.bodies, &self.forces, dt),
        };
        if let Err(e) = res {
            warn!("step {} at t = {} s aborted: {}", self.steps, self.t, e);
            return Err(e);
        }

        self.t += dt;
        self.steps += 1;
        trace!("step {} done, t = {} s", self.steps, self.t);
        Ok(())
    }

    /// Step with the configured `dt` until `t >= t_end`. Returns the number of steps taken
    pub fn run_until(&mut self, t_end: f64) -> Result<u64, SimError> {
        let start = self.steps;
        while self.t < t_end {
            self.update()?;
        }
        Ok(self.steps - start)
    }

    /// Current acceleration of every body, in insertion order (km/s^2)
    pub fn accelerations(&self) -> Result<Vec<NVec2>, SimError> {
        let mut out = vec![NVec2::zeros(); self.bodies.len()];
        self.forces.accumulate_accels(&self.bodies, &mut out)?;
        Ok(out)
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(|b| b.momentum()).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// -G m_i m_j / r summed over pairs, softened the same way as the force
    ///
    /// A pair at zero distance with no softening has no finite energy and is
    /// reported as [`SimError::DegenerateState`], as `update` would.
    pub fn potential_energy(&self) -> Result<f64, SimError> {
        let g = self.constants.G;
        let eps2 = self.parameters.eps2;
        let mut u = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for (j, bj) in self.bodies.iter().enumerate().skip(i + 1) {
                let d = ((bj.position() - bi.position()).norm_squared() + eps2).sqrt();
                if d == 0.0 {
                    return Err(SimError::DegenerateState {
                        a: BodyId(i),
                        b: BodyId(j),
                    });
                }
                u -= g * bi.mass() * bj.mass() / d;
            }
        }
        Ok(u)
    }

    pub fn total_energy(&self) -> Result<f64, SimError> {
        Ok(self.kinetic_energy() + self.potential_energy()?)
    }
}
