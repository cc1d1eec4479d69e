pub mod error;
pub mod simulation;
pub mod configuration;
pub mod matrix;

pub use error::SimError;
pub use simulation::states::{BodyId, BodyKind, CelestialBody, NVec2};
pub use simulation::params::{Integrator, Parameters, PhysicalConstants, AU, EARTH_MASS, GRAV_CONST, JUPITER_MASS, SOLAR_MASS};
pub use simulation::forces::{AccelSet, Force, NewtonianGravity};
pub use simulation::integrator::{euler_integrator, verlet_integrator};
pub use simulation::engine::PhysicsSimulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, BodyKindConfig, ScenarioConfig};

pub use matrix::{MatrixError, SquareMatrix};
