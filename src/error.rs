//! Error type shared by the simulation and scenario builder.

use std::error::Error;
use std::fmt;

use crate::simulation::states::BodyId;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A constructor or step argument is out of its physical range
    /// (mass <= 0, dt <= 0, negative softening, malformed config vector)
    InvalidParameter(String),

    /// Two bodies sit at the same point and no softening is configured,
    /// so the pair force is undefined
    DegenerateState { a: BodyId, b: BodyId },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            SimError::DegenerateState { a, b } => write!(
                f,
                "bodies {} and {} are coincident, gravitational force is undefined",
                a.0, b.0
            ),
        }
    }
}

impl Error for SimError {}
