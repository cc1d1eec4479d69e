//! Physical constants and numerical parameters for the simulation
//!
//! `PhysicalConstants` is the immutable constants record (km, kg, s) injected
//! into a simulation. `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - softening `eps2`,
//! - which integrator advances the state

use crate::error::SimError;

/// Gravitational constant. Source: http://physics.nist.gov/cgi-bin/cuu/Value?bg
pub const GRAV_CONST: f64 = 6.67408e-20; // km^3 kg^-1 s^-2

/// Source: http://nssdc.gsfc.nasa.gov/planetary/factsheet/sunfact.html
pub const SOLAR_MASS: f64 = 1.988500e30; // kg

/// Source: http://nssdc.gsfc.nasa.gov/planetary/factsheet/jupiterfact.html
pub const JUPITER_MASS: f64 = 1.8983e27; // kg

/// Source: http://nssdc.gsfc.nasa.gov/planetary/factsheet/earthfact.html
pub const EARTH_MASS: f64 = 5.9726e24; // kg

/// Astronomical unit. Source: http://www.nature.com/news/the-astronomical-unit-gets-fixed-1.11416
pub const AU: f64 = 1.49597870700e8; // km

#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_snake_case)]
pub struct PhysicalConstants {
    pub G: f64,            // gravitational constant
    pub solar_mass: f64,   // kg
    pub jupiter_mass: f64, // kg
    pub earth_mass: f64,   // kg
    pub au: f64,           // km
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            G: GRAV_CONST,
            solar_mass: SOLAR_MASS,
            jupiter_mass: JUPITER_MASS,
            earth_mass: EARTH_MASS,
            au: AU,
        }
    }
}

/// Time-stepping scheme used by `PhysicsSimulation::update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Integrator {
    /// Semi-implicit Euler: velocity first, then position from the new velocity
    #[default]
    Euler,
    /// Velocity Verlet (kick-drift-kick), two force evaluations per step
    Verlet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64,                // time step (s)
    pub t_end: f64,             // time end (s)
    pub eps2: f64,              // softening (km^2), 0 = none
    pub integrator: Integrator, // euler or verlet
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 1.0,
            t_end: 0.0,
            eps2: 0.0,
            integrator: Integrator::Euler,
        }
    }
}

impl Parameters {
    /// Reject step sizes and softening values the integrators cannot use
    pub fn validate(&self) -> Result<(), SimError> {
        check_dt(self.dt)?;
        if !self.t_end.is_finite() || self.t_end < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "t_end must be finite and non-negative, got {}",
                self.t_end
            )));
        }
        if !self.eps2.is_finite() || self.eps2 < 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "eps2 must be finite and non-negative, got {}",
                self.eps2
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_dt(dt: f64) -> Result<(), SimError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SimError::InvalidParameter(format!(
            "time step must be finite and positive, got {dt}"
        )));
    }
    Ok(())
}
