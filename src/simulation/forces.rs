//! Force contributors for the n-body engine
//!
//! Each term adds a force (kg km/s^2) per body; `AccelSet` sums the terms and
//! divides by mass to get accelerations. Only direct pairwise Newtonian
//! gravity is provided.

use crate::error::SimError;
use crate::simulation::states::{BodyId, CelestialBody, NVec2};

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single net force per body before conversion to acceleration
pub struct AccelSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute accelerations for all `bodies`
    /// - `out[i]` is set to the net force on body i divided by its mass
    pub fn accumulate_accels(&self, bodies: &[CelestialBody], out: &mut [NVec2]) -> Result<(), SimError> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Sum the net force from every term
        for term in &self.terms {
            term.force(bodies, out)?;
        }
        // Convert net force to acceleration: a = F / m
        for (a, b) in out.iter_mut().zip(bodies.iter()) {
            *a /= b.mass();
        }
        Ok(())
    }
}

/// A force source. Implementations add their contribution into `out[i]`
/// for each body and must leave `out` untouched when they fail
pub trait Force {
    fn force(&self, bodies: &[CelestialBody], out: &mut [NVec2]) -> Result<(), SimError>;
}

/// Newtonian gravity, F = G m_i m_j / r^2, summed over every unordered pair
///
/// With `eps2 > 0` the distance is softened to sqrt(r^2 + eps2) and a
/// coincident pair contributes nothing. With `eps2 == 0` a coincident pair,
/// or one close enough that the force overflows, is reported as
/// [`SimError::DegenerateState`].
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Force for NewtonianGravity {
    fn force(&self, bodies: &[CelestialBody], out: &mut [NVec2]) -> Result<(), SimError> {
        let n = bodies.len();
        if n < 2 { // Nothing to pair up, return
            return Ok(());
        }

        // Pair forces are staged in `acc` and only added to `out` once every
        // pair has been evaluated, so a degenerate pair leaves `out` as it was
        let mut acc = vec![NVec2::zeros(); n];

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // Body i (left side of the pair)
            let xi = bodies[i].position(); // position of body i
            let mi = bodies[i].mass();     // mass of body i

            for j in (i + 1)..n {
                // Body j (right side of the pair)
                let xj = bodies[j].position(); // position of body j
                let mj = bodies[j].mass();     // mass of body j

                // r is the displacement vector from i to j
                // i feels a pull along +r, j feels a pull along -r
                let r = xj - xi;

                // Squared separation distance |r|^2 (no softening yet)
                let r2 = r.dot(&r);

                // Exactly coincident with no softening: direction and
                // magnitude are both undefined
                if r2 == 0.0 && self.eps2 == 0.0 {
                    return Err(SimError::DegenerateState {
                        a: BodyId(i),
                        b: BodyId(j),
                    });
                }

                // Softened squared distance:
                // d2 = |r|^2 + eps2
                // With eps2 > 0 a coincident pair has r = 0 and so zero force
                let d2 = r2 + self.eps2;

                // 1 / |r_soft|
                let inv_r = d2.sqrt().recip();

                // 1 / |r_soft|^3
                // (F = G m_i m_j r / |r|^3, the extra 1/|r| normalizes r)
                let inv_r3 = inv_r * inv_r * inv_r;

                // Force on i due to j:
                // f = G * m_i * m_j * r / |r_soft|^3
                let f = (self.G * mi * mj * inv_r3) * r;

                // Near-coincident pairs overflow 1/|r|^3 to inf (and inf * 0
                // to NaN); treat them like an exact hit
                if !f.iter().all(|c| c.is_finite()) {
                    return Err(SimError::DegenerateState {
                        a: BodyId(i),
                        b: BodyId(j),
                    });
                }

                // -------------------------
                // Newton's third law:
                // F_i += f, F_j -= f
                // (equal and opposite)
                // -------------------------
                acc[i] += f;
                acc[j] -= f;
            }
        }

        // Commit the staged pair forces
        for (o, f) in out.iter_mut().zip(acc) {
            *o += f;
        }
        Ok(())
    }
}
