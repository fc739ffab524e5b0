//! Momentum and kinetic energy accessors.
//!
//! Always recomputed from the current body, never cached.

use crate::body::Body;
use crate::float::Float;

/// Derived quantities for one body at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsSample<F: Float> {
    pub momentum: F,
    pub kinetic_energy: F,
}

/// p = m·v
pub fn momentum<F: Float>(body: &Body<F>) -> F {
    body.mass * body.velocity
}

/// KE = ½·m·v²
pub fn kinetic_energy<F: Float>(body: &Body<F>) -> F {
    F::half() * body.mass * body.velocity * body.velocity
}

pub fn sample<F: Float>(body: &Body<F>) -> PhysicsSample<F> {
    PhysicsSample {
        momentum: momentum(body),
        kinetic_energy: kinetic_energy(body),
    }
}

pub fn total_momentum<F: Float>(a: &Body<F>, b: &Body<F>) -> F {
    momentum(a) + momentum(b)
}

pub fn total_kinetic_energy<F: Float>(a: &Body<F>, b: &Body<F>) -> F {
    kinetic_energy(a) + kinetic_energy(b)
}
