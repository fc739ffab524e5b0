//! One-dimensional contact detection and response between two bodies.
//!
//! The response starts from the closed-form elastic exchange, scales it by a
//! restitution coefficient and, for low-restitution inelastic contacts,
//! replaces it with the shared centre-of-mass velocity. Residual overlap is
//! split evenly between the two bodies.

use crate::body::Body;
use crate::config::CollisionConfig;
use crate::float::Float;

/// How much velocity survives a contact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestitutionMode {
    /// Elastic exchange, slightly damped by the elastic coefficient.
    #[default]
    Elastic,
    /// Bodies lose their relative velocity; below the stick threshold they
    /// move on together.
    Inelastic,
}

impl RestitutionMode {
    pub fn is_elastic(self) -> bool {
        matches!(self, RestitutionMode::Elastic)
    }
}

/// What happened during a resolved contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    /// Velocities of A and B entering the contact.
    pub velocities_before: (F, F),
    /// Velocities of A and B after the response law.
    pub velocities_after: (F, F),
    /// Interpenetration removed by separation. Zero when the bodies were
    /// exactly touching.
    pub overlap: F,
    /// The bodies now share one velocity.
    pub stuck: bool,
}

/// Result of a single [`Stepper::step`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepOutcome<F: Float> {
    pub a: Body<F>,
    pub b: Body<F>,
    pub contact: Option<Contact<F>>,
}

impl<F: Float> StepOutcome<F> {
    pub fn collided(&self) -> bool {
        self.contact.is_some()
    }
}

/// Bodies touch when their horizontal gap is no larger than the sum of radii.
pub fn is_touching<F: Float>(a: &Body<F>, b: &Body<F>) -> bool {
    (b.position - a.position).abs() <= a.radius + b.radius
}

/// Interpenetration depth. Negative while the bodies are apart.
pub fn overlap<F: Float>(a: &Body<F>, b: &Body<F>) -> F {
    a.radius + b.radius - (b.position - a.position).abs()
}

/// Post-contact velocities of a perfectly elastic 1D exchange.
///
/// Conserves both momentum and kinetic energy. Requires `m1 + m2 != 0`.
pub fn elastic_velocities<F: Float>(m1: F, v1: F, m2: F, v2: F) -> (F, F) {
    let total = m1 + m2;
    let v1_final = ((m1 - m2) * v1 + F::two() * m2 * v2) / total;
    let v2_final = ((m2 - m1) * v2 + F::two() * m1 * v1) / total;
    (v1_final, v2_final)
}

/// Centre-of-mass velocity, the outcome of a perfectly inelastic contact.
pub fn shared_velocity<F: Float>(m1: F, v1: F, m2: F, v2: F) -> F {
    (m1 * v1 + m2 * v2) / (m1 + m2)
}

/// Push both bodies apart by half the overlap each.
///
/// Returns the overlap that was removed, or zero if they were not overlapping.
pub fn separate<F: Float>(a: Body<F>, b: Body<F>) -> (Body<F>, Body<F>, F) {
    let depth = overlap(&a, &b);
    if depth <= F::zero() {
        return (a, b, F::zero());
    }
    let half = depth * F::half();
    // Coincident centres push A left and B right.
    let (a_shift, b_shift) = if b.position >= a.position {
        (-half, half)
    } else {
        (half, -half)
    };
    let a = Body { position: a.position + a_shift, ..a };
    let b = Body { position: b.position + b_shift, ..b };
    (a, b, depth)
}

/// Collision stepper for one restitution mode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stepper<F: Float> {
    mode: RestitutionMode,
    collision: CollisionConfig<F>,
}

impl<F: Float> Stepper<F> {
    /// Stepper with the default coefficients.
    pub fn new(mode: RestitutionMode) -> Self {
        Stepper {
            mode,
            collision: CollisionConfig::new(),
        }
    }

    pub fn with_collision(mut self, collision: CollisionConfig<F>) -> Self {
        self.collision = collision;
        self
    }

    pub fn mode(&self) -> RestitutionMode {
        self.mode
    }

    pub fn collision(&self) -> &CollisionConfig<F> {
        &self.collision
    }

    /// Coefficient applied to the elastic outcome in the current mode.
    pub fn restitution(&self) -> F {
        match self.mode {
            RestitutionMode::Elastic => self.collision.elastic_restitution,
            RestitutionMode::Inelastic => self.collision.inelastic_restitution,
        }
    }

    fn sticks(&self) -> bool {
        !self.mode.is_elastic() && self.restitution() < self.collision.stick_threshold
    }

    /// Apply the response law to two touching bodies.
    pub fn resolve(&self, a: Body<F>, b: Body<F>) -> (Body<F>, Body<F>) {
        let (a, b, _) = self.resolve_contact(a, b);
        (a, b)
    }

    fn resolve_contact(&self, a: Body<F>, b: Body<F>) -> (Body<F>, Body<F>, Contact<F>) {
        let (m1, v1) = (a.mass, a.velocity);
        let (m2, v2) = (b.mass, b.velocity);

        let stuck = self.sticks();
        let (v1_final, v2_final) = if stuck {
            let shared = shared_velocity(m1, v1, m2, v2);
            (shared, shared)
        } else {
            let (v1_elastic, v2_elastic) = elastic_velocities(m1, v1, m2, v2);
            let e = self.restitution();
            (v1_elastic * e, v2_elastic * e)
        };

        let (a, b, depth) = separate(a.with_velocity(v1_final), b.with_velocity(v2_final));
        let contact = Contact {
            velocities_before: (v1, v2),
            velocities_after: (v1_final, v2_final),
            overlap: depth,
            stuck,
        };
        (a, b, contact)
    }

    /// Integrate one frame, then resolve a contact if the bodies touch.
    pub fn step(&self, a: Body<F>, b: Body<F>) -> StepOutcome<F> {
        let a = a.integrated();
        let b = b.integrated();
        if !is_touching(&a, &b) {
            return StepOutcome { a, b, contact: None };
        }
        let (a, b, contact) = self.resolve_contact(a, b);
        StepOutcome { a, b, contact: Some(contact) }
    }

    /// [`step`](Self::step) without the contact report.
    pub fn advance(&self, a: Body<F>, b: Body<F>) -> (Body<F>, Body<F>) {
        let outcome = self.step(a, b);
        (outcome.a, outcome.b)
    }
}

impl<F: Float> Default for Stepper<F> {
    fn default() -> Self {
        Self::new(RestitutionMode::default())
    }
}

/// Advance one frame with the default coefficients.
pub fn advance<F: Float>(a: Body<F>, b: Body<F>, mode: RestitutionMode) -> (Body<F>, Body<F>) {
    Stepper::new(mode).advance(a, b)
}

/// Resolve a contact with the default coefficients.
pub fn resolve_collision<F: Float>(
    a: Body<F>,
    b: Body<F>,
    mode: RestitutionMode,
) -> (Body<F>, Body<F>) {
    Stepper::new(mode).resolve(a, b)
}
