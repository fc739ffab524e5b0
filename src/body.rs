//! Circular bodies moving along a single horizontal axis.

use crate::error::PhysicsError;
use crate::float::Float;

/// Which of the two participants a value belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// Starts on the left, at 25% of the scene width.
    A,
    /// Starts on the right, at 75% of the scene width.
    B,
}

impl Slot {
    /// Both slots, left to right.
    pub const ALL: [Slot; 2] = [Slot::A, Slot::B];

    /// Fraction of the scene width where this slot's body is placed on reset.
    pub fn placement_fraction(self) -> f64 {
        match self {
            Slot::A => 0.25,
            Slot::B => 0.75,
        }
    }

    /// Default presentation colour for this slot.
    pub fn default_color(self) -> Color {
        match self {
            Slot::A => Color::CORAL,
            Slot::B => Color::TEAL,
        }
    }
}

/// 24-bit RGB presentation tag. Never read by the physics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const CORAL: Color = Color(0xff6b6b);
    pub const TEAL: Color = Color(0x4ecdc4);

    pub fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub fn g(self) -> u8 { (self.0 >> 8) as u8 }
    pub fn b(self) -> u8 { self.0 as u8 }
}

/// Inclusive domain of one user-facing control.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
}

impl ControlRange {
    /// Mass slider, kilograms.
    pub const MASS: ControlRange = ControlRange { min: 1.0, max: 50.0 };
    /// Velocity slider, per-frame displacement (shown as m/s).
    pub const VELOCITY: ControlRange = ControlRange { min: -20.0, max: 20.0 };
    /// Radius slider, scene units (shown as px).
    pub const RADIUS: ControlRange = ControlRange { min: 20.0, max: 60.0 };

    pub fn clamp<F: Float>(&self, value: F) -> F {
        value.clamp(F::from_f64(self.min), F::from_f64(self.max))
    }
}

/// User-supplied configuration a [`Body`] is rebuilt from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyConfig<F: Float> {
    pub mass: F,
    pub velocity: F,
    pub radius: F,
}

impl<F: Float> BodyConfig<F> {
    pub fn new(mass: F, velocity: F, radius: F) -> Self {
        BodyConfig { mass, velocity, radius }
    }

    /// Reject configurations the stepper cannot handle.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.mass.is_positive_finite() {
            return Err(PhysicsError::InvalidMass);
        }
        if !self.radius.is_positive_finite() {
            return Err(PhysicsError::InvalidRadius);
        }
        if !self.velocity.is_finite() {
            return Err(PhysicsError::InvalidVelocity);
        }
        Ok(())
    }

    /// Clamp every field into its [`ControlRange`].
    pub fn clamped(self) -> Self {
        BodyConfig {
            mass: ControlRange::MASS.clamp(self.mass),
            velocity: ControlRange::VELOCITY.clamp(self.velocity),
            radius: ControlRange::RADIUS.clamp(self.radius),
        }
    }
}

/// A rigid disc constrained to the horizontal axis.
///
/// Plain `Copy` data: the stepper takes bodies by value and returns new ones.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Body<F: Float> {
    pub mass: F,
    /// Signed displacement per frame. Positive is rightward.
    pub velocity: F,
    /// Horizontal centre.
    pub position: F,
    pub radius: F,
    /// Vertical centre. Cosmetic; collision only looks at `position`.
    pub height: F,
    pub color: Color,
}

impl<F: Float> Body<F> {
    pub fn new(mass: F, velocity: F, position: F, radius: F) -> Self {
        Body {
            mass,
            velocity,
            position,
            radius,
            height: F::zero(),
            color: Color::CORAL,
        }
    }

    /// Build a body from its configuration at the given centre.
    pub fn from_config(config: &BodyConfig<F>, position: F, height: F, color: Color) -> Self {
        Body {
            mass: config.mass,
            velocity: config.velocity,
            position,
            radius: config.radius,
            height,
            color,
        }
    }

    pub fn with_height(mut self, height: F) -> Self {
        self.height = height;
        self
    }

    pub fn with_velocity(mut self, velocity: F) -> Self {
        self.velocity = velocity;
        self
    }

    /// The body one frame later, ignoring any contact.
    pub fn integrated(self) -> Self {
        Body {
            position: self.position + self.velocity,
            ..self
        }
    }
}
