//! Error types for configuration validation.

use core::fmt;

/// Errors raised when a configuration is rejected at the session boundary.
///
/// The stepper itself never fails; everything here is caught before a body
/// is built.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Radius must be positive and finite.
    InvalidRadius,
    /// Velocity must be finite.
    InvalidVelocity,
    /// Scene width and height must be positive and finite.
    InvalidSceneSize,
    /// Restitution coefficients must be in [0, 1].
    InvalidRestitution,
    /// Frame rate must be positive and finite.
    InvalidFrameRate,
    /// History sample interval must be at least one frame.
    InvalidSampleInterval,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidRadius => write!(f, "radius must be positive and finite"),
            PhysicsError::InvalidVelocity => write!(f, "velocity must be finite"),
            PhysicsError::InvalidSceneSize => write!(f, "scene size must be positive and finite"),
            PhysicsError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            PhysicsError::InvalidFrameRate => write!(f, "frame rate must be positive"),
            PhysicsError::InvalidSampleInterval => {
                write!(f, "sample interval must be at least one frame")
            }
        }
    }
}
