//! Scene extents, initial placement and the out-of-bounds test.

use crate::body::{Body, BodyConfig, Slot};
use crate::error::PhysicsError;
use crate::float::Float;

/// The visible strip the bodies start in.
///
/// Only `width` affects the physics (placement and bounds); `height` just
/// centres the bodies vertically for a renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Scene<F> {
    pub fn new(width: F, height: F) -> Self {
        Scene { width, height }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.width.is_positive_finite() && self.height.is_positive_finite() {
            Ok(())
        } else {
            Err(PhysicsError::InvalidSceneSize)
        }
    }

    /// Horizontal starting centre for a slot.
    pub fn start_position(&self, slot: Slot) -> F {
        self.width * F::from_f64(slot.placement_fraction())
    }

    /// Vertical centre line.
    pub fn mid_height(&self) -> F {
        self.height * F::half()
    }

    /// Build a body at its starting place.
    ///
    /// `height` overrides the vertical centre; `None` uses the mid line.
    pub fn place(&self, slot: Slot, config: &BodyConfig<F>, height: Option<F>) -> Body<F> {
        Body::from_config(
            config,
            self.start_position(slot),
            height.unwrap_or_else(|| self.mid_height()),
            slot.default_color(),
        )
    }

    /// See [`is_out_of_bounds`].
    pub fn contains(&self, body: &Body<F>) -> bool {
        !is_out_of_bounds(body, self.width)
    }
}

impl<F: Float> Default for Scene<F> {
    fn default() -> Self {
        Scene::new(F::from_f64(800.0), F::from_f64(350.0))
    }
}

/// A body is out of bounds once it has fully left `[0, width]`.
pub fn is_out_of_bounds<F: Float>(body: &Body<F>, width: F) -> bool {
    body.position < -body.radius || body.position > width + body.radius
}
