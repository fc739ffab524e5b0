//! Configuration types for the collision stepper and the session.

use crate::body::{BodyConfig, Slot};
use crate::collision::RestitutionMode;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::scene::Scene;

/// Coefficient used by [`RestitutionMode::Elastic`]. Deliberately below 1.0.
pub const ELASTIC_RESTITUTION: f64 = 0.95;
/// Coefficient used by [`RestitutionMode::Inelastic`].
pub const INELASTIC_RESTITUTION: f64 = 0.0;
/// Inelastic contacts with restitution below this stick together.
pub const STICK_THRESHOLD: f64 = 0.2;
/// Frames per second assumed when converting frame counts to time.
pub const DEFAULT_FRAME_RATE: f64 = 60.0;
/// A history sample is recorded every this many frames.
pub const DEFAULT_SAMPLE_INTERVAL: usize = 10;

/// Restitution coefficients for the collision response.
///
/// # Builder Pattern
/// ```
/// use recoil::config::CollisionConfig;
///
/// let config: CollisionConfig<f64> = CollisionConfig::new()
///     .with_elastic_restitution(1.0)
///     .with_inelastic_restitution(0.1);
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionConfig<F: Float> {
    /// Scale applied to elastic outcomes. Default: 0.95.
    pub elastic_restitution: F,
    /// Scale applied to inelastic outcomes. Default: 0.0.
    pub inelastic_restitution: F,
    /// Inelastic restitution below this makes the bodies share one velocity.
    /// Default: 0.2.
    pub stick_threshold: F,
}

impl<F: Float> CollisionConfig<F> {
    pub fn new() -> Self {
        CollisionConfig {
            elastic_restitution: F::from_f64(ELASTIC_RESTITUTION),
            inelastic_restitution: F::from_f64(INELASTIC_RESTITUTION),
            stick_threshold: F::from_f64(STICK_THRESHOLD),
        }
    }

    pub fn with_elastic_restitution(mut self, restitution: F) -> Self {
        self.elastic_restitution = restitution;
        self
    }

    pub fn with_inelastic_restitution(mut self, restitution: F) -> Self {
        self.inelastic_restitution = restitution;
        self
    }

    pub fn with_stick_threshold(mut self, threshold: F) -> Self {
        self.stick_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        let unit = |e: F| e.is_finite() && e >= F::zero() && e <= F::one();
        if unit(self.elastic_restitution)
            && unit(self.inelastic_restitution)
            && self.stick_threshold.is_finite()
        {
            Ok(())
        } else {
            Err(PhysicsError::InvalidRestitution)
        }
    }
}

impl<F: Float> Default for CollisionConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// What the session does when the bodies leave the scene.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutOfBoundsPolicy {
    /// Keep stepping forever.
    Ignore,
    /// Pause once both bodies are out of bounds in the same frame.
    #[default]
    HaltWhenBothOut,
}

/// Everything a [`Session`](crate::session::Session) is rebuilt from.
///
/// # Builder Pattern
/// ```
/// use recoil::body::BodyConfig;
/// use recoil::collision::RestitutionMode;
/// use recoil::config::{OutOfBoundsPolicy, SessionConfig};
/// use recoil::scene::Scene;
///
/// let config: SessionConfig<f64> = SessionConfig::new()
///     .with_scene(Scene::new(1024.0, 400.0))
///     .with_body_a(BodyConfig::new(10.0, 5.0, 40.0))
///     .with_body_b(BodyConfig::new(15.0, -3.0, 50.0))
///     .with_mode(RestitutionMode::Inelastic)
///     .with_out_of_bounds(OutOfBoundsPolicy::Ignore);
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig<F: Float> {
    /// Default: 800 x 350.
    pub scene: Scene<F>,
    /// Default: 10 kg, +5, radius 40.
    pub body_a: BodyConfig<F>,
    /// Default: 15 kg, -3, radius 50.
    pub body_b: BodyConfig<F>,
    /// Vertical centre override for body A. Default: scene mid line.
    pub height_a: Option<F>,
    /// Vertical centre override for body B. Default: scene mid line.
    pub height_b: Option<F>,
    /// Default: elastic.
    pub mode: RestitutionMode,
    pub collision: CollisionConfig<F>,
    /// Default: halt when both bodies are out.
    pub out_of_bounds: OutOfBoundsPolicy,
    /// Frames per second used for history timestamps. Default: 60.
    pub frame_rate: F,
    /// Frames between history samples. Default: 10.
    pub sample_interval: usize,
}

impl<F: Float> SessionConfig<F> {
    pub fn new() -> Self {
        SessionConfig {
            scene: Scene::default(),
            body_a: BodyConfig::new(F::from_f64(10.0), F::from_f64(5.0), F::from_f64(40.0)),
            body_b: BodyConfig::new(F::from_f64(15.0), F::from_f64(-3.0), F::from_f64(50.0)),
            height_a: None,
            height_b: None,
            mode: RestitutionMode::Elastic,
            collision: CollisionConfig::new(),
            out_of_bounds: OutOfBoundsPolicy::default(),
            frame_rate: F::from_f64(DEFAULT_FRAME_RATE),
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }

    pub fn with_scene(mut self, scene: Scene<F>) -> Self {
        self.scene = scene;
        self
    }

    pub fn with_body_a(mut self, body: BodyConfig<F>) -> Self {
        self.body_a = body;
        self
    }

    pub fn with_body_b(mut self, body: BodyConfig<F>) -> Self {
        self.body_b = body;
        self
    }

    /// Set the vertical centre of one body.
    pub fn with_height(mut self, slot: Slot, height: F) -> Self {
        match slot {
            Slot::A => self.height_a = Some(height),
            Slot::B => self.height_b = Some(height),
        }
        self
    }

    pub fn with_mode(mut self, mode: RestitutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_collision(mut self, collision: CollisionConfig<F>) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.out_of_bounds = policy;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: F) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Set the frames between history samples.
    pub fn with_sample_interval(mut self, frames: usize) -> Self {
        self.sample_interval = frames;
        self
    }

    pub fn body(&self, slot: Slot) -> &BodyConfig<F> {
        match slot {
            Slot::A => &self.body_a,
            Slot::B => &self.body_b,
        }
    }

    pub fn body_mut(&mut self, slot: Slot) -> &mut BodyConfig<F> {
        match slot {
            Slot::A => &mut self.body_a,
            Slot::B => &mut self.body_b,
        }
    }

    pub fn height(&self, slot: Slot) -> Option<F> {
        match slot {
            Slot::A => self.height_a,
            Slot::B => self.height_b,
        }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.scene.validate()?;
        self.body_a.validate()?;
        self.body_b.validate()?;
        self.collision.validate()?;
        if !self.frame_rate.is_positive_finite() {
            return Err(PhysicsError::InvalidFrameRate);
        }
        if self.sample_interval == 0 {
            return Err(PhysicsError::InvalidSampleInterval);
        }
        Ok(())
    }
}

impl<F: Float> Default for SessionConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
