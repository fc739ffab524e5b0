//! One-dimensional two-body collisions with momentum and energy telemetry.
//!
//! `recoil` advances two circular bodies along a line one frame at a time,
//! detects contact and applies an elastic or inelastic response. It is the
//! headless core behind an interactive momentum demo: rendering, sliders and
//! charts live in the host, which drives a [`Session`] and reads back bodies,
//! [`PhysicsSample`]s and a [`History`] of [`HistorySample`]s.
//!
//! # Features
//!
//! - **Closed-form response**: Elastic exchange scaled by restitution, with a
//!   shared-velocity override for perfectly inelastic contacts
//! - **Pure stepper**: Bodies are `Copy` values; [`Stepper::advance`] returns new ones
//! - **Explicit session**: Start, pause, reset and out-of-bounds auto-stop
//! - **Pluggable clock**: Drive a session from any [`TickSource`]
//! - **Observable**: Monitor frames, contacts and samples via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use recoil::{FixedTicks, NoOpStepObserver, RestitutionMode, Session, SessionConfig, Slot};
//!
//! let config: SessionConfig<f64> = SessionConfig::new().with_mode(RestitutionMode::Inelastic);
//! let mut session = Session::new(config).unwrap();
//! session.start();
//! session.run(&mut FixedTicks::new(120), &mut NoOpStepObserver);
//!
//! let a = session.body(Slot::A).velocity;
//! let b = session.body(Slot::B).velocity;
//! assert_eq!(a, b);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod body;
pub mod physics;
pub mod collision;
pub mod scene;
pub mod history;
pub mod session;
pub mod tick;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use body::{Body, BodyConfig, Color, ControlRange, Slot};
pub use physics::{PhysicsSample, momentum, kinetic_energy, total_momentum, total_kinetic_energy};
pub use collision::{
    Contact, RestitutionMode, StepOutcome, Stepper, advance, elastic_velocities, is_touching,
    resolve_collision, shared_velocity,
};
pub use scene::{Scene, is_out_of_bounds};
pub use history::{History, HistorySample};
pub use session::{Session, SessionState, TickOutcome};
pub use tick::{FixedTicks, TickSource};
pub use config::{CollisionConfig, OutOfBoundsPolicy, SessionConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
