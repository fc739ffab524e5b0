//! Step observer trait for monitoring a running session.

use crate::collision::Contact;
use crate::float::Float;
use crate::history::HistorySample;

/// Trait for observing session progress.
///
/// Implement this to log, trace or feed a chart from the simulation. All
/// methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after the stepper has advanced both bodies by one frame.
    fn on_advance(&mut self, _frame: usize) {}

    /// Called when the frame's step resolved a contact.
    fn on_collision(&mut self, _frame: usize, _contact: &Contact<F>) {}

    /// Called when a history sample has been appended.
    fn on_sample(&mut self, _sample: &HistorySample<F>) {}

    /// Called when the out-of-bounds policy paused the session.
    fn on_auto_stop(&mut self, _frame: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
