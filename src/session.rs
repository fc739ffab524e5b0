//! A restartable two-body simulation owned by its caller.

use crate::body::{Body, BodyConfig, Slot};
use crate::collision::{RestitutionMode, Stepper};
use crate::config::{OutOfBoundsPolicy, SessionConfig};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::history::History;
use crate::observer::StepObserver;
use crate::physics::{self, PhysicsSample};
use crate::scene::is_out_of_bounds;
use crate::tick::TickSource;

/// Whether the session steps on the next tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

/// What a single [`Session::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Idle,
    Advanced {
        /// A contact was resolved this frame.
        collided: bool,
        /// A history sample was appended this frame.
        sampled: bool,
        /// The out-of-bounds policy paused the session this frame.
        halted: bool,
    },
}

impl TickOutcome {
    pub fn advanced(&self) -> bool {
        matches!(self, TickOutcome::Advanced { .. })
    }
}

/// Two bodies, their configuration, a run flag and the telemetry history.
///
/// Every configuration change rebuilds both bodies and clears history, so a
/// body never carries velocity computed under stale settings.
#[derive(Clone, Debug)]
pub struct Session<F: Float> {
    config: SessionConfig<F>,
    stepper: Stepper<F>,
    a: Body<F>,
    b: Body<F>,
    state: SessionState,
    frame: usize,
    history: History<F>,
}

impl<F: Float> Session<F> {
    /// Build an idle session at the configured starting positions.
    pub fn new(config: SessionConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        let a = config.scene.place(Slot::A, &config.body_a, config.height_a);
        let b = config.scene.place(Slot::B, &config.body_b, config.height_b);
        Ok(Session {
            stepper: Stepper::new(config.mode).with_collision(config.collision),
            history: History::new(config.sample_interval, config.frame_rate, &a, &b),
            config,
            a,
            b,
            state: SessionState::Idle,
            frame: 0,
        })
    }

    pub fn config(&self) -> &SessionConfig<F> {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn start(&mut self) {
        self.state = SessionState::Running;
    }

    pub fn pause(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Stop, rebuild both bodies from configuration and restart history.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.frame = 0;
        self.a = self.config.scene.place(Slot::A, &self.config.body_a, self.config.height_a);
        self.b = self.config.scene.place(Slot::B, &self.config.body_b, self.config.height_b);
        self.history.reset(&self.a, &self.b);
    }

    pub fn mode(&self) -> RestitutionMode {
        self.config.mode
    }

    /// Switch restitution mode. Always resets, even if the mode is unchanged.
    pub fn set_mode(&mut self, mode: RestitutionMode) {
        self.config.mode = mode;
        self.stepper = Stepper::new(mode).with_collision(self.config.collision);
        self.reset();
    }

    /// Replace one body's configuration and reset.
    ///
    /// An invalid configuration is rejected and the session is left as it was.
    pub fn set_body(&mut self, slot: Slot, body: BodyConfig<F>) -> Result<(), PhysicsError> {
        body.validate()?;
        *self.config.body_mut(slot) = body;
        self.reset();
        Ok(())
    }

    /// Edit one body's configuration in place, e.g. a single slider.
    ///
    /// ```
    /// use recoil::{Session, SessionConfig, Slot};
    ///
    /// let mut session: Session<f64> = Session::new(SessionConfig::new()).unwrap();
    /// session.configure_body(Slot::A, |body| body.mass = 20.0).unwrap();
    /// assert_eq!(session.body(Slot::A).mass, 20.0);
    /// ```
    pub fn configure_body<E>(&mut self, slot: Slot, edit: E) -> Result<(), PhysicsError>
    where
        E: FnOnce(&mut BodyConfig<F>),
    {
        let mut body = *self.config.body(slot);
        edit(&mut body);
        self.set_body(slot, body)
    }

    /// Replace the whole configuration and reset.
    pub fn set_config(&mut self, config: SessionConfig<F>) -> Result<(), PhysicsError> {
        config.validate()?;
        self.stepper = Stepper::new(config.mode).with_collision(config.collision);
        self.history = History::new(config.sample_interval, config.frame_rate, &self.a, &self.b);
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Advance one frame if running.
    pub fn tick<O: StepObserver<F>>(&mut self, observer: &mut O) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        let outcome = self.stepper.step(self.a, self.b);
        self.a = outcome.a;
        self.b = outcome.b;
        self.frame += 1;
        observer.on_advance(self.frame);

        if let Some(contact) = &outcome.contact {
            observer.on_collision(self.frame, contact);
        }

        let sampled = match self.history.observe(self.frame, &self.a, &self.b) {
            Some(sample) => {
                observer.on_sample(&sample);
                true
            }
            None => false,
        };

        let halted = self.config.out_of_bounds == OutOfBoundsPolicy::HaltWhenBothOut
            && self.both_out_of_bounds();
        if halted {
            self.state = SessionState::Idle;
            observer.on_auto_stop(self.frame);
        }

        TickOutcome::Advanced {
            collided: outcome.collided(),
            sampled,
            halted,
        }
    }

    /// Tick until the source runs dry or the session stops.
    ///
    /// Returns the number of frames advanced.
    pub fn run<S, O>(&mut self, source: &mut S, observer: &mut O) -> usize
    where
        S: TickSource,
        O: StepObserver<F>,
    {
        let mut frames = 0;
        while self.is_running() && source.next_tick() {
            if self.tick(observer).advanced() {
                frames += 1;
            }
        }
        frames
    }

    pub fn body(&self, slot: Slot) -> &Body<F> {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    pub fn bodies(&self) -> (&Body<F>, &Body<F>) {
        (&self.a, &self.b)
    }

    pub fn physics(&self, slot: Slot) -> PhysicsSample<F> {
        physics::sample(self.body(slot))
    }

    pub fn total_momentum(&self) -> F {
        physics::total_momentum(&self.a, &self.b)
    }

    pub fn total_kinetic_energy(&self) -> F {
        physics::total_kinetic_energy(&self.a, &self.b)
    }

    pub fn history(&self) -> &History<F> {
        &self.history
    }

    /// Frames advanced since the last reset.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Seconds simulated since the last reset.
    pub fn elapsed(&self) -> F {
        self.history.time_at(self.frame)
    }

    fn both_out_of_bounds(&self) -> bool {
        let width = self.config.scene.width;
        is_out_of_bounds(&self.a, width) && is_out_of_bounds(&self.b, width)
    }
}
