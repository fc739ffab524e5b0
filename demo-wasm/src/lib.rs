use recoil::{
    BodyConfig, NoOpStepObserver, PhysicsError, RestitutionMode, Scene, Session, SessionConfig,
    Slot,
};
use wasm_bindgen::prelude::*;

/// Velocity arrows are drawn this many scene units per unit of velocity.
const ARROW_LENGTH_MULTIPLIER: f32 = 10.0;

fn to_js(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn slot_from_index(index: usize) -> Slot {
    if index == 0 { Slot::A } else { Slot::B }
}

// ---- Collision Demo ----

#[wasm_bindgen]
pub struct CollisionDemo {
    session: Session<f32>,
}

#[wasm_bindgen]
impl CollisionDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<CollisionDemo, JsValue> {
        let config = SessionConfig::new().with_scene(Scene::new(width, height));
        let session = Session::new(config).map_err(to_js)?;
        Ok(CollisionDemo { session })
    }

    /// Slider input for ball A. Values are clamped to the control ranges.
    pub fn set_ball_a(&mut self, mass: f32, velocity: f32, radius: f32) -> Result<(), JsValue> {
        self.set_ball(Slot::A, mass, velocity, radius)
    }

    /// Slider input for ball B. Values are clamped to the control ranges.
    pub fn set_ball_b(&mut self, mass: f32, velocity: f32, radius: f32) -> Result<(), JsValue> {
        self.set_ball(Slot::B, mass, velocity, radius)
    }

    /// Switching mode resets the balls.
    pub fn set_elastic(&mut self, elastic: bool) {
        let mode = if elastic { RestitutionMode::Elastic } else { RestitutionMode::Inelastic };
        self.session.set_mode(mode);
    }

    pub fn is_elastic(&self) -> bool {
        self.session.mode().is_elastic()
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Call once per animation frame. Returns whether the balls are still moving.
    pub fn update(&mut self) -> bool {
        self.session.tick(&mut NoOpStepObserver);
        self.session.is_running()
    }

    /// Returns [xA, yA, vA, rA, xB, yB, vB, rB]
    pub fn state(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(8);
        for slot in Slot::ALL {
            let b = self.session.body(slot);
            out.extend_from_slice(&[b.position, b.height, b.velocity, b.radius]);
        }
        out
    }

    /// Returns [massA, massB]
    pub fn masses(&self) -> Vec<f32> {
        let (a, b) = self.session.bodies();
        vec![a.mass, b.mass]
    }

    /// Returns 0xRRGGBB for ball 0 (A) or 1 (B).
    pub fn color(&self, index: usize) -> u32 {
        self.session.body(slot_from_index(index)).color.0
    }

    /// Returns [pA, pB, pTotal, keA, keB, keTotal]
    pub fn physics(&self) -> Vec<f32> {
        let a = self.session.physics(Slot::A);
        let b = self.session.physics(Slot::B);
        vec![
            a.momentum,
            b.momentum,
            self.session.total_momentum(),
            a.kinetic_energy,
            b.kinetic_energy,
            self.session.total_kinetic_energy(),
        ]
    }

    /// Returns flat rows of [time, pA, pB, pTotal, keA, keB, keTotal]
    pub fn history(&self) -> Vec<f32> {
        let samples = self.session.history().samples();
        let mut out = Vec::with_capacity(samples.len() * 7);
        for sample in samples {
            out.extend_from_slice(&sample.to_array());
        }
        out
    }

    pub fn history_len(&self) -> usize {
        self.session.history().len()
    }

    /// Signed arrow length for ball 0 (A) or 1 (B); zero when too short to draw.
    pub fn velocity_arrow(&self, index: usize) -> f32 {
        let length = self.session.body(slot_from_index(index)).velocity * ARROW_LENGTH_MULTIPLIER;
        if length.abs() > 1.0 { length } else { 0.0 }
    }
}

impl CollisionDemo {
    fn set_ball(&mut self, slot: Slot, mass: f32, velocity: f32, radius: f32) -> Result<(), JsValue> {
        let config = BodyConfig::new(mass, velocity, radius).clamped();
        self.session.set_body(slot, config).map_err(to_js)
    }
}
