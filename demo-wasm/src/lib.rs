use rand::rngs::SmallRng;
use rand::SeedableRng;
use squishy::{NoOpStepObserver, PushSchedule, Simulation, SimulationConfig};
use wasm_bindgen::prelude::*;

fn to_js_error(err: squishy::SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---- Blob Demo ----

/// A UV-sphere blob driven by the page's animation frame loop.
///
/// The page owns WebGL: it uploads `positions()` and `normals()` after each
/// `update`, and `indices()` once.
#[wasm_bindgen]
pub struct BlobDemo {
    sim: Simulation<f32>,
    schedule: PushSchedule,
    rng: SmallRng,
    auto_push: bool,
}

#[wasm_bindgen]
impl BlobDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(latitude_bands: usize, longitude_bands: usize, radius: f32) -> Result<BlobDemo, JsValue> {
        let config = SimulationConfig::new();
        let sim = Simulation::sphere(latitude_bands, longitude_bands, radius, config).map_err(to_js_error)?;
        Ok(BlobDemo {
            sim,
            schedule: PushSchedule::new(0, config.push_frames),
            rng: SmallRng::seed_from_u64(0x5eed),
            auto_push: false,
        })
    }

    pub fn start(&mut self) {
        self.sim.start();
    }

    /// Stop and return to rest, like the page's stop button.
    pub fn stop(&mut self) {
        self.sim.stop();
        self.sim.reset();
    }

    /// Push random nodes every frame, holding each for the push duration.
    pub fn set_auto_push(&mut self, enabled: bool) {
        self.auto_push = enabled;
    }

    pub fn update(&mut self, dt: f32) {
        if self.auto_push && self.sim.is_running() {
            if let Some(node) = self.schedule.advance(&mut self.rng, self.sim.mesh().node_count()) {
                let _ = self.sim.push(node);
            }
        }
        self.sim.step(dt, &mut NoOpStepObserver);
    }

    /// Advance by the configured fixed time step.
    pub fn tick(&mut self) {
        self.update(self.sim.config().time_step);
    }

    /// Beat from the page's audio analyser: push the scheduled node with
    /// the given magnitude.
    pub fn beat(&mut self, magnitude: f32) -> Result<(), JsValue> {
        match self.schedule.advance(&mut self.rng, self.sim.mesh().node_count()) {
            Some(node) => self.sim.trigger_impulse(node, magnitude).map_err(to_js_error),
            None => Ok(()),
        }
    }

    pub fn poke(&mut self, node: usize) -> Result<(), JsValue> {
        self.sim.push(node).map_err(to_js_error)
    }

    pub fn set_stiffness(&mut self, stiffness: f32) -> Result<(), JsValue> {
        self.sim.set_stiffness(stiffness);
        self.sim.rebuild().map_err(to_js_error)
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.sim.set_damping(damping);
    }

    pub fn set_impulse_strength(&mut self, strength: f32) {
        self.sim.set_impulse_strength(strength);
    }

    /// Flat [x0, y0, z0, x1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        self.sim.positions().to_vec()
    }

    /// Flat [x0, y0, z0, x1, ...] unit normals
    pub fn normals(&self) -> Vec<f32> {
        self.sim.normals().to_vec()
    }

    pub fn indices(&self) -> Vec<u32> {
        self.sim.indices().to_vec()
    }

    /// Start/end pairs for drawing normals as lines.
    pub fn normal_lines(&self, length: f32) -> Vec<f32> {
        self.sim.normal_lines(length)
    }

    pub fn node_count(&self) -> usize {
        self.sim.mesh().node_count()
    }
}
