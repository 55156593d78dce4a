//! Run/stop/reset controller that drives a mesh one frame at a time.

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::float::Float;
use crate::mesh::SoftMesh;
use crate::observer::StepObserver;
use crate::sphere::UvSphere;
use crate::vec::{Vec, Vec3};
use alloc::vec::Vec as AllocVec;

/// Controller state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimulationState {
    /// Nodes at rest; nothing has moved since construction or reset.
    Idle,
    /// `step` advances the mesh.
    Running,
    /// Paused; the last computed state is kept.
    Stopped,
}

#[derive(Copy, Clone, Debug)]
struct PendingImpulse<F: Float> {
    node: usize,
    direction: Vec3<F>,
    magnitude: F,
}

/// Owns a [`SoftMesh`] and the render buffers derived from it.
///
/// The host calls [`Simulation::step`] once per frame from its own clock;
/// nothing here schedules itself. Positions and normals are refreshed after
/// every step and after reset.
pub struct Simulation<F: Float> {
    mesh: SoftMesh<F>,
    config: SimulationConfig<F>,
    state: SimulationState,
    pending: AllocVec<PendingImpulse<F>>,
    step_count: u64,
    positions: AllocVec<F>,
    normals: AllocVec<F>,
}

impl<F: Float> Simulation<F> {
    pub fn new(mesh: SoftMesh<F>, config: SimulationConfig<F>) -> Self {
        let mut sim = Simulation {
            mesh,
            config,
            state: SimulationState::Idle,
            pending: AllocVec::new(),
            step_count: 0,
            positions: AllocVec::new(),
            normals: AllocVec::new(),
        };
        sim.refresh_buffers();
        sim
    }

    /// A UV sphere blob built with `config.stiffness` and `config.mass`.
    pub fn sphere(
        latitude_bands: usize,
        longitude_bands: usize,
        radius: F,
        config: SimulationConfig<F>,
    ) -> Result<Self, SimError> {
        let mesh = UvSphere::new(latitude_bands, longitude_bands, radius).build(config.stiffness, config.mass)?;
        log_info!(
            "built sphere mesh: {} nodes, {} springs, {} triangles",
            mesh.node_count(),
            mesh.spring_count(),
            mesh.triangles().len()
        );
        Ok(Self::new(mesh, config))
    }

    pub fn state(&self) -> SimulationState { self.state }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    /// `Idle | Stopped -> Running`. No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        log_info!(
            "simulation started (stiffness {:?}, damping {:?}, impulse strength {:?})",
            self.config.stiffness,
            self.config.damping,
            self.config.impulse_strength
        );
        self.state = SimulationState::Running;
    }

    /// `Running -> Stopped`. Node and spring state are left untouched.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.state = SimulationState::Stopped;
            log_info!("simulation stopped after {} steps", self.step_count);
        }
    }

    /// Any state `-> Idle`, with every node and spring back at rest.
    ///
    /// Pending impulses are discarded.
    pub fn reset(&mut self) {
        self.mesh.reset();
        self.pending.clear();
        self.step_count = 0;
        self.state = SimulationState::Idle;
        self.refresh_buffers();
        log_info!("simulation reset");
    }

    /// Rebuild every spring with the configured stiffness, then reset.
    pub fn rebuild(&mut self) -> Result<(), SimError> {
        self.mesh.rebuild_springs(self.config.stiffness)?;
        log_info!(
            "rebuilt {} springs with stiffness {:?}",
            self.mesh.spring_count(),
            self.config.stiffness
        );
        self.reset();
        Ok(())
    }

    /// Queue an impulse along `node`'s rest normal for the next step.
    pub fn trigger_impulse(&mut self, node: usize, magnitude: F) -> Result<(), SimError> {
        let direction = self.mesh.rest_normal(node).inspect_err(|e| {
            log_warn!("impulse rejected: {}", e);
        })?;
        self.pending.push(PendingImpulse { node, direction, magnitude });
        Ok(())
    }

    /// [`Simulation::trigger_impulse`] with the configured impulse strength.
    pub fn push(&mut self, node: usize) -> Result<(), SimError> {
        self.trigger_impulse(node, self.config.impulse_strength)
    }

    /// Queue an impulse with an explicit direction, used as given.
    pub fn queue_impulse(&mut self, node: usize, direction: Vec3<F>, magnitude: F) -> Result<(), SimError> {
        let count = self.mesh.node_count();
        if node >= count {
            let err = SimError::IndexOutOfRange { index: node, count };
            log_warn!("impulse rejected: {}", err);
            return Err(err);
        }
        self.pending.push(PendingImpulse { node, direction, magnitude });
        Ok(())
    }

    /// Advance one frame: spring forces, pending impulses, integration,
    /// normals.
    ///
    /// Returns `false` without touching anything unless the simulation is
    /// running.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) -> bool {
        if !self.is_running() {
            return false;
        }

        self.mesh.apply_spring_forces();
        observer.on_forces();

        for impulse in self.pending.drain(..) {
            if self.mesh.apply_impulse(impulse.node, impulse.direction, impulse.magnitude).is_ok() {
                observer.on_impulse(impulse.node);
            }
        }

        self.mesh.integrate(dt, self.config.damping);
        observer.on_integrate();

        self.mesh.recompute_normals();
        observer.on_normals();

        self.refresh_buffers();
        self.step_count += 1;
        observer.on_step_complete(self.step_count);
        true
    }

    /// Only affects springs built afterwards, see [`Simulation::rebuild`].
    pub fn set_stiffness(&mut self, stiffness: F) {
        self.config.stiffness = stiffness;
    }

    pub fn set_damping(&mut self, damping: F) {
        self.config.damping = damping;
    }

    pub fn set_impulse_strength(&mut self, impulse_strength: F) {
        self.config.impulse_strength = impulse_strength;
    }

    pub fn config(&self) -> &SimulationConfig<F> { &self.config }

    /// `[x, y, z]` per node as of the last step or reset.
    pub fn positions(&self) -> &[F] { &self.positions }

    /// `[x, y, z]` unit (or zero) normal per node as of the last step or reset.
    pub fn normals(&self) -> &[F] { &self.normals }

    pub fn indices(&self) -> &[u32] { self.mesh.indices() }

    /// Line segments `p, p + n * length` per node for drawing normals.
    pub fn normal_lines(&self, length: F) -> AllocVec<F> {
        let mut lines = AllocVec::with_capacity(self.mesh.node_count() * 6);
        for (node, normal) in self.mesh.nodes().iter().zip(self.mesh.normals()) {
            let end = node.position + normal.scale(length);
            lines.extend_from_slice(&node.position.to_array());
            lines.extend_from_slice(&end.to_array());
        }
        lines
    }

    pub fn step_count(&self) -> u64 { self.step_count }
    pub fn pending_impulses(&self) -> usize { self.pending.len() }
    pub fn kinetic_energy(&self) -> F { self.mesh.kinetic_energy() }
    pub fn velocity_norm_sq(&self) -> F { self.mesh.velocity_norm_sq() }
    pub fn mesh(&self) -> &SoftMesh<F> { &self.mesh }

    /// Direct access for hosts that perturb nodes by hand. Render buffers
    /// catch up on the next step or reset.
    pub fn mesh_mut(&mut self) -> &mut SoftMesh<F> { &mut self.mesh }

    fn refresh_buffers(&mut self) {
        self.mesh.write_positions(&mut self.positions);
        self.mesh.write_normals(&mut self.normals);
    }
}
