//! Point masses integrated with semi-implicit Euler.

use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// A point mass in the mesh.
///
/// `force` is an accumulator: force sources add to it during a step and
/// [`Node::integrate`] consumes and clears it.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<F: Float> {
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
    pub force: Vec3<F>,
    mass: F,
    rest_position: Vec3<F>,
}

impl<F: Float> Node<F> {
    /// Create a node at rest. `mass` must already be validated as positive.
    pub fn new(position: Vec3<F>, mass: F) -> Self {
        debug_assert!(mass > F::zero(), "node mass must be positive");
        Node {
            position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            mass,
            rest_position: position,
        }
    }

    pub fn mass(&self) -> F { self.mass }

    /// Position captured at construction; only [`Node::reset`] reads it.
    pub fn rest_position(&self) -> Vec3<F> { self.rest_position }

    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.force = self.force + force;
    }

    /// Advance one step.
    ///
    /// Position moves with the undamped velocity; damping is applied
    /// afterwards, then the force accumulator is cleared.
    pub fn integrate(&mut self, dt: F, damping: F) {
        let acceleration = self.force.scale(F::one() / self.mass);
        self.velocity = self.velocity + acceleration.scale(dt);
        self.position = self.position + self.velocity.scale(dt);
        self.velocity = self.velocity.scale(damping);
        self.force = Vec3::zero();
    }

    /// Back to the rest position with zero velocity and force.
    pub fn reset(&mut self) {
        self.position = self.rest_position;
        self.velocity = Vec3::zero();
        self.force = Vec3::zero();
    }

    pub fn kinetic_energy(&self) -> F {
        F::half() * self.mass * self.velocity.length_sq()
    }
}
