//! Hookean springs between two nodes of a mesh.

use crate::float::Float;
use crate::node::Node;
use crate::vec::Vec;

/// Which grid adjacency produced a spring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpringKind {
    /// `(lat, lon)` to `(lat+1, lon)`.
    Vertical,
    /// `(lat, lon)` to `(lat, lon+1)`.
    Horizontal,
    /// Shear brace `(lat, lon)` to `(lat+1, lon+1)`.
    Diagonal,
    /// Shear brace `(lat+1, lon)` to `(lat, lon+1)`.
    AntiDiagonal,
}

/// An elastic link between nodes `a` and `b`, stored by index into the
/// mesh's node list.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub kind: SpringKind,
    stiffness: F,
    rest_length: F,
    original_rest_length: F,
}

impl<F: Float> Spring<F> {
    /// Build a spring whose rest length is the current distance between
    /// the two nodes.
    pub fn between(a: usize, b: usize, kind: SpringKind, nodes: &[Node<F>], stiffness: F) -> Self {
        let rest_length = nodes[a].position.distance(nodes[b].position);
        Spring {
            a,
            b,
            kind,
            stiffness,
            rest_length,
            original_rest_length: rest_length,
        }
    }

    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn original_rest_length(&self) -> F { self.original_rest_length }

    pub fn set_rest_length(&mut self, rest_length: F) {
        self.rest_length = rest_length;
    }

    /// Restore the rest length captured at construction.
    pub fn reset(&mut self) {
        self.rest_length = self.original_rest_length;
    }

    pub fn length(&self, nodes: &[Node<F>]) -> F {
        nodes[self.a].position.distance(nodes[self.b].position)
    }

    /// Add this spring's force to both endpoints.
    ///
    /// A stretched spring pulls the endpoints together, a compressed one
    /// pushes them apart. The two contributions always cancel. Coincident
    /// endpoints have no direction to push along and are skipped.
    pub fn apply(&self, nodes: &mut [Node<F>]) {
        let delta = nodes[self.b].position - nodes[self.a].position;
        let distance = delta.length();
        if distance == F::zero() {
            return;
        }

        let magnitude = self.stiffness * (distance - self.rest_length);
        let force = delta.scale(magnitude / distance);

        nodes[self.a].apply_force(force);
        nodes[self.b].apply_force(-force);
    }
}
