//! The deformable mesh: node arena, springs, and fixed triangulation.

use crate::error::SimError;
use crate::float::Float;
use crate::node::Node;
use crate::normals::NormalField;
use crate::spring::Spring;
use crate::topology::GridTopology;
use crate::vec::{Vec, Vec3};
use alloc::vec::Vec as AllocVec;

/// A mass-spring mesh built from a [`GridTopology`].
///
/// Nodes live in one arena indexed in canonical vertex order; springs and
/// triangles refer to them by index. Topology never changes after
/// construction, only node state and spring rest lengths do.
pub struct SoftMesh<F: Float> {
    topology: GridTopology,
    nodes: AllocVec<Node<F>>,
    springs: AllocVec<Spring<F>>,
    triangles: AllocVec<[usize; 3]>,
    indices: AllocVec<u32>,
    rest_normals: AllocVec<Vec3<F>>,
    normals: NormalField<F>,
}

impl<F: Float> SoftMesh<F> {
    /// Build nodes and springs from a flat position buffer, triangulated
    /// with [`GridTopology::triangles`].
    pub fn from_grid(topology: GridTopology, positions: &[F], stiffness: F, mass: F) -> Result<Self, SimError> {
        let triangles = topology.triangles();
        Self::with_triangles(topology, positions, triangles, stiffness, mass)
    }

    /// Build with a caller-supplied triangulation.
    ///
    /// Rest normals are derived from the rest positions; use
    /// [`SoftMesh::with_rest_normals`] to replace them.
    pub fn with_triangles(
        topology: GridTopology,
        positions: &[F],
        triangles: AllocVec<[usize; 3]>,
        stiffness: F,
        mass: F,
    ) -> Result<Self, SimError> {
        let nodes = topology.build_nodes(positions, mass)?;
        let springs = topology.build_springs(&nodes, stiffness)?;

        let count = nodes.len();
        if let Some(&index) = triangles.iter().flatten().find(|&&i| i >= count) {
            return Err(SimError::IndexOutOfRange { index, count });
        }
        let indices = triangles.iter().flatten().map(|&i| i as u32).collect();

        let mut normals = NormalField::new(count);
        normals.recompute(&nodes, &triangles);
        let rest_normals = normals.as_slice().to_vec();

        Ok(SoftMesh { topology, nodes, springs, triangles, indices, rest_normals, normals })
    }

    /// Replace the rest normals with a flat `[x, y, z, ...]` buffer.
    pub fn with_rest_normals(mut self, flat: &[F]) -> Result<Self, SimError> {
        self.topology.check_coordinates(flat.len())?;
        self.rest_normals = (0..self.nodes.len()).map(|i| Vec3::from_flat(flat, i)).collect();
        Ok(self)
    }

    /// Accumulate every spring's force into its endpoints.
    pub fn apply_spring_forces(&mut self) {
        for spring in &self.springs {
            spring.apply(&mut self.nodes);
        }
    }

    /// Add `direction * magnitude` to one node's force accumulator.
    ///
    /// `direction` is used as given; it is not normalized here.
    pub fn apply_impulse(&mut self, node: usize, direction: Vec3<F>, magnitude: F) -> Result<(), SimError> {
        let count = self.nodes.len();
        let target = self
            .nodes
            .get_mut(node)
            .ok_or(SimError::IndexOutOfRange { index: node, count })?;
        target.apply_force(direction.scale(magnitude));
        Ok(())
    }

    /// Advance every node one step and clear the force accumulators.
    pub fn integrate(&mut self, dt: F, damping: F) {
        for node in self.nodes.iter_mut() {
            node.integrate(dt, damping);
        }
    }

    pub fn recompute_normals(&mut self) {
        self.normals.recompute(&self.nodes, &self.triangles);
    }

    /// Put every node back at rest and restore every spring's rest length.
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset();
        }
        for spring in self.springs.iter_mut() {
            spring.reset();
        }
        self.recompute_normals();
    }

    /// Regenerate all springs from the rest positions with a new stiffness.
    pub fn rebuild_springs(&mut self, stiffness: F) -> Result<(), SimError> {
        let rest: AllocVec<Node<F>> = self
            .nodes
            .iter()
            .map(|n| Node::new(n.rest_position(), n.mass()))
            .collect();
        self.springs = self.topology.build_springs(&rest, stiffness)?;
        Ok(())
    }

    /// Transiently change one spring's target length; undone by `reset`.
    pub fn set_rest_length(&mut self, spring: usize, rest_length: F) -> Result<(), SimError> {
        let count = self.springs.len();
        self.springs
            .get_mut(spring)
            .ok_or(SimError::IndexOutOfRange { index: spring, count })?
            .set_rest_length(rest_length);
        Ok(())
    }

    pub fn normal(&self, node: usize) -> Result<Vec3<F>, SimError> {
        self.normals
            .get(node)
            .ok_or(SimError::IndexOutOfRange { index: node, count: self.nodes.len() })
    }

    pub fn rest_normal(&self, node: usize) -> Result<Vec3<F>, SimError> {
        self.rest_normals
            .get(node)
            .copied()
            .ok_or(SimError::IndexOutOfRange { index: node, count: self.nodes.len() })
    }

    pub fn write_positions(&self, out: &mut AllocVec<F>) {
        out.clear();
        for node in &self.nodes {
            out.extend_from_slice(&node.position.to_array());
        }
    }

    pub fn write_normals(&self, out: &mut AllocVec<F>) {
        self.normals.write_flat(out);
    }

    pub fn kinetic_energy(&self) -> F {
        self.nodes.iter().fold(F::zero(), |acc, n| acc + n.kinetic_energy())
    }

    /// Sum of squared node speeds.
    pub fn velocity_norm_sq(&self) -> F {
        self.nodes.iter().fold(F::zero(), |acc, n| acc + n.velocity.length_sq())
    }

    pub fn topology(&self) -> GridTopology { self.topology }
    pub fn nodes(&self) -> &[Node<F>] { &self.nodes }
    pub fn nodes_mut(&mut self) -> &mut [Node<F>] { &mut self.nodes }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn triangles(&self) -> &[[usize; 3]] { &self.triangles }
    /// Flat triangle index buffer, fixed at build time.
    pub fn indices(&self) -> &[u32] { &self.indices }
    pub fn normals(&self) -> &[Vec3<F>] { self.normals.as_slice() }
    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit square in the xz plane: 0 (0,0,0), 1 (1,0,0), 2 (0,0,1), 3 (1,0,1).
    fn square() -> SoftMesh<f64> {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        SoftMesh::from_grid(GridTopology::new(1, 1), &positions, 1.0, 1.0).unwrap()
    }

    #[test]
    fn impulse_out_of_range() {
        let mut mesh = square();
        let err = mesh.apply_impulse(4, Vec3::new(0.0, 1.0, 0.0), 1.0);
        assert_eq!(err, Err(SimError::IndexOutOfRange { index: 4, count: 4 }));
    }

    #[test]
    fn impulse_is_not_renormalized() {
        let mut mesh = square();
        mesh.apply_impulse(1, Vec3::new(0.0, 2.0, 0.0), 3.0).unwrap();
        assert_eq!(mesh.nodes()[1].force, Vec3::new(0.0, 6.0, 0.0));
    }

    #[test]
    fn bad_triangle_index_is_rejected() {
        let positions = [0.0f32; 12];
        let result = SoftMesh::with_triangles(GridTopology::new(1, 1), &positions, alloc::vec![[0, 1, 7]], 1.0, 1.0);
        assert_eq!(result.err(), Some(SimError::IndexOutOfRange { index: 7, count: 4 }));
    }

    #[test]
    fn index_buffer_is_flat_triangles() {
        let mesh = square();
        assert_eq!(mesh.indices(), &[0, 2, 1, 2, 3, 1]);
    }

    #[test]
    fn rest_normals_length_is_checked() {
        let result = square().with_rest_normals(&[0.0; 9]);
        assert_eq!(result.err(), Some(SimError::InvalidTopology { expected: 12, actual: 9 }));
    }
}
