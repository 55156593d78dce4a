//! Area-weighted per-vertex normals over a fixed triangulation.

use crate::float::Float;
use crate::node::Node;
use crate::vec::{Vec, Vec3};
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Reusable per-vertex normal buffer.
///
/// Each triangle `(a, b, c)` contributes the unnormalized face normal
/// `(c - a) x (b - a)` to its three corners, so larger faces weigh more.
pub struct NormalField<F: Float> {
    normals: AllocVec<Vec3<F>>,
}

impl<F: Float> NormalField<F> {
    pub fn new(vertex_count: usize) -> Self {
        NormalField { normals: vec![Vec3::zero(); vertex_count] }
    }

    /// Zero the buffer and sum face normals into it without normalizing.
    ///
    /// Triangle indices must be valid for `positions`; the mesh checks this
    /// once when it is built.
    pub fn accumulate<I>(&mut self, positions: I, triangles: &[[usize; 3]])
    where
        I: Fn(usize) -> Vec3<F>,
    {
        for n in self.normals.iter_mut() {
            *n = Vec3::zero();
        }
        for &[ia, ib, ic] in triangles {
            let a = positions(ia);
            let e1 = positions(ic) - a;
            let e2 = positions(ib) - a;
            let face = e1.cross(e2);

            self.normals[ia] = self.normals[ia] + face;
            self.normals[ib] = self.normals[ib] + face;
            self.normals[ic] = self.normals[ic] + face;
        }
    }

    /// Normalize every accumulated vector; zero sums stay zero.
    pub fn normalize(&mut self) {
        for n in self.normals.iter_mut() {
            *n = n.normalize_or_zero();
        }
    }

    /// Full recompute from the current node positions.
    pub fn recompute(&mut self, nodes: &[Node<F>], triangles: &[[usize; 3]]) {
        self.accumulate(|i| nodes[i].position, triangles);
        self.normalize();
    }

    pub fn as_slice(&self) -> &[Vec3<F>] {
        &self.normals
    }

    pub fn get(&self, index: usize) -> Option<Vec3<F>> {
        self.normals.get(index).copied()
    }

    /// Write `[x, y, z]` per vertex into `out`, replacing its contents.
    pub fn write_flat(&self, out: &mut AllocVec<F>) {
        out.clear();
        for n in &self.normals {
            out.extend_from_slice(&n.to_array());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(points: &[[f32; 3]]) -> AllocVec<Node<f32>> {
        points
            .iter()
            .map(|p| Node::new(Vec3::new(p[0], p[1], p[2]), 1.0))
            .collect()
    }

    #[test]
    fn single_triangle_normal() {
        let nodes = nodes(&[[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        let mut field = NormalField::new(3);
        field.recompute(&nodes, &[[0, 1, 2]]);
        // (c - a) x (b - a) = x_hat x z_hat = -y_hat
        for n in field.as_slice() {
            assert!((n.y + 1.0).abs() < 1e-6, "normal = {:?}", n);
        }
    }

    #[test]
    fn larger_face_dominates() {
        // Two triangles sharing vertex 0, one four times the area of the other.
        let nodes = nodes(&[
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let mut field = NormalField::new(5);
        field.accumulate(|i| nodes[i].position, &[[0, 1, 2], [0, 3, 4]]);
        let raw = field.as_slice()[0];
        assert!((raw.y + 1.0).abs() < 1e-6);
        assert!((raw.x + 4.0).abs() < 1e-6);
    }

    #[test]
    fn isolated_vertex_is_zero() {
        let nodes = nodes(&[[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [5.0, 5.0, 5.0]]);
        let mut field = NormalField::new(4);
        field.recompute(&nodes, &[[0, 1, 2]]);
        assert_eq!(field.as_slice()[3], Vec3::zero());
    }

    #[test]
    fn degenerate_triangle_contributes_nothing() {
        let nodes = nodes(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        let mut field = NormalField::new(3);
        field.recompute(&nodes, &[[0, 1, 2]]);
        for n in field.as_slice() {
            assert_eq!(*n, Vec3::zero());
        }
    }
}
