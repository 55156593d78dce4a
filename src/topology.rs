//! Latitude x longitude grid connectivity: spring pairs and triangles.

use crate::error::SimError;
use crate::float::Float;
use crate::node::Node;
use crate::spring::{Spring, SpringKind};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Shape of a structured vertex grid.
///
/// The grid has `(latitude_bands + 1) * (longitude_bands + 1)` vertices.
/// Vertex `(lat, lon)` has index `lat * (longitude_bands + 1) + lon`, which
/// is also its index in the node list and in every flat render buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridTopology {
    pub latitude_bands: usize,
    pub longitude_bands: usize,
}

impl GridTopology {
    pub fn new(latitude_bands: usize, longitude_bands: usize) -> Self {
        GridTopology { latitude_bands, longitude_bands }
    }

    pub fn index(&self, lat: usize, lon: usize) -> usize {
        lat * (self.longitude_bands + 1) + lon
    }

    pub fn vertex_count(&self) -> usize {
        (self.latitude_bands + 1) * (self.longitude_bands + 1)
    }

    /// Length a flat `[x, y, z, ...]` per-vertex buffer must have.
    pub fn coordinate_count(&self) -> usize {
        self.vertex_count() * 3
    }

    pub fn spring_count(&self) -> usize {
        let (lat, lon) = (self.latitude_bands, self.longitude_bands);
        lat * (lon + 1) + (lat + 1) * lon + 2 * lat * lon
    }

    /// Fail with `InvalidTopology` unless `len` is exactly
    /// [`GridTopology::coordinate_count`].
    pub fn check_coordinates(&self, len: usize) -> Result<(), SimError> {
        let expected = self.coordinate_count();
        if len != expected {
            return Err(SimError::InvalidTopology { expected, actual: len });
        }
        Ok(())
    }

    /// Every spring endpoint pair in row-major cell order.
    ///
    /// For each vertex: vertical link down, horizontal link right, then both
    /// shear diagonals of the cell it is the top-left corner of.
    pub fn spring_pairs(&self) -> AllocVec<(usize, usize, SpringKind)> {
        let mut pairs = AllocVec::with_capacity(self.spring_count());
        for lat in 0..=self.latitude_bands {
            for lon in 0..=self.longitude_bands {
                let has_row_below = lat < self.latitude_bands;
                let has_col_right = lon < self.longitude_bands;

                if has_row_below {
                    pairs.push((self.index(lat, lon), self.index(lat + 1, lon), SpringKind::Vertical));
                }
                if has_col_right {
                    pairs.push((self.index(lat, lon), self.index(lat, lon + 1), SpringKind::Horizontal));
                }
                if has_row_below && has_col_right {
                    pairs.push((self.index(lat, lon), self.index(lat + 1, lon + 1), SpringKind::Diagonal));
                    pairs.push((self.index(lat + 1, lon), self.index(lat, lon + 1), SpringKind::AntiDiagonal));
                }
            }
        }
        pairs
    }

    /// Two triangles per cell, wound so that on a UV sphere the face
    /// normal `(c - a) x (b - a)` points outward.
    pub fn triangles(&self) -> AllocVec<[usize; 3]> {
        let mut triangles = AllocVec::with_capacity(2 * self.latitude_bands * self.longitude_bands);
        for lat in 0..self.latitude_bands {
            for lon in 0..self.longitude_bands {
                let first = self.index(lat, lon);
                let second = first + self.longitude_bands + 1;
                triangles.push([first, second, first + 1]);
                triangles.push([second, second + 1, first + 1]);
            }
        }
        triangles
    }

    /// One node per grid vertex, read from a flat position buffer.
    pub fn build_nodes<F: Float>(&self, positions: &[F], mass: F) -> Result<AllocVec<Node<F>>, SimError> {
        self.check_coordinates(positions.len())?;
        if !(mass > F::zero()) || !mass.is_finite() {
            return Err(SimError::InvalidMass);
        }
        Ok((0..self.vertex_count())
            .map(|i| Node::new(Vec3::from_flat(positions, i), mass))
            .collect())
    }

    /// Springs for every grid adjacency, rest lengths taken from `nodes`.
    pub fn build_springs<F: Float>(&self, nodes: &[Node<F>], stiffness: F) -> Result<AllocVec<Spring<F>>, SimError> {
        if nodes.len() != self.vertex_count() {
            return Err(SimError::InvalidTopology {
                expected: self.coordinate_count(),
                actual: nodes.len() * 3,
            });
        }
        Ok(self
            .spring_pairs()
            .into_iter()
            .map(|(a, b, kind)| Spring::between(a, b, kind, nodes, stiffness))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_spring_order() {
        let topo = GridTopology::new(1, 1);
        let pairs = topo.spring_pairs();
        assert_eq!(
            pairs,
            [
                (0, 2, SpringKind::Vertical),
                (0, 1, SpringKind::Horizontal),
                (0, 3, SpringKind::Diagonal),
                (2, 1, SpringKind::AntiDiagonal),
                (1, 3, SpringKind::Vertical),
                (2, 3, SpringKind::Horizontal),
            ]
        );
    }

    #[test]
    fn spring_count_matches_generated() {
        let topo = GridTopology::new(4, 7);
        assert_eq!(topo.spring_pairs().len(), topo.spring_count());
    }

    #[test]
    fn zero_bands_is_a_single_vertex() {
        let topo = GridTopology::new(0, 0);
        assert_eq!(topo.vertex_count(), 1);
        assert!(topo.spring_pairs().is_empty());
        assert!(topo.triangles().is_empty());
    }

    #[test]
    fn wrong_coordinate_count_is_rejected() {
        let topo = GridTopology::new(1, 1);
        let positions = [0.0f32; 11];
        assert_eq!(
            topo.build_nodes(&positions, 1.0).err(),
            Some(SimError::InvalidTopology { expected: 12, actual: 11 })
        );
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        let topo = GridTopology::new(0, 0);
        assert_eq!(topo.build_nodes(&[0.0f32; 3], 0.0).err(), Some(SimError::InvalidMass));
        assert_eq!(topo.build_nodes(&[0.0f32; 3], f32::NAN).err(), Some(SimError::InvalidMass));
    }
}
