//! UV sphere geometry laid out on a latitude x longitude grid.

use crate::error::SimError;
use crate::float::Float;
use crate::mesh::SoftMesh;
use crate::topology::GridTopology;
use alloc::vec::Vec as AllocVec;

/// A UV sphere centred at the origin.
///
/// Vertex `(lat, lon)` sits at polar angle `lat * pi / latitude_bands` and
/// azimuth `lon * 2pi / longitude_bands`. The first and last longitude
/// columns coincide (texture seam) and every vertex of the first and last
/// rows sits on a pole; those are separate nodes, so the springs between
/// them start with zero length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UvSphere<F: Float> {
    pub latitude_bands: usize,
    pub longitude_bands: usize,
    pub radius: F,
}

/// Flat buffers for a generated sphere.
pub struct SphereGeometry<F: Float> {
    pub topology: GridTopology,
    /// `[x, y, z]` per vertex.
    pub positions: AllocVec<F>,
    /// Analytic outward unit normals, `[x, y, z]` per vertex.
    pub normals: AllocVec<F>,
    pub triangles: AllocVec<[usize; 3]>,
}

impl<F: Float> UvSphere<F> {
    pub fn new(latitude_bands: usize, longitude_bands: usize, radius: F) -> Self {
        UvSphere { latitude_bands, longitude_bands, radius }
    }

    pub fn topology(&self) -> GridTopology {
        GridTopology::new(self.latitude_bands, self.longitude_bands)
    }

    pub fn geometry(&self) -> SphereGeometry<F> {
        let topology = self.topology();
        let mut positions = AllocVec::with_capacity(topology.coordinate_count());
        let mut normals = AllocVec::with_capacity(topology.coordinate_count());

        // Zero bands would divide by zero below; a single band is the
        // smallest meaningful subdivision.
        let lat_div = F::from_usize(self.latitude_bands.max(1));
        let lon_div = F::from_usize(self.longitude_bands.max(1));

        for lat in 0..=self.latitude_bands {
            let theta = F::from_usize(lat) * F::pi() / lat_div;
            let (sin_theta, cos_theta) = (theta.sin(), theta.cos());

            for lon in 0..=self.longitude_bands {
                let phi = F::from_usize(lon) * F::two() * F::pi() / lon_div;
                let (sin_phi, cos_phi) = (phi.sin(), phi.cos());

                let unit = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
                positions.extend(unit.iter().map(|&c| c * self.radius));
                normals.extend_from_slice(&unit);
            }
        }

        SphereGeometry { topology, positions, normals, triangles: topology.triangles() }
    }

    /// Generate the sphere and wire it into a mesh whose rest normals are
    /// the analytic ones.
    pub fn build(&self, stiffness: F, mass: F) -> Result<SoftMesh<F>, SimError> {
        let geometry = self.geometry();
        SoftMesh::with_triangles(geometry.topology, &geometry.positions, geometry.triangles, stiffness, mass)?
            .with_rest_normals(&geometry.normals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::{Vec, Vec3};

    #[test]
    fn vertices_lie_on_sphere() {
        let geometry = UvSphere::new(6, 8, 2.0f64).geometry();
        for i in 0..geometry.topology.vertex_count() {
            let p = Vec3::from_flat(&geometry.positions, i);
            assert!((p.length() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn poles_are_on_y_axis() {
        let sphere = UvSphere::new(4, 4, 1.0f32);
        let geometry = sphere.geometry();
        let north = Vec3::from_flat(&geometry.positions, 0);
        let south = Vec3::from_flat(&geometry.positions, sphere.topology().index(4, 2));
        assert!((north.y - 1.0).abs() < 1e-6);
        assert!((south.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn buffer_sizes() {
        let geometry = UvSphere::new(30, 30, 1.0f32).geometry();
        assert_eq!(geometry.positions.len(), 31 * 31 * 3);
        assert_eq!(geometry.normals.len(), 31 * 31 * 3);
        assert_eq!(geometry.triangles.len(), 30 * 30 * 2);
    }
}
