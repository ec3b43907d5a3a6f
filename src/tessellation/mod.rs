mod kernel;

pub use kernel::{EvaluatePiece, GeometryKernel};

use std::f64::consts::TAU;

use crate::error::GeometryError;
use crate::math::Point3;
use crate::params::CombParams;

/// Radius below which a circle is emitted as a bare triangle.
const GRID_FINE: f64 = 1.0 / 1_048_576.0;

/// Parameters controlling how finely a kernel approximates curved surfaces.
///
/// A circle of radius `r` is split into
/// `max(ceil(min(360 / min_fragment_angle, 2πr / min_fragment_size)), 5)`
/// segments unless `fixed_fragments` overrides the count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationParams {
    /// Smallest segment length on a curve.
    pub min_fragment_size: f64,
    /// Smallest angle, in degrees, subtended by one segment.
    pub min_fragment_angle: f64,
    /// Exact segment count for every circle, when set.
    pub fixed_fragments: Option<u32>,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            min_fragment_size: 2.0,
            min_fragment_angle: 12.0,
            fixed_fragments: None,
        }
    }
}

impl TessellationParams {
    /// Parameters whose segment length follows a comb's arc resolution.
    #[must_use]
    pub fn from_arc_resolution(arc_resolution: f64) -> Self {
        Self {
            min_fragment_size: arc_resolution,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn for_comb(params: &CombParams) -> Self {
        Self::from_arc_resolution(params.arc_resolution)
    }

    /// Number of segments used for a circle of `radius`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn fragments(&self, radius: f64) -> u32 {
        if radius < GRID_FINE {
            return 3;
        }
        if let Some(fixed) = self.fixed_fragments {
            return fixed.max(3);
        }
        let by_angle = 360.0 / self.min_fragment_angle;
        let by_size = radius * TAU / self.min_fragment_size;
        by_angle.min(by_size).max(5.0).ceil() as u32
    }
}

/// A triangle mesh produced by a geometry kernel.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Appends another mesh, offsetting its indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Checks that the mesh has triangles and every index names a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MalformedMesh`] describing the first problem.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.indices.is_empty() {
            return Err(GeometryError::MalformedMesh("mesh has no triangles".into()));
        }
        let count = self.vertices.len();
        if let Some(tri) = self
            .indices
            .iter()
            .find(|tri| tri.iter().any(|&i| i as usize >= count))
        {
            return Err(GeometryError::MalformedMesh(format!(
                "triangle {tri:?} refers past {count} vertices"
            )));
        }
        if let Some(p) = self.vertices.iter().find(|p| !p.coords.iter().all(|c| c.is_finite())) {
            return Err(GeometryError::MalformedMesh(format!(
                "vertex {p} is not finite"
            )));
        }
        Ok(())
    }
}
