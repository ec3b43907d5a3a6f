use tracing::{debug, instrument};

use crate::csg::CsgDocument;
use crate::error::{GeometryError, Result};
use crate::operations::comb::CombPiece;
use crate::operations::query::IsValid;

use super::{TessellationParams, TriangleMesh};

/// A geometry kernel able to turn a CSG document into a manifold mesh.
///
/// Implementations must evaluate union, difference and intersection over
/// cubes, cylinders and tori, and should report a [`GeometryError`] rather
/// than return a non-manifold or degenerate result.
pub trait GeometryKernel {
    /// Evaluates `document` into a triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the kernel cannot produce a valid mesh.
    fn evaluate(
        &self,
        document: &CsgDocument,
        params: &TessellationParams,
    ) -> std::result::Result<TriangleMesh, GeometryError>;
}

/// Hands a built piece to a geometry kernel and checks what comes back.
///
/// Any kernel failure is fatal; no partial mesh is returned.
pub struct EvaluatePiece {
    params: TessellationParams,
}

impl EvaluatePiece {
    /// Creates a new `EvaluatePiece` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the evaluation, returning the kernel's mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece's tree is not valid, the kernel fails,
    /// or the kernel returns an empty or malformed mesh.
    #[instrument(skip_all, fields(piece = %piece.piece))]
    pub fn execute<K: GeometryKernel + ?Sized>(
        &self,
        piece: &CombPiece,
        kernel: &K,
    ) -> Result<TriangleMesh> {
        if !IsValid::new(piece.root).execute(&piece.store) {
            return Err(GeometryError::Degenerate(format!(
                "{} piece does not form a valid solid",
                piece.piece
            ))
            .into());
        }

        let document = piece.document()?;
        debug!(nodes = document.len(), "evaluating piece");
        let mesh = kernel.evaluate(&document, &self.params)?;
        mesh.validate()?;
        debug!(
            vertices = mesh.vertices.len(),
            triangles = mesh.indices.len(),
            "kernel returned mesh"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::csg::NodeRecord;
    use crate::error::WireCombError;
    use crate::math::Point3;
    use crate::operations::comb::build_piece;
    use crate::params::{CombParams, Piece};

    /// Emits one triangle per primitive and records what it saw.
    struct CountingKernel {
        primitives: Cell<usize>,
        fragment_size: Cell<f64>,
    }

    impl CountingKernel {
        fn new() -> Self {
            Self {
                primitives: Cell::new(0),
                fragment_size: Cell::new(0.0),
            }
        }
    }

    impl GeometryKernel for CountingKernel {
        fn evaluate(
            &self,
            document: &CsgDocument,
            params: &TessellationParams,
        ) -> std::result::Result<TriangleMesh, GeometryError> {
            let primitives = document
                .nodes
                .iter()
                .filter(|record| matches!(record, NodeRecord::Primitive { .. }))
                .count();
            self.primitives.set(primitives);
            self.fragment_size.set(params.min_fragment_size);

            let mut mesh = TriangleMesh::default();
            for _ in 0..primitives {
                mesh.merge(&TriangleMesh {
                    vertices: vec![
                        Point3::origin(),
                        Point3::new(1.0, 0.0, 0.0),
                        Point3::new(0.0, 1.0, 0.0),
                    ],
                    indices: vec![[0, 1, 2]],
                });
            }
            Ok(mesh)
        }
    }

    struct FailingKernel;

    impl GeometryKernel for FailingKernel {
        fn evaluate(
            &self,
            _document: &CsgDocument,
            _params: &TessellationParams,
        ) -> std::result::Result<TriangleMesh, GeometryError> {
            Err(GeometryError::Kernel("coincident faces".into()))
        }
    }

    struct EmptyKernel;

    impl GeometryKernel for EmptyKernel {
        fn evaluate(
            &self,
            _document: &CsgDocument,
            _params: &TessellationParams,
        ) -> std::result::Result<TriangleMesh, GeometryError> {
            Ok(TriangleMesh::default())
        }
    }

    fn piece(piece: Piece) -> (CombParams, CombPiece) {
        let params = CombParams::default().with_piece(piece);
        let built = build_piece(&params).unwrap();
        (params, built)
    }

    #[test]
    fn kernel_receives_document_and_arc_resolution() {
        let (params, built) = piece(Piece::Center);
        let kernel = CountingKernel::new();
        let mesh = EvaluatePiece::new(TessellationParams::for_comb(&params))
            .execute(&built, &kernel)
            .unwrap();

        // Block, cutter cylinder, torus, clip box, peg-hole cylinder, peg cylinder.
        assert_eq!(kernel.primitives.get(), 6);
        assert_eq!(mesh.indices.len(), 6);
        assert!((kernel.fragment_size.get() - params.arc_resolution).abs() < f64::EPSILON);
    }

    #[test]
    fn kernel_failure_is_fatal() {
        let (params, built) = piece(Piece::PegEnd);
        let err = EvaluatePiece::new(TessellationParams::for_comb(&params))
            .execute(&built, &FailingKernel)
            .unwrap_err();
        assert!(matches!(
            err,
            WireCombError::Geometry(GeometryError::Kernel(_))
        ));
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let (params, built) = piece(Piece::HoleEnd);
        let err = EvaluatePiece::new(TessellationParams::for_comb(&params))
            .execute(&built, &EmptyKernel)
            .unwrap_err();
        assert!(matches!(
            err,
            WireCombError::Geometry(GeometryError::MalformedMesh(_))
        ));
    }

    #[test]
    fn kernel_can_be_used_as_trait_object() {
        let (params, built) = piece(Piece::TwoRowSolid);
        let kernel: Box<dyn GeometryKernel> = Box::new(CountingKernel::new());
        let mesh = EvaluatePiece::new(TessellationParams::for_comb(&params))
            .execute(&built, kernel.as_ref())
            .unwrap();
        // Block, cutter cylinder, torus.
        assert_eq!(mesh.indices.len(), 3);
    }
}
