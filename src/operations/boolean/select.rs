use crate::operations::query::PointClassification;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

impl BooleanOp {
    /// Name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BooleanOp::Union => "union",
            BooleanOp::Subtract => "difference",
            BooleanOp::Intersect => "intersection",
        }
    }

    /// Combines the classifications of a point against two operands.
    ///
    /// | A \ B    | Inside   | Boundary | Outside  |
    /// |----------|----------|----------|----------|
    /// | Union    |          |          |          |
    /// | Inside   | Inside   | Inside   | Inside   |
    /// | Boundary | Inside   | Boundary | Boundary |
    /// | Outside  | Inside   | Boundary | Outside  |
    /// | Subtract |          |          |          |
    /// | Inside   | Outside  | Boundary | Inside   |
    /// | Boundary | Outside  | Boundary | Boundary |
    /// | Outside  | Outside  | Outside  | Outside  |
    /// | Intersect|          |          |          |
    /// | Inside   | Inside   | Boundary | Outside  |
    /// | Boundary | Boundary | Boundary | Outside  |
    /// | Outside  | Outside  | Outside  | Outside  |
    #[allow(clippy::match_same_arms)]
    #[must_use]
    pub fn combine(self, a: PointClassification, b: PointClassification) -> PointClassification {
        use PointClassification::{Inside, OnBoundary, Outside};

        match (self, a, b) {
            (BooleanOp::Union, Inside, _) | (BooleanOp::Union, _, Inside) => Inside,
            (BooleanOp::Union, Outside, Outside) => Outside,
            (BooleanOp::Union, _, _) => OnBoundary,

            (BooleanOp::Subtract, Outside, _) | (BooleanOp::Subtract, _, Inside) => Outside,
            (BooleanOp::Subtract, Inside, Outside) => Inside,
            (BooleanOp::Subtract, _, _) => OnBoundary,

            (BooleanOp::Intersect, Outside, _) | (BooleanOp::Intersect, _, Outside) => Outside,
            (BooleanOp::Intersect, Inside, Inside) => Inside,
            (BooleanOp::Intersect, _, _) => OnBoundary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PointClassification::{Inside, OnBoundary, Outside};

    #[test]
    fn union_keeps_anything_inside_either() {
        assert_eq!(BooleanOp::Union.combine(Outside, Inside), Inside);
        assert_eq!(BooleanOp::Union.combine(OnBoundary, Outside), OnBoundary);
        assert_eq!(BooleanOp::Union.combine(Outside, Outside), Outside);
    }

    #[test]
    fn subtract_removes_cutter_interior() {
        assert_eq!(BooleanOp::Subtract.combine(Inside, Inside), Outside);
        assert_eq!(BooleanOp::Subtract.combine(Inside, Outside), Inside);
        assert_eq!(BooleanOp::Subtract.combine(Inside, OnBoundary), OnBoundary);
        assert_eq!(BooleanOp::Subtract.combine(Outside, Outside), Outside);
    }

    #[test]
    fn intersect_requires_both() {
        assert_eq!(BooleanOp::Intersect.combine(Inside, Inside), Inside);
        assert_eq!(BooleanOp::Intersect.combine(Inside, OnBoundary), OnBoundary);
        assert_eq!(BooleanOp::Intersect.combine(Inside, Outside), Outside);
    }
}
