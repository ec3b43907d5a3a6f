mod row_of_cylinders;
mod torus_hole_array;

pub use row_of_cylinders::RowOfCylinders;
pub use torus_hole_array::TorusHoleArray;
