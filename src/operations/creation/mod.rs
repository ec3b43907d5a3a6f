mod make_cube;
mod make_cylinder;
mod make_torus;
mod make_torus_hole;

pub use make_cube::MakeCube;
pub use make_cylinder::MakeCylinder;
pub use make_torus::MakeTorus;
pub use make_torus_hole::MakeTorusHole;
