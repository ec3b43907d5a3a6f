pub mod boolean;
pub mod comb;
pub mod creation;
pub mod pattern;
pub mod query;
pub mod transform;
