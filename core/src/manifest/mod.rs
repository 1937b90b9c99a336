pub mod generator;
pub mod matrix;
pub mod model;
