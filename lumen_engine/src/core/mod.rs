pub mod colour;
pub mod image;
pub mod macros;
pub mod scalar;
pub mod targets;
pub mod types;
pub mod vector;
