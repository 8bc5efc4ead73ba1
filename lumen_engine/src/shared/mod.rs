pub mod ray;
pub mod validate;
