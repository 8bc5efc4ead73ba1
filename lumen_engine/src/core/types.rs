/// Numeric type used for most calculations in the engine
pub type Number = f64;
/// A single 8-bit colour channel, as stored in the framebuffer
pub type Channel = u8;

pub type Vector3 = crate::core::vector::Vector3;
/// Points share the vector representation; the alias only documents intent at call sites
pub type Point3 = crate::core::vector::Vector3;
pub type Colour = crate::core::colour::Rgb8;
pub type Image = crate::core::image::Image<Colour>;
