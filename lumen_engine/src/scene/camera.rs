use crate::core::types::{Number, Point3, Vector3};
use crate::render::render_opts::RenderOpts;
use crate::shared::ray::Ray;
use crate::shared::validate;
use puffin::profile_function;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use valuable::Valuable;

/// A pinhole camera looking down the negative `z` axis
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Position the camera is located at
    pub pos: Point3,
    /// Height of the viewport rectangle, in world units. The width follows from the aspect ratio.
    pub viewport_height: Number,
    /// Distance from the camera to the viewport plane
    pub focal_length: Number,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: Point3::ZERO,
            viewport_height: 2.0,
            focal_length: 1.0,
        }
    }
}

#[derive(Error, Copy, Clone, Debug, PartialEq, Valuable)]
pub enum CamInvalidError {
    /// The aspect ratio was zero, negative, or not finite
    #[error("the aspect ratio {0} is not a positive finite number")]
    AspectRatioInvalid(Number),
    /// The viewport height was zero, negative, or not finite
    #[error("the viewport height {0} is not a positive finite number")]
    ViewportHeightInvalid(Number),
    /// The calculated focal length was not valid. Try checking it is `> 0`
    #[error("the focal length {0} is not a positive finite number")]
    FocalLengthInvalid(Number),
    /// The camera position had a NaN or infinite component
    #[error("the camera position is not finite")]
    PositionInvalid,
    /// `aspect_ratio * viewport_height` overflowed, even though both are finite
    #[error("the viewport width {0} is not finite")]
    ViewportWidthInvalid(Number),
    /// The lower left corner overflowed, from a camera placed too far out for the viewport size
    #[error("the lower left corner of the viewport is not finite")]
    LowerLeftCornerInvalid,
}

fn positive_finite(val: Number) -> bool { val.is_finite() && val > 0. }

impl Camera {
    /// Width of the viewport for the given aspect ratio
    pub fn viewport_width(&self, aspect_ratio: Number) -> Number { aspect_ratio * self.viewport_height }

    /// A method for calculating the viewport from a camera
    ///
    /// # Errors
    /// This will return a [`CamInvalidError`] if any of the settings of the camera or the aspect ratio
    /// are not valid, and so the viewport couldn't be calculated.
    pub fn calculate_viewport(&self, render_opts: &RenderOpts) -> Result<Viewport, CamInvalidError> {
        profile_function!();

        if !positive_finite(render_opts.aspect_ratio) {
            return Err(CamInvalidError::AspectRatioInvalid(render_opts.aspect_ratio));
        }
        if !positive_finite(self.viewport_height) {
            return Err(CamInvalidError::ViewportHeightInvalid(self.viewport_height));
        }
        if !positive_finite(self.focal_length) {
            return Err(CamInvalidError::FocalLengthInvalid(self.focal_length));
        }
        if !self.pos.is_finite() {
            return Err(CamInvalidError::PositionInvalid);
        }

        let origin = self.pos;
        let width = self.viewport_width(render_opts.aspect_ratio);
        let horizontal = Vector3::new(width, 0., 0.);
        let vertical = Vector3::new(0., self.viewport_height, 0.);
        let lower_left_corner = origin - horizontal / 2. - vertical / 2. - Vector3::new(0., 0., self.focal_length);
        if !width.is_finite() {
            return Err(CamInvalidError::ViewportWidthInvalid(width));
        }
        if !lower_left_corner.is_finite() {
            return Err(CamInvalidError::LowerLeftCornerInvalid);
        }

        validate::point3(origin);
        validate::point3(lower_left_corner);
        validate::vector3(horizontal);
        validate::vector3(vertical);

        Ok(Viewport {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        })
    }
}

/// The camera basis, calculated once per render
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub origin: Point3,
    /// Vector across the full width of the viewport
    pub horizontal: Vector3,
    /// Vector up the full height of the viewport
    pub vertical: Vector3,
    pub lower_left_corner: Point3,
}

impl Viewport {
    /// Calculates the view ray for the pixel at column `i` and row `j`.
    ///
    /// `j` counts upwards from the bottom row of the image, so `j = height - 1` is the top.
    ///
    /// An image that is a single pixel (or zero pixels) across uses a denominator of `1`
    /// in place of `width - 1` (or `height - 1`).
    pub fn calc_ray(&self, i: usize, j: usize, width: usize, height: usize) -> Ray {
        let u = i as Number / Self::param_denominator(width);
        let v = j as Number / Self::param_denominator(height);

        let direction = self.lower_left_corner + self.horizontal * u + self.vertical * v - self.origin;
        Ray::new(self.origin, direction)
    }

    fn param_denominator(n: usize) -> Number { n.saturating_sub(1).max(1) as Number }
}
