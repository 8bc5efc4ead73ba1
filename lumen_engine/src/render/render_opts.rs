use crate::core::types::Number;
use serde::{Deserialize, Serialize};
use valuable::Valuable;

#[derive(Copy, Clone, Debug, PartialEq, Valuable, Serialize, Deserialize)]
pub struct RenderOpts {
    /// Width divided by height, for both the image and the viewport
    pub aspect_ratio: Number,
    /// Width of the image in pixels. The height is derived from the aspect ratio.
    pub image_width: usize,
}

impl RenderOpts {
    /// Height of the image in pixels, `floor(image_width / aspect_ratio)`
    ///
    /// Can be zero for very narrow images. A non-finite result saturates to `0` or [`usize::MAX`].
    pub fn image_height(&self) -> usize { (self.image_width as Number / self.aspect_ratio).floor() as usize }

    /// Returns the dimensions of the render as `[width, height]`
    pub fn dims(&self) -> [usize; 2] { [self.image_width, self.image_height()] }
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            aspect_ratio: 16. / 9.,
            image_width: 400,
        }
    }
}
