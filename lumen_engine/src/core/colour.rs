use crate::core::types::{Channel, Number};
use crate::core::vector::Vector3;
use std::ops::{Deref, DerefMut, Index, IndexMut};

/// Multiplier used when quantising a `0..=1` channel value to a [`Channel`].
///
/// Slightly below 256 so that `1.0` maps to `255` without overflowing.
pub const QUANTISE_SCALE: Number = 255.999;

/// An 8-bit RGB pixel, as stored in the framebuffer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Rgb8(pub [Channel; 3]);

impl Rgb8 {
    /// How many channels there are, for this colour.
    pub const CHANNEL_COUNT: usize = 3;

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: Channel, g: Channel, b: Channel) -> Self { Self([r, g, b]) }

    pub const fn r(&self) -> Channel { self.0[0] }
    pub const fn g(&self) -> Channel { self.0[1] }
    pub const fn b(&self) -> Channel { self.0[2] }

    /// Quantises a colour whose channels are nominally in `0..=1` (`x`, `y`, `z` as red, green, blue).
    ///
    /// Each channel is scaled by [`QUANTISE_SCALE`] and truncated. Values outside the nominal
    /// range saturate at `0` or `255`.
    ///
    /// # Return
    /// [`None`] if any channel is NaN or infinite, since there is no meaningful pixel for it.
    pub fn try_from_unit(col: Vector3) -> Option<Self> {
        if !col.is_finite() {
            return None;
        }
        // `as` truncates towards zero and saturates
        Some(Self(col.to_array().map(|c| (c * QUANTISE_SCALE) as Channel)))
    }
}

// region To/From impls

impl From<[Channel; 3]> for Rgb8 {
    fn from(val: [Channel; 3]) -> Self { Self(val) }
}
impl From<Rgb8> for [Channel; 3] {
    fn from(Rgb8(val): Rgb8) -> Self { val }
}
impl From<(Channel, Channel, Channel)> for Rgb8 {
    fn from((r, g, b): (Channel, Channel, Channel)) -> Self { Self::new(r, g, b) }
}

// endregion To/From impls

// region Iterating/Indexing

impl IntoIterator for Rgb8 {
    type Item = Channel;
    type IntoIter = std::array::IntoIter<Channel, 3>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl Deref for Rgb8 {
    type Target = [Channel; 3];

    fn deref(&self) -> &Self::Target { &self.0 }
}
impl DerefMut for Rgb8 {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl Index<usize> for Rgb8 {
    type Output = Channel;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}
impl IndexMut<usize> for Rgb8 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

// endregion Iterating/Indexing
