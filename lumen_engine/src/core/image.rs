use derivative::Derivative;
use getset::{CopyGetters, Getters};
use num_integer::Integer;
use rayon::prelude::*;
use std::ops::{Deref, DerefMut, Index, IndexMut};

/// A row-major grid of pixels.
///
/// Row `0` is the top row of the picture, which is also the first row written out by the
/// encoders in [`crate::output`].
#[derive(CopyGetters, Getters, Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug)]
pub struct Image<Col> {
    #[get_copy = "pub"]
    width: usize,
    #[get_copy = "pub"]
    height: usize,
    #[derivative(Debug = "ignore")]
    #[get = "pub"]
    data: Box<[Col]>,
}

// region Constructors

impl<Col: Clone + Default> Image<Col> {
    /// Creates a new image with the specified dimensions, and the default pixel value
    pub fn new_blank(width: usize, height: usize) -> Self { Self::new_filled(width, height, Default::default()) }
}

impl<Col: Clone> Image<Col> {
    /// Creates a new image with the specified dimensions, and the given fill pixel value
    pub fn new_filled(width: usize, height: usize, fill: Col) -> Self {
        Self::new_from(width, height, vec![fill; width * height])
    }
}

impl<Col> Image<Col> {
    /// Creates an image from the image's dimensions, and a slice of pixels
    ///
    /// # Panics
    /// The length of the `data` must be equal to the number of pixels `width * height`.
    pub fn new_from(width: usize, height: usize, data: impl Into<Box<[Col]>>) -> Self {
        let data = data.into();
        assert_eq!(
            Some(data.len()),
            width.checked_mul(height),
            "number of pixels does not match dimensions {width}x{height}"
        );

        Self { width, height, data }
    }

    /// Creates an image from the image's dimensions, using the given function to calculate pixel values
    pub fn from_fn(width: usize, height: usize, mut func: impl FnMut(usize, usize) -> Col) -> Self {
        let data = (0..width * height)
            .map(|i| {
                let (x, y) = Self::decompress_index_dims(i, width);
                func(x, y)
            })
            .collect::<Vec<_>>();
        Self::new_from(width, height, data)
    }

    /// Total number of pixels, `width * height`
    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn into_data(self) -> Box<[Col]> { self.data }
}

// endregion Constructors

// region Pixel Accessors

impl<Col> Image<Col> {
    fn compress_index(&self, x: usize, y: usize) -> usize { x + (y * self.width) }

    fn decompress_index_dims(n: usize, width: usize) -> (usize, usize) {
        let (y, x) = usize::div_rem(&n, &width);
        (x, y)
    }

    /// Iterates over the rows of the image, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Col]> {
        // `chunks_exact()` can't take zero, but a zero-width image has no pixels anyway
        self.data.chunks_exact(self.width.max(1))
    }

    /// Iterates over the positions and values of the pixels, row by row
    ///
    /// # Returns
    /// Each value returned will be `(x, y, &pixel)`
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, usize, &Col)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(i, px)| {
            let (x, y) = Self::decompress_index_dims(i, width);
            (x, y, px)
        })
    }
}

impl<Col: Send> Image<Col> {
    /// Parallel iterator over mutable rows, paired with the row index (`0` is the top row).
    ///
    /// Each row is a disjoint slice, so rows can be written from different threads without locking.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = (usize, &mut [Col])> {
        let width = self.width.max(1);
        self.data.par_chunks_exact_mut(width).enumerate()
    }
}

impl<Col> Index<(usize, usize)> for Image<Col> {
    type Output = Col;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.width && y < self.height,
            "invalid pixel index ({}, {}) for dims ({},{})",
            x,
            y,
            self.width,
            self.height
        );
        &self.data[self.compress_index(x, y)]
    }
}

impl<Col> IndexMut<(usize, usize)> for Image<Col> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(
            x < self.width && y < self.height,
            "invalid pixel index ({}, {}) for dims ({},{})",
            x,
            y,
            self.width,
            self.height
        );
        let idx = self.compress_index(x, y);
        &mut self.data[idx]
    }
}

// endregion Pixel Accessors

// region Deref

impl<Col> Deref for Image<Col> {
    type Target = [Col];

    fn deref(&self) -> &Self::Target { self.data.deref() }
}
impl<Col> DerefMut for Image<Col> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.data.deref_mut() }
}

// endregion Deref
