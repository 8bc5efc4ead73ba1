//! Plain-text PPM (`P3`) images.
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <r> <g> <b>
//! ...
//! ```
//!
//! One pixel per line, rows top to bottom, columns left to right.

use crate::core::colour::Rgb8;
use crate::core::image::Image;
use crate::core::targets::OUTPUT;
use crate::core::types::Channel;
use image::codecs::pnm::{PnmDecoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ImageError};
use puffin::profile_function;
use std::io::Write;
use thiserror::Error;
use tracing::trace;

/// Magic token at the start of every ASCII PPM document
pub const PPM_MAGIC: &str = "P3";
/// Only 8-bit channels are written
pub const MAX_CHANNEL_VALUE: Channel = Channel::MAX;

#[derive(Error, Debug)]
pub enum PpmError {
    /// The number of pixels didn't match `width * height`
    #[error("got {actual} pixels, but a {width}x{height} image needs width * height of them")]
    DimensionMismatch { width: usize, height: usize, actual: usize },
    /// The document is a PNM image, but not an ASCII pixmap
    #[error("expected an ascii pixmap ({PPM_MAGIC}), found {subtype}")]
    UnsupportedSubtype { subtype: String },
    #[error("failed decoding ppm document")]
    Decode {
        #[from]
        source: ImageError,
    },
    #[error("failed writing ppm document")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Writes a complete PPM document for the given pixels.
///
/// # Errors
/// [`PpmError::DimensionMismatch`] if `pixels.len() != width * height`; nothing is written in that case.
/// [`PpmError::Io`] if the writer fails.
pub fn write_ppm(mut writer: impl Write, pixels: &[Rgb8], width: usize, height: usize) -> Result<(), PpmError> {
    profile_function!();

    if width.checked_mul(height) != Some(pixels.len()) {
        return Err(PpmError::DimensionMismatch {
            width,
            height,
            actual: pixels.len(),
        });
    }

    trace!(target: OUTPUT, width, height, "writing ppm");
    writeln!(writer, "{PPM_MAGIC}")?;
    writeln!(writer, "{width} {height}")?;
    writeln!(writer, "{MAX_CHANNEL_VALUE}")?;
    for Rgb8([r, g, b]) in pixels {
        writeln!(writer, "{r} {g} {b}")?;
    }
    Ok(())
}

/// Writes an [`Image`] as a PPM document
pub fn write_image(writer: impl Write, img: &Image<Rgb8>) -> Result<(), PpmError> {
    write_ppm(writer, img, img.width(), img.height())
}

/// Encodes the whole document into memory, so it can be written out in one go
pub fn encode_image(img: &Image<Rgb8>) -> Result<Vec<u8>, PpmError> {
    // Each pixel is at most "255 255 255\n"
    let mut buf = Vec::with_capacity(16 + img.len() * 12);
    write_image(&mut buf, img)?;
    Ok(buf)
}

/// A decoded ASCII PPM document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PpmDocument {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgb8>,
}

impl PpmDocument {
    /// Decodes an ASCII (`P3`) PPM document with [`PnmDecoder`]. Other PNM subtypes are rejected.
    pub fn parse(src: &str) -> Result<Self, PpmError> {
        profile_function!();

        let decoder = PnmDecoder::new(src.as_bytes())?;
        match decoder.subtype() {
            PnmSubtype::Pixmap(SampleEncoding::Ascii) => {}
            subtype => {
                return Err(PpmError::UnsupportedSubtype {
                    subtype: format!("{subtype:?}"),
                })
            }
        }

        let rgb = DynamicImage::from_decoder(decoder)?.into_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        let pixels = rgb.pixels().map(|px| Rgb8(px.0)).collect::<Vec<_>>();

        trace!(target: OUTPUT, width, height, "decoded ppm");

        Ok(Self { width, height, pixels })
    }

    /// Converts the document into an image
    pub fn into_image(self) -> Image<Rgb8> { Image::new_from(self.width, self.height, self.pixels) }
}
