/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Main image container
//!
//! An [`Image`] owns a single decoded raster.
//! Pixel storage, channel layout and codecs are handled by the
//! [image](https://crates.io/crates/image) crate, this type adds the
//! bookkeeping the rest of the crate needs (decoder limits, the
//! format an image came from, encoder selection from a path).
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use log::{debug, trace};

use crate::errors::ImageErrors;
use crate::options::DecoderOptions;

/// Represents a single decoded image
#[derive(Clone, Debug)]
pub struct Image {
    pixels: DynamicImage,
    format: Option<ImageFormat>
}

impl Image {
    /// Create an image from an already decoded raster
    pub fn from_dynamic(pixels: DynamicImage) -> Image {
        Image {
            pixels,
            format: None
        }
    }

    /// Open an image from a path, guessing the format from its contents
    ///
    /// # Arguments
    /// - file: The file to open
    /// - options: Limits the decoder should enforce
    ///
    /// # Returns
    /// The decoded image or an error if the file could not be read,
    /// the format is unknown, or the image exceeds the configured limits
    pub fn open<P: AsRef<Path>>(file: P, options: &DecoderOptions) -> Result<Image, ImageErrors> {
        let file = file.as_ref();

        let mut reader = ImageReader::open(file)?.with_guessed_format()?;
        reader.limits(options.to_limits());

        let format = reader.format();
        debug!("Guessed format {:?} for {:?}", format, file);

        let pixels = reader.decode()?;

        trace!(
            "Decoded {}x{} image with colorspace {:?}",
            pixels.width(),
            pixels.height(),
            pixels.color()
        );

        Ok(Image { pixels, format })
    }

    /// Get image dimensions as a tuple of (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.pixels.width() as usize, self.pixels.height() as usize)
    }

    /// Return the colorspace (channel layout and depth) of the image
    pub fn colorspace(&self) -> ColorType {
        self.pixels.color()
    }

    /// The container format this image was decoded from, if it came from a file
    pub const fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Return a copy of the pixels as interleaved 8 bit RGBA
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.to_rgba8().into_raw()
    }

    pub fn inner(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn into_inner(self) -> DynamicImage {
        self.pixels
    }

    /// Replace the pixels of this image, keeping the format it was decoded from
    pub(crate) fn set_pixels(&mut self, pixels: DynamicImage) {
        self.pixels = pixels;
    }

    /// Save the image to a path
    ///
    /// The encoder is chosen from the file extension, an extension we
    /// cannot map to an encoder is an error.
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<(), ImageErrors> {
        let file = file.as_ref();

        let format = ImageFormat::from_path(file)
            .map_err(|_| ImageErrors::UnsupportedOutputFormat(file.to_path_buf()))?;

        if !format.writing_enabled() {
            return Err(ImageErrors::UnsupportedOutputFormat(file.to_path_buf()));
        }
        debug!("Encoding {:?} as {:?}", file, format);

        // jpeg has no alpha channel
        if format == ImageFormat::Jpeg && self.colorspace().has_alpha() {
            trace!("Dropping alpha channel before jpeg encoding");
            return Ok(DynamicImage::ImageRgb8(self.pixels.to_rgb8()).save_with_format(file, format)?);
        }
        self.pixels.save_with_format(file, format)?;

        Ok(())
    }
}

impl From<DynamicImage> for Image {
    fn from(value: DynamicImage) -> Self {
        Image::from_dynamic(value)
    }
}
