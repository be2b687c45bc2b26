/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! Header level information about an image, read without
//! decoding any pixels.
use std::path::Path;

use image::{ImageDecoder, ImageReader};

use crate::errors::ImageErrors;
use crate::options::DecoderOptions;

/// Image metadata
///
/// Each image type has this information present.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct ImageMetadata {
    pub width:      usize,
    pub height:     usize,
    pub colorspace: String,
    pub format:     Option<String>,
    pub file_size:  u64
}

impl ImageMetadata {
    /// Read image headers from a file
    ///
    /// Only the headers are parsed, pixels are never decoded.
    pub fn probe<P: AsRef<Path>>(
        file: P, options: &DecoderOptions
    ) -> Result<ImageMetadata, ImageErrors> {
        let file = file.as_ref();
        let file_size = std::fs::metadata(file)?.len();

        let mut reader = ImageReader::open(file)?.with_guessed_format()?;
        reader.limits(options.to_limits());

        let format = reader.format().map(|x| format!("{x:?}"));
        let decoder = reader.into_decoder()?;
        let (width, height) = decoder.dimensions();

        Ok(ImageMetadata {
            width: width as usize,
            height: height as usize,
            colorspace: format!("{:?}", decoder.color_type()),
            format,
            file_size
        })
    }
}
