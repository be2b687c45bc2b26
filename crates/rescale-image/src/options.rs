/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! Limits handed to the decoder before any pixel is read,
//! so that a malicious or corrupt header cannot make us allocate
//! gigabytes of memory.

/// Options passed to the decoder when reading an image
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    max_width:  usize,
    max_height: usize
}

impl DecoderOptions {
    /// Create decoder options with default limits
    pub const fn new() -> DecoderOptions {
        DecoderOptions {
            max_width:  1 << 14,
            max_height: 1 << 14
        }
    }

    /// Get the maximum width of an image the decoder accepts
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get the maximum height of an image the decoder accepts
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Set the maximum width of an image the decoder accepts
    ///
    /// Images wider than this are rejected before decoding
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set the maximum height of an image the decoder accepts
    ///
    /// Images taller than this are rejected before decoding
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Convert to limits understood by the underlying decoders.
    pub(crate) fn to_limits(self) -> image::Limits {
        let mut limits = image::Limits::default();

        limits.max_image_width = Some(u32::try_from(self.max_width).unwrap_or(u32::MAX));
        limits.max_image_height = Some(u32::try_from(self.max_height).unwrap_or(u32::MAX));

        limits
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self::new()
    }
}
