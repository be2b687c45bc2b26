/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    /// Reading or writing to the filesystem failed
    IoErrors(std::io::Error),
    /// The decoder could not turn the bytes into pixels
    ImageDecodeErrors(image::ImageError),
    /// The encoder could not write pixels out
    EncodeErrors(image::ImageError),
    /// An operation was given parameters it cannot work with
    OperationsError(ImageOperationsErrors),
    /// A pipeline reached the operations stage without an image
    NoImageForOperations,
    /// A pipeline reached the encode stage without an image
    NoImageForEncoding,
    /// The output path does not name a format we can encode to
    UnsupportedOutputFormat(PathBuf),
    GenericString(String),
    GenericStr(&'static str)
}

/// Errors that may occur during image operations
pub enum ImageOperationsErrors {
    /// A scale factor was zero, negative or not a finite number
    InvalidScaleFactor(&'static str, f64),
    /// The requested output has a zero width or height
    ZeroDimension(usize, usize),
    /// The requested output does not fit the library's `u32` dimensions
    DimensionsTooLarge(usize, usize)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => {
                writeln!(f, "Io error, {err}")
            }
            Self::ImageDecodeErrors(err) => {
                writeln!(f, "Decoding failed: {err}")
            }
            Self::EncodeErrors(err) => {
                writeln!(f, "Encoding failed: {err}")
            }
            Self::OperationsError(err) => {
                writeln!(f, "{err:?}")
            }
            Self::NoImageForOperations => {
                writeln!(f, "No image found for which we can execute operations")
            }
            Self::NoImageForEncoding => {
                writeln!(f, "No image found for which we can encode")
            }
            Self::UnsupportedOutputFormat(path) => {
                writeln!(f, "Cannot determine an output format from {path:?}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Debug for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScaleFactor(axis, factor) => {
                writeln!(
                    f,
                    "Scale factor {axis}={factor} is invalid, factors must be finite and greater than zero"
                )
            }
            Self::ZeroDimension(width, height) => {
                writeln!(
                    f,
                    "Output dimensions {width}x{height} would be empty, width and height must be at least 1"
                )
            }
            Self::DimensionsTooLarge(width, height) => {
                writeln!(f, "Output dimensions {width}x{height} are too large")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

impl std::error::Error for ImageOperationsErrors {}

impl From<std::io::Error> for ImageErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<image::ImageError> for ImageErrors {
    fn from(value: image::ImageError) -> Self {
        match value {
            image::ImageError::IoError(err) => Self::IoErrors(err),
            image::ImageError::Encoding(_) => Self::EncodeErrors(value),
            _ => Self::ImageDecodeErrors(value)
        }
    }
}

impl From<ImageOperationsErrors> for ImageErrors {
    fn from(value: ImageOperationsErrors) -> Self {
        Self::OperationsError(value)
    }
}

impl From<String> for ImageErrors {
    fn from(value: String) -> Self {
        Self::GenericString(value)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(value: &'static str) -> Self {
        Self::GenericStr(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ImageErrors, ImageOperationsErrors};

    #[test]
    fn conversions_pick_the_right_variant() {
        let from_str: ImageErrors = "no frames".into();
        let from_string: ImageErrors = String::from("bad header").into();
        let from_io: ImageErrors = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        let from_op: ImageErrors = ImageOperationsErrors::ZeroDimension(0, 3).into();

        assert!(matches!(from_str, ImageErrors::GenericStr("no frames")));
        assert!(matches!(from_string, ImageErrors::GenericString(_)));
        assert!(matches!(from_io, ImageErrors::IoErrors(_)));
        assert!(matches!(
            from_op,
            ImageErrors::OperationsError(ImageOperationsErrors::ZeroDimension(0, 3))
        ));
    }

    #[test]
    fn messages_carry_the_details() {
        assert_eq!(ImageErrors::GenericStr("no frames").to_string().trim(), "no frames");

        let message = ImageOperationsErrors::InvalidScaleFactor("fy", -1.0).to_string();
        assert!(message.contains("fy=-1"));
    }
}
