/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Image container, resize operations and a processing pipeline
//!
//! This crate ties together decoding, resampling and encoding for the
//! `rescale` tool.
//! Codecs and the resampling kernels come from the
//! [image](https://crates.io/crates/image) crate, what lives here is
//! the glue: decoder limits, target size arithmetic, operations that
//! can be chained and a pipeline that runs them.
//!
//! # Example
//! Double an image with bicubic interpolation
//!
//! ```no_run
//! use rescale_image::errors::ImageErrors;
//! use rescale_image::filters::resize::Scale;
//! use rescale_image::image::Image;
//! use rescale_image::options::DecoderOptions;
//! use rescale_image::traits::OperationsTrait;
//!
//! fn main() -> Result<(), ImageErrors> {
//!     let mut image = Image::open("shiroha.png", &DecoderOptions::default())?;
//!     Scale::default().execute(&mut image)?;
//!     image.save("shiroha-2x.png")?;
//!     Ok(())
//! }
//! ```

pub use ::image::{ColorType, DynamicImage, ImageFormat};

pub mod errors;
pub mod filters;
pub mod image;
pub mod metadata;
pub mod options;
pub mod pipelines;
pub mod traits;
