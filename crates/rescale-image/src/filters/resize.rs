/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Resize operations
//!
//! Two flavours exist, mirroring the two ways one usually asks
//! for a new size
//!
//! - [`Resize`]: resize to an explicit width and height
//! - [`Scale`]: resize by a factor along each axis
//!
//! The resampling itself is carried out by the `image` crate's
//! separable filters.
use image::imageops::FilterType;
use log::debug;

use crate::errors::{ImageErrors, ImageOperationsErrors};
use crate::image::Image;
use crate::traits::OperationsTrait;

/// Interpolation used when resampling
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ResizeMethod {
    /// Pick the closest source pixel
    Nearest,
    /// Linear interpolation over a 2x2 neighbourhood
    Bilinear,
    /// Cubic interpolation over a 4x4 neighbourhood
    ///
    /// This is the Catmull-Rom kernel (a = -0.5). OpenCV's `INTER_CUBIC`
    /// uses a = -0.75, so pixel values will not match OpenCV output
    /// exactly, output dimensions do.
    #[default]
    Bicubic,
    /// Gaussian weighted average
    Gaussian,
    /// Lanczos windowed sinc with a radius of 3
    Lanczos3
}

impl ResizeMethod {
    pub const fn to_filter_type(self) -> FilterType {
        match self {
            ResizeMethod::Nearest => FilterType::Nearest,
            ResizeMethod::Bilinear => FilterType::Triangle,
            ResizeMethod::Bicubic => FilterType::CatmullRom,
            ResizeMethod::Gaussian => FilterType::Gaussian,
            ResizeMethod::Lanczos3 => FilterType::Lanczos3
        }
    }
}

/// Resize an image to a new width and height
/// using the resize method specified
#[derive(Copy, Clone, Debug)]
pub struct Resize {
    new_width:  usize,
    new_height: usize,
    method:     ResizeMethod
}

impl Resize {
    /// Create a new resize operation
    ///
    /// # Argument
    /// - new_width: The new image width
    /// - new_height: The new image height.
    /// - method: The resize method to use
    pub fn new(new_width: usize, new_height: usize, method: ResizeMethod) -> Resize {
        Resize {
            new_width,
            new_height,
            method
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.new_width, self.new_height)
    }

    pub const fn method(&self) -> ResizeMethod {
        self.method
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        resize_image(image, self.new_width, self.new_height, self.method)
    }
}

/// Resize an image by a factor along each axis
///
/// The output dimensions are `round(width * fx)` and `round(height * fy)`,
/// with ties going to the even neighbour.
#[derive(Copy, Clone, Debug)]
pub struct Scale {
    fx:     f64,
    fy:     f64,
    method: ResizeMethod
}

impl Scale {
    /// Create a new scale operation
    ///
    /// # Arguments
    /// - fx: Factor along the horizontal axis
    /// - fy: Factor along the vertical axis
    /// - method: The resize method to use
    pub fn new(fx: f64, fy: f64, method: ResizeMethod) -> Scale {
        Scale { fx, fy, method }
    }

    pub const fn factors(&self) -> (f64, f64) {
        (self.fx, self.fy)
    }

    pub const fn method(&self) -> ResizeMethod {
        self.method
    }

    /// Compute the dimensions an image of `width` x `height` will
    /// have after this operation
    ///
    /// # Errors
    /// - Either factor is zero, negative, infinite or NaN
    /// - The result would have a zero width or height
    /// - The result does not fit into 32 bit dimensions
    pub fn target_dimensions(
        &self, width: usize, height: usize
    ) -> Result<(usize, usize), ImageOperationsErrors> {
        check_factor("fx", self.fx)?;
        check_factor("fy", self.fy)?;

        let new_width = (width as f64 * self.fx).round_ties_even();
        let new_height = (height as f64 * self.fy).round_ties_even();

        if new_width < 1.0 || new_height < 1.0 {
            return Err(ImageOperationsErrors::ZeroDimension(
                new_width as usize,
                new_height as usize
            ));
        }
        if new_width > f64::from(u32::MAX) || new_height > f64::from(u32::MAX) {
            return Err(ImageOperationsErrors::DimensionsTooLarge(
                new_width as usize,
                new_height as usize
            ));
        }
        Ok((new_width as usize, new_height as usize))
    }
}

impl Default for Scale {
    /// Double both axes with bicubic interpolation
    fn default() -> Self {
        Scale::new(2.0, 2.0, ResizeMethod::Bicubic)
    }
}

impl OperationsTrait for Scale {
    fn name(&self) -> &'static str {
        "Scale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let (new_width, new_height) = self.target_dimensions(width, height)?;

        debug!(
            "Scaling by fx={} fy={}: {}x{} -> {}x{}",
            self.fx, self.fy, width, height, new_width, new_height
        );
        resize_image(image, new_width, new_height, self.method)
    }
}

fn check_factor(axis: &'static str, factor: f64) -> Result<(), ImageOperationsErrors> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ImageOperationsErrors::InvalidScaleFactor(axis, factor));
    }
    Ok(())
}

fn resize_image(
    image: &mut Image, new_width: usize, new_height: usize, method: ResizeMethod
) -> Result<(), ImageErrors> {
    if new_width == 0 || new_height == 0 {
        return Err(ImageOperationsErrors::ZeroDimension(new_width, new_height).into());
    }
    let width = u32::try_from(new_width)
        .map_err(|_| ImageOperationsErrors::DimensionsTooLarge(new_width, new_height))?;
    let height = u32::try_from(new_height)
        .map_err(|_| ImageOperationsErrors::DimensionsTooLarge(new_width, new_height))?;

    let resized = image
        .inner()
        .resize_exact(width, height, method.to_filter_type());

    image.set_pixels(resized);

    Ok(())
}
