/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by operations and image sources
use std::time::Instant;

use log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// This encapsulates an image operation.
///
/// All operations that can be stored in a pipeline
/// need to implement this trait.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute a simple operation on the image
    /// manipulating the image struct
    ///
    /// An object should implement this function, but
    /// a caller should call [`execute`], which does some error checking
    /// before calling this method
    ///
    /// [`execute`]: Self::execute
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute an operation
    ///
    /// This does the timing bookkeeping and then delegates
    /// to [`execute_impl`](Self::execute_impl)
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        trace!(
            "Running {} on {}x{} image with colorspace {:?}",
            self.name(),
            width,
            height,
            image.colorspace()
        );
        let start = Instant::now();

        self.execute_impl(image)?;

        trace!(
            "Finished running `{}` in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}

/// Trait that encapsulates supported
/// image sources.
///
/// Anything that can be converted into an [`Image`]
/// can be the decoder of a pipeline.
pub trait IntoImage {
    /// Consumes this and returns an image
    fn into_image(self) -> Result<Image, ImageErrors>;
}

impl IntoImage for Image {
    fn into_image(self) -> Result<Image, ImageErrors> {
        Ok(self)
    }
}

impl IntoImage for image::DynamicImage {
    fn into_image(self) -> Result<Image, ImageErrors> {
        Ok(Image::from_dynamic(self))
    }
}
