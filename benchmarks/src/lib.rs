/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use rescale_image::image::Image;
use rescale_image::DynamicImage;

/// An rgb image filled with noise, used as the benchmark input
///
/// Noise keeps the resamplers from hitting any flat-area shortcuts
pub fn noise_image(width: u32, height: u32) -> Image {
    let mut rng = WyRand::new_seed(0x5eed);
    let mut image = DynamicImage::new_rgb8(width, height);

    if let Some(pixels) = image.as_mut_rgb8() {
        rng.fill_bytes(&mut **pixels);
    }
    Image::from_dynamic(image)
}
