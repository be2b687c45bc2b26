/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use rescale_image::errors::ImageErrors;
use rescale_image::image::Image;
use rescale_image::options::DecoderOptions;
use rescale_image::traits::IntoImage;

/// A file on disk, decoded lazily when the pipeline asks for it
pub struct RescaleFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl RescaleFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> RescaleFile {
        RescaleFile { file_path, options }
    }
}

impl IntoImage for RescaleFile {
    fn into_image(self) -> Result<Image, ImageErrors> {
        Image::open(&self.file_path, &self.options)
    }
}
