/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rescale_image::filters::resize::{Resize, ResizeMethod, Scale};
use rescale_image::image::Image;
use rescale_image::metadata::ImageMetadata;
use rescale_image::options::DecoderOptions;
use rescale_image::pipelines::Pipeline;

use crate::{hash, noise_rgb, noise_rgba};

/// Write `image` to a png inside `dir` and return its path
fn write_png(dir: &std::path::Path, name: &str, image: &Image) -> std::path::PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

struct FromDisk(std::path::PathBuf);

impl rescale_image::traits::IntoImage for FromDisk {
    fn into_image(self) -> Result<Image, rescale_image::errors::ImageErrors> {
        Image::open(self.0, &DecoderOptions::default())
    }
}

#[test]
fn file_to_file_doubles() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(dir.path(), "shiroha.png", &noise_rgb(21, 13, 5));
    let output = dir.path().join("resized.png");

    let mut pipeline = Pipeline::new();
    pipeline
        .chain_decoder(FromDisk(input))
        .keep_original(true)
        .chain_operations(Box::new(Scale::default()))
        .chain_encoder(&output);

    pipeline.advance_to_end().unwrap();

    assert_eq!(pipeline.originals()[0].dimensions(), (21, 13));

    let written = Image::open(&output, &DecoderOptions::default()).unwrap();
    assert_eq!(written.dimensions(), (42, 26));

    // png is lossless, what was written is what was computed
    assert_eq!(
        hash(written.inner().as_bytes()),
        hash(pipeline.images()[0].inner().as_bytes())
    );
}

#[test]
fn original_is_untouched_by_operations() {
    let source = noise_rgb(9, 9, 21);
    let source_hash = hash(source.inner().as_bytes());

    let mut pipeline = Pipeline::<Image>::new();
    pipeline
        .chain_decoder(source)
        .keep_original(true)
        .chain_operations(Box::new(Resize::new(4, 30, ResizeMethod::Bilinear)));

    pipeline.advance_to_end().unwrap();

    assert_eq!(hash(pipeline.originals()[0].inner().as_bytes()), source_hash);
    assert_eq!(pipeline.images()[0].dimensions(), (4, 30));
}

#[test]
fn jpeg_output_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("resized.jpg");

    let mut pipeline = Pipeline::<Image>::new();
    pipeline
        .chain_image(noise_rgba(6, 4, 8))
        .chain_operations(Box::new(Scale::default()))
        .chain_encoder(&output);

    pipeline.advance_to_end().unwrap();

    let metadata = ImageMetadata::probe(&output, &DecoderOptions::default()).unwrap();

    assert_eq!((metadata.width, metadata.height), (12, 8));
    assert_eq!(metadata.format.as_deref(), Some("Jpeg"));
    assert_eq!(metadata.colorspace, "Rgb8");
}

#[test]
fn decoder_limits_apply_before_scaling() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_png(dir.path(), "wide.png", &noise_rgb(64, 2, 1));

    let options = DecoderOptions::default().set_max_width(32);

    assert!(Image::open(&input, &options).is_err());
    assert!(Image::open(&input, &DecoderOptions::default()).is_ok());
}
