/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage, RgbaImage};
use nanorand::{Rng, WyRand};
use rescale_image::filters::resize::ResizeMethod;
use rescale_image::image::Image;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod pipeline;
mod scale;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonResizeMethod {
    Nearest,
    Bilinear,
    Bicubic,
    Gaussian,
    Lanczos3
}

impl JsonResizeMethod {
    pub fn to_resize_method(self) -> ResizeMethod {
        match self {
            Self::Nearest => ResizeMethod::Nearest,
            Self::Bilinear => ResizeMethod::Bilinear,
            Self::Bicubic => ResizeMethod::Bicubic,
            Self::Gaussian => ResizeMethod::Gaussian,
            Self::Lanczos3 => ResizeMethod::Lanczos3
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct ScaleEntry {
    pub name:     String,
    pub width:    u32,
    pub height:   u32,
    pub fx:       f64,
    pub fy:       f64,
    pub method:   JsonResizeMethod,
    /// `None` when the scale must be rejected
    pub expected: Option<[usize; 2]>,
    pub comment:  Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn load_entries(name: &str) -> Vec<ScaleEntry> {
    let json_file = read(sample_path().join(name)).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

/// Deterministic noise, the same seed gives the same image
pub fn noise_rgb(width: u32, height: u32, seed: u64) -> Image {
    let mut rng = WyRand::new_seed(seed);
    let mut pixels = vec![0_u8; width as usize * height as usize * 3];
    rng.fill_bytes(&mut pixels);

    Image::from_dynamic(DynamicImage::ImageRgb8(
        RgbImage::from_raw(width, height, pixels).unwrap()
    ))
}

pub fn noise_rgba(width: u32, height: u32, seed: u64) -> Image {
    let mut rng = WyRand::new_seed(seed);
    let mut pixels = vec![0_u8; width as usize * height as usize * 4];
    rng.fill_bytes(&mut pixels);

    Image::from_dynamic(DynamicImage::ImageRgba8(
        RgbaImage::from_raw(width, height, pixels).unwrap()
    ))
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
