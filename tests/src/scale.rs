/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use image::{DynamicImage, Rgba, RgbaImage};
use rescale_image::filters::resize::{ResizeMethod, Scale};
use rescale_image::image::Image;
use rescale_image::traits::OperationsTrait;

use crate::{hash, load_entries, noise_rgb, noise_rgba, ScaleEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_scale_table() {
    let entries = load_entries("scale.json");

    let mut error = false;
    let mut failed: Vec<ScaleEntry> = Vec::new();

    for entry in &entries {
        let mut image = noise_rgb(entry.width, entry.height, 7);
        let scale = Scale::new(entry.fx, entry.fy, entry.method.to_resize_method());

        let result = scale.execute(&mut image);

        let ok = match (entry.expected, result) {
            (Some([w, h]), Ok(())) => image.dimensions() == (w, h),
            (None, Err(_)) => {
                // a failed scale leaves the image alone
                image.dimensions() == (entry.width as usize, entry.height as usize)
            }
            _ => false
        };
        if !ok {
            error = true;
            failed.push(entry.to_owned());

            let err = format!(
                "Mismatch for case {:?}\nExpected {:?} but found {:?}\nConfig:{:#?}",
                entry.name,
                entry.expected,
                image.dimensions(),
                entry
            );
            eprintln!("{}\n", err)
        }
    }
    if error {
        panic!("Errors found during scaling\n {:#?}", failed);
    }
}

#[test]
fn scaling_is_deterministic() {
    let methods = [
        ResizeMethod::Nearest,
        ResizeMethod::Bilinear,
        ResizeMethod::Bicubic,
        ResizeMethod::Gaussian,
        ResizeMethod::Lanczos3
    ];

    for method in methods {
        let mut first = noise_rgb(31, 17, 99);
        let mut second = noise_rgb(31, 17, 99);

        Scale::new(2.0, 2.0, method).execute(&mut first).unwrap();
        Scale::new(2.0, 2.0, method).execute(&mut second).unwrap();

        assert_eq!(
            hash(first.inner().as_bytes()),
            hash(second.inner().as_bytes()),
            "{method:?} is not deterministic"
        );
    }
}

#[test]
fn different_methods_give_different_pixels() {
    let mut nearest = noise_rgb(16, 16, 3);
    let mut bicubic = noise_rgb(16, 16, 3);

    Scale::new(2.0, 2.0, ResizeMethod::Nearest)
        .execute(&mut nearest)
        .unwrap();
    Scale::default().execute(&mut bicubic).unwrap();

    assert_eq!(nearest.dimensions(), bicubic.dimensions());
    assert_ne!(
        hash(nearest.inner().as_bytes()),
        hash(bicubic.inner().as_bytes())
    );
}

#[test]
fn alpha_channel_survives() {
    let mut image = noise_rgba(5, 5, 11);

    Scale::default().execute(&mut image).unwrap();

    assert_eq!(image.dimensions(), (10, 10));
    assert!(image.colorspace().has_alpha());
    assert_eq!(image.to_rgba8().len(), 10 * 10 * 4);
}

#[test]
fn opaque_stays_opaque() {
    let buf = RgbaImage::from_pixel(8, 6, Rgba([12, 200, 40, 255]));
    let mut image = Image::from_dynamic(DynamicImage::ImageRgba8(buf));

    Scale::new(1.5, 2.5, ResizeMethod::Lanczos3)
        .execute(&mut image)
        .unwrap();

    let out = image.inner().to_rgba8();
    assert!(out.pixels().all(|p| p.0[3] == 255));
}
