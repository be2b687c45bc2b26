/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rescale_benches::noise_image;
use rescale_image::filters::resize::{ResizeMethod, Scale};
use rescale_image::image::Image;
use rescale_image::traits::OperationsTrait;

fn scale_bench(input: &Image, fx: f64, fy: f64, method: ResizeMethod) {
    let mut im = input.clone();
    Scale::new(fx, fy, method).execute(&mut im).unwrap();
    black_box(im);
}

fn bench_inner(c: &mut Criterion, name: &str, fx: f64, fy: f64) {
    let input = noise_image(800, 600);
    let (w, h) = input.dimensions();

    let mut group = c.benchmark_group(name);

    group.throughput(Throughput::Bytes((w * h * 3) as u64));

    for (label, method) in [
        ("nearest", ResizeMethod::Nearest),
        ("bilinear", ResizeMethod::Bilinear),
        ("bicubic", ResizeMethod::Bicubic),
        ("gaussian", ResizeMethod::Gaussian),
        ("lanczos3", ResizeMethod::Lanczos3)
    ] {
        group.bench_function(label, |b| b.iter(|| scale_bench(&input, fx, fy, method)));
    }
}

fn bench_upscale(c: &mut Criterion) {
    bench_inner(c, "scale: 2x upscale", 2.0, 2.0);
}

fn bench_downscale(c: &mut Criterion) {
    bench_inner(c, "scale: 0.5x downscale", 0.5, 0.5);
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_upscale,bench_downscale);

criterion_main!(benches);
