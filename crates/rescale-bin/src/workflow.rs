/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, BufRead};
use std::path::Path;

use log::{debug, info};
use rescale_image::errors::ImageErrors;
use rescale_image::filters::resize::{Resize, Scale};
use rescale_image::image::Image;
use rescale_image::pipelines::Pipeline;

use crate::cmd_args::arg_parsers::ViewMode;
use crate::cmd_parsers::global_options::{CmdOptions, ResizeTarget};
use crate::file_io::RescaleFile;
use crate::show_gui::open_in_default_app;
use crate::window::show_images;

pub(crate) fn create_and_exec_workflow_from_cmd(options: &CmdOptions) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    verify_input(&options.input)?;

    for out_file in &options.outputs {
        verify_file_paths(&options.input, out_file, options.override_files, stdin().lock())?;
    }

    let (original, resized) = rescale(options)?;

    present(options, &original, &resized)
}

/// Decode the input, resize it and write every output
///
/// Returns the decoded image and its resized counterpart
pub(crate) fn rescale(options: &CmdOptions) -> Result<(Image, Image), ImageErrors> {
    let mut pipeline = Pipeline::new();

    pipeline
        .chain_decoder(RescaleFile::new(
            options.input.clone(),
            options.decoder_options
        ))
        .keep_original(true);

    match options.target {
        ResizeTarget::Factors(fx, fy) => {
            debug!("Added scale operation fx={} fy={}", fx, fy);
            pipeline.chain_operations(Box::new(Scale::new(fx, fy, options.method)));
        }
        ResizeTarget::Size(width, height) => {
            debug!("Added resize operation {}x{}", width, height);
            pipeline.chain_operations(Box::new(Resize::new(width, height, options.method)));
        }
    }

    for out_file in &options.outputs {
        pipeline.chain_encoder(out_file);
    }

    pipeline.advance_to_end()?;

    let original = pipeline
        .originals()
        .first()
        .cloned()
        .ok_or(ImageErrors::NoImageForOperations)?;

    let resized = pipeline
        .images()
        .first()
        .cloned()
        .ok_or(ImageErrors::NoImageForOperations)?;

    info!(
        "Resized {:?} from {:?} to {:?}",
        options.input,
        original.dimensions(),
        resized.dimensions()
    );

    Ok((original, resized))
}

fn present(options: &CmdOptions, original: &Image, resized: &Image) -> Result<(), ImageErrors> {
    match options.view {
        ViewMode::Window => show_images(
            &[("original", original), ("resized", resized)],
            options.max_window
        ),
        ViewMode::External => {
            for (label, image) in [("original", original), ("resized", resized)] {
                let path = open_in_default_app(image, label)?;
                info!("Showing {} from {:?}", label, path);
            }
            Ok(())
        }
        ViewMode::None => {
            debug!("Display disabled");
            Ok(())
        }
    }
}

fn verify_input(in_path: &Path) -> Result<(), ImageErrors> {
    if !in_path.exists() {
        return Err(ImageErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(ImageErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }
    Ok(())
}

/// Check an input/output pair before anything is written
///
/// An existing output is only replaced when `override_files`
/// is set or the user answers `y` on `answers`.
fn verify_file_paths<R: BufRead>(
    in_path: &Path, out_path: &Path, override_files: bool, mut answers: R
) -> Result<(), ImageErrors> {
    if in_path == out_path {
        return Err(ImageErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            in_path
        )));
    }

    if out_path.exists() {
        // catches `..`, relative against absolute and symlinks
        if same_file(in_path, out_path)? {
            return Err(ImageErrors::GenericString(format!(
                "Cannot use {:?} as both input and output, it is the same file as {:?}",
                out_path, in_path
            )));
        }
        if override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {:?} exists, overwrite [y/N]", out_path);
            let mut result = String::new();

            answers.read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(ImageErrors::GenericString(format!(
                    "Not overwriting file {:?}",
                    out_path
                )));
            }
        }
    }
    Ok(())
}

fn same_file(in_path: &Path, out_path: &Path) -> Result<bool, ImageErrors> {
    let in_path = std::fs::canonicalize(in_path)?;
    let out_path = std::fs::canonicalize(out_path)?;

    Ok(in_path == out_path)
}
