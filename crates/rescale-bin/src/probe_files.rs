/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rescale_image::errors::ImageErrors;
use rescale_image::metadata::ImageMetadata;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::serde::Metadata;

/// Probe the input file, extract metadata, and render it as pretty JSON.
pub fn probe_input_file(options: &CmdOptions) -> Result<String, ImageErrors> {
    let metadata = ImageMetadata::probe(&options.input, &options.decoder_options)?;
    let real_metadata = Metadata::new(options.input.clone().into_os_string(), &metadata);

    serde_json::to_string_pretty(&real_metadata).map_err(|x| ImageErrors::GenericString(x.to_string()))
}
