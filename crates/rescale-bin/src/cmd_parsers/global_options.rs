/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use rescale_image::filters::resize::ResizeMethod;
use rescale_image::options::DecoderOptions;

use crate::cmd_args::arg_parsers::{IResizeMethod, ViewMode};
use crate::cmd_args::DEFAULT_INPUT;
use crate::cmd_parsers::get_decoder_options;

/// How the output size is chosen
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ResizeTarget {
    /// Multiply width and height by these factors
    Factors(f64, f64),
    /// Resize to exactly this width and height
    Size(usize, usize)
}

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:           PathBuf,
    pub outputs:         Vec<PathBuf>,
    pub target:          ResizeTarget,
    pub method:          ResizeMethod,
    pub view:            ViewMode,
    pub max_window:      (u32, u32),
    pub decoder_options: DecoderOptions,
    pub probe:           bool,
    pub override_files:  bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            input:           PathBuf::from(DEFAULT_INPUT),
            outputs:         vec![],
            target:          ResizeTarget::Factors(2.0, 2.0),
            method:          ResizeMethod::Bicubic,
            view:            ViewMode::Window,
            max_window:      (1600, 900),
            decoder_options: DecoderOptions::new(),
            probe:           false,
            override_files:  false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(input) = options.get_one::<PathBuf>("in") {
        cmd_options.input = input.clone();
    }
    if let Some(outputs) = options.get_many::<PathBuf>("out") {
        cmd_options.outputs = outputs.cloned().collect();
    }

    if let Some(size) = options.get_many::<usize>("size") {
        let values: Vec<usize> = size.copied().collect();

        if let [width, height] = values[..] {
            info!("Resizing to explicit size {}x{}", width, height);
            cmd_options.target = ResizeTarget::Size(width, height);
        }
    } else {
        let fx = options.get_one::<f64>("fx").copied().unwrap_or(2.0);
        let fy = options.get_one::<f64>("fy").copied().unwrap_or(2.0);

        cmd_options.target = ResizeTarget::Factors(fx, fy);
    }

    if let Some(method) = options.get_one::<IResizeMethod>("interpolation") {
        cmd_options.method = method.to_resize_method();
    }
    if let Some(view) = options.get_one::<ViewMode>("view") {
        cmd_options.view = *view;
    }

    let max_w = options
        .get_one::<u32>("max-window-width")
        .copied()
        .unwrap_or(1600);
    let max_h = options
        .get_one::<u32>("max-window-height")
        .copied()
        .unwrap_or(900);
    cmd_options.max_window = (max_w, max_h);

    cmd_options.decoder_options = get_decoder_options(options);

    cmd_options.probe = options.get_flag("probe");

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Pick the log level from the command line flags
///
/// When several flags are present they are checked in the order
/// debug, trace, warn, info and the first one set wins, so debug
/// takes precedence over trace. Warn is the default.
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
