/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{IResizeMethod, ViewMode};
use crate::cmd_args::help_strings::{INTERPOLATION_HELP, SIZE_HELP, VIEW_HELP};

pub mod arg_parsers;
pub mod help_strings;

/// Image read when no input is given
pub const DEFAULT_INPUT: &str = "shiroha.png";

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("rescale")
        .about("Upscale an image and show it next to the original")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .value_parser(value_parser!(std::path::PathBuf))
            .default_value(DEFAULT_INPUT))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Also write the resized image to this file")
            .long_help("Also write the resized image to this file.\nThe format is taken from the extension, may be given more than once")
            .value_parser(value_parser!(std::path::PathBuf))
            .action(ArgAction::Append))
        .arg(Arg::new("fx")
            .long("fx")
            .help_heading("RESIZE")
            .help("Scale factor along the horizontal axis")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .default_value("2"))
        .arg(Arg::new("fy")
            .long("fy")
            .help_heading("RESIZE")
            .help("Scale factor along the vertical axis")
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .default_value("2"))
        .arg(Arg::new("size")
            .short('s')
            .long("size")
            .help_heading("RESIZE")
            .help("Resize to an explicit width and height, overrides --fx and --fy")
            .long_help(SIZE_HELP)
            .num_args(2)
            .value_names(["width", "height"])
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("interpolation")
            .short('m')
            .long("interpolation")
            .help_heading("RESIZE")
            .help("Interpolation used when resampling")
            .long_help(INTERPOLATION_HELP)
            .value_parser(value_parser!(IResizeMethod))
            .default_value("bicubic"))
        .arg(Arg::new("view")
            .long("view")
            .help_heading("DISPLAY")
            .help("How to show the original and resized images")
            .long_help(VIEW_HELP)
            .value_parser(value_parser!(ViewMode))
            .default_value("window"))
        .arg(Arg::new("max-window-width")
            .long("max-window-width")
            .help_heading("DISPLAY")
            .help("Widest the preview window may get, images are scaled down to fit")
            .value_parser(value_parser!(u32).range(1..))
            .default_value("1600"))
        .arg(Arg::new("max-window-height")
            .long("max-window-height")
            .help_heading("DISPLAY")
            .help("Tallest the preview window may get, images are scaled down to fit")
            .value_parser(value_parser!(u32).range(1..))
            .default_value("900"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image metadata as JSON and exit"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files without asking"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an image the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an image the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::cmd_args::arg_parsers::{IResizeMethod, ViewMode};
    use crate::cmd_args::{create_cmd_args, DEFAULT_INPUT};

    #[test]
    fn command_is_well_formed() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn defaults_double_with_bicubic() {
        let matches = create_cmd_args().try_get_matches_from(["rescale"]).unwrap();

        assert_eq!(
            matches.get_one::<PathBuf>("in").unwrap(),
            &PathBuf::from(DEFAULT_INPUT)
        );
        assert_eq!(*matches.get_one::<f64>("fx").unwrap(), 2.0);
        assert_eq!(*matches.get_one::<f64>("fy").unwrap(), 2.0);
        assert!(matches!(
            matches.get_one::<IResizeMethod>("interpolation").unwrap(),
            IResizeMethod::Bicubic
        ));
        assert_eq!(*matches.get_one::<ViewMode>("view").unwrap(), ViewMode::Window);
        assert!(matches.get_many::<usize>("size").is_none());
    }

    #[test]
    fn size_takes_two_values() {
        let matches = create_cmd_args()
            .try_get_matches_from(["rescale", "--size", "640", "480"])
            .unwrap();

        let values: Vec<usize> = matches.get_many::<usize>("size").unwrap().copied().collect();
        assert_eq!(values, [640, 480]);

        assert!(create_cmd_args()
            .try_get_matches_from(["rescale", "--size", "640"])
            .is_err());
    }

    #[test]
    fn unknown_interpolation_is_rejected() {
        assert!(create_cmd_args()
            .try_get_matches_from(["rescale", "-m", "sharpest"])
            .is_err());
    }

    #[test]
    fn outputs_accumulate() {
        let matches = create_cmd_args()
            .try_get_matches_from(["rescale", "-o", "a.png", "-o", "b.jpg"])
            .unwrap();

        let outs: Vec<&PathBuf> = matches.get_many::<PathBuf>("out").unwrap().collect();
        assert_eq!(outs.len(), 2);
    }
}
