use clap::ArgMatches;
use rescale_image::options::DecoderOptions;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(1 << 14);
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(1 << 14);

    DecoderOptions::new()
        .set_max_width(max_width)
        .set_max_height(max_height)
}
