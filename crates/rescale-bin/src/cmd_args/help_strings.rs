pub static SIZE_HELP: &str = "Resize to an explicit width and height

Takes two values, the width then the height, e.g `--size 640 480`.
When present the --fx and --fy factors are ignored";

pub static INTERPOLATION_HELP: &str = "Interpolation used when resampling

bicubic estimates each new pixel from a 4x4 neighbourhood
using cubic polynomials, bilinear from a 2x2 neighbourhood,
nearest copies the closest source pixel";

pub static VIEW_HELP: &str = "How to show the original and resized images

window opens a single window with both images side by side,
press any key or close it to exit.
external writes both to the temp directory and opens them
in the default image viewer. none shows nothing";
