/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use rescale_image::filters::resize::ResizeMethod;

#[derive(Copy, Clone, Debug)]
pub enum IResizeMethod {
    Nearest,
    Bilinear,
    Bicubic,
    Gaussian,
    Lanczos3
}

impl IResizeMethod {
    pub const fn to_resize_method(self) -> ResizeMethod {
        match self {
            IResizeMethod::Nearest => ResizeMethod::Nearest,
            IResizeMethod::Bilinear => ResizeMethod::Bilinear,
            IResizeMethod::Bicubic => ResizeMethod::Bicubic,
            IResizeMethod::Gaussian => ResizeMethod::Gaussian,
            IResizeMethod::Lanczos3 => ResizeMethod::Lanczos3
        }
    }
}

impl ValueEnum for IResizeMethod {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Nearest,
            Self::Bilinear,
            Self::Bicubic,
            Self::Gaussian,
            Self::Lanczos3
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Nearest => PossibleValue::new("nearest"),
            Self::Bilinear => PossibleValue::new("bilinear").alias("linear"),
            Self::Bicubic => PossibleValue::new("bicubic").alias("cubic"),
            Self::Gaussian => PossibleValue::new("gaussian"),
            Self::Lanczos3 => PossibleValue::new("lanczos3").alias("lanczos")
        })
    }
}

impl std::str::FromStr for IResizeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| format!("Invalid variant: {s}"))
    }
}

/// Where the original and resized images end up after processing
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ViewMode {
    /// A window with both images, closed by any key
    Window,
    /// The platform's default image viewer
    External,
    /// Nothing is shown
    None
}

impl ValueEnum for ViewMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Window, Self::External, Self::None]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Window => PossibleValue::new("window"),
            Self::External => PossibleValue::new("external"),
            Self::None => PossibleValue::new("none")
        })
    }
}

#[cfg(test)]
mod tests {
    use rescale_image::filters::resize::ResizeMethod;

    use crate::cmd_args::arg_parsers::IResizeMethod;

    #[test]
    fn aliases_resolve() {
        let cubic: IResizeMethod = "cubic".parse().unwrap();
        let linear: IResizeMethod = "LINEAR".parse().unwrap();

        assert_eq!(cubic.to_resize_method(), ResizeMethod::Bicubic);
        assert_eq!(linear.to_resize_method(), ResizeMethod::Bilinear);
        assert!("area".parse::<IResizeMethod>().is_err());
    }
}
