/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Preview window
//!
//! Shows a row of captioned images in a single window and
//! blocks until a key is pressed or the window is closed.
use log::{debug, info, trace};
use macroquad::prelude::{
    clear_background, draw_text, draw_texture_ex, get_last_key_pressed, next_frame, vec2, Conf,
    DrawTextureParams, FilterMode, Texture2D, DARKGRAY, WHITE
};
use rescale_image::errors::ImageErrors;
use rescale_image::filters::resize::{Resize, ResizeMethod};
use rescale_image::image::Image;
use rescale_image::traits::OperationsTrait;

/// Space between panes and around the border
const GAP: f32 = 10.0;
/// Height reserved above the panes for captions
const CAPTION_HEIGHT: f32 = 24.0;
const FONT_SIZE: f32 = 20.0;

/// Largest texture side uploaded, within what every GPU accepts
const MAX_TEXTURE_SIDE: u32 = 8192;

/// A captioned image ready to be uploaded as a texture
///
/// The pixels are downsampled to the size the pane is drawn at,
/// so the texture never exceeds the window.
pub struct Pane {
    label:   String,
    width:   u16,
    height:  u16,
    /// Size the pane is drawn at, in window pixels
    display: (f32, f32),
    rgba:    Vec<u8>
}

impl Pane {
    /// Convert an image to a pane drawn at `scale` times its size
    pub fn fit(label: &str, image: &Image, scale: f32) -> Result<Pane, ImageErrors> {
        let (width, height) = image.dimensions();
        let display = (width as f32 * scale, height as f32 * scale);

        let tex_width = texture_side(display.0);
        let tex_height = texture_side(display.1);

        let rgba = if (tex_width, tex_height) == (width, height) {
            image.to_rgba8()
        } else {
            trace!(
                "Downsampling `{}` from {}x{} to {}x{} for display",
                label,
                width,
                height,
                tex_width,
                tex_height
            );
            let mut scaled = image.clone();
            Resize::new(tex_width, tex_height, ResizeMethod::Bilinear).execute(&mut scaled)?;
            scaled.to_rgba8()
        };

        Ok(Pane {
            label: label.to_string(),
            // bounded by MAX_TEXTURE_SIDE
            width: tex_width as u16,
            height: tex_height as u16,
            display,
            rgba
        })
    }

    /// Texture dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (u32::from(self.width), u32::from(self.height))
    }
}

fn texture_side(display: f32) -> usize {
    (display.round() as u32).clamp(1, MAX_TEXTURE_SIDE) as usize
}

/// Placement of panes inside the window
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Uniform factor applied to every pane, never above 1
    pub scale:   f32,
    pub window:  (u32, u32),
    /// Top left corner of each pane
    pub origins: Vec<(f32, f32)>
}

impl Layout {
    /// Lay panes of the given sizes out left to right, shrinking
    /// them uniformly until the window fits in `max_window`.
    pub fn compute(sizes: &[(u32, u32)], max_window: (u32, u32)) -> Layout {
        let gaps = GAP * (sizes.len() as f32 + 1.0);

        let content_width: f32 = sizes.iter().map(|(w, _)| *w as f32).sum();
        let content_height = sizes.iter().map(|(_, h)| *h as f32).fold(0.0, f32::max);

        let avail_width = (max_window.0 as f32 - gaps).max(1.0);
        let avail_height = (max_window.1 as f32 - CAPTION_HEIGHT - 2.0 * GAP).max(1.0);

        let mut scale: f32 = 1.0;

        if content_width > 0.0 {
            scale = scale.min(avail_width / content_width);
        }
        if content_height > 0.0 {
            scale = scale.min(avail_height / content_height);
        }

        let mut origins = Vec::with_capacity(sizes.len());
        let mut x = GAP;

        for (w, _) in sizes {
            origins.push((x, CAPTION_HEIGHT + GAP));
            x += *w as f32 * scale + GAP;
        }

        let window = (
            (content_width * scale + gaps).round() as u32,
            (content_height * scale + CAPTION_HEIGHT + 2.0 * GAP).round() as u32
        );

        Layout {
            scale,
            window,
            origins
        }
    }
}

/// Open a window with every image side by side and wait
/// for a key press.
///
/// This runs the windowing event loop on the calling thread
/// and only returns once the window is gone.
pub fn show_images(images: &[(&str, &Image)], max_window: (u32, u32)) -> Result<(), ImageErrors> {
    if images.is_empty() {
        return Ok(());
    }
    let sizes: Vec<(u32, u32)> = images
        .iter()
        .map(|(_, image)| {
            let (w, h) = image.dimensions();
            (w as u32, h as u32)
        })
        .collect();
    let layout = Layout::compute(&sizes, max_window);

    debug!(
        "Window {}x{}, panes scaled by {:.3}",
        layout.window.0, layout.window.1, layout.scale
    );

    let panes = images
        .iter()
        .map(|(label, image)| Pane::fit(label, image, layout.scale))
        .collect::<Result<Vec<Pane>, ImageErrors>>()?;

    let title = panes
        .iter()
        .map(|x| x.label.as_str())
        .collect::<Vec<&str>>()
        .join(" | ");

    let conf = Conf {
        window_title: title,
        window_width: i32::try_from(layout.window.0).unwrap_or(i32::MAX),
        window_height: i32::try_from(layout.window.1).unwrap_or(i32::MAX),
        high_dpi: false,
        window_resizable: false,
        ..Default::default()
    };

    info!("Press any key to close the window");
    macroquad::Window::from_config(conf, present(panes, layout));

    Ok(())
}

async fn present(panes: Vec<Pane>, layout: Layout) {
    // textures already match their drawn size
    let filter = FilterMode::Nearest;

    let textures: Vec<Texture2D> = panes
        .iter()
        .map(|pane| {
            let texture = Texture2D::from_rgba8(pane.width, pane.height, &pane.rgba);
            texture.set_filter(filter);
            texture
        })
        .collect();

    loop {
        clear_background(DARKGRAY);

        for ((pane, texture), (x, y)) in panes.iter().zip(&textures).zip(&layout.origins) {
            let dest = vec2(pane.display.0, pane.display.1);
            draw_texture_ex(
                texture,
                *x,
                *y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(dest),
                    ..Default::default()
                }
            );
            draw_text(&pane.label, *x, CAPTION_HEIGHT, FONT_SIZE, WHITE);
        }

        if let Some(key) = get_last_key_pressed() {
            debug!("Key {:?} pressed, closing window", key);
            break;
        }
        next_frame().await;
    }
}
