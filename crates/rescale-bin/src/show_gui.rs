/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::env::temp_dir;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use log::{debug, trace};
use rescale_image::errors::ImageErrors;
use rescale_image::image::Image;

/// Where a preview of `label` is written before handing it to the viewer
pub fn preview_path(label: &str) -> PathBuf {
    let time = std::time::SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|x| x.as_secs())
        .unwrap_or_default();

    let mut path = temp_dir();
    path.push(format!("rescale-{label}-{time}.png"));
    path
}

/// Write the image to a temporary png and open it with the
/// platform's default image viewer.
///
/// Returns the path of the written file.
pub fn open_in_default_app(image: &Image, label: &str) -> Result<PathBuf, ImageErrors> {
    let path = preview_path(label);

    image.save(&path)?;
    trace!("Wrote preview {:?}", path);

    spawn_viewer(&path)?;
    debug!("Opened {:?} in default app", path);

    Ok(path)
}

#[cfg(target_os = "linux")]
fn spawn_viewer(path: &Path) -> Result<(), ImageErrors> {
    std::process::Command::new("xdg-open").arg(path).spawn()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn spawn_viewer(path: &Path) -> Result<(), ImageErrors> {
    std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn spawn_viewer(path: &Path) -> Result<(), ImageErrors> {
    std::process::Command::new("open").arg(path).spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
fn spawn_viewer(path: &Path) -> Result<(), ImageErrors> {
    Err(ImageErrors::GenericString(format!(
        "No default viewer known for this platform, preview written to {path:?}"
    )))
}
