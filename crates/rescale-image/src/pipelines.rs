/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pipelines, image processing support
//!
//! A pipeline drives an image through decode, operations and encode,
//! one state at a time.
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, trace};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{IntoImage, OperationsTrait};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum PipelineState {
    /// Initial state, the struct has been defined
    Initialized,
    /// The pipeline is ready to carry out image decoding
    Decode,
    /// The pipeline is ready to carry out image processing routines
    Operations,
    /// The pipeline is ready to carry out image encoding
    Encode,
    /// The pipeline is done.
    Finished
}

impl PipelineState {
    pub fn next(self) -> Option<Self> {
        match self {
            PipelineState::Initialized => Some(PipelineState::Decode),
            PipelineState::Decode => Some(PipelineState::Operations),
            PipelineState::Operations => Some(PipelineState::Encode),
            PipelineState::Encode => Some(PipelineState::Finished),
            PipelineState::Finished => None
        }
    }
}

/// Pipeline, image processing
///
/// A pipeline accepts anything that implements [IntoImage](crate::traits::IntoImage),
/// applies every chained operation to the image in the order they were added,
/// and finally writes the result to every chained output path.
///
/// It owns the images for the duration of its lifetime, but can return references to them
/// via [`images`](crate::pipelines::Pipeline::images) and
/// [`images_mut`](crate::pipelines::Pipeline::images_mut).
///
/// When [`keep_original`](crate::pipelines::Pipeline::keep_original) is set, a copy
/// of each image is taken right before the operations run and is available through
/// [`originals`](crate::pipelines::Pipeline::originals).
pub struct Pipeline<T: IntoImage> {
    state:         Option<PipelineState>,
    decode:        Option<T>,
    image:         Vec<Image>,
    originals:     Vec<Image>,
    keep_original: bool,
    operations:    Vec<Box<dyn OperationsTrait>>,
    encode:        Vec<PathBuf>
}

impl<T> Pipeline<T>
where
    T: IntoImage
{
    /// Create a new pipeline
    #[allow(clippy::new_without_default)]
    pub fn new() -> Pipeline<T> {
        Pipeline {
            state:         Some(PipelineState::Initialized),
            decode:        None,
            image:         vec![],
            originals:     vec![],
            keep_original: false,
            operations:    vec![],
            encode:        vec![]
        }
    }

    /// Add an image to this chain.
    pub fn chain_image(&mut self, image: Image) -> &mut Pipeline<T> {
        self.image.push(image);
        self
    }

    /// Override the decoder present in the pipeline with a different
    /// decoder.
    ///
    /// There can only be one decoder in a pipeline, so the last decoder
    /// is the one that will be considered.
    pub fn chain_decoder(&mut self, decoder: T) -> &mut Pipeline<T> {
        self.decode = Some(decoder);
        self
    }

    /// Add a new operation to the pipeline.
    ///
    /// Operations run in the order they were added.
    ///
    /// # Example
    /// ```no_run
    /// use rescale_image::filters::resize::Scale;
    /// use rescale_image::image::Image;
    /// use rescale_image::pipelines::Pipeline;
    ///
    /// let mut pipeline = Pipeline::<Image>::new();
    /// pipeline
    ///     .chain_operations(Box::new(Scale::default()))
    ///     .chain_encoder("resized.png");
    /// ```
    pub fn chain_operations(&mut self, operations: Box<dyn OperationsTrait>) -> &mut Pipeline<T> {
        self.operations.push(operations);
        self
    }

    /// Add an output path, the encoder is chosen from its extension
    pub fn chain_encoder<P: AsRef<Path>>(&mut self, path: P) -> &mut Pipeline<T> {
        self.encode.push(path.as_ref().to_path_buf());
        self
    }

    /// Retain a copy of each image as it was before any operation ran
    pub fn keep_original(&mut self, keep: bool) -> &mut Pipeline<T> {
        self.keep_original = keep;
        self
    }

    pub fn images(&self) -> &[Image] {
        self.image.as_ref()
    }

    /// Return all images in the pipeline as mutable references
    pub fn images_mut(&mut self) -> &mut [Image] {
        self.image.as_mut()
    }

    /// Images as they were before operations ran
    ///
    /// Empty unless [`keep_original`](Self::keep_original) was set
    pub fn originals(&self) -> &[Image] {
        self.originals.as_ref()
    }

    /// Whether every state has been run
    pub fn is_finished(&self) -> bool {
        self.state.is_none()
    }

    /// Advance the pipeline one state forward
    ///
    /// The pipeline advance is as follows
    ///
    /// 1. Decode
    /// 2. One or more operations [ all ran at once]
    /// 3. One or more encodes [all ran at once]
    /// 4. Finish
    ///
    /// Calling `Pipeline::advance()` will run one of this operation
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        trace!("Current state: {:?}", state);

        match state {
            PipelineState::Decode => {
                match self.decode.take() {
                    Some(decode_op) => {
                        let start = Instant::now();

                        let img = decode_op.into_image()?;
                        self.image.push(img);

                        trace!("Finished decoding in {} ms", start.elapsed().as_millis());
                    }
                    None => {
                        if self.image.is_empty() {
                            return Err(ImageErrors::NoImageForOperations);
                        }
                        // we have an image, no need to decode a new one
                        trace!("Image already present, no need to decode");
                    }
                }
            }
            PipelineState::Operations => {
                if self.image.is_empty() {
                    return Err(ImageErrors::NoImageForOperations);
                }
                if self.keep_original {
                    self.originals = self.image.clone();
                }
                for image in self.image.iter_mut() {
                    for operation in &self.operations {
                        operation.execute(image)?;
                    }
                }
            }
            PipelineState::Encode => {
                if !self.encode.is_empty() && self.image.is_empty() {
                    return Err(ImageErrors::NoImageForEncoding);
                }
                let single = self.image.len() == 1;

                for path in &self.encode {
                    for (pos, image) in self.image.iter().enumerate() {
                        let out = if single {
                            path.clone()
                        } else {
                            indexed_path(path, pos)
                        };
                        let start = Instant::now();

                        image.save(&out)?;

                        debug!("Wrote {:?} in {} ms", out, start.elapsed().as_millis());
                    }
                }
            }
            PipelineState::Initialized | PipelineState::Finished => {}
        }
        self.state = state.next();

        Ok(())
    }

    /// Advance the operations in this pipeline up until
    /// we finish.
    ///
    /// This will run a decoder, all operations and all encoders
    /// for this particular pipeline
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}

/// `out.png` with index 2 becomes `out-2.png`
fn indexed_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|x| x.to_string_lossy().to_string())
        .unwrap_or_default();

    let name = match path.extension() {
        Some(ext) => format!("{stem}-{index}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{index}")
    };
    path.with_file_name(name)
}
