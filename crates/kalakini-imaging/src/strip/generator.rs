// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photo strip generator: three photos, each letterboxed into its own cell,
// stacked top to bottom with separator bands and an outer frame.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::{debug, info, instrument};

use kalakini_core::config::StripLayout;
use kalakini_core::error::Result;
use kalakini_core::types::{Color, FilterKind};

use crate::filters::apply_strip_filter;
use crate::photo::processor::{PhotoProcessor, save_rgb};

/// Builds booth strips according to a [`StripLayout`].
///
/// ```ignore
/// let written = StripGenerator::default().generate(
///     &["a.jpg", "b.jpg", "c.jpg"],
///     "strip.jpg",
///     FilterKind::Vintage,
/// )?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct StripGenerator {
    layout: StripLayout,
}

impl StripGenerator {
    /// Create a generator for a custom layout, rejecting layouts that cannot be
    /// drawn.
    pub fn new(layout: StripLayout) -> Result<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    /// Load three photos, compose them into a strip, and save it.
    ///
    /// If `output` is an existing directory the strip is written inside it
    /// under a timestamped name. Returns the path actually written.
    #[instrument(skip_all, fields(filter = %kind, output = %output.as_ref().display()))]
    pub fn generate<P: AsRef<Path>>(
        &self,
        photos: &[P; 3],
        output: impl AsRef<Path>,
        kind: FilterKind,
    ) -> Result<PathBuf> {
        let [first, second, third] = photos;
        // All three must load before anything is written.
        let loaded = [
            PhotoProcessor::open(first)?.into_rgb(),
            PhotoProcessor::open(second)?.into_rgb(),
            PhotoProcessor::open(third)?.into_rgb(),
        ];

        let strip = self.compose(loaded, kind);
        let target = resolve_output(output.as_ref());
        save_rgb(&strip, &target)?;
        info!(path = %target.display(), "Photo strip written");
        Ok(target)
    }

    /// Compose three in-memory photos into a strip.
    pub fn compose(&self, photos: [RgbImage; 3], kind: FilterKind) -> RgbImage {
        let layout = &self.layout;
        let mut strip = RgbImage::from_pixel(
            layout.canvas_width(),
            layout.canvas_height(),
            rgb(layout.background),
        );

        for (index, photo) in photos.into_iter().enumerate() {
            let cell = self.letterbox(apply_strip_filter(photo, kind));
            let top = index as i64 * i64::from(layout.cell_height);
            imageops::replace(&mut strip, &cell, 0, top);
        }

        self.draw_separators(&mut strip);
        self.draw_border(&mut strip);
        strip
    }

    /// Shrink `photo` to fit a cell and center it on the letterbox color.
    pub fn letterbox(&self, photo: RgbImage) -> RgbImage {
        let layout = &self.layout;
        let fitted = PhotoProcessor::from_rgb(photo)
            .shrink_to_fit(layout.cell_width, layout.cell_height)
            .into_rgb();

        let mut cell = RgbImage::from_pixel(layout.cell_width, layout.cell_height, rgb(layout.letterbox));
        let x = (layout.cell_width - fitted.width()) / 2;
        let y = (layout.cell_height - fitted.height()) / 2;
        debug!(
            photo_w = fitted.width(),
            photo_h = fitted.height(),
            x,
            y,
            "Letterboxing photo"
        );
        imageops::replace(&mut cell, &fitted, i64::from(x), i64::from(y));
        cell
    }

    fn draw_separators(&self, strip: &mut RgbImage) {
        let layout = &self.layout;
        let half = layout.separator_half_width;
        if half == 0 {
            return;
        }
        for seam in layout.seams() {
            fill(strip, 0, seam - half, layout.canvas_width(), half * 2, layout.separator);
        }
    }

    fn draw_border(&self, strip: &mut RgbImage) {
        let layout = &self.layout;
        let bw = layout.border_width;
        if bw == 0 {
            return;
        }
        let (w, h) = (layout.canvas_width(), layout.canvas_height());
        fill(strip, 0, 0, w, bw, layout.border);
        fill(strip, 0, h - bw, w, bw, layout.border);
        fill(strip, 0, 0, bw, h, layout.border);
        fill(strip, w - bw, 0, bw, h, layout.border);
    }
}

/// Download-style file name for a strip taken at `at`:
/// `kalakini-booth-YYYYMMDD-HHMMSS.png`.
pub fn strip_file_name(at: NaiveDateTime) -> String {
    format!("kalakini-booth-{}.png", at.format("%Y%m%d-%H%M%S"))
}

fn resolve_output(output: &Path) -> PathBuf {
    if output.is_dir() {
        let target = output.join(strip_file_name(Local::now().naive_local()));
        debug!(dir = %output.display(), file = %target.display(), "Output is a directory");
        target
    } else {
        output.to_path_buf()
    }
}

fn fill(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Color) {
    draw_filled_rect_mut(
        image,
        Rect::at(x as i32, y as i32).of_size(width, height),
        rgb(color),
    );
}

fn rgb(color: Color) -> Rgb<u8> {
    Rgb(color.to_array())
}
