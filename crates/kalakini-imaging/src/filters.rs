// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File-level booth filters.
//
// Each filter opens a photo, normalizes it to RGB, runs the steps listed by
// `FilterKind::standalone_steps` and writes the result. Strip cells use the
// lighter `FilterKind::strip_steps` variant through `apply_strip_filter`.

use std::path::Path;

use image::RgbImage;
use tracing::{debug, info, instrument};

use kalakini_core::error::Result;
use kalakini_core::types::FilterKind;

use crate::photo::processor::PhotoProcessor;

/// Open `input`, apply `kind` at full fidelity, and write `output`.
///
/// `FilterKind::None` still re-encodes the photo as RGB.
#[instrument(skip_all, fields(filter = %kind, input = %input.as_ref().display(), output = %output.as_ref().display()))]
pub fn apply_filter_file(
    kind: FilterKind,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<()> {
    let processed = PhotoProcessor::open(input.as_ref())?.apply_all(kind.standalone_steps());
    processed.save(output.as_ref())?;
    info!("Filter applied");
    Ok(())
}

/// Sepia tone followed by a 1.1x contrast boost.
pub fn apply_vintage(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    apply_filter_file(FilterKind::Vintage, input, output)
}

/// 1.2x brightness followed by 1.3x saturation.
pub fn apply_bright(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    apply_filter_file(FilterKind::Bright, input, output)
}

/// Gaussian blur (sigma 0.5) followed by 1.05x brightness.
pub fn apply_smooth(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    apply_filter_file(FilterKind::Smooth, input, output)
}

/// Apply the strip variant of `kind` to an in-memory photo.
pub fn apply_strip_filter(image: RgbImage, kind: FilterKind) -> RgbImage {
    let steps = kind.strip_steps();
    if steps.is_empty() {
        return image;
    }
    debug!(filter = %kind, steps = steps.len(), "Filtering strip cell");
    PhotoProcessor::from_rgb(image).apply_all(steps).into_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbaImage};
    use kalakini_core::KalakiniError;

    fn write_fixture(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 5 % 256) as u8, ((x + y) % 256) as u8])
        });
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn every_filter_preserves_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(dir.path(), "in.png", 37, 23);

        for kind in FilterKind::ALL {
            let output = dir.path().join(format!("out-{kind}.png"));
            apply_filter_file(kind, &input, &output).unwrap();
            let out = image::open(&output).unwrap();
            assert_eq!((out.width(), out.height()), (37, 23), "{kind}");
        }
    }

    #[test]
    fn vintage_file_is_sepia_toned() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gray.png");
        RgbImage::from_pixel(4, 4, Rgb([100, 100, 100])).save(&input).unwrap();
        let output = dir.path().join("vintage.png");

        apply_vintage(&input, &output).unwrap();

        let px = image::open(&output).unwrap().to_rgb8().get_pixel(1, 1).0;
        // sepia (135, 120, 93) then contrast 1.1 around 128
        assert_eq!(px, [135, 119, 89]);
    }

    #[test]
    fn bright_file_is_brighter() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("dim.png");
        RgbImage::from_pixel(3, 3, Rgb([50, 50, 50])).save(&input).unwrap();
        let output = dir.path().join("bright.png");

        apply_bright(&input, &output).unwrap();

        let px = image::open(&output).unwrap().to_rgb8().get_pixel(0, 0).0;
        assert_eq!(px, [60, 60, 60]);
    }

    #[test]
    fn smooth_file_keeps_size() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(dir.path(), "in.png", 12, 30);
        let output = dir.path().join("smooth.png");
        apply_smooth(&input, &output).unwrap();
        assert_eq!(image::image_dimensions(&output).unwrap(), (12, 30));
    }

    #[test]
    fn rgba_input_is_written_as_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("alpha.png");
        RgbaImage::from_pixel(5, 5, image::Rgba([200, 10, 10, 128]))
            .save(&input)
            .unwrap();
        let output = dir.path().join("out.png");

        apply_filter_file(FilterKind::None, &input, &output).unwrap();

        let out = image::open(&output).unwrap();
        assert_eq!(out.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn missing_input_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let err = apply_vintage(dir.path().join("missing.jpg"), &output).unwrap_err();
        assert!(matches!(err, KalakiniError::Io { .. }), "got {err:?}");
        assert!(!output.exists());
    }

    #[test]
    fn strip_vintage_is_not_sepia() {
        let cell = RgbImage::from_pixel(2, 2, Rgb([90, 90, 90]));
        let out = apply_strip_filter(cell, FilterKind::Vintage);
        // Gray stays gray: saturation has nothing to mute, contrast pulls away from 128.
        assert_eq!(out.get_pixel(0, 0).0, [86, 86, 86]);
    }

    #[test]
    fn strip_none_returns_input_untouched() {
        let cell = RgbImage::from_pixel(3, 1, Rgb([1, 2, 3]));
        let out = apply_strip_filter(cell.clone(), FilterKind::None);
        assert_eq!(out, cell);
    }
}
