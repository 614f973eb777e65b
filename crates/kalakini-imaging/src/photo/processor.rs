// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photo processor: sepia, contrast, brightness, saturation, gaussian blur and
// downscale-to-fit. Operates on in-memory RGB images using the `image` and
// `imageproc` crates.

use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat, RgbImage};
use imageproc::filter::gaussian_blur_f32;
use kalakini_core::error::KalakiniError;
use kalakini_core::Adjustment;
use tracing::{debug, info, instrument};

/// Enhancement pipeline operating on a single in-memory RGB photo.
///
/// Every photo is normalized to 8-bit RGB on construction (alpha is dropped,
/// grayscale is expanded). Transformations consume `self` and return the
/// adjusted processor, enabling method chaining.
///
/// ```ignore
/// PhotoProcessor::open("shot.jpg")?
///     .sepia()
///     .adjust_contrast(1.1)
///     .save("shot-vintage.jpg")?;
/// ```
pub struct PhotoProcessor {
    /// The current working image.
    image: RgbImage,
}

impl PhotoProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load a photo from a file path. The format is inferred from the extension.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, KalakiniError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|err| read_err(path, err))?;
        info!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Photo loaded"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Create a processor from raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, KalakiniError> {
        let img = image::load_from_memory(data).map_err(|err| read_err(Path::new("<memory>"), err))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Photo decoded from bytes"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Wrap an already-decoded image, converting it to RGB.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.into_rgb8(),
        }
    }

    /// Wrap an RGB buffer as-is.
    pub fn from_rgb(image: RgbImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the working image.
    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the processor and return the working image.
    pub fn into_rgb(self) -> RgbImage {
        self.image
    }

    // -- Adjustments (consume self, return new Self) ---------------------------

    /// Run one pipeline step.
    pub fn apply(self, step: Adjustment) -> Self {
        match step {
            Adjustment::Sepia => self.sepia(),
            Adjustment::Contrast(factor) => self.adjust_contrast(factor),
            Adjustment::Brightness(factor) => self.adjust_brightness(factor),
            Adjustment::Saturation(factor) => self.adjust_saturation(factor),
            Adjustment::GaussianBlur(sigma) => self.gaussian_blur(sigma),
        }
    }

    /// Run pipeline steps in order.
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn apply_all(self, steps: &[Adjustment]) -> Self {
        steps.iter().fold(self, |processor, step| {
            debug!(?step, "Applying adjustment");
            processor.apply(*step)
        })
    }

    /// Replace every pixel with its sepia tone.
    ///
    /// Channels are truncated toward zero and then clamped to 255, so the
    /// output always satisfies `r >= g >= b`.
    pub fn sepia(mut self) -> Self {
        for pixel in self.image.pixels_mut() {
            pixel.0 = sepia_tone(pixel.0);
        }
        self
    }

    /// Scale contrast by `factor` around mid-gray (128). Values > 1.0 increase
    /// contrast; values < 1.0 flatten the image toward gray.
    pub fn adjust_contrast(self, factor: f32) -> Self {
        self.map_channels(|c| 128.0 + (c - 128.0) * factor)
    }

    /// Scale brightness by `factor`: 0.0 is black, 1.0 is unchanged.
    pub fn adjust_brightness(self, factor: f32) -> Self {
        self.map_channels(|c| c * factor)
    }

    /// Scale color saturation by `factor`: 0.0 is grayscale, 1.0 is unchanged.
    pub fn adjust_saturation(mut self, factor: f32) -> Self {
        for pixel in self.image.pixels_mut() {
            let gray = f32::from(luma(pixel.0));
            for c in pixel.0.iter_mut() {
                *c = to_channel(gray + (f32::from(*c) - gray) * factor);
            }
        }
        self
    }

    /// Gaussian blur with standard deviation `sigma`. Non-positive sigmas leave
    /// the image untouched.
    pub fn gaussian_blur(self, sigma: f32) -> Self {
        if sigma <= 0.0 {
            return self;
        }
        Self {
            image: gaussian_blur_f32(&self.image, sigma),
        }
    }

    /// Downscale (never upscale) so the photo fits within `max_width` x
    /// `max_height`, preserving aspect ratio. Uses Lanczos3 filtering.
    #[instrument(skip(self))]
    pub fn shrink_to_fit(self, max_width: u32, max_height: u32) -> Self {
        let (width, height) = self.image.dimensions();
        if width <= max_width && height <= max_height {
            return self;
        }

        let scale = f64::min(
            f64::from(max_width) / f64::from(width),
            f64::from(max_height) / f64::from(height),
        );
        let new_w = ((f64::from(width) * scale).round() as u32).clamp(1, max_width);
        let new_h = ((f64::from(height) * scale).round() as u32).clamp(1, max_height);
        info!(
            from_w = width,
            from_h = height,
            new_w,
            new_h,
            "Shrinking photo"
        );

        Self {
            image: image::imageops::resize(&self.image, new_w, new_h, FilterType::Lanczos3),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, KalakiniError> {
        let mut buffer = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|err| write_err(Path::new("<memory>"), err))?;
        Ok(buffer)
    }

    /// Write the image to a file. The format is inferred from the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), KalakiniError> {
        save_rgb(&self.image, path.as_ref())
    }

    fn map_channels(mut self, f: impl Fn(f32) -> f32) -> Self {
        for pixel in self.image.pixels_mut() {
            for c in pixel.0.iter_mut() {
                *c = to_channel(f(f32::from(*c)));
            }
        }
        self
    }
}

/// Save an RGB buffer, inferring the format from the extension.
#[instrument(skip_all, fields(path = %path.display(), width = image.width(), height = image.height()))]
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<(), KalakiniError> {
    image.save(path).map_err(|err| write_err(path, err))?;
    info!("Photo saved");
    Ok(())
}

/// Sepia-tone one RGB pixel.
pub fn sepia_tone([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
    let tone = |kr: f32, kg: f32, kb: f32| (kr * r + kg * g + kb * b).trunc().min(255.0) as u8;
    [
        tone(0.393, 0.769, 0.189),
        tone(0.349, 0.686, 0.168),
        tone(0.272, 0.534, 0.131),
    ]
}

/// ITU-R 601-2 luma in fixed point, rounded to the nearest 8-bit value.
fn luma([r, g, b]: [u8; 3]) -> u8 {
    let weighted = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471;
    ((weighted + 0x8000) >> 16) as u8
}

fn to_channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Local error helpers
// ---------------------------------------------------------------------------

fn read_err(path: &Path, err: ImageError) -> KalakiniError {
    match err {
        ImageError::IoError(source) => KalakiniError::Io {
            path: path.display().to_string(),
            source,
        },
        other => KalakiniError::Decode {
            path: path.display().to_string(),
            reason: other.to_string(),
        },
    }
}

fn write_err(path: &Path, err: ImageError) -> KalakiniError {
    match err {
        ImageError::IoError(source) => KalakiniError::Io {
            path: path.display().to_string(),
            source,
        },
        other => KalakiniError::Encode {
            path: path.display().to_string(),
            reason: other.to_string(),
        },
    }
}
