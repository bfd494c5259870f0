use crate::{Effect, Result};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};

/// Channel value every one of R, G and B must exceed for a pixel to be keyed
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Fully transparent white, written over every keyed pixel
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// True when R, G and B are all strictly greater than `threshold`.
/// Alpha is not inspected.
#[inline]
pub fn is_near_white(pixel: &Rgba<u8>, threshold: u8) -> bool {
    pixel[0] > threshold && pixel[1] > threshold && pixel[2] > threshold
}

/// Near-white keying configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct WhiteKeyConfig {
    #[derivative(Default(value = "DEFAULT_THRESHOLD"))]
    threshold: u8,

    #[derivative(Default(value = "TRANSPARENT_WHITE"))]
    replacement: Rgba<u8>,
}

impl WhiteKeyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn replacement(&self) -> Rgba<u8> {
        self.replacement
    }

    /// Replace every near-white pixel in place and return how many were replaced
    pub fn key_pixels(&self, image: &mut RgbaImage) -> usize {
        let mut keyed = 0;

        for pixel in image.pixels_mut() {
            if is_near_white(pixel, self.threshold) {
                *pixel = self.replacement;
                keyed += 1;
            }
        }

        keyed
    }
}

impl Effect for WhiteKeyConfig {
    fn apply(&self, image: &mut RgbaImage) -> Result<()> {
        self.key_pixels(image);
        Ok(())
    }
}
