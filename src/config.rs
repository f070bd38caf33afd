use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::layout::{self, MATRIX_SIZE, PIXEL_COUNT, WORD_COUNT};

/// Packed per-pixel configuration of a full 256×256 chip.
///
/// Four pixels per `u32`, in the word layout the readout consumes. Each
/// decode produces a fresh value; nothing is shared between loads.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelConfig {
    words: Box<[u32; WORD_COUNT]>,
}

impl PixelConfig {
    /// All pixels zero.
    pub fn zeroed() -> Self {
        Self {
            words: Box::new([0; WORD_COUNT]),
        }
    }

    /// Build a configuration from a per-pixel function of `(x, y)`.
    pub fn from_fn(mut f: impl FnMut(u8, u8) -> u8) -> Self {
        let mut config = Self::zeroed();
        for x in 0..=u8::MAX {
            for y in 0..=u8::MAX {
                layout::pack(&mut config.words, x, y, f(x, y));
            }
        }
        config
    }

    /// Wrap an already packed word array.
    pub fn from_words(words: [u32; WORD_COUNT]) -> Self {
        Self {
            words: Box::new(words),
        }
    }

    /// OR `value` into pixel `(x, y)`. Only valid on a lane still zero.
    pub(crate) fn pack(&mut self, x: u8, y: u8, value: u8) {
        layout::pack(&mut self.words, x, y, value);
    }

    /// Value of pixel `(x, y)`.
    #[inline]
    pub fn get(&self, x: u8, y: u8) -> u8 {
        layout::unpack(&self.words, x, y)
    }

    /// Overwrite pixel `(x, y)`.
    pub fn set(&mut self, x: u8, y: u8, value: u8) {
        layout::replace(&mut self.words, x, y, value);
    }

    /// The packed words, in device order.
    pub fn words(&self) -> &[u32; WORD_COUNT] {
        &self.words
    }

    /// Little-endian byte image of the packed words.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(PIXEL_COUNT);
        for word in self.words.iter() {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Read-only 256×256 view of the pixel values.
    pub fn grid(&self) -> PixelGrid<'_> {
        PixelGrid { config: self }
    }
}

impl Default for PixelConfig {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl core::fmt::Debug for PixelConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let nonzero = self.words.iter().filter(|&&w| w != 0).count();
        f.debug_struct("PixelConfig")
            .field("words", &WORD_COUNT)
            .field("nonzero_words", &nonzero)
            .finish()
    }
}

/// 256×256 view over a [`PixelConfig`], unpacked on access.
#[derive(Clone, Copy, Debug)]
pub struct PixelGrid<'a> {
    config: &'a PixelConfig,
}

impl<'a> PixelGrid<'a> {
    pub const WIDTH: usize = MATRIX_SIZE;
    pub const HEIGHT: usize = MATRIX_SIZE;

    #[inline]
    pub fn get(&self, x: u8, y: u8) -> u8 {
        self.config.get(x, y)
    }

    /// One row of constant `y`, indexed by `x`.
    pub fn row(&self, y: u8) -> [u8; MATRIX_SIZE] {
        let mut row = [0u8; MATRIX_SIZE];
        for (x, out) in (0..=u8::MAX).zip(row.iter_mut()) {
            *out = self.get(x, y);
        }
        row
    }

    /// Rows in ascending `y`.
    pub fn rows(&self) -> impl Iterator<Item = [u8; MATRIX_SIZE]> + use<'a> {
        let grid = *self;
        (0..=u8::MAX).map(move |y| grid.row(y))
    }

    /// Every pixel as `(x, y, value)`, row-major by `y` then `x`.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8, u8)> + use<'a> {
        let grid = *self;
        (0..=u8::MAX).flat_map(move |y| (0..=u8::MAX).map(move |x| (x, y, grid.get(x, y))))
    }

    /// Pixel values row-major by `y` then `x`: index `y * 256 + x`.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(PIXEL_COUNT);
        for row in self.rows() {
            out.extend_from_slice(&row);
        }
        out
    }

    /// Copy into an [`imgref::ImgVec`], width along `x`, height along `y`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<u8> {
        imgref::ImgVec::new(self.to_vec(), MATRIX_SIZE, MATRIX_SIZE)
    }
}
