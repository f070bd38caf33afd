use alloc::vec::Vec;
use enough::Stop;

use crate::config::PixelConfig;
use crate::error::ConfigError;
use crate::format::FileFormat;
use crate::layout::{self, MATRIX_SIZE, PIXEL_COUNT};

/// Encode request: writes a [`PixelConfig`] back out as a file image.
///
/// Pixet files cannot hold bits 6 and 7; those are dropped.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: FileFormat,
}

impl EncodeRequest {
    pub fn new(format: FileFormat) -> Self {
        Self { format }
    }

    pub fn burdaman() -> Self {
        Self::new(FileFormat::BurdaMan)
    }

    pub fn pixet() -> Self {
        Self::new(FileFormat::Pixet)
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Produce the 65,536-byte file image.
    pub fn encode(&self, config: &PixelConfig, stop: impl Stop) -> Result<Vec<u8>, ConfigError> {
        stop.check()?;
        let out = encode_pixels(config, self.format, &stop)?;
        tracing::trace!(format = ?self.format, "pixel configuration encoded");
        Ok(out)
    }
}

fn encode_pixels(
    config: &PixelConfig,
    format: FileFormat,
    stop: &dyn Stop,
) -> Result<Vec<u8>, ConfigError> {
    let mut out = Vec::with_capacity(PIXEL_COUNT);
    for row_idx in 0..MATRIX_SIZE {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let base = row_idx * MATRIX_SIZE;
        for col in 0..MATRIX_SIZE {
            let (x, y) = layout::offset_to_coord((base + col) as u16);
            out.push(format.encode_byte(config.get(x, y)));
        }
    }
    Ok(out)
}
