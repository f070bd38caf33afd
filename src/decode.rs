use enough::Stop;

use crate::config::PixelConfig;
use crate::error::ConfigError;
use crate::format::FileFormat;
use crate::layout::{self, MATRIX_SIZE, PIXEL_COUNT};

/// Decode request for an in-memory configuration file.
///
/// ```
/// use tpxcfg::{DecodeRequest, FileFormat, Unstoppable};
///
/// let data = vec![0u8; 65_536];
/// let config = DecodeRequest::new(&data, FileFormat::Pixet).decode(Unstoppable)?;
/// assert_eq!(config.get(0, 255), 0);
/// # Ok::<(), tpxcfg::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    format: FileFormat,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8], format: FileFormat) -> Self {
        Self { data, format }
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Validate the buffer and decode it into a fresh [`PixelConfig`].
    pub fn decode(self, stop: impl Stop) -> Result<PixelConfig, ConfigError> {
        let raw = validate(self.data)?;
        stop.check()?;
        let config = decode_pixels(raw, self.format, &stop)?;
        tracing::trace!(format = ?self.format, "pixel configuration decoded");
        Ok(config)
    }
}

/// Check that `data` is exactly one full-chip file.
pub(crate) fn validate(data: &[u8]) -> Result<&[u8; PIXEL_COUNT], ConfigError> {
    data.try_into().map_err(|_| ConfigError::InvalidSize {
        expected: PIXEL_COUNT,
        actual: data.len(),
    })
}

/// Decode a validated file in ascending offset order.
fn decode_pixels(
    raw: &[u8; PIXEL_COUNT],
    format: FileFormat,
    stop: &dyn Stop,
) -> Result<PixelConfig, ConfigError> {
    let mut config = PixelConfig::zeroed();
    for (row_idx, row) in raw.chunks_exact(MATRIX_SIZE).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let base = row_idx * MATRIX_SIZE;
        for (col, &byte) in row.iter().enumerate() {
            let (x, y) = layout::offset_to_coord((base + col) as u16);
            config.pack(x, y, format.decode_byte(byte));
        }
    }
    Ok(config)
}
