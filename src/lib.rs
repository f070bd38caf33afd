//! # tpxcfg
//!
//! Codec for 256×256 Timepix3 per-pixel configuration files.
//!
//! A configuration file holds one byte per pixel (mask, threshold trim and
//! test-pulse bits), 65,536 bytes in total, written by one of two tools:
//!
//! - **BurdaMan** (`.bmc`) — bytes stored in canonical bit order.
//! - **Pixet** (`.bpc`) — the 4-bit threshold trim field (bits 1–4) stored
//!   bit-reversed; bits 6 and 7 are not stored.
//!
//! Both use the same raster: file offset `i` is pixel
//! `(i % 256, 255 - i / 256)`. Decoding produces a [`PixelConfig`], packed
//! four pixels per `u32` in the word layout the readout consumes, with a
//! read-only [`PixelGrid`] view for per-pixel access.
//!
//! The format cannot be detected from content. Decoding a file with the
//! wrong [`FileFormat`] succeeds and yields the wrong configuration.
//!
//! ## Non-Goals
//!
//! - Interpreting what the configuration bits mean
//! - Streaming or partial loads
//! - Formats other than BurdaMan and Pixet
//!
//! ## Usage
//!
//! ```no_run
//! use tpxcfg::{FileFormat, Unstoppable};
//!
//! let config = tpxcfg::decode_file("chipconfig.bpc", FileFormat::Pixet, Unstoppable)?;
//! println!("pixel (0, 0) = {:#04x}", config.get(0, 0));
//!
//! // Words as sent to the readout
//! let words: &[u32; 16_384] = config.words();
//! # let _ = words;
//!
//! // Re-save in BurdaMan layout
//! let bytes = tpxcfg::encode(&config, FileFormat::BurdaMan, Unstoppable)?;
//! assert_eq!(bytes.len(), 65_536);
//! # Ok::<(), tpxcfg::ConfigError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod config;
mod decode;
mod encode;
mod error;
#[cfg(feature = "std")]
mod file;
mod format;
pub mod layout;

// Re-exports
pub use config::{PixelConfig, PixelGrid};
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::ConfigError;
#[cfg(feature = "std")]
pub use file::{decode_file, encode_file};
pub use format::{FileFormat, reverse_nibble};

use alloc::vec::Vec;

/// Decode an in-memory configuration file.
pub fn decode(
    data: &[u8],
    format: FileFormat,
    stop: impl Stop,
) -> Result<PixelConfig, ConfigError> {
    DecodeRequest::new(data, format).decode(stop)
}

/// Decode a BurdaMan (`.bmc`) file image.
pub fn decode_bmc(data: &[u8], stop: impl Stop) -> Result<PixelConfig, ConfigError> {
    decode(data, FileFormat::BurdaMan, stop)
}

/// Decode a Pixet (`.bpc`) file image.
pub fn decode_bpc(data: &[u8], stop: impl Stop) -> Result<PixelConfig, ConfigError> {
    decode(data, FileFormat::Pixet, stop)
}

/// Encode a configuration as a 65,536-byte file image.
pub fn encode(
    config: &PixelConfig,
    format: FileFormat,
    stop: impl Stop,
) -> Result<Vec<u8>, ConfigError> {
    EncodeRequest::new(format).encode(config, stop)
}
