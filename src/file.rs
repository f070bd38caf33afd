//! Path-based entry points (`std` only).

use std::io;
use std::path::Path;

use enough::Stop;

use crate::config::PixelConfig;
use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::ConfigError;
use crate::format::FileFormat;

/// Read and decode a configuration file.
///
/// The format is never inferred from the extension.
pub fn decode_file(
    path: impl AsRef<Path>,
    format: FileFormat,
    stop: impl Stop,
) -> Result<PixelConfig, ConfigError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| read_error(path, e))?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        bytes = data.len(),
        "loading pixel configuration"
    );
    DecodeRequest::new(&data, format).decode(stop)
}

/// Encode a configuration and write it to `path`, replacing any existing file.
pub fn encode_file(
    path: impl AsRef<Path>,
    config: &PixelConfig,
    format: FileFormat,
    stop: impl Stop,
) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let data = EncodeRequest::new(format).encode(config, stop)?;
    tracing::debug!(path = %path.display(), ?format, "writing pixel configuration");
    std::fs::write(path, data).map_err(ConfigError::IoFailure)
}

fn read_error(path: &Path, e: io::Error) -> ConfigError {
    match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::IoFailure(e),
    }
}
