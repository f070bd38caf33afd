//! Configuration file formats and their per-byte transforms.
//!
//! BurdaMan (`.bmc`) stores pixel bytes in the canonical bit order. Pixet
//! (`.bpc`) stores the 4-bit threshold trim field (bits 1–4) reversed, and
//! has no room for bits 6 and 7.

/// Bit-reversal of every 4-bit value: bit 3 ↔ bit 0, bit 2 ↔ bit 1.
pub(crate) const REVERSE_NIBBLE: [u8; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

/// Bits Pixet keeps in place (0 and 5).
const PIXET_PASSTHROUGH: u8 = 0b0010_0001;
/// Threshold trim field, bits 1–4.
const PIXET_TRIM: u8 = 0b0001_1110;

/// Reverse the low 4 bits of `v`. Bits above 3 are ignored.
#[inline]
pub const fn reverse_nibble(v: u8) -> u8 {
    REVERSE_NIBBLE[(v & 0x0f) as usize]
}

/// Which tool wrote a configuration file.
///
/// Formats cannot be told apart from content. Loading a file with the
/// wrong format yields a well-formed but wrong configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// BurdaMan, conventionally `.bmc`. Bytes are stored as-is.
    BurdaMan,
    /// Pixet, conventionally `.bpc`. Trim bits are stored reversed.
    Pixet,
}

impl FileFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::BurdaMan => "bmc",
            FileFormat::Pixet => "bpc",
        }
    }

    /// Guess a format from a file extension (case-insensitive, no dot).
    ///
    /// Loading never calls this; format selection is always explicit.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("bmc") {
            Some(FileFormat::BurdaMan)
        } else if ext.eq_ignore_ascii_case("bpc") {
            Some(FileFormat::Pixet)
        } else {
            None
        }
    }

    /// Convert one file byte to the canonical pixel value.
    #[inline]
    pub fn decode_byte(self, byte: u8) -> u8 {
        match self {
            FileFormat::BurdaMan => byte,
            FileFormat::Pixet => pixet_permute(byte),
        }
    }

    /// Convert one canonical pixel value to its file byte.
    ///
    /// Pixet drops bits 6 and 7.
    #[inline]
    pub fn encode_byte(self, value: u8) -> u8 {
        match self {
            FileFormat::BurdaMan => value,
            // the trim reversal is its own inverse
            FileFormat::Pixet => pixet_permute(value),
        }
    }

    /// Whether `value` survives [`encode_byte`](Self::encode_byte) unchanged
    /// in meaning.
    #[inline]
    pub fn can_represent(self, value: u8) -> bool {
        match self {
            FileFormat::BurdaMan => true,
            FileFormat::Pixet => value & !(PIXET_PASSTHROUGH | PIXET_TRIM) == 0,
        }
    }
}

#[inline]
fn pixet_permute(byte: u8) -> u8 {
    (byte & PIXET_PASSTHROUGH) | (reverse_nibble((byte & PIXET_TRIM) >> 1) << 1)
}
