//! File offset → pixel coordinate mapping and 32-bit word lane packing.
//!
//! The chip matrix is 256×256. Configuration files store one byte per pixel
//! in raster order with row 0 at the top; the readout wants rows counted from
//! the bottom and four vertically adjacent pixels packed into one `u32`,
//! lowest `y` in the most significant byte.

/// Pixels along one side of the chip.
pub const MATRIX_SIZE: usize = 256;

/// Pixels on the chip, and bytes in a configuration file.
pub const PIXEL_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Packed `u32` words holding the full matrix.
pub const WORD_COUNT: usize = PIXEL_COUNT / 4;

/// Words per column of `x`.
const WORDS_PER_COLUMN: usize = MATRIX_SIZE / 4;

/// Map a flat file offset to its `(x, y)` pixel coordinate.
///
/// Vertical flip of a row-major raster: offset `i` sits in raster row
/// `i / 256`, which is matrix row `255 - i / 256`.
#[inline]
pub const fn offset_to_coord(offset: u16) -> (u8, u8) {
    let x = (offset & 0xff) as u8;
    let y = 255 - (offset >> 8) as u8;
    (x, y)
}

/// Inverse of [`offset_to_coord`].
#[inline]
pub const fn coord_to_offset(x: u8, y: u8) -> u16 {
    (((255 - y) as u16) << 8) | x as u16
}

/// Word index and byte lane holding pixel `(x, y)`.
///
/// Lane 3 is the most significant byte of the word.
#[inline]
pub const fn word_slot(x: u8, y: u8) -> (usize, u32) {
    let index = WORDS_PER_COLUMN * x as usize + (y >> 2) as usize;
    let lane = 3 - (y & 0b11) as u32;
    (index, lane)
}

/// OR `value` into the lane for `(x, y)`.
///
/// Never clears bits: the lane must still be zero for the result to equal
/// `value`.
#[inline]
pub(crate) fn pack(words: &mut [u32; WORD_COUNT], x: u8, y: u8, value: u8) {
    let (index, lane) = word_slot(x, y);
    words[index] |= u32::from(value) << (8 * lane);
}

/// Zero the lane for `(x, y)` and pack `value` into it.
#[inline]
pub(crate) fn replace(words: &mut [u32; WORD_COUNT], x: u8, y: u8, value: u8) {
    let (index, lane) = word_slot(x, y);
    words[index] &= !(0xff << (8 * lane));
    words[index] |= u32::from(value) << (8 * lane);
}

/// Extract the lane for `(x, y)`.
#[inline]
pub(crate) fn unpack(words: &[u32; WORD_COUNT], x: u8, y: u8) -> u8 {
    let (index, lane) = word_slot(x, y);
    (words[index] >> (8 * lane)) as u8
}
