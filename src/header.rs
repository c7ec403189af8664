//! Block header layout and per-lane byte-length coding.
//!
//! Every block of eight residuals is described by one 32-bit header word.
//! The low 16 bits carry eight 2-bit leading-zero codes (lane k at bits
//! 2k..2k+1), the high 16 bits carry eight 2-bit trailing-zero-byte counts
//! with the same lane mapping. Header words are stored little-endian in a
//! contiguous table at the front of the stream; payload bytes follow from
//! offset `header_area_len(n)`.

/// Number of values processed per block.
pub(crate) const LANES: usize = 8;

/// Size of one block header word on the wire.
pub(crate) const HEADER_WORD_BYTES: usize = 4;

/// Bytes reserved for the header area at the front of the stream.
///
/// The payload cursor starts here. This matches `4 * block_count(n)` exactly
/// when `n` is a multiple of the block width.
#[inline]
pub(crate) fn header_area_len(value_count: usize) -> usize {
    value_count.div_ceil(2)
}

/// Number of blocks needed to cover `value_count` values.
#[inline]
pub(crate) fn block_count(value_count: usize) -> usize {
    value_count.div_ceil(LANES)
}

/// Bytes occupied by the header table itself.
#[inline]
pub(crate) fn table_len(value_count: usize) -> usize {
    block_count(value_count) * HEADER_WORD_BYTES
}

/// Byte-length decomposition of one residual.
///
/// `significand << (8 * tz)` reconstructs the residual; only the low
/// `width` bytes of `significand` appear on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LaneSplit {
    /// Residual with its trailing zero bytes stripped.
    pub significand: u32,
    /// Stored trailing-zero-byte count, 0..=3.
    pub tz: u32,
    /// Stored leading-zero code, 0..=3.
    pub lz: u32,
    /// Payload bytes on the wire: 0, 2, 3 or 4.
    pub width: usize,
}

/// Split a residual into its wire representation.
///
/// Trailing-zero bytes are counted first (a zero residual counts as 4 and is
/// collapsed to 3 so the shift stays in range), then leading-zero bytes of
/// the shifted word pick the payload width. The leading count collapses both
/// 3 and 2 onto code 2 / width 2, and a fully zero word onto code 3 / width 0.
#[inline]
pub(crate) fn split(residual: u32) -> LaneSplit {
    let tz_bytes = residual.trailing_zeros() >> 3;
    let tz = tz_bytes - (tz_bytes >> 2);
    let significand = residual >> (8 * tz);
    let lz_bytes = significand.leading_zeros() >> 3;
    let width = (4 - (lz_bytes - u32::from(lz_bytes == 3))) as usize;
    let lz = lz_bytes - u32::from(lz_bytes > 2);
    LaneSplit {
        significand,
        tz,
        lz,
        width,
    }
}

/// Payload width in bytes for a stored leading-zero code.
///
/// Must agree with the widths `split` emits: 0 -> 4, 1 -> 3, 2 -> 2, 3 -> 0.
#[inline]
pub(crate) fn width_of(lz: u32) -> usize {
    (4 - (lz + ((lz + 1) >> 2))) as usize
}

/// Reconstruct a residual from its significand and trailing-zero-byte count.
#[inline]
pub(crate) fn join(significand: u32, tz: u32) -> u32 {
    significand << (8 * tz)
}

/// Pack eight lane splits into one header word.
#[inline]
pub(crate) fn pack(lanes: &[LaneSplit; LANES]) -> u32 {
    let mut word = 0u32;
    for (k, lane) in lanes.iter().enumerate() {
        word |= lane.lz << (2 * k);
        word |= lane.tz << (16 + 2 * k);
    }
    word
}

/// Stored leading-zero code of lane `k` in a header word.
#[inline]
pub(crate) fn lane_lz(word: u32, k: usize) -> u32 {
    (word >> (2 * k)) & 3
}

/// Stored trailing-zero-byte count of lane `k` in a header word.
#[inline]
pub(crate) fn lane_tz(word: u32, k: usize) -> u32 {
    (word >> (16 + 2 * k)) & 3
}
