//! Lane codec for encoding and decoding dense `f32` arrays.
//!
//! Values are treated as opaque 32-bit words (no float arithmetic is ever
//! performed) and processed in blocks of eight lanes:
//!
//! 1. Each lane subtracts the value the same lane held in the previous block
//!    (modular arithmetic, prior starts at zero).
//! 2. With the hashed predictor, the delta is additionally XORed against a
//!    prediction gathered from a 256-slot table, so deltas that repeat under
//!    the hash collapse to zero.
//! 3. The residual's trailing and leading zero bytes are stripped; the
//!    surviving 0, 2, 3 or 4 bytes go to the payload area and the two 2-bit
//!    length codes go to the block's header word.
//!
//! ## Stream layout
//!
//! - Header area: `⌈n/2⌉` bytes at the front, holding one 32-bit
//!   little-endian header word per block.
//! - Payload area: from byte `⌈n/2⌉`, each block's eight lane payloads in
//!   lane order, little-endian, no separators.
//!
//! The value count is not part of the stream; the caller supplies it on
//! decode. Streams produced with different [`Predictor`] choices are not
//! interchangeable.

use crate::error::LanePackError;
use crate::header::{self, LaneSplit, HEADER_WORD_BYTES, LANES};
use crate::predictor::{DeltaState, HashTable};

/// Worst-case encoded size in bytes for `value_count` values.
///
/// Covers the header area plus four payload bytes per value. Callers must
/// size encode buffers to at least this.
///
/// # Example
/// ```
/// assert_eq!(lanepack_rs::upper_bound(16), 8 + 64);
/// ```
#[inline]
pub const fn upper_bound(value_count: usize) -> usize {
    (value_count + 1) / 2 + value_count * 4
}

/// Residual predictor run before byte stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predictor {
    /// Delta plus XOR against a hashed prediction table. Best compression on
    /// streams whose deltas repeat.
    Hashed,
    /// Delta only. Faster, slightly larger output.
    Delta,
}

/// Compressor/decompressor for dense `f32` arrays.
///
/// The codec is stateless between calls: all predictor state lives on the
/// stack for the duration of one `encode` or `decode`. Independent calls on
/// disjoint buffers may run concurrently.
///
/// # Example
/// ```
/// use lanepack_rs::{upper_bound, LaneCodec};
///
/// let codec = LaneCodec::new();
/// let values = [1.0f32, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5];
///
/// let mut out = vec![0u8; upper_bound(values.len())];
/// let written = codec.encode(&values, &mut out).unwrap();
///
/// let mut decoded = [0.0f32; 8];
/// codec.decode(&out[..written], &mut decoded).unwrap();
/// assert_eq!(decoded, values);
/// ```
#[derive(Debug, Clone)]
pub struct LaneCodec {
    predictor: Predictor,
}

impl Default for LaneCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl LaneCodec {
    /// Codec with the hashed predictor (the full variant).
    pub fn new() -> Self {
        Self::with_predictor(Predictor::Hashed)
    }

    /// Codec with the delta-only predictor (the quick variant).
    pub fn quick() -> Self {
        Self::with_predictor(Predictor::Delta)
    }

    /// Codec with an explicit predictor choice.
    pub fn with_predictor(predictor: Predictor) -> Self {
        LaneCodec { predictor }
    }

    /// The predictor this codec encodes and decodes with.
    pub fn predictor(&self) -> Predictor {
        self.predictor
    }

    /// Encode `values` into `out`, returning the number of bytes written.
    ///
    /// `out` must hold at least [`upper_bound`]`(values.len())` bytes. The
    /// result is `⌈n/2⌉` header-area bytes plus the packed payload; bytes
    /// past the returned length are left untouched except for the header
    /// table, which always occupies four bytes per block from offset 0.
    ///
    /// Reconstruction is bit-exact, including NaN payloads and signed
    /// zeros.
    pub fn encode(&self, values: &[f32], out: &mut [u8]) -> Result<usize, LanePackError> {
        let bound = upper_bound(values.len());
        if out.len() < bound {
            return Err(LanePackError::OutputTooSmall {
                needed: bound,
                available: out.len(),
            });
        }
        if values.is_empty() {
            return Ok(0);
        }

        let mut delta = DeltaState::new();
        let mut table = match self.predictor {
            Predictor::Hashed => Some(HashTable::new()),
            Predictor::Delta => None,
        };

        let mut cursor = header::header_area_len(values.len());
        let mut header_at = 0usize;
        let mut block = [0u32; LANES];

        for chunk in values.chunks(LANES) {
            for (lane, value) in chunk.iter().enumerate() {
                block[lane] = value.to_bits();
            }
            block[chunk.len()..].fill(0);

            let deltas = delta.forward(&block);
            let residuals = match table.as_mut() {
                Some(t) => t.fold(&deltas),
                None => deltas,
            };

            let mut lanes = [LaneSplit::default(); LANES];
            let mut advance = 0usize;
            for (lane, &residual) in lanes.iter_mut().zip(residuals.iter()) {
                *lane = header::split(residual);
                advance += lane.width;
            }
            if out.len() < cursor + advance {
                return Err(LanePackError::OutputTooSmall {
                    needed: cursor + advance,
                    available: out.len(),
                });
            }

            for lane in &lanes {
                out[cursor..cursor + lane.width]
                    .copy_from_slice(&lane.significand.to_le_bytes()[..lane.width]);
                cursor += lane.width;
            }
            out[header_at..header_at + HEADER_WORD_BYTES]
                .copy_from_slice(&header::pack(&lanes).to_le_bytes());
            header_at += HEADER_WORD_BYTES;
        }

        Ok(cursor)
    }

    /// Decode `out.len()` values from `data` into `out`.
    ///
    /// `out.len()` must equal the value count passed to the matching encode;
    /// the stream does not carry it. The stream must come from the same
    /// predictor variant.
    pub fn decode(&self, data: &[u8], out: &mut [f32]) -> Result<(), LanePackError> {
        if out.is_empty() {
            return Ok(());
        }

        let table_len = header::table_len(out.len());
        if data.len() < table_len {
            return Err(LanePackError::TruncatedStream {
                needed: table_len,
                available: data.len(),
            });
        }

        let mut delta = DeltaState::new();
        let mut table = match self.predictor {
            Predictor::Hashed => Some(HashTable::new()),
            Predictor::Delta => None,
        };

        let mut cursor = header::header_area_len(out.len());

        for (b, chunk) in out.chunks_mut(LANES).enumerate() {
            let at = b * HEADER_WORD_BYTES;
            let word = u32::from_le_bytes(data[at..at + HEADER_WORD_BYTES].try_into().unwrap());

            let mut residuals = [0u32; LANES];
            for (k, residual) in residuals.iter_mut().enumerate() {
                let width = header::width_of(header::lane_lz(word, k));
                if data.len() < cursor + width {
                    return Err(LanePackError::TruncatedStream {
                        needed: cursor + width,
                        available: data.len(),
                    });
                }
                let mut bytes = [0u8; 4];
                bytes[..width].copy_from_slice(&data[cursor..cursor + width]);
                *residual = header::join(u32::from_le_bytes(bytes), header::lane_tz(word, k));
                cursor += width;
            }

            let deltas = match table.as_mut() {
                Some(t) => t.unfold(&residuals),
                None => residuals,
            };
            let values = delta.inverse(&deltas);

            // The tail block reconstructs all eight lanes; only the real
            // values are written out.
            for (slot, &bits) in chunk.iter_mut().zip(values.iter()) {
                *slot = f32::from_bits(bits);
            }
        }

        Ok(())
    }

    /// Encode into a freshly allocated vector.
    ///
    /// The vector is truncated to the encoded length, but never below the
    /// header table, so the result always decodes even when the value count
    /// is not a multiple of the block width.
    ///
    /// # Example
    /// ```
    /// use lanepack_rs::LaneCodec;
    ///
    /// let codec = LaneCodec::quick();
    /// let values = vec![2.5f32; 32];
    /// let bytes = codec.encode_to_vec(&values);
    /// let decoded = codec.decode_to_vec(&bytes, values.len()).unwrap();
    /// assert_eq!(decoded, values);
    /// ```
    pub fn encode_to_vec(&self, values: &[f32]) -> Vec<u8> {
        let mut out = vec![0u8; scratch_len(values.len())];
        let written = self
            .encode(values, &mut out)
            .expect("scratch buffer sized to the worst case");
        out.truncate(written.max(header::table_len(values.len())));
        out
    }

    /// Decode `value_count` values into a freshly allocated vector.
    pub fn decode_to_vec(
        &self,
        data: &[u8],
        value_count: usize,
    ) -> Result<Vec<f32>, LanePackError> {
        let mut out = vec![0.0f32; value_count];
        self.decode(data, &mut out)?;
        Ok(out)
    }

    /// Inspect a stream's layout by walking its header table, without
    /// decoding any payload.
    ///
    /// # Example
    /// ```
    /// use lanepack_rs::LaneCodec;
    ///
    /// let codec = LaneCodec::new();
    /// let values = vec![0.0f32; 16];
    /// let bytes = codec.encode_to_vec(&values);
    ///
    /// let info = codec.info(&bytes, values.len()).unwrap();
    /// assert_eq!(info.total_bytes(), bytes.len());
    /// assert_eq!(info.payload_bytes, 0);
    /// ```
    pub fn info(&self, data: &[u8], value_count: usize) -> Result<StreamInfo, LanePackError> {
        let block_count = header::block_count(value_count);
        let table_len = header::table_len(value_count);
        if data.len() < table_len {
            return Err(LanePackError::TruncatedStream {
                needed: table_len,
                available: data.len(),
            });
        }

        let mut payload_bytes = 0usize;
        for b in 0..block_count {
            let at = b * HEADER_WORD_BYTES;
            let word = u32::from_le_bytes(data[at..at + HEADER_WORD_BYTES].try_into().unwrap());
            for k in 0..LANES {
                payload_bytes += header::width_of(header::lane_lz(word, k));
            }
        }

        Ok(StreamInfo {
            value_count,
            block_count,
            header_bytes: header::header_area_len(value_count),
            payload_bytes,
        })
    }
}

/// Worst-case bytes the encoder can touch, including the padded tail block.
#[inline]
fn scratch_len(value_count: usize) -> usize {
    header::header_area_len(value_count) + LANES * 4 * header::block_count(value_count)
}

/// Layout of an encoded stream, derived from its header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    /// Number of encoded values.
    pub value_count: usize,
    /// Number of 8-lane blocks.
    pub block_count: usize,
    /// Bytes reserved for the header area.
    pub header_bytes: usize,
    /// Bytes of packed lane payloads.
    pub payload_bytes: usize,
}

impl StreamInfo {
    /// Total stream length in bytes.
    pub fn total_bytes(&self) -> usize {
        self.header_bytes + self.payload_bytes
    }

    /// Compressed size relative to the raw `f32` array.
    pub fn compression_ratio(&self) -> f64 {
        let original = self.value_count * std::mem::size_of::<f32>();
        self.total_bytes() as f64 / original as f64
    }
}
