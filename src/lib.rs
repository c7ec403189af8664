//! # lanepack-rs
//!
//! Lossless compression for dense `f32` arrays, built for telemetry-style
//! streams where neighboring values are highly correlated: time series,
//! sensor traces, vertex streams.
//!
//! ## Overview
//!
//! Values are reinterpreted as raw 32-bit words and processed in blocks of
//! eight lanes. Each block goes through:
//!
//! 1. **Prediction**: a per-lane delta against the previous block, optionally
//!    followed by an XOR against a hashed prediction table that cancels
//!    repeating deltas.
//! 2. **Byte stripping**: each residual drops its trailing and leading zero
//!    bytes, leaving 0 to 4 significant payload bytes per lane.
//! 3. **Packing**: 2-bit length codes go into a per-block header word at the
//!    front of the stream; the surviving bytes are packed tightly behind.
//!
//! Reconstruction is bit-exact, including NaN payloads and signed zeros. No
//! float arithmetic is performed anywhere, so there is nothing to round.
//!
//! Two predictor variants are available and produce incompatible streams:
//!
//! | Variant | Predictor | Trade-off |
//! |---------|-----------|-----------|
//! | [`LaneCodec::new`] | delta + hashed XOR table | best compression |
//! | [`LaneCodec::quick`] | delta only | faster, slightly larger output |
//!
//! ## Quick Start
//!
//! ```rust
//! use lanepack_rs::{upper_bound, LaneCodec};
//!
//! let codec = LaneCodec::new();
//! let values: Vec<f32> = (0..64).map(|i| 20.0 + (i as f32) * 0.25).collect();
//!
//! // Encode into a caller-sized buffer...
//! let mut out = vec![0u8; upper_bound(values.len())];
//! let written = codec.encode(&values, &mut out).unwrap();
//!
//! // ...and decode it back. The value count is not stored in the stream;
//! // the output slice length supplies it.
//! let mut decoded = vec![0.0f32; values.len()];
//! codec.decode(&out[..written], &mut decoded).unwrap();
//! assert_eq!(decoded, values);
//! ```
//!
//! ## What to expect
//!
//! Compression depends entirely on how predictable the stream is:
//!
//! - **Smooth series** (slowly varying sensors): deltas are small, most
//!   lanes shrink to two bytes or fewer.
//! - **Repeating structure** (periodic signals, interleaved channels): the
//!   hashed predictor cancels recurring deltas to zero-byte lanes.
//! - **Random data**: nothing to exploit; the stream tops out at about 9/8
//!   of the input size (the header area is pure overhead).
//!
//! The codec performs no entropy coding and no quantization, holds no state
//! between calls, and never allocates in `encode`/`decode`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codec;
mod error;
mod header;
mod predictor;

pub use codec::{upper_bound, LaneCodec, Predictor, StreamInfo};
pub use error::LanePackError;

/// Convenience type alias for Results with LanePackError.
pub type Result<T> = std::result::Result<T, LanePackError>;
