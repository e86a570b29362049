//! The codec family: a closed set of compression strategies over a
//! [`ReadingSet`], dispatched through one uniform `write`/`read`/`ratio`
//! contract so every variant can be benchmarked against the same dataset.
//!
//! Variants differ along two axes: how a component is represented (full
//! `f32`, an 8-bit quantized level, or a 4-bit nybble) and whether the byte
//! sequence is additionally wrapped in a gzip stream filter. Stream layers
//! compose by construction - sink, optional gzip filter, optional bit stream,
//! word codec - and every layer a `write` opens is finalized before the call
//! returns.
//!
//! Decode state is an explicit [`CodecRunState`] value returned by `read`,
//! never retained inside the codec, so a single `Codec` is freely reusable
//! across unrelated encode/decode cycles.

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;

use crate::error::CodecError;
use crate::model::{AxisRanges, ReadingSet, AXES};

mod downscale;
mod nybble;
mod quantize;
mod raw;

//==================================================================================
// 1. The variant family
//==================================================================================

/// A compression strategy over a [`ReadingSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Fixed-width records, no header. The benchmarking baseline; its ratio
    /// is 1.0 by definition.
    Uncompressed,
    /// The uncompressed payload behind a gzip filter. Demonstrates how poorly
    /// raw IEEE-754 bit patterns entropy-code.
    Gzip,
    /// 8-bit quantization per axis behind a six-float range header.
    ByteDownscaling,
    /// The byte-downscaled stream behind a gzip filter.
    ByteDownscalingGzip,
    /// 4-bit quantization, three nybbles per reading packed through a bit
    /// stream shared with the header.
    NybbleDownsampling,
    /// The nybble-packed stream behind a gzip filter.
    NybbleDownsamplingGzip,
}

impl Codec {
    /// Every variant, in increasing sophistication; the benchmarking order.
    pub const ALL: [Codec; 6] = [
        Codec::Uncompressed,
        Codec::Gzip,
        Codec::ByteDownscaling,
        Codec::ByteDownscalingGzip,
        Codec::NybbleDownsampling,
        Codec::NybbleDownsamplingGzip,
    ];

    /// Stable label for logs and benchmark reports.
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Uncompressed => "uncompressed",
            Codec::Gzip => "gzip",
            Codec::ByteDownscaling => "byte-downscaling",
            Codec::ByteDownscalingGzip => "byte-downscaling-gzip",
            Codec::NybbleDownsampling => "nybble-downsampling",
            Codec::NybbleDownsamplingGzip => "nybble-downsampling-gzip",
        }
    }

    /// Serializes `set` into `sink`. Every wrapping layer this call opens
    /// (gzip filter, bit stream) is finalized before returning; on error the
    /// caller must discard the partially written output.
    pub fn write<W: Write>(&self, mut sink: W, set: &ReadingSet) -> Result<(), CodecError> {
        debug!("{}: writing {} readings", self.name(), set.len());
        match self {
            Codec::Uncompressed => raw::write(&mut sink, set)?,
            Codec::Gzip => {
                let mut gz = GzEncoder::new(&mut sink, Compression::default());
                raw::write(&mut gz, set)?;
                gz.try_finish()?;
            }
            Codec::ByteDownscaling => downscale::write(&mut sink, set)?,
            Codec::ByteDownscalingGzip => {
                let mut gz = GzEncoder::new(&mut sink, Compression::default());
                downscale::write(&mut gz, set)?;
                gz.try_finish()?;
            }
            Codec::NybbleDownsampling => nybble::write(&mut sink, set)?,
            Codec::NybbleDownsamplingGzip => {
                let mut gz = GzEncoder::new(&mut sink, Compression::default());
                nybble::write(&mut gz, set)?;
                gz.try_finish()?;
            }
        }
        sink.flush()?;
        Ok(())
    }

    /// Decodes `source` to exhaustion into a fresh [`CodecRunState`].
    pub fn read<R: Read>(&self, source: R) -> Result<CodecRunState, CodecError> {
        let state = match self {
            Codec::Uncompressed => raw::read(source)?,
            Codec::Gzip => raw::read(GzDecoder::new(source))?,
            Codec::ByteDownscaling => downscale::read(source)?,
            Codec::ByteDownscalingGzip => downscale::read(GzDecoder::new(source))?,
            Codec::NybbleDownsampling => nybble::read(source)?,
            Codec::NybbleDownsamplingGzip => nybble::read(GzDecoder::new(source))?,
        };
        debug!("{}: decoded {} readings", self.name(), state.x_values.len());
        Ok(state)
    }

    /// Compresses `set` into an in-memory buffer and reports size against
    /// [`ReadingSet::raw_byte_size`]. The buffer is discarded; nothing is
    /// decoded.
    pub fn ratio(&self, set: &ReadingSet) -> Result<CodecStats, CodecError> {
        if set.is_empty() {
            return Err(CodecError::EmptyDataset);
        }
        let mut buf = Vec::new();
        self.write(&mut buf, set)?;
        let stats = CodecStats {
            ratio: buf.len() as f64 / set.raw_byte_size() as f64,
            length: buf.len() as u64,
        };
        debug!(
            "{}: {} readings -> {} bytes, ratio {:.4}",
            self.name(),
            set.len(),
            stats.length,
            stats.ratio
        );
        Ok(stats)
    }
}

//==================================================================================
// 2. Decode state and benchmark stats
//==================================================================================

/// Per-call decode output: the reconstructed per-axis arrays plus, for
/// quantizing variants, the range parameters recovered from the header.
/// `timestamps` is populated only by the lossless variants; the quantized
/// wire format does not carry timestamps.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CodecRunState {
    pub x_values: Vec<f32>,
    pub y_values: Vec<f32>,
    pub z_values: Vec<f32>,
    pub timestamps: Vec<i64>,
    pub ranges: Option<AxisRanges>,
}

impl CodecRunState {
    pub(crate) fn push_components(&mut self, components: [f32; AXES]) {
        self.x_values.push(components[0]);
        self.y_values.push(components[1]);
        self.z_values.push(components[2]);
    }
}

/// Compressed-size measurement for one codec + dataset pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecStats {
    /// Compressed length divided by the raw fixed-width length.
    pub ratio: f64,
    /// Compressed length in bytes.
    pub length: u64,
}

//==================================================================================
// 3. Family-level Tests
//==================================================================================
