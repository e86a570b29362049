//! Shared quantization math and the six-float range header used by every
//! lossy codec variant.
//!
//! A component is mapped onto 128 levels of its axis range with
//! `round(((v - min) / range) * 127)` and reconstructed with
//! `(level / 127) * range + min`. The mapping is monotonic and reversible up
//! to one quantization step, `range / 127`. A degenerate axis
//! (`range == 0`, every sample identical) is special-cased: the level is
//! pinned to 0 and reconstruction returns the constant directly, so the IEEE
//! division-by-zero result never reaches the stream.
//!
//! The nybble variants keep only the top 4 bits of the 7-bit magnitude,
//! widening the step to `16 * range / 127`.

use std::io::{Read, Write};

use crate::error::CodecError;
use crate::model::{AxisRanges, AXES};
use crate::stream::{ByteReader, ByteWriter};

/// Bits kept per component by the nybble variants.
pub(crate) const NYBBLE_SIZE: u32 = 4;
/// Bits discarded from the quantized byte to form a nybble.
pub(crate) const NYBBLE_LEFT: u32 = 8 - NYBBLE_SIZE;

//==================================================================================
// 1. Level mapping
//==================================================================================

/// Maps a component onto its axis's 127-level scale.
pub(crate) fn quantize(value: f32, min: f32, range: f32) -> i8 {
    if range == 0.0 {
        return 0;
    }
    (((value - min) / range) * 127.0).round() as i8
}

/// Reconstructs a component from its quantized level. With `range == 0` this
/// collapses to `min`, the constant value of a degenerate axis.
pub(crate) fn dequantize(level: i8, min: f32, range: f32) -> f32 {
    (f32::from(level) / 127.0) * range + min
}

/// Truncates a quantized level to its top 4 bits.
pub(crate) fn to_nybble(level: i8) -> u8 {
    ((level >> NYBBLE_LEFT) & 0x0F) as u8
}

/// Re-widens a 4-bit group back to a quantized level.
pub(crate) fn from_nybble(bits: u32) -> i8 {
    ((bits as u8) << NYBBLE_LEFT) as i8
}

//==================================================================================
// 2. Range header
//==================================================================================

/// Writes the six reconstruction parameters in wire order:
/// `maxX, minX, maxY, minY, maxZ, minZ`.
pub(crate) fn write_header<W: Write>(
    writer: &mut ByteWriter<W>,
    ranges: &AxisRanges,
) -> Result<(), CodecError> {
    for axis in 0..AXES {
        writer.write_float(ranges.max[axis])?;
        writer.write_float(ranges.min[axis])?;
    }
    Ok(())
}

/// Reads the range header back, in the exact order it was written. Every
/// quantizing decode must call this before touching sample data.
pub(crate) fn read_header<R: Read>(
    reader: &mut ByteReader<R>,
) -> Result<AxisRanges, CodecError> {
    let mut ranges = AxisRanges {
        min: [0.0; AXES],
        max: [0.0; AXES],
    };
    for axis in 0..AXES {
        ranges.max[axis] = reader.read_float()?;
        ranges.min[axis] = reader.read_float()?;
    }
    Ok(ranges)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints_map_exactly() {
        assert_eq!(quantize(-3.0, -3.0, 5.0), 0);
        assert_eq!(quantize(2.0, -3.0, 5.0), 127);
        assert_eq!(dequantize(0, -3.0, 5.0), -3.0);
        assert_eq!(dequantize(127, -3.0, 5.0), 2.0);
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        assert_eq!(quantize(2.0, 2.0, 0.0), 0);
        assert_eq!(dequantize(0, 2.0, 0.0), 2.0);
    }

    #[test]
    fn test_nybble_truncation() {
        assert_eq!(to_nybble(127), 7);
        assert_eq!(from_nybble(7), 112);
        assert_eq!(to_nybble(0), 0);
        assert_eq!(from_nybble(0), 0);
        // A nybble survives its own round trip.
        for level in 0..=127i8 {
            let nyb = to_nybble(level);
            assert_eq!(to_nybble(from_nybble(u32::from(nyb))), nyb);
        }
    }

    #[test]
    fn test_header_roundtrip_order() {
        let ranges = AxisRanges {
            min: [-1.0, -2.0, -3.0],
            max: [1.0, 2.0, 3.0],
        };
        let mut buf = Vec::new();
        let mut writer = crate::stream::ByteWriter::new(&mut buf);
        write_header(&mut writer, &ranges).unwrap();
        assert_eq!(buf.len(), 24);
        // First field on the wire is maxX.
        assert_eq!(&buf[0..4], &1.0f32.to_be_bytes());
        assert_eq!(&buf[4..8], &(-1.0f32).to_be_bytes());

        let mut reader = crate::stream::ByteReader::new(&buf[..]);
        assert_eq!(read_header(&mut reader).unwrap(), ranges);
    }

    proptest! {
        #[test]
        fn prop_byte_error_within_one_step(
            values in prop::collection::vec(-100.0f32..100.0, 2..64)
        ) {
            let min = values.iter().copied().fold(f32::INFINITY, f32::min);
            let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let range = max - min;
            prop_assume!(range > 0.0);
            for &v in &values {
                let rebuilt = dequantize(quantize(v, min, range), min, range);
                prop_assert!((rebuilt - v).abs() <= range / 127.0);
            }
        }

        #[test]
        fn prop_nybble_error_within_sixteen_steps(
            values in prop::collection::vec(-100.0f32..100.0, 2..64)
        ) {
            let min = values.iter().copied().fold(f32::INFINITY, f32::min);
            let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let range = max - min;
            prop_assume!(range > 0.0);
            for &v in &values {
                let level = from_nybble(u32::from(to_nybble(quantize(v, min, range))));
                let rebuilt = dequantize(level, min, range);
                prop_assert!((rebuilt - v).abs() <= range * 16.0 / 127.0);
            }
        }

        #[test]
        fn prop_quantize_is_monotonic(a in -50.0f32..50.0, b in -50.0f32..50.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let min = -50.0;
            let range = 100.0;
            prop_assert!(quantize(lo, min, range) <= quantize(hi, min, range));
        }
    }
}
