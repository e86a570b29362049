//! Lossy 8-bit downscaling: a six-float range header followed by one signed
//! byte per component, three bytes per reading. Reversible up to one
//! quantization step, `range / 127`, per axis.

use std::io::{self, Read, Write};

use crate::codec::quantize;
use crate::codec::CodecRunState;
use crate::error::CodecError;
use crate::model::{ReadingSet, AXES};
use crate::stream::{ByteReader, ByteWriter};

pub(crate) fn write<W: Write>(sink: W, set: &ReadingSet) -> Result<(), CodecError> {
    let ranges = set.ranges()?;
    let mut writer = ByteWriter::new(sink);
    quantize::write_header(&mut writer, &ranges)?;

    let mut sink = writer.into_inner();
    for reading in set {
        let mut sample = [0u8; AXES];
        for (axis, &value) in reading.components().iter().enumerate() {
            sample[axis] =
                quantize::quantize(value, ranges.min[axis], ranges.range(axis)) as u8;
        }
        sink.write_all(&sample)?;
    }
    Ok(())
}

pub(crate) fn read<R: Read>(source: R) -> Result<CodecRunState, CodecError> {
    let mut reader = ByteReader::new(source);
    let ranges = quantize::read_header(&mut reader)?;

    let mut state = CodecRunState {
        ranges: Some(ranges),
        ..CodecRunState::default()
    };
    let mut src = reader.into_inner();
    let mut sample = [0u8; AXES];
    while read_sample(&mut src, &mut sample)? {
        let mut components = [0.0f32; AXES];
        for axis in 0..AXES {
            components[axis] = quantize::dequantize(
                sample[axis] as i8,
                ranges.min[axis],
                ranges.range(axis),
            );
        }
        state.push_components(components);
    }
    Ok(state)
}

/// Fills one 3-byte sample. `Ok(false)` on a clean EOF at a sample boundary;
/// EOF mid-sample is a truncation error.
fn read_sample<R: Read>(src: &mut R, buf: &mut [u8; AXES]) -> Result<bool, CodecError> {
    let mut filled = 0;
    while filled < AXES {
        match src.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => {
                return Err(CodecError::TruncatedStream {
                    expected: AXES,
                    got: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Reading;

    #[test]
    fn test_header_then_three_bytes_per_reading() {
        let mut set = ReadingSet::new();
        set.push(Reading::new(1.0, -1.0, 0.5, 100).unwrap());
        set.push(Reading::new(2.0, -2.0, 1.0, 200).unwrap());
        let mut buf = Vec::new();
        write(&mut buf, &set).unwrap();
        assert_eq!(buf.len(), 24 + 2 * AXES);
        // Header leads with maxX.
        assert_eq!(&buf[0..4], &2.0f32.to_be_bytes());
    }

    #[test]
    fn test_empty_set_fails() {
        let mut buf = Vec::new();
        assert!(matches!(
            write(&mut buf, &ReadingSet::new()),
            Err(CodecError::EmptyDataset)
        ));
    }

    #[test]
    fn test_truncated_sample_is_an_error() {
        let mut set = ReadingSet::new();
        set.push(Reading::new(0.0, 1.0, 2.0, 0).unwrap());
        let mut buf = Vec::new();
        write(&mut buf, &set).unwrap();
        buf.truncate(buf.len() - 1);
        assert!(matches!(
            read(&buf[..]),
            Err(CodecError::TruncatedStream { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_truncated_header_is_an_error() {
        let buf = [0u8; 10];
        assert!(matches!(
            read(&buf[..]),
            Err(CodecError::TruncatedStream { .. })
        ));
    }
}
