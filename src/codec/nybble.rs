//! Lossy 4-bit downsampling: the six-float range header and all sample
//! nybbles share one bit stream, so nothing is byte-padded between samples.
//! Each reading contributes three consecutive 4-bit groups, LSB first; the
//! quantized level is truncated to its top 4 bits before packing. Precision
//! loss is two-stage: the 127-level quantization step, then a further 16x
//! coarsening from the truncation.

use std::io::{Read, Write};

use crate::codec::quantize::{self, NYBBLE_SIZE};
use crate::codec::CodecRunState;
use crate::error::CodecError;
use crate::model::{ReadingSet, AXES};
use crate::stream::{BitReader, BitWriter, ByteReader, ByteWriter};

pub(crate) fn write<W: Write>(sink: W, set: &ReadingSet) -> Result<(), CodecError> {
    let ranges = set.ranges()?;
    let mut bits = BitWriter::new(sink);

    let mut writer = ByteWriter::new(&mut bits);
    quantize::write_header(&mut writer, &ranges)?;

    for reading in set {
        for (axis, &value) in reading.components().iter().enumerate() {
            let level = quantize::quantize(value, ranges.min[axis], ranges.range(axis));
            bits.write_bits(u32::from(quantize::to_nybble(level)), NYBBLE_SIZE)?;
        }
    }
    // Pads the trailing partial byte; the decoder discards the pad as an
    // incomplete sample group.
    bits.finish()?;
    Ok(())
}

pub(crate) fn read<R: Read>(source: R) -> Result<CodecRunState, CodecError> {
    let mut bits = BitReader::new(source);
    let ranges = {
        let mut reader = ByteReader::new(&mut bits);
        quantize::read_header(&mut reader)?
    };

    let mut state = CodecRunState {
        ranges: Some(ranges),
        ..CodecRunState::default()
    };
    loop {
        let mut components = [0.0f32; AXES];
        let mut complete = true;
        for axis in 0..AXES {
            match bits.read_bits(NYBBLE_SIZE)? {
                Some(group) => {
                    components[axis] = quantize::dequantize(
                        quantize::from_nybble(group),
                        ranges.min[axis],
                        ranges.range(axis),
                    );
                }
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if !complete {
            // EOF inside a sample group: either the zero pad from `finish` or
            // the end of the stream. Discard and stop.
            break;
        }
        state.push_components(components);
    }
    Ok(state)
}
