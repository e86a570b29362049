//! The uncompressed baseline: each reading emitted as
//! `f32 x | f32 y | f32 z | i64 t`, big-endian, no header. Exists as the
//! size-ratio denominator the lossy variants are measured against, and doubles
//! as the payload of the plain gzip variant.

use std::io::{Read, Write};

use crate::codec::CodecRunState;
use crate::error::CodecError;
use crate::model::ReadingSet;
use crate::stream::{ByteReader, ByteWriter};

pub(crate) fn write<W: Write>(sink: W, set: &ReadingSet) -> Result<(), CodecError> {
    let mut writer = ByteWriter::new(sink);
    for reading in set {
        writer.write_float(reading.x())?;
        writer.write_float(reading.y())?;
        writer.write_float(reading.z())?;
        writer.write_long(reading.timestamp())?;
    }
    Ok(())
}

pub(crate) fn read<R: Read>(source: R) -> Result<CodecRunState, CodecError> {
    let mut state = CodecRunState::default();
    let mut reader = ByteReader::new(source);
    while let Some(x) = reader.try_read_float()? {
        let y = reader.read_float()?;
        let z = reader.read_float()?;
        let timestamp = reader.read_long()?;
        state.push_components([x, y, z]);
        state.timestamps.push(timestamp);
    }
    Ok(state)
}
