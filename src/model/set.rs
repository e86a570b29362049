//! The ordered, appendable collection of readings, with per-axis aggregate
//! queries and a dedicated count-prefixed byte format for whole-collection
//! round trips outside the codec family.

use std::io::{Read, Write};

use crate::error::CodecError;
use crate::model::{Reading, AXES};
use crate::stream::{ByteReader, ByteWriter};

//==================================================================================
// 1. Per-axis extrema
//==================================================================================

/// Minimum and maximum per axis over a non-empty reading set. These six
/// scalars are the reconstruction parameters of the quantizing codecs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRanges {
    pub min: [f32; AXES],
    pub max: [f32; AXES],
}

impl AxisRanges {
    /// Value spread on one axis. Zero when every sample on the axis is
    /// identical (the degenerate-range case the quantizers special-case).
    pub fn range(&self, axis: usize) -> f32 {
        self.max[axis] - self.min[axis]
    }
}

//==================================================================================
// 2. ReadingSet
//==================================================================================

/// Insertion-ordered collection of [`Reading`]s.
///
/// Mutated only by `push` and by bulk clear-then-repopulate decodes. Hand-off
/// between an acquisition stage and a benchmarking stage is by ownership
/// transfer; the collection carries no internal locking.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReadingSet {
    readings: Vec<Reading>,
}

impl ReadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, reading: Reading) {
        self.readings.push(reading);
    }

    pub fn get(&self, index: usize) -> Option<&Reading> {
        self.readings.get(index)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }

    /// Uncompressed size estimate: one fixed-width record per reading.
    pub fn raw_byte_size(&self) -> usize {
        self.readings.len() * Reading::ENCODED_SIZE
    }

    /// Computes per-axis minima and maxima in one pass.
    pub fn ranges(&self) -> Result<AxisRanges, CodecError> {
        let first = self.readings.first().ok_or(CodecError::EmptyDataset)?;
        let mut ranges = AxisRanges {
            min: first.components(),
            max: first.components(),
        };
        for reading in &self.readings[1..] {
            for (axis, &value) in reading.components().iter().enumerate() {
                if value < ranges.min[axis] {
                    ranges.min[axis] = value;
                }
                if value > ranges.max[axis] {
                    ranges.max[axis] = value;
                }
            }
        }
        Ok(ranges)
    }

    //==============================================================================
    // Dedicated byte-array format: `i32 count | count x (f32 x, f32 y, f32 z, i64 t)`
    //==============================================================================

    /// Serializes the whole collection with a 4-byte record count prefix.
    pub fn write_bytes<W: Write>(&self, sink: W) -> Result<(), CodecError> {
        let mut writer = ByteWriter::new(sink);
        writer.write_int(self.readings.len() as i32)?;
        for reading in &self.readings {
            writer.write_float(reading.x())?;
            writer.write_float(reading.y())?;
            writer.write_float(reading.z())?;
            writer.write_long(reading.timestamp())?;
        }
        Ok(())
    }

    /// Clears the collection and repopulates it from the count-prefixed byte
    /// format. On any error the collection is left cleared; partially decoded
    /// input is never trusted.
    pub fn read_bytes<R: Read>(&mut self, source: R) -> Result<(), CodecError> {
        self.readings.clear();
        let mut reader = ByteReader::new(source);
        let count = reader.read_int()?;
        if count < 0 {
            return Err(CodecError::InvalidCount(count));
        }
        let mut readings = Vec::new();
        for _ in 0..count {
            let x = reader.read_float()?;
            let y = reader.read_float()?;
            let z = reader.read_float()?;
            let timestamp = reader.read_long()?;
            readings.push(Reading::new(x, y, z, timestamp)?);
        }
        self.readings = readings;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ReadingSet {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
