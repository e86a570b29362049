//! Checkpointing glue: converts a [`ReadingSet`] to and from an ordered list
//! of hierarchical tagged records, one compound record per reading with named
//! scalar fields.
//!
//! The tagged-tree storage format itself is an external collaborator; this
//! module only spans the boundary. Whatever node type the host supplies
//! implements [`TaggedRecord`], and the adapter appends or enumerates records
//! through that capability without knowing how the tree is persisted.

use crate::error::CodecError;
use crate::model::{Reading, ReadingSet};

/// Field names of a checkpointed reading.
pub const FIELD_X: &str = "x";
pub const FIELD_Y: &str = "y";
pub const FIELD_Z: &str = "z";
pub const FIELD_TIMESTAMP: &str = "t";

/// The externally supplied tagged-node capability: named float and long
/// fields on one hierarchical record.
pub trait TaggedRecord {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_long(&mut self, name: &str, value: i64);
    fn float(&self, name: &str) -> Option<f32>;
    fn long(&self, name: &str) -> Option<i64>;
}

/// Converts the set into one record per reading, in insertion order.
pub fn to_records<T: TaggedRecord + Default>(set: &ReadingSet) -> Vec<T> {
    set.iter()
        .map(|reading| {
            let mut record = T::default();
            record.set_float(FIELD_X, reading.x());
            record.set_float(FIELD_Y, reading.y());
            record.set_float(FIELD_Z, reading.z());
            record.set_long(FIELD_TIMESTAMP, reading.timestamp());
            record
        })
        .collect()
}

/// Clears `set` and repopulates it from checkpointed records. A record
/// missing one of the named fields fails the whole restore; non-finite
/// components are rejected the same way they are at ingestion.
pub fn from_records<T: TaggedRecord>(
    records: &[T],
    set: &mut ReadingSet,
) -> Result<(), CodecError> {
    set.clear();
    for record in records {
        let x = record.float(FIELD_X).ok_or(CodecError::MissingField("x"))?;
        let y = record.float(FIELD_Y).ok_or(CodecError::MissingField("y"))?;
        let z = record.float(FIELD_Z).ok_or(CodecError::MissingField("z"))?;
        let timestamp = record
            .long(FIELD_TIMESTAMP)
            .ok_or(CodecError::MissingField("t"))?;
        set.push(Reading::new(x, y, z, timestamp)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory stand-in for the host's tagged-tree node.
    #[derive(Default)]
    struct MapRecord {
        floats: HashMap<String, f32>,
        longs: HashMap<String, i64>,
    }

    impl TaggedRecord for MapRecord {
        fn set_float(&mut self, name: &str, value: f32) {
            self.floats.insert(name.to_owned(), value);
        }
        fn set_long(&mut self, name: &str, value: i64) {
            self.longs.insert(name.to_owned(), value);
        }
        fn float(&self, name: &str) -> Option<f32> {
            self.floats.get(name).copied()
        }
        fn long(&self, name: &str) -> Option<i64> {
            self.longs.get(name).copied()
        }
    }

    #[test]
    fn test_checkpoint_roundtrip() {
        let mut set = ReadingSet::new();
        set.push(Reading::new(1.0, -1.0, 0.5, 100).unwrap());
        set.push(Reading::new(2.0, -2.0, 1.0, 200).unwrap());

        let records: Vec<MapRecord> = to_records(&set);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].float(FIELD_X), Some(1.0));
        assert_eq!(records[1].long(FIELD_TIMESTAMP), Some(200));

        let mut restored = ReadingSet::new();
        restored.push(Reading::new(9.0, 9.0, 9.0, 9).unwrap()); // must be cleared
        from_records(&records, &mut restored).unwrap();
        assert_eq!(restored, set);
    }

    #[test]
    fn test_missing_field_fails_restore() {
        let mut record = MapRecord::default();
        record.set_float(FIELD_X, 1.0);
        record.set_float(FIELD_Y, 2.0);
        record.set_long(FIELD_TIMESTAMP, 3);

        let mut set = ReadingSet::new();
        assert!(matches!(
            from_records(&[record], &mut set),
            Err(CodecError::MissingField("z"))
        ));
    }
}
