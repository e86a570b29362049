//! A single 3-axis accelerometer sample.

use crate::error::CodecError;
use crate::model::AXES;

/// One timestamped 3-component float sample. Immutable after construction.
///
/// Construction validates every component, so a reading holding a NaN or
/// infinite value cannot exist; malformed sensor callbacks are rejected before
/// they can enter a [`crate::model::ReadingSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    components: [f32; AXES],
    timestamp: i64,
}

impl Reading {
    /// Serialized width of one reading: three `f32` components plus an `i64`
    /// timestamp, 20 bytes.
    pub const ENCODED_SIZE: usize = AXES * 4 + 8;

    /// Builds a reading from its components and a monotonic device timestamp
    /// in nanoseconds. Fails if any component is NaN or infinite.
    pub fn new(x: f32, y: f32, z: f32, timestamp: i64) -> Result<Self, CodecError> {
        Self::from_components([x, y, z], timestamp)
    }

    pub fn from_components(components: [f32; AXES], timestamp: i64) -> Result<Self, CodecError> {
        for &value in &components {
            if !value.is_finite() {
                return Err(CodecError::NonFiniteComponent(value));
            }
        }
        Ok(Reading {
            components,
            timestamp,
        })
    }

    pub fn x(&self) -> f32 {
        self.components[0]
    }

    pub fn y(&self) -> f32 {
        self.components[1]
    }

    pub fn z(&self) -> f32 {
        self.components[2]
    }

    pub fn components(&self) -> [f32; AXES] {
        self.components
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
