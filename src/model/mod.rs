//! The data model: a single timestamped 3-axis sample and the ordered,
//! appendable collection of samples the codec family operates on.

mod reading;
mod set;

pub use reading::Reading;
pub use set::{AxisRanges, ReadingSet};

/// Number of float components per reading (x, y, z).
pub const AXES: usize = 3;
