//! This file is the root of the `triax_codec` Rust crate.
//!
//! The library is a small binary serialization and compression-benchmarking
//! toolkit for fixed-shape 3-axis floating-point sensor samples. It layers a
//! bit-granular stream abstraction beneath a fixed-width big-endian numeric
//! codec, and dispatches a closed family of compression strategies through one
//! uniform `write`/`read`/`ratio` contract so the strategies can be measured
//! against each other on the same dataset.
//!
//! Module map:
//! 1. `stream` - the bit-level and word-level stream layers.
//! 2. `model`  - `Reading` and `ReadingSet`, the data being compressed.
//! 3. `codec`  - the `Codec` variant family plus `CodecStats`/`CodecRunState`.
//! 4. `persist` - adapter glue for checkpointing a set into an externally
//!    supplied hierarchical tagged-record store.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod codec;
pub mod model;
pub mod persist;
pub mod stream;

mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use codec::{Codec, CodecRunState, CodecStats};
pub use error::CodecError;
pub use model::{AxisRanges, Reading, ReadingSet};
