//! Stream layers beneath the codec family.
//!
//! Two layers compose here: `bit` gives bit-granular access over any
//! byte-oriented stream, and `word` encodes fixed-width big-endian numerics
//! over any byte-oriented stream. Because `BitWriter`/`BitReader` also
//! implement `io::Write`/`io::Read`, the word layer runs equally well over a
//! raw sink, a gzip filter, or a bit stream - the layers stack in whatever
//! order a wire format requires.

pub mod bit;
pub mod word;

pub use bit::{BitReader, BitWriter};
pub use word::{ByteReader, ByteWriter};
