//! Fixed-width big-endian numeric encoding over any byte-oriented stream.
//!
//! Each value is serialized as its IEEE-754 / two's-complement big-endian
//! byte group (4 bytes for `f32`/`i32`, 8 for `f64`/`i64`) and pushed through
//! the inner stream byte group by byte group. The inner stream can be a raw
//! sink, a gzip filter, or a [`crate::stream::BitWriter`] - in the latter case
//! numeric fields land at whatever bit alignment the surrounding payload
//! dictates.
//!
//! Reads are checked: a stream that ends inside a fixed-width field fails with
//! [`CodecError::TruncatedStream`] instead of returning undefined bytes. The
//! `try_read_*` form exists for decode loops that terminate on a clean EOF at
//! a value boundary.

use std::io::{self, Read, Write};

use crate::error::CodecError;

//==================================================================================
// 1. Writer
//==================================================================================

/// Encodes fixed-width big-endian numerics into an inner sink.
pub struct ByteWriter<W: Write> {
    out: W,
}

impl<W: Write> ByteWriter<W> {
    pub fn new(out: W) -> Self {
        ByteWriter { out }
    }

    pub fn write_float(&mut self, value: f32) -> Result<(), CodecError> {
        self.out.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    pub fn write_double(&mut self, value: f64) -> Result<(), CodecError> {
        self.out.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    pub fn write_long(&mut self, value: i64) -> Result<(), CodecError> {
        self.out.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    pub fn write_int(&mut self, value: i32) -> Result<(), CodecError> {
        self.out.write_all(&value.to_be_bytes())?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

//==================================================================================
// 2. Reader
//==================================================================================

/// Decodes fixed-width big-endian numerics from an inner source.
pub struct ByteReader<R: Read> {
    src: R,
}

impl<R: Read> ByteReader<R> {
    pub fn new(src: R) -> Self {
        ByteReader { src }
    }

    pub fn read_float(&mut self) -> Result<f32, CodecError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(f32::from_be_bytes(buf))
    }

    pub fn read_double(&mut self) -> Result<f64, CodecError> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(f64::from_be_bytes(buf))
    }

    pub fn read_long(&mut self) -> Result<i64, CodecError> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(i64::from_be_bytes(buf))
    }

    pub fn read_int(&mut self) -> Result<i32, CodecError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    pub fn into_inner(self) -> R {
        self.src
    }

    /// Reads the next float, or `None` on a clean EOF before its first byte.
    /// EOF inside the field is still a [`CodecError::TruncatedStream`].
    pub fn try_read_float(&mut self) -> Result<Option<f32>, CodecError> {
        let mut buf = [0u8; 4];
        if self.try_fill(&mut buf)? {
            Ok(Some(f32::from_be_bytes(buf)))
        } else {
            Ok(None)
        }
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CodecError> {
        if self.try_fill(buf)? {
            Ok(())
        } else {
            Err(CodecError::TruncatedStream {
                expected: buf.len(),
                got: 0,
            })
        }
    }

    /// Fills `buf` completely, returning `false` only when the source was
    /// already exhausted before the first byte.
    fn try_fill(&mut self, buf: &mut [u8]) -> Result<bool, CodecError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.src.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(false),
                Ok(0) => {
                    return Err(CodecError::TruncatedStream {
                        expected: buf.len(),
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
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
