//! Bit-granular reading and writing over any byte-oriented stream.
//!
//! Bits are packed least-significant-bit first within each byte. The writer
//! holds one in-progress byte and flushes it to the inner sink whenever the
//! bit position wraps; `finish` pads the final partial byte with zero bits so
//! no written bit is ever lost. The reader mirrors this, pulling a fresh byte
//! from the inner source whenever its position wraps.
//!
//! Both ends also implement the std I/O traits (a byte is just an 8-bit
//! group), so byte-oriented layers such as [`crate::stream::word`] or a gzip
//! filter compose directly over a bit stream.

use std::io::{self, Read, Write};

//==================================================================================
// 1. Writer
//==================================================================================

/// Writes individual bits or N-bit groups, LSB first, to an inner sink.
pub struct BitWriter<W: Write> {
    out: W,
    current: u8,
    /// Bit position inside `current`, always in `[0, 8)`.
    pos: u8,
}

impl<W: Write> BitWriter<W> {
    pub fn new(out: W) -> Self {
        BitWriter {
            out,
            current: 0,
            pos: 0,
        }
    }

    /// Writes the low bit of `bit` at the current position.
    pub fn write_bit(&mut self, bit: u8) -> io::Result<()> {
        self.current |= (bit & 1) << self.pos;
        self.pos = (self.pos + 1) % 8;
        if self.pos == 0 {
            self.out.write_all(&[self.current])?;
            self.current = 0;
        }
        Ok(())
    }

    /// Writes the `bits` least-significant bits of `word`, LSB first.
    pub fn write_bits(&mut self, word: u32, bits: u32) -> io::Result<()> {
        for i in 0..bits {
            self.write_bit((word >> i) as u8)?;
        }
        Ok(())
    }

    /// Pads the in-progress byte with zero bits up to the next byte boundary,
    /// flushes the inner sink, and returns it.
    ///
    /// Every write path must end with `finish`; dropping the writer instead
    /// silently discards up to 7 buffered bits.
    pub fn finish(mut self) -> io::Result<W> {
        while self.pos != 0 {
            self.write_bit(0)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Write for BitWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            self.write_bits(u32::from(byte), 8)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Only whole bytes can be flushed; buffered bits stay until `finish`.
        self.out.flush()
    }
}

//==================================================================================
// 2. Reader
//==================================================================================

/// Reads individual bits or N-bit groups, LSB first, from an inner source.
pub struct BitReader<R: Read> {
    src: R,
    current: u8,
    /// Bit position inside `current`, always in `[0, 8)`.
    pos: u8,
}

impl<R: Read> BitReader<R> {
    pub fn new(src: R) -> Self {
        BitReader {
            src,
            current: 0,
            pos: 0,
        }
    }

    /// Reads one bit. `Ok(None)` means the inner source was exhausted at a
    /// byte boundary.
    pub fn read_bit(&mut self) -> io::Result<Option<u8>> {
        if self.pos == 0 {
            let mut byte = [0u8; 1];
            match self.src.read_exact(&mut byte) {
                Ok(()) => self.current = byte[0],
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
                Err(e) => return Err(e),
            }
        }
        let bit = (self.current >> self.pos) & 1;
        self.pos = (self.pos + 1) % 8;
        Ok(Some(bit))
    }

    /// Reads a `bits`-wide group, LSB first.
    ///
    /// EOF before the first bit of the group yields `Ok(None)`. EOF after at
    /// least one bit has been consumed yields the bits accumulated so far as a
    /// short value; a group that spans past the end of input is truncated, not
    /// lost.
    pub fn read_bits(&mut self, bits: u32) -> io::Result<Option<u32>> {
        let mut word = 0u32;
        for i in 0..bits {
            match self.read_bit()? {
                Some(bit) => word |= u32::from(bit) << i,
                None if i == 0 => return Ok(None),
                None => return Ok(Some(word)),
            }
        }
        Ok(Some(word))
    }
}

impl<R: Read> Read for BitReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read_bits(8)? {
                Some(byte) => {
                    buf[filled] = byte as u8;
                    filled += 1;
                }
                None => break,
            }
        }
        Ok(filled)
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
