use core::fmt::{Debug, Display, Formatter};

/// Errors possible when reading from a [`ByteReader`]
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum ByteIoError {
    /// Not enough bytes to satisfy a read
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes that were left
    NotEnoughBytes(usize, usize),
    /// Tried to move the cursor before the start of the stream
    SeekBeforeStart(usize, usize)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::SeekBeforeStart(position, amount) => {
                writeln!(
                    f,
                    "Cannot rewind {amount} bytes from position {position}, it's before stream start"
                )
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

/// An encapsulation of a byte stream reader
///
/// This provides an interface similar to [std::io::Cursor] but
/// with single byte reads that never panic and access to the remaining
/// bytes as a borrowed slice.
pub struct ByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new instance of the byte stream
    pub const fn new(buf: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Skip `num` bytes ahead of the stream.
    ///
    /// Skipping past the end is allowed, the reader simply reports eof afterwards
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num);
    }

    /// Undo a buffer read by moving the position pointer `num`
    /// bytes behind.
    #[inline]
    pub fn rewind(&mut self, num: usize) -> Result<(), ByteIoError> {
        if num > self.position {
            return Err(ByteIoError::SeekBeforeStart(self.position, num));
        }
        self.position -= num;
        Ok(())
    }

    /// Return whether the underlying buffer
    /// has `num` bytes available for reading
    #[inline]
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }

    /// Get number of bytes available in the stream
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Get current position of the buffer.
    #[inline]
    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Return true whether or not we read to the end of the
    /// buffer and have no more bytes left.
    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Retrieve a byte from the underlying stream
    /// returning 0 if there are no more bytes available
    ///
    /// This means 0 might indicate a bit or an end of stream, but
    /// callers are expected to check [`eof`](Self::eof) first
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Retrieve a byte from the underlying stream
    /// returning an error if there are no more bytes available
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Look at the next byte without advancing the position
    #[inline(always)]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Get a part of the bytestream as a reference.
    ///
    /// This increments the position to point past the bytestream
    /// if position+num is in bounds
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], ByteIoError> {
        match self.stream.get(self.position..self.position.saturating_add(num)) {
            Some(bytes) => {
                self.position += num;
                Ok(bytes)
            }
            None => Err(ByteIoError::NotEnoughBytes(num, self.remaining()))
        }
    }

    /// Return a reference to all bytes that have not been read yet
    /// without moving the position
    pub fn remaining_bytes(&self) -> &'a [u8] {
        self.stream.get(self.position..).unwrap_or(&[])
    }
}
