use std::io::Cursor;

use binrw::{BinRead, Endian};

use super::error::{DecodeError, DecodeResult};

/// Forward-only reader over an in-memory MS3D buffer.
///
/// Every read is atomic: it either yields exactly `n` bytes and advances the
/// offset by `n`, or fails with [`DecodeError::TruncatedInput`] and leaves
/// the offset untouched. There is no seek or rewind.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Take the next `n` bytes. `context` names the field for error reporting.
    pub fn read(&mut self, n: usize, context: &'static str) -> DecodeResult<&'a [u8]> {
        let available = self.remaining();
        if n > available {
            return Err(DecodeError::TruncatedInput {
                offset: self.position,
                needed: n,
                available,
                context,
            });
        }

        let slice = &self.data[self.position..self.position + n];
        self.position += n;
        Ok(slice)
    }

    /// Take the next `N` bytes as a fixed-size array.
    pub fn read_array<const N: usize>(&mut self, context: &'static str) -> DecodeResult<[u8; N]> {
        let slice = self.read(N, context)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(slice);
        Ok(buf)
    }

    /// Take one fixed-size record of `size` bytes and decode it with binrw.
    pub fn read_record<T>(&mut self, size: usize, context: &'static str) -> DecodeResult<T>
    where
        T: for<'b> BinRead<Args<'b> = ()>,
    {
        let offset = self.position;
        let bytes = self.read(size, context)?;
        T::read_options(&mut Cursor::new(bytes), Endian::Little, ()).map_err(|_| {
            DecodeError::TruncatedInput {
                offset,
                needed: size,
                available: bytes.len(),
                context,
            }
        })
    }
}
