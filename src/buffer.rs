//! Bounds-checked byte buffers and zero-copy sub-buffer views.
//!
//! Every top-level and sub-codec reads its packed input exclusively through the [`Buffer`]
//! trait. A read that would run past the end of the buffer returns [`Error::OutOfBounds`]
//! rather than producing undefined behavior or a short read.

use crate::error::{Error, Result};

/// A contiguous, read-only byte region with bounds-checked primitive reads.
///
/// Implemented for `&[u8]`, `Vec<u8>`, and [`SubBuffer`] so that a packed buffer, an owned
/// output buffer, and a narrowed view over either can all be passed around uniformly.
pub trait Buffer {
    fn size(&self) -> usize;
    fn data(&self) -> &[u8];

    fn read_u8(&self, offset: usize) -> Result<u8> {
        self.data()
            .get(offset)
            .copied()
            .ok_or(Error::OutOfBounds)
    }

    fn read_u16be(&self, offset: usize) -> Result<u16> {
        let bytes = self.slice(offset, 2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u16le(&self, offset: usize) -> Result<u16> {
        let bytes = self.slice(offset, 2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32be(&self, offset: usize) -> Result<u32> {
        let bytes = self.slice(offset, 4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u32le(&self, offset: usize) -> Result<u32> {
        let bytes = self.slice(offset, 4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u64be(&self, offset: usize) -> Result<u64> {
        let bytes = self.slice(offset, 8)?;
        Ok(u64::from_be_bytes(bytes.try_into().unwrap()))
    }

    fn read_u64le(&self, offset: usize) -> Result<u64> {
        let bytes = self.slice(offset, 8)?;
        Ok(u64::from_le_bytes(bytes.try_into().unwrap()))
    }

    /// Returns a bounds-checked slice of `len` bytes starting at `offset`.
    fn slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let data = self.data();
        let end = offset.checked_add(len).ok_or(Error::OutOfBounds)?;
        if end > data.len() {
            return Err(Error::OutOfBounds);
        }
        Ok(&data[offset..end])
    }
}

impl Buffer for [u8] {
    fn size(&self) -> usize {
        self.len()
    }

    fn data(&self) -> &[u8] {
        self
    }
}

impl Buffer for Vec<u8> {
    fn size(&self) -> usize {
        self.len()
    }

    fn data(&self) -> &[u8] {
        self
    }
}

impl<B: Buffer + ?Sized> Buffer for &B {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn data(&self) -> &[u8] {
        (**self).data()
    }
}

/// A mutable byte region. Implemented for `Vec<u8>`, the only owned output buffer this
/// crate produces.
pub trait MutableBuffer: Buffer {
    fn data_mut(&mut self) -> &mut [u8];

    /// Grows or shrinks the buffer in place, zero-filling new bytes. Fails if the
    /// allocation cannot be satisfied.
    fn resize(&mut self, new_size: usize) -> Result<()>;
}

impl MutableBuffer for Vec<u8> {
    fn data_mut(&mut self) -> &mut [u8] {
        self
    }

    fn resize(&mut self, new_size: usize) -> Result<()> {
        // `Vec::resize` aborts the process on allocation failure rather than returning a
        // `Result`; we cannot do better than that from safe Rust, but we keep the fallible
        // signature so callers are not tempted to assume infallibility.
        self.resize(new_size, 0u8);
        Ok(())
    }
}

/// A non-owning, read-only view (offset, length) into a parent [`Buffer`].
///
/// The view borrows its parent for the lifetime `'a` and cannot be constructed to escape
/// that borrow, nor to cover a range outside the parent's current bounds.
pub struct SubBuffer<'a> {
    parent: &'a dyn Buffer,
    offset: usize,
    len: usize,
}

impl<'a> SubBuffer<'a> {
    /// Builds a view covering `[offset, offset + len)` of `parent`. Fails if that range
    /// escapes the parent's bounds.
    pub fn new(parent: &'a dyn Buffer, offset: usize, len: usize) -> Result<Self> {
        let end = offset.checked_add(len).ok_or(Error::OutOfBounds)?;
        if end > parent.size() {
            return Err(Error::OutOfBounds);
        }
        Ok(Self { parent, offset, len })
    }
}

impl<'a> Buffer for SubBuffer<'a> {
    fn size(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        &self.parent.data()[self.offset..self.offset + self.len]
    }
}

/// A non-owning, mutable view (offset, length) into a parent [`MutableBuffer`].
pub struct SubBufferMut<'a> {
    parent: &'a mut [u8],
    offset: usize,
    len: usize,
}

impl<'a> SubBufferMut<'a> {
    pub fn new(parent: &'a mut dyn MutableBuffer, offset: usize, len: usize) -> Result<Self> {
        let end = offset.checked_add(len).ok_or(Error::OutOfBounds)?;
        if end > parent.size() {
            return Err(Error::OutOfBounds);
        }
        Ok(Self {
            parent: parent.data_mut(),
            offset,
            len,
        })
    }
}

impl<'a> Buffer for SubBufferMut<'a> {
    fn size(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        &self.parent[self.offset..self.offset + self.len]
    }
}

impl<'a> MutableBuffer for SubBufferMut<'a> {
    fn data_mut(&mut self) -> &mut [u8] {
        &mut self.parent[self.offset..self.offset + self.len]
    }

    fn resize(&mut self, _new_size: usize) -> Result<()> {
        // A view can never grow or shrink its parent.
        Err(Error::InvalidFormat)
    }
}
