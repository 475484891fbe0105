//! Top-level codec dispatch: reads the first 32-bit big-endian word of a packed buffer and
//! tries each known magic, in the same order `Decompressor.cpp` does: CRM, DEFLATE, IMP,
//! RNC, TPWM, XPK.

use crate::buffer::Buffer;
use crate::codec;
use crate::decompressor::Decompressor;
use crate::xpk::{self, Xpk};

/// Builds a `Decompressor` for `packed` by inspecting its header magic. Returns `None` if no
/// known codec recognizes it, without attempting to read anything past the first 4 bytes.
pub fn create_decompressor<'a>(packed: &'a dyn Buffer) -> Option<Box<dyn Decompressor + 'a>> {
    let hdr = packed.read_u32be(0).ok()?;

    if let Some(d) = codec::create_top_level(hdr, packed) {
        return Some(d);
    }
    if xpk::detect_header(hdr) {
        return Some(Box::new(Xpk::new(packed)));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_magic_yields_none() {
        let mut data = vec![0u8; 44];
        data[0..4].copy_from_slice(b"ZZZZ");
        assert!(create_decompressor(&data).is_none());
    }
}
