//! IMPL: the XPK sub-codec counterpart of `IMP` (distinct type code). Bit-level grammar is
//! out of scope; see `stub`.

use crate::buffer::Buffer;
use crate::fourcc::fourcc;
use crate::subdecompressor::XpkSubDecompressor;

use super::stub::StubSubDecompressor;

const FOURCC_XPK: u32 = fourcc(b"IMPL");

pub fn detect_header_xpk(hdr: u32) -> bool {
    hdr == FOURCC_XPK
}

pub fn create_xpk<'a>(_payload: &'a dyn Buffer) -> Box<dyn XpkSubDecompressor + 'a> {
    Box::new(StubSubDecompressor::new("XPK-IMPL"))
}
