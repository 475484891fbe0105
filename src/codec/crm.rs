//! CRM: recognized at both the top level and as an XPK sub-codec. Bit-level grammar is out
//! of scope; see `stub`.

use crate::buffer::Buffer;
use crate::decompressor::Decompressor;
use crate::fourcc::fourcc;
use crate::subdecompressor::XpkSubDecompressor;

use super::stub::{StubDecompressor, StubSubDecompressor};

const FOURCC_TOP: u32 = fourcc(b"CrLZ");
const FOURCC_XPK: u32 = fourcc(b"CRM ");

pub fn detect_header(hdr: u32) -> bool {
    hdr == FOURCC_TOP
}

pub fn detect_header_xpk(hdr: u32) -> bool {
    hdr == FOURCC_XPK
}

pub fn create<'a>(_packed: &'a dyn Buffer) -> Box<dyn Decompressor + 'a> {
    Box::new(StubDecompressor::new("CRM"))
}

pub fn create_xpk<'a>(_payload: &'a dyn Buffer) -> Box<dyn XpkSubDecompressor + 'a> {
    Box::new(StubSubDecompressor::new("XPK-CRM"))
}
