//! TPWM: a top-level container magic. Bit-level grammar is out of scope; see `stub`.

use crate::buffer::Buffer;
use crate::decompressor::Decompressor;
use crate::fourcc::fourcc;

use super::stub::StubDecompressor;

const FOURCC_TOP: u32 = fourcc(b"TPWM");

pub fn detect_header(hdr: u32) -> bool {
    hdr == FOURCC_TOP
}

pub fn create<'a>(_packed: &'a dyn Buffer) -> Box<dyn Decompressor + 'a> {
    Box::new(StubDecompressor::new("TPWM"))
}
