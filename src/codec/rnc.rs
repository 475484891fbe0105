//! RNC: Rob Northen Compression, top-level only. Grounded on
//! `examples/original_source/RNCDecompressor.hpp`, which declares a single `detectHeader`
//! covering the RNC1 (old and new) and RNC2 variants internally; this crate does the same
//! without distinguishing the variant at detection time. Bit-level grammar is out of scope;
//! see `stub`.

use crate::buffer::Buffer;
use crate::decompressor::Decompressor;
use crate::fourcc::fourcc;

use super::stub::StubDecompressor;

const FOURCC_TOP: u32 = fourcc(b"RNC\x01");

pub fn detect_header(hdr: u32) -> bool {
    hdr == FOURCC_TOP
}

pub fn create<'a>(_packed: &'a dyn Buffer) -> Box<dyn Decompressor + 'a> {
    Box::new(StubDecompressor::new("RNC"))
}
