//! Codec registry. Each submodule recognizes one historical magic number (or a pair, for
//! CRM/DEFLATE which live at both the top level and inside XPK) and builds the matching
//! `Decompressor` or `XpkSubDecompressor`. Most codecs other than RAKE/FRHT and NONE have no
//! disclosed bit-level grammar and decompress via `stub::StubDecompressor` /
//! `stub::StubSubDecompressor`: they are still correctly *detected*, they simply cannot
//! produce output.

pub mod crm;
pub mod deflate;
pub mod imp;
pub mod implcodec;
pub mod none;
pub mod rake;
pub mod rnc;
pub mod stub;
pub mod tpwm;
pub mod xpk_stub_subs;

use crate::buffer::Buffer;
use crate::decompressor::Decompressor;
use crate::subdecompressor::XpkSubDecompressor;

/// Builds a top-level `Decompressor` for `packed`, trying each known magic in the order
/// `Decompressor.cpp` tries them: CRM, DEFLATE, IMP, RNC, TPWM, XPK. Returns `None` if no
/// magic matches.
pub fn create_top_level<'a>(hdr: u32, packed: &'a dyn Buffer) -> Option<Box<dyn Decompressor + 'a>> {
    if crm::detect_header(hdr) {
        Some(crm::create(packed))
    } else if deflate::detect_header(hdr) {
        Some(deflate::create(packed))
    } else if imp::detect_header(hdr) {
        Some(imp::create(packed))
    } else if rnc::detect_header(hdr) {
        Some(rnc::create(packed))
    } else if tpwm::detect_header(hdr) {
        Some(tpwm::create(packed))
    } else {
        None
    }
}

/// Builds an XPK sub-decompressor for `hdr` (the chunk type fourcc), trying each known type
/// code in the order `XPKMaster.cpp`'s `detectSubDecompressor` tries them.
pub fn create_xpk_sub<'a>(hdr: u32, payload: &'a dyn Buffer) -> Option<Box<dyn XpkSubDecompressor + 'a>> {
    use xpk_stub_subs::*;

    if cbr0::detect_header_xpk(hdr) {
        Some(cbr0::create_xpk(payload))
    } else if crm::detect_header_xpk(hdr) {
        Some(crm::create_xpk(payload))
    } else if deflate::detect_header_xpk(hdr) {
        Some(deflate::create_xpk(payload))
    } else if dlta::detect_header_xpk(hdr) {
        Some(dlta::create_xpk(payload))
    } else if fast::detect_header_xpk(hdr) {
        Some(fast::create_xpk(payload))
    } else if frle::detect_header_xpk(hdr) {
        Some(frle::create_xpk(payload))
    } else if huff::detect_header_xpk(hdr) {
        Some(huff::create_xpk(payload))
    } else if implcodec::detect_header_xpk(hdr) {
        Some(implcodec::create_xpk(payload))
    } else if mash::detect_header_xpk(hdr) {
        Some(mash::create_xpk(payload))
    } else if none::detect_header_xpk(hdr) {
        Some(Box::new(none::NoneCodec::new(hdr, payload)))
    } else if nuke::detect_header_xpk(hdr) {
        Some(nuke::create_xpk(payload))
    } else if rlen::detect_header_xpk(hdr) {
        Some(rlen::create_xpk(payload))
    } else if sqsh::detect_header_xpk(hdr) {
        Some(sqsh::create_xpk(payload))
    } else if rake::detect_header_xpk(hdr) {
        Some(Box::new(rake::Rake::new(hdr, payload)))
    } else {
        None
    }
}
