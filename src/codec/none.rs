//! NONE: the trivial XPK sub-codec. Payload and raw data are identical; "decompression" is a
//! bounds-checked copy.

use crate::buffer::{Buffer, MutableBuffer};
use crate::fourcc::fourcc;
use crate::subdecompressor::XpkSubDecompressor;

const FOURCC_NONE: u32 = fourcc(b"NONE");

pub fn detect_header_xpk(hdr: u32) -> bool {
    hdr == FOURCC_NONE
}

pub struct NoneCodec<'a> {
    payload: &'a [u8],
}

impl<'a> NoneCodec<'a> {
    pub fn new(_hdr: u32, payload: &'a dyn Buffer) -> Self {
        Self {
            payload: payload.data(),
        }
    }
}

impl<'a> XpkSubDecompressor for NoneCodec<'a> {
    fn is_valid(&self) -> bool {
        true
    }

    fn verify_packed(&self) -> bool {
        true
    }

    fn verify_raw(&self, raw: &dyn Buffer) -> bool {
        raw.data() == self.payload
    }

    fn raw_size(&self) -> usize {
        self.payload.len()
    }

    fn decompress(&self, dst: &mut dyn MutableBuffer, _previous_data: &dyn Buffer) -> bool {
        if dst.size() != self.payload.len() {
            return false;
        }
        dst.data_mut().copy_from_slice(self.payload);
        true
    }

    fn sub_name(&self) -> &str {
        "XPK-NONE: no compression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_verbatim() {
        let payload: Vec<u8> = vec![1, 2, 3, 4];
        let sub = NoneCodec::new(FOURCC_NONE, &payload);
        assert!(sub.is_valid());
        assert_eq!(sub.raw_size(), 4);

        let mut dst = vec![0u8; 4];
        assert!(sub.decompress(&mut dst, &Vec::<u8>::new() as &dyn Buffer));
        assert_eq!(dst, payload);
    }

    #[test]
    fn size_mismatch_fails() {
        let payload: Vec<u8> = vec![1, 2, 3, 4];
        let sub = NoneCodec::new(FOURCC_NONE, &payload);
        let mut dst = vec![0u8; 5];
        assert!(!sub.decompress(&mut dst, &Vec::<u8>::new() as &dyn Buffer));
    }
}
