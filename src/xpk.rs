//! XPK: the container format that multiplexes chunks, each either stored literally or
//! compressed with one of the sub-codecs in [`crate::codec`]. Grounded on
//! `examples/original_source/XPKMaster.cpp`.

use crate::buffer::{Buffer, MutableBuffer, SubBuffer};
use crate::codec;
use crate::decompressor::Decompressor;
use crate::fourcc::fourcc;

const FOURCC_XPKF: u32 = fourcc(b"XPKF");

/// Chunk type: stored verbatim, no sub-codec involved.
const CHUNK_LITERAL: u8 = 0;
/// Chunk type: compressed, dispatch to a sub-codec keyed by the container's `type` fourcc.
const CHUNK_COMPRESSED: u8 = 1;
/// Chunk type: stream terminator. No payload is consumed past this point.
const CHUNK_TERMINATOR: u8 = 15;

pub fn detect_header(hdr: u32) -> bool {
    hdr == FOURCC_XPKF
}

pub struct Xpk<'a> {
    packed_data: &'a dyn Buffer,
    packed_size: u32,
    raw_size: u32,
    sub_type: u32,
    long_headers: bool,
    header_size: u32,
    is_valid: bool,
}

impl<'a> Xpk<'a> {
    /// 1 GiB. `XPKMaster.cpp` guards against implausible raw/packed sizes before ever
    /// allocating or iterating chunks; this crate keeps the same order of magnitude.
    const MAX_RAW_SIZE: u32 = 1 << 30;
    const MAX_PACKED_SIZE: u32 = 1 << 30;

    pub fn new(packed_data: &'a dyn Buffer) -> Self {
        let mut this = Xpk {
            packed_data,
            packed_size: 0,
            raw_size: 0,
            sub_type: 0,
            long_headers: false,
            header_size: 0,
            is_valid: false,
        };

        if let Some(()) = this.parse_header() {
            this.is_valid = this.detect_sub_decompressor();
        }

        this
    }

    fn parse_header(&mut self) -> Option<()> {
        if self.packed_data.size() < 44 {
            return None;
        }
        let hdr = self.packed_data.read_u32be(0).ok()?;
        if !detect_header(hdr) {
            return None;
        }

        self.packed_size = self.packed_data.read_u32be(4).ok()?;
        self.sub_type = self.packed_data.read_u32be(8).ok()?;
        self.raw_size = self.packed_data.read_u32be(12).ok()?;

        if self.raw_size == 0 || self.packed_size == 0 {
            return None;
        }
        if self.raw_size > Self::MAX_RAW_SIZE || self.packed_size > Self::MAX_PACKED_SIZE {
            return None;
        }

        let flags = self.packed_data.read_u8(32).ok()?;
        self.long_headers = flags & 1 != 0;
        if flags & 2 != 0 {
            // Password-protected stream: out of scope.
            return None;
        }
        self.header_size = if flags & 4 != 0 {
            let extra_len = self.packed_data.read_u16be(36).ok()?;
            38 + extra_len as u32
        } else {
            36
        };

        if (self.packed_size as u64) + 8 > self.packed_data.size() as u64 {
            return None;
        }

        Some(())
    }

    /// `codec::create_xpk_sub` matches purely on `hdr`, independent of the payload, so
    /// probing with an empty buffer is enough to check whether the type code is known
    /// without threading a real chunk through.
    fn detect_sub_decompressor(&self) -> bool {
        let empty: &[u8] = &[];
        codec::create_xpk_sub(self.sub_type, empty).is_some()
    }

    fn read_dual_value(&self, current_offset: u32, offset_short: u32, offset_long: u32) -> Option<u32> {
        if self.long_headers {
            self.packed_data
                .read_u32be((current_offset + offset_long) as usize)
                .ok()
        } else {
            self.packed_data
                .read_u16be((current_offset + offset_short) as usize)
                .ok()
                .map(|v| v as u32)
        }
    }

    /// Walks every chunk from the first to the terminator, calling `func(header, chunk,
    /// raw_chunk_size, chunk_type)` for each. `func` returns `false` to abort early (without
    /// that being treated as malformed input by the caller). Returns `true` only if the walk
    /// reached a type-15 terminator without a parse failure.
    fn for_each_chunk<F>(&self, mut func: F) -> bool
    where
        F: FnMut(&dyn Buffer, &dyn Buffer, u32, u8) -> bool,
    {
        let chunk_header_len: u32 = if self.long_headers { 12 } else { 8 };
        let mut current_offset: u32 = 0;
        let mut is_last = false;

        while current_offset < self.packed_size + 8 && !is_last {
            if current_offset == 0 {
                current_offset = self.header_size;
            } else {
                let tmp = match self.read_dual_value(current_offset, 4, 4) {
                    Some(v) => v,
                    None => return false,
                };
                current_offset += chunk_header_len + ((tmp + 3) & !3u32);
            }

            let packed_size = match self.read_dual_value(current_offset, 4, 4) {
                Some(v) => v,
                None => return false,
            };
            let raw_size = match self.read_dual_value(current_offset, 6, 8) {
                Some(v) => v,
                None => return false,
            };

            let hdr = match SubBuffer::new(
                self.packed_data,
                current_offset as usize,
                chunk_header_len as usize,
            ) {
                Ok(b) => b,
                Err(_) => return false,
            };
            let chunk = match SubBuffer::new(
                self.packed_data,
                (current_offset + chunk_header_len) as usize,
                packed_size as usize,
            ) {
                Ok(b) => b,
                Err(_) => return false,
            };

            let chunk_type = match self.packed_data.read_u8(current_offset as usize) {
                Ok(v) => v,
                Err(_) => return false,
            };

            if !func(&hdr, &chunk, raw_size, chunk_type) {
                return false;
            }

            if chunk_type == CHUNK_TERMINATOR {
                is_last = true;
            }
        }

        is_last
    }
}

fn header_checksum(buffer: &dyn Buffer, offset: usize, len: usize) -> bool {
    if len == 0 || offset + len > buffer.size() {
        return false;
    }
    let data = buffer.data();
    let mut tmp = 0u8;
    for b in &data[offset..offset + len] {
        tmp ^= b;
    }
    tmp == 0
}

/// Assumes alignment padding bytes are zero, as `XPKMaster.cpp` does.
fn chunk_checksum(buffer: &dyn Buffer, offset: usize, len: usize, check_value: u16) -> bool {
    if len == 0 || offset + len > buffer.size() {
        return false;
    }
    let data = buffer.data();
    let mut tmp = [0u8; 2];
    for (i, b) in data[offset..offset + len].iter().enumerate() {
        tmp[i & 1] ^= b;
    }
    tmp[0] == (check_value >> 8) as u8 && tmp[1] == (check_value & 0xff) as u8
}

impl<'a> Decompressor for Xpk<'a> {
    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn packed_size(&self) -> usize {
        if !self.is_valid {
            return 0;
        }
        self.packed_size as usize + 8
    }

    fn raw_size(&self) -> usize {
        if !self.is_valid {
            return 0;
        }
        self.raw_size as usize
    }

    fn verify_packed(&self) -> bool {
        if !self.is_valid {
            return false;
        }
        if !header_checksum(self.packed_data, 0, 36) {
            return false;
        }

        self.for_each_chunk(|header, chunk, raw_chunk_size, chunk_type| {
            if !header_checksum(header, 0, header.size()) {
                return false;
            }
            let hdr_check = match header.read_u16be(2) {
                Ok(v) => v,
                Err(_) => return false,
            };
            if chunk.size() != 0 && !chunk_checksum(chunk, 0, chunk.size(), hdr_check) {
                return false;
            }

            match chunk_type {
                CHUNK_COMPRESSED => match codec::create_xpk_sub(self.sub_type, chunk) {
                    Some(sub) => {
                        sub.is_valid()
                            && (sub.raw_size() == 0 || sub.raw_size() as u32 == raw_chunk_size)
                            && sub.verify_packed()
                    }
                    None => false,
                },
                CHUNK_LITERAL | CHUNK_TERMINATOR => true,
                _ => false,
            }
        })
    }

    fn verify_raw(&self, raw: &dyn Buffer) -> bool {
        if !self.is_valid || raw.size() < self.raw_size as usize {
            return false;
        }

        let preview_len = std::cmp::min(self.raw_size as usize, 16);
        if self.packed_data.data()[16..16 + preview_len] != raw.data()[0..preview_len] {
            return false;
        }

        let mut dest_offset: u32 = 0;
        let ok = self.for_each_chunk(|_header, chunk, raw_chunk_size, chunk_type| {
            if dest_offset as u64 + raw_chunk_size as u64 > raw.size() as u64 {
                return false;
            }
            if raw_chunk_size == 0 {
                return true;
            }

            let verify_buffer = match SubBuffer::new(raw, dest_offset as usize, raw_chunk_size as usize) {
                Ok(b) => b,
                Err(_) => return false,
            };

            let chunk_ok = match chunk_type {
                CHUNK_COMPRESSED => match codec::create_xpk_sub(self.sub_type, chunk) {
                    Some(sub) => {
                        sub.is_valid()
                            && (sub.raw_size() == 0 || sub.raw_size() as u32 == raw_chunk_size)
                            && sub.verify_raw(&verify_buffer)
                    }
                    None => false,
                },
                CHUNK_LITERAL | CHUNK_TERMINATOR => true,
                _ => false,
            };
            if !chunk_ok {
                return false;
            }

            dest_offset += raw_chunk_size;
            true
        });

        ok && dest_offset == self.raw_size
    }

    fn decompress(&self, dst: &mut dyn MutableBuffer) -> bool {
        if !self.is_valid || dst.size() < self.raw_size as usize {
            return false;
        }

        // Two passes are unavoidable in safe Rust: the visitor closure below needs to both
        // read sub-chunk payloads from `self.packed_data` and write into `dst`, and `dst`
        // cannot be borrowed mutably from inside a closure that also calls back into `self`
        // without risking aliasing. We buffer the previous chunk's raw bytes separately and
        // write into `dst` directly by index range instead of handing out a `SubBufferMut`.
        let mut dest_offset: u32 = 0;
        let mut previous_data: Vec<u8> = Vec::new();
        let mut failed = false;

        let ok = self.for_each_chunk(|_header, chunk, raw_chunk_size, chunk_type| {
            if dest_offset as u64 + raw_chunk_size as u64 > dst.size() as u64 {
                return false;
            }
            if raw_chunk_size == 0 {
                return true;
            }

            let start = dest_offset as usize;
            let end = start + raw_chunk_size as usize;

            match chunk_type {
                CHUNK_LITERAL => {
                    if raw_chunk_size as usize != chunk.size() {
                        return false;
                    }
                    dst.data_mut()[start..end].copy_from_slice(chunk.data());
                    previous_data = chunk.data().to_vec();
                }
                CHUNK_COMPRESSED => {
                    let sub = match codec::create_xpk_sub(self.sub_type, chunk) {
                        Some(s) => s,
                        None => {
                            failed = true;
                            return false;
                        }
                    };
                    if !sub.is_valid()
                        || (sub.raw_size() != 0 && sub.raw_size() as u32 != raw_chunk_size)
                    {
                        failed = true;
                        return false;
                    }
                    let mut tmp = vec![0u8; raw_chunk_size as usize];
                    if !sub.decompress(&mut tmp, &previous_data) {
                        failed = true;
                        return false;
                    }
                    dst.data_mut()[start..end].copy_from_slice(&tmp);
                    previous_data = tmp;
                }
                CHUNK_TERMINATOR => {}
                _ => {
                    failed = true;
                    return false;
                }
            }

            dest_offset += raw_chunk_size;
            true
        });

        !failed && ok && dest_offset == self.raw_size
    }

    fn name(&self) -> &str {
        if !self.is_valid {
            "<invalid>"
        } else {
            "XPK"
        }
    }

    fn sub_name(&self) -> &str {
        // `XPKMaster::getName` forwards to the first chunk's sub-decompressor name for
        // display purposes; this crate cannot return a borrowed `&str` owned by a
        // just-constructed temporary sub-decompressor, so it reports the container's own
        // name instead. See DESIGN.md.
        self.name()
    }
}
