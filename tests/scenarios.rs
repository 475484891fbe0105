//! End-to-end scenarios mirroring the documented container/codec behaviors: a minimal XPK
//! stream, header corruption, long-form chunk headers, RAKE round trips, boundary behaviors,
//! and unknown top-level magic dispatch.

use lzxpk::buffer::Buffer;
use lzxpk::codec::rake::Rake;
use lzxpk::create_decompressor;
use lzxpk::fourcc::fourcc;
use lzxpk::xpk::Xpk;
use lzxpk::{Decompressor, XpkSubDecompressor};

fn minimal_none_frame() -> Vec<u8> {
    let mut v = vec![0u8; 56];
    v[0..4].copy_from_slice(b"XPKF");
    v[4..8].copy_from_slice(&48u32.to_be_bytes()); // frame packedSize: total(56) - 8
    v[8..12].copy_from_slice(b"NONE");
    v[12..16].copy_from_slice(&4u32.to_be_bytes()); // rawSize
    v[16..20].copy_from_slice(b"abcd"); // preview
    // bytes 20..32 of the preview stay zero
    v[32] = 0x00; // flags: short headers, no password, no extra header
    v[33] = 0x3F; // forces header XOR over bytes[0..36) to zero

    // chunk 1: literal "abcd"
    v[36] = 0x00; // type = literal
    v[37] = 0x04; // pad byte, forces this header's own XOR to zero
    v[38] = 0x02; // chunk checksum high byte
    v[39] = 0x06; // chunk checksum low byte
    v[40..42].copy_from_slice(&4u16.to_be_bytes()); // packedSize
    v[42..44].copy_from_slice(&4u16.to_be_bytes()); // rawSize
    v[44..48].copy_from_slice(b"abcd");

    // chunk 2: terminator
    v[48] = 0x0F; // type = terminator
    v[49] = 0x0F; // pad byte, forces this header's own XOR to zero
    // checksum/packedSize/rawSize fields for the terminator all stay zero

    v
}

#[test]
fn minimal_xpk_none_round_trip() {
    let packed = minimal_none_frame();
    let xpk = Xpk::new(&packed);
    assert!(xpk.is_valid());
    assert_eq!(xpk.raw_size(), 4);

    let mut dst = vec![0u8; 4];
    assert!(xpk.decompress(&mut dst));
    assert_eq!(dst, b"abcd");

    assert!(xpk.verify_raw(&b"abcd".to_vec()));
    assert!(!xpk.verify_raw(&b"abce".to_vec()));
}

#[test]
fn xpk_header_checksum_corruption_keeps_validity_but_fails_verification() {
    let mut packed = minimal_none_frame();
    assert!(Xpk::new(&packed).verify_packed());

    packed[33] ^= 0x01; // flip one bit inside the header checksum region

    let xpk = Xpk::new(&packed);
    assert!(xpk.is_valid(), "flag parsing never inspects the XOR checksum");
    assert!(!xpk.verify_packed());
}

#[test]
fn xpk_long_headers_decode_like_short_headers() {
    let mut v = vec![0u8; 68];
    v[0..4].copy_from_slice(b"XPKF");
    v[4..8].copy_from_slice(&60u32.to_be_bytes()); // frame packedSize: total(68) - 8
    v[8..12].copy_from_slice(b"NONE");
    v[12..16].copy_from_slice(&8u32.to_be_bytes()); // rawSize
    v[16..24].copy_from_slice(b"abcdefgh"); // preview
    v[32] = 0x01; // flags: long headers
    v[33] = 0x32; // forces header XOR over bytes[0..36) to zero

    // chunk 1: 8-byte literal, long (12-byte) header
    v[36] = 0x00; // type = literal
    v[37] = 0x08; // pad byte
    v[38] = 0x00; // checksum high byte
    v[39] = 0x08; // checksum low byte
    v[40..44].copy_from_slice(&8u32.to_be_bytes()); // packedSize
    v[44..48].copy_from_slice(&8u32.to_be_bytes()); // rawSize
    v[48..56].copy_from_slice(b"abcdefgh");

    // chunk 2: terminator, long header
    v[56] = 0x0F;
    v[57] = 0x0F;

    let xpk = Xpk::new(&v);
    assert!(xpk.is_valid());
    assert_eq!(xpk.raw_size(), 8);

    let mut dst = vec![0u8; 8];
    assert!(xpk.decompress(&mut dst));
    assert_eq!(dst, b"abcdefgh");
}

#[test]
fn truncated_frame_is_invalid() {
    let packed = vec![0x58, 0x50, 0x4B, 0x46, 0, 0, 0, 0, 0, 0];
    assert!(!Xpk::new(&packed).is_valid());
}

#[test]
fn password_protected_frame_is_invalid() {
    let mut v = vec![0u8; 44];
    v[0..4].copy_from_slice(b"XPKF");
    v[4..8].copy_from_slice(&36u32.to_be_bytes());
    v[8..12].copy_from_slice(b"NONE");
    v[12..16].copy_from_slice(&4u32.to_be_bytes());
    v[32] = 0x02; // password bit set

    assert!(!Xpk::new(&v).is_valid());
}

#[test]
fn chunk_alignment_crossing_end_of_buffer_fails_verification() {
    let mut v = vec![0u8; 46];
    v[0..4].copy_from_slice(b"XPKF");
    v[4..8].copy_from_slice(&26u32.to_be_bytes());
    v[8..12].copy_from_slice(b"NONE");
    v[12..16].copy_from_slice(&4u32.to_be_bytes());
    v[32] = 0x00;

    v[36] = 0x00; // literal chunk
    v[40..42].copy_from_slice(&4u16.to_be_bytes()); // declares a 4-byte payload
    v[42..44].copy_from_slice(&4u16.to_be_bytes());
    // only 2 of the 4 declared payload bytes actually fit before the buffer ends at 46
    v[44] = b'a';
    v[45] = b'b';

    let xpk = Xpk::new(&v);
    assert!(xpk.is_valid());
    assert!(!xpk.verify_packed());
}

#[test]
fn terminator_with_nonzero_raw_size_contributes_zero_bytes() {
    let mut v = vec![0u8; 57];
    v[0..4].copy_from_slice(b"XPKF");
    v[4..8].copy_from_slice(&49u32.to_be_bytes()); // total(57) - 8
    v[8..12].copy_from_slice(b"NONE");
    v[12..16].copy_from_slice(&5u32.to_be_bytes()); // rawSize = 4 (chunk) + 1 (terminator)
    v[32] = 0x00;

    v[36] = 0x00; // literal chunk
    v[40..42].copy_from_slice(&4u16.to_be_bytes());
    v[42..44].copy_from_slice(&4u16.to_be_bytes());
    v[44..48].copy_from_slice(b"abcd");

    v[48] = 0x0F; // terminator
    v[52..54].copy_from_slice(&0u16.to_be_bytes()); // packedSize = 0
    v[54..56].copy_from_slice(&1u16.to_be_bytes()); // rawChunkSize = 1 (nonzero, tolerated)

    let xpk = Xpk::new(&v);
    assert!(xpk.is_valid());
    assert_eq!(xpk.raw_size(), 5);

    let mut dst = vec![0u8; 5];
    assert!(xpk.decompress(&mut dst));
    assert_eq!(&dst, b"abcd\0");
}

#[test]
fn rake_round_trip_all_literals() {
    let mut payload = vec![0u8; 4];
    payload[2..4].copy_from_slice(&20u16.to_be_bytes()); // midStreamOffset
    payload.extend_from_slice(b"abcdefghijklmnop");
    payload.extend_from_slice(&[0u8; 8]); // forward bit stream: all zero bits

    let rake = Rake::new(fourcc(b"RAKE"), &payload);
    assert!(rake.is_valid());

    let mut dst = vec![0u8; 16];
    assert!(rake.decompress(&mut dst, &Vec::<u8>::new() as &dyn Buffer));
    assert_eq!(&dst, b"abcdefghijklmnop");
}

#[test]
fn rake_round_trip_back_reference() {
    let payload: Vec<u8> = vec![
        0x00, 0x00, // bit-drop = 0
        0x00, 0x06, // midStreamOffset = 6
        0x00, // reverse byte: distance selector (-> distance 1)
        0x78, // reverse byte: literal 'x'
        0x40, 0x00, 0x00, 0x00, // forward bits
    ];

    let rake = Rake::new(fourcc(b"RAKE"), &payload);
    assert!(rake.is_valid());

    let mut dst = vec![0u8; 4];
    assert!(rake.decompress(&mut dst, &Vec::<u8>::new() as &dyn Buffer));
    assert_eq!(&dst, b"xxxx");
}

#[test]
fn unknown_top_level_magic_returns_none() {
    let mut data = vec![0u8; 44];
    data[0..4].copy_from_slice(b"ZZZZ");
    assert!(create_decompressor(&data).is_none());
}
