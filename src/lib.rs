//! A decompression library for a family of legacy Amiga/DOS container and codec formats,
//! centered on the XPK container and its sub-codecs.
//!
//! A packed buffer is handed to [`create_decompressor`], which inspects its leading 4-byte
//! magic and returns a boxed [`Decompressor`] for whichever top-level format matches: a
//! standalone codec (CRM, DEFLATE, IMP, RNC, TPWM) or an [`xpk::Xpk`] container. An XPK
//! container in turn dispatches each of its chunks to an [`XpkSubDecompressor`] keyed by a
//! 4-character chunk type code, via [`codec`].
//!
//! Only two codecs have disclosed bit-level grammar in this crate: `NONE` (the trivial
//! verbatim XPK sub-codec) and `RAKE`/`FRHT` (an LZ77 variant with a fixed canonical Huffman
//! table for match lengths). Every other named codec is still correctly *detected*, but
//! decompresses via a stub that always fails, since its bit-level grammar is out of scope.
//!
//! ```no_run
//! # fn get_packed_data() -> Vec<u8> { unimplemented!() }
//! use lzxpk::{create_decompressor, buffer::MutableBuffer};
//!
//! let packed = get_packed_data();
//! if let Some(decompressor) = create_decompressor(&packed) {
//!     if decompressor.is_valid() {
//!         let mut raw = vec![0u8; decompressor.raw_size()];
//!         decompressor.decompress(&mut raw);
//!     }
//! }
//! ```

pub mod bitstream;
pub mod buffer;
pub mod codec;
pub mod decompressor;
pub mod dispatch;
pub mod error;
pub mod fourcc;
pub mod huffman;
pub mod subdecompressor;
pub mod xpk;

pub use decompressor::Decompressor;
pub use dispatch::create_decompressor;
pub use error::{Error, Result};
pub use subdecompressor::XpkSubDecompressor;
