//! Recognized-but-unimplemented codecs.
//!
//! These fourccs are discovered by the same dispatch mechanism as every other codec (matching
//! spec.md's "other codecs ... are discovered by the same dispatch mechanism and implement
//! the same contract, but their bit-level syntax is out of scope"). A stub's header/type
//! detection is real; actual decompression always reports failure rather than producing
//! fabricated output.

use crate::buffer::{Buffer, MutableBuffer};
use crate::decompressor::Decompressor;
use crate::subdecompressor::XpkSubDecompressor;

/// A top-level codec whose magic is recognized but whose container grammar is out of scope.
pub struct StubDecompressor {
    name: &'static str,
}

impl StubDecompressor {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Decompressor for StubDecompressor {
    fn is_valid(&self) -> bool {
        true
    }

    fn packed_size(&self) -> usize {
        0
    }

    fn raw_size(&self) -> usize {
        0
    }

    fn verify_packed(&self) -> bool {
        false
    }

    fn verify_raw(&self, _raw: &dyn Buffer) -> bool {
        false
    }

    fn decompress(&self, _dst: &mut dyn MutableBuffer) -> bool {
        false
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// An XPK sub-codec whose type code is recognized but whose bit-level grammar is out of
/// scope.
pub struct StubSubDecompressor {
    name: &'static str,
}

impl StubSubDecompressor {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl XpkSubDecompressor for StubSubDecompressor {
    fn is_valid(&self) -> bool {
        true
    }

    fn verify_packed(&self) -> bool {
        false
    }

    fn verify_raw(&self, _raw: &dyn Buffer) -> bool {
        false
    }

    fn raw_size(&self) -> usize {
        0
    }

    fn decompress(&self, _dst: &mut dyn MutableBuffer, _previous_data: &dyn Buffer) -> bool {
        false
    }

    fn sub_name(&self) -> &str {
        self.name
    }
}
