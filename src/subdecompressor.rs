//! The contract a sub-codec implements to be usable as an XPK chunk payload (spec §4.7).

use crate::buffer::{Buffer, MutableBuffer};

/// A sub-codec addressable only as an XPK chunk payload, identified by a 4-character type
/// code rather than a header magic.
///
/// Unlike a top-level [`crate::Decompressor`], `decompress` receives the previous chunk's
/// raw output so that codecs carrying LZ history across chunks can seed it; it is empty for
/// the first chunk of a stream.
pub trait XpkSubDecompressor {
    fn is_valid(&self) -> bool;

    /// Nothing further can be checked for codecs with no internal checksum of their own;
    /// such implementations simply return `is_valid()`.
    fn verify_packed(&self) -> bool;

    /// As [`Self::verify_packed`], for codecs that have no raw-data check beyond what the
    /// enclosing XPK container already does (header/chunk XOR, preview).
    fn verify_raw(&self, raw: &dyn Buffer) -> bool;

    /// Bytes this sub-codec will emit from this chunk. `0` if unknown up front.
    fn raw_size(&self) -> usize;

    fn decompress(&self, dst: &mut dyn MutableBuffer, previous_data: &dyn Buffer) -> bool;

    /// Used in place of the XPK container's own name when reporting to the user.
    fn sub_name(&self) -> &str {
        "<invalid>"
    }
}
