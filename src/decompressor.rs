//! The polymorphic contract every top-level codec implements (spec §4.4).

use crate::buffer::{Buffer, MutableBuffer};

/// A top-level decompressor: constructed from a packed buffer whose first 32-bit
/// big-endian word matched this codec's magic (see [`crate::dispatch`]).
///
/// `isValid() == false` after construction means only dropping the value is legal; every
/// other method is only meaningful once `is_valid()` returns `true`, and implementations
/// return harmless defaults (`0`, `false`) otherwise.
pub trait Decompressor {
    /// True iff construction fully parsed the header and its preconditions hold.
    fn is_valid(&self) -> bool;

    /// Bytes consumed from the input, including framing. `0` if unknown before decompression
    /// or if `!is_valid()`.
    fn packed_size(&self) -> usize;

    /// Bytes this decompressor will emit. `0` if unknown before decompression or if
    /// `!is_valid()`.
    fn raw_size(&self) -> usize;

    /// Recomputes and compares structural checksums over the compressed data only, without
    /// producing output.
    fn verify_packed(&self) -> bool;

    /// Validates already-decompressed output against embedded checksums or previews.
    fn verify_raw(&self, raw: &dyn Buffer) -> bool;

    /// Fills `dst[0..raw_size())` with the decompressed bytes. `dst` must already be sized to
    /// at least `raw_size()`. Returns `true` only if exactly that many bytes were produced.
    fn decompress(&self, dst: &mut dyn MutableBuffer) -> bool;

    /// Human-readable identifier, used for display/logging only.
    fn name(&self) -> &str {
        "<invalid>"
    }

    /// Human-readable sub-codec identifier (for container formats that delegate), used for
    /// display/logging only.
    fn sub_name(&self) -> &str {
        "<invalid>"
    }
}
