//! Canonical Huffman table construction and single-symbol decoding.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// A canonical Huffman decode table mapping `(code length, code bits)` to a symbol.
///
/// Entries are inserted in canonical order: increasing length, and for equal length,
/// increasing code value. `code_bits` is the natural (right-justified) value of the code,
/// i.e. `leftJustifiedCodeBits >> (max_bits - length)`.
pub struct HuffmanDecoder<S> {
    max_bits: u32,
    table: HashMap<(u8, u32), S>,
}

impl<S: Copy> HuffmanDecoder<S> {
    pub fn new(max_bits: u32) -> Self {
        Self {
            max_bits,
            table: HashMap::new(),
        }
    }

    /// Inserts one `(length, code_bits, symbol)` triple. Fails if `length` is zero or
    /// exceeds `max_bits`, if `code_bits` does not fit in `length` bits, or if an entry
    /// already occupies this exact `(length, code_bits)` prefix.
    pub fn insert(&mut self, length: u8, code_bits: u32, symbol: S) -> Result<()> {
        if length == 0 || u32::from(length) > self.max_bits {
            return Err(Error::InvalidFormat);
        }
        if length < 32 && (code_bits >> length) != 0 {
            return Err(Error::InvalidFormat);
        }
        if self.table.contains_key(&(length, code_bits)) {
            return Err(Error::InvalidFormat);
        }
        self.table.insert((length, code_bits), symbol);
        Ok(())
    }

    /// Builds a table from `(length, symbol)` pairs already in canonical declaration order,
    /// generating each code's bits via the canonical running accumulator (`max_bits` = 32
    /// generator width, incrementing by `1 << (max_bits - length)` per entry).
    pub fn from_canonical(max_bits: u32, entries: &[(u8, S)]) -> Result<Self> {
        let mut decoder = Self::new(max_bits);
        let mut generator: u32 = 0;
        for &(length, symbol) in entries {
            if length == 0 || u32::from(length) > max_bits {
                return Err(Error::InvalidFormat);
            }
            let shift = max_bits - u32::from(length);
            let code_bits = generator >> shift;
            decoder.insert(length, code_bits, symbol)?;
            generator = generator.wrapping_add(1u32 << shift);
        }
        Ok(decoder)
    }

    /// Reads bits one at a time via `read_bit` until a stored `(length, bits)` pair matches,
    /// then returns its symbol. Fails if no prefix matches within `max_bits` reads.
    pub fn decode(&self, mut read_bit: impl FnMut() -> u8) -> Result<S> {
        let mut accum: u32 = 0;
        for len in 1..=self.max_bits {
            accum = (accum << 1) | u32::from(read_bit());
            if let Some(&symbol) = self.table.get(&(len as u8, accum)) {
                return Ok(symbol);
            }
        }
        Err(Error::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_round_trip() {
        // 4 symbols with lengths 1,2,3,3 (Kraft-equal: 1/2 + 1/4 + 1/8 + 1/8 = 1).
        let entries = [(1u8, 'a'), (2, 'b'), (3, 'c'), (3, 'd')];
        let decoder = HuffmanDecoder::from_canonical(32, &entries).unwrap();

        // Codes: a=0, b=10, c=110, d=111 (MSB-first).
        let cases: &[(&[u8], char)] = &[
            (&[0], 'a'),
            (&[1, 0], 'b'),
            (&[1, 1, 0], 'c'),
            (&[1, 1, 1], 'd'),
        ];

        for (bits, expected) in cases {
            let mut iter = bits.iter().copied();
            let sym = decoder.decode(|| iter.next().unwrap()).unwrap();
            assert_eq!(sym, *expected);
        }
    }

    #[test]
    fn duplicate_prefix_rejected() {
        let mut decoder: HuffmanDecoder<u8> = HuffmanDecoder::new(32);
        decoder.insert(2, 0b01, 0).unwrap();
        assert_eq!(decoder.insert(2, 0b01, 1), Err(Error::InvalidFormat));
    }

    #[test]
    fn overflowing_code_rejected() {
        let mut decoder: HuffmanDecoder<u8> = HuffmanDecoder::new(32);
        assert_eq!(decoder.insert(2, 0b100, 0), Err(Error::InvalidFormat));
    }

    #[test]
    fn unmatched_pattern_fails() {
        let entries = [(1u8, 'a'), (1, 'b')];
        let decoder = HuffmanDecoder::from_canonical(32, &entries).unwrap();
        // Only 1-bit codes exist; decode must resolve within 1 bit every time, never fail
        // for this table, so instead verify a deliberately incomplete table fails closed.
        let mut only_a: HuffmanDecoder<char> = HuffmanDecoder::new(32);
        only_a.insert(2, 0b00, 'a').unwrap();
        let mut bits = [1u8, 1, 1, 1, 1].into_iter();
        assert!(only_a.decode(|| bits.next().unwrap_or(1)).is_err());
        let _ = decoder;
    }
}
