// Bit buffer abstraction for demodulated radio transmissions
//
// The demodulation pipeline slices a capture into one or more rows of raw
// bits (one row per repeated transmission). Decoders only read the row
// count, per-row bit lengths, and the packed bit bytes.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBufferError {
    #[error("invalid bit character {found:?} at position {pos} (expected '0' or '1')")]
    InvalidBitChar { found: char, pos: usize },
}

/// One demodulated transmission: bits packed MSB-first into bytes
#[derive(Debug, Clone, PartialEq, Eq)]
struct BitRow {
    bytes: Vec<u8>,
    len_bits: usize,
}

/// Buffer of demodulated bit rows from a single radio capture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    rows: Vec<BitRow>,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a single-row buffer from an ASCII bit string like "000010000"
    pub fn from_bit_string(s: &str) -> Result<Self, BitBufferError> {
        let mut bits = Vec::with_capacity(s.len());
        for (pos, ch) in s.chars().enumerate() {
            match ch {
                '0' => bits.push(0),
                '1' => bits.push(1),
                found => return Err(BitBufferError::InvalidBitChar { found, pos }),
            }
        }
        let mut buffer = Self::new();
        buffer.add_row(&bits);
        Ok(buffer)
    }

    /// Append a row, packing the given bit values (0 or 1) MSB-first
    pub fn add_row(&mut self, bits: &[u8]) {
        let mut bytes = vec![0u8; bits.len().div_ceil(8)];
        for (i, bit) in bits.iter().enumerate() {
            if *bit != 0 {
                bytes[i / 8] |= 0x80 >> (i % 8);
            }
        }
        self.rows.push(BitRow {
            bytes,
            len_bits: bits.len(),
        });
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Bit length of the given row
    ///
    /// # Panics
    /// Panics if `row` is out of range; callers check `num_rows` first.
    pub fn bits_per_row(&self, row: usize) -> usize {
        self.rows[row].len_bits
    }

    /// Packed bytes of the given row, MSB-first within each byte
    ///
    /// # Panics
    /// Panics if `row` is out of range; callers check `num_rows` first.
    pub fn row_bytes(&self, row: usize) -> &[u8] {
        &self.rows[row].bytes
    }
}
