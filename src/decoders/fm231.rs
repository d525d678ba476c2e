//! Mighty Mule FM231 Driveway Alarm decoder (GTO Inc.)
//!
//! FCC ID: I6HGTOFM231
//! FCC Test Report: https://fccid.io/I6HGTOFM231/Test-Report/Test-Report-1214140.pdf
//!
//! Product info:
//! - Wireless driveway alarm system
//! - 4-position DIP switch for device ID configuration
//! - Battery operated transmitter
//!
//! Data layout (9 bits total):
//!
//! ```text
//!     ???? B IIII
//! ```
//!
//! - `?`: 4 bits unknown/preamble
//! - `B`: 1 bit battery status (0=OK, 1=Low Battery)
//! - `I`: 4 bits device ID (from DIP switches, reversed order)
//!
//! The DIP switches are labeled 1-4 from left to right on the device, but
//! appear in the data stream in reverse order (4-3-2-1). The reported `id`
//! is the raw wire value; deployed receivers depend on that numbering, so
//! the reversal is deliberately not corrected.

use super::descriptor::{DecodeAbort, DecodeResult, DeviceDescriptor, Modulation};
use super::registry::RegisteredDecoder;
use crate::bitbuffer::BitBuffer;
use crate::output::{DataRecord, OutputSink};

pub const FM231_MODEL: &str = "MightyMule-FM231";

const FM231_BITLEN: usize = 9;

/// Decode one FM231 transmission from a demodulated bit buffer
pub fn decode_fm231(bits: &BitBuffer, sink: &mut dyn OutputSink) -> DecodeResult {
    // Expect a single row with 9 bits
    if bits.num_rows() != 1 {
        return Err(DecodeAbort::Early);
    }

    if bits.bits_per_row(0) != FM231_BITLEN {
        return Err(DecodeAbort::Length);
    }

    let b = bits.row_bytes(0);

    // The 9 bits span the first two bytes
    let data = (u16::from(b[0]) << 1) | (u16::from(b[1]) >> 7);

    // Bit 4 (from left, 0-indexed) = battery status.
    // On the wire 0 = OK, 1 = Low Battery; invert to the 1=OK convention
    // shared by this decoder family.
    let battery_raw = (data >> 4) & 0x01;
    let battery_ok = i64::from(battery_raw == 0);

    // Bits 5-8 (from left, 0-indexed) = device ID
    let id = i64::from(data & 0x0F);

    tracing::debug!(
        "Data: {:03x}, Battery raw: {}, Battery OK: {}, ID: {}",
        data,
        battery_raw,
        battery_ok,
        id
    );

    let record = DataRecord::new()
        .with_str("model", FM231_MODEL)
        .with_int("id", id)
        .with_int("battery_ok", battery_ok);

    sink.output(record);

    Ok(1)
}

pub static FM231: DeviceDescriptor = DeviceDescriptor {
    name: "Mighty Mule FM231 Driveway Alarm",
    modulation: Modulation::OokPwm,
    short_width_us: 650,
    long_width_us: 1200,
    sync_width_us: 3800,
    gap_limit_us: 1100,
    reset_limit_us: 1100,
    tolerance_us: 200,
    decode_fn: decode_fm231,
    fields: &["model", "id", "battery_ok"],
};

inventory::submit! {
    RegisteredDecoder(&FM231)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{DataValue, VecSink};

    /// Single-row buffer holding the given 9-bit value, MSB first
    fn buffer_from_data(data: u16) -> BitBuffer {
        let mut bits = Vec::with_capacity(9);
        for i in 0..9 {
            bits.push(((data >> (8 - i)) & 1) as u8);
        }
        let mut buffer = BitBuffer::new();
        buffer.add_row(&bits);
        buffer
    }

    fn decode_one(data: u16) -> DataRecord {
        let mut sink = VecSink::new();
        assert_eq!(decode_fm231(&buffer_from_data(data), &mut sink), Ok(1));
        let records = sink.into_records();
        assert_eq!(records.len(), 1);
        records.into_iter().next().unwrap()
    }

    fn int_field(record: &DataRecord, name: &str) -> i64 {
        match record.get(name) {
            Some(DataValue::Int(value)) => *value,
            other => panic!("field {} missing or not an int: {:?}", name, other),
        }
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let mut sink = VecSink::new();

        let empty = BitBuffer::new();
        assert_eq!(decode_fm231(&empty, &mut sink), Err(DecodeAbort::Early));

        let mut two_rows = BitBuffer::new();
        two_rows.add_row(&[0; 9]);
        two_rows.add_row(&[0; 9]);
        assert_eq!(decode_fm231(&two_rows, &mut sink), Err(DecodeAbort::Early));

        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_rejects_wrong_bit_length() {
        let mut sink = VecSink::new();

        for len in [0usize, 8, 10, 16] {
            let mut buffer = BitBuffer::new();
            buffer.add_row(&vec![0u8; len]);
            assert_eq!(
                decode_fm231(&buffer, &mut sink),
                Err(DecodeAbort::Length),
                "length {} should abort",
                len
            );
        }

        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_known_transmissions() {
        // (data, battery_ok, id)
        let cases = [
            (0b000000000, 1, 0),
            (0b000010000, 0, 0),
            (0b000001111, 1, 15),
            (0b111111111, 0, 15),
        ];

        for (data, battery_ok, id) in cases {
            let record = decode_one(data);
            assert_eq!(
                record.get("model"),
                Some(&DataValue::Str(FM231_MODEL.to_string()))
            );
            assert_eq!(int_field(&record, "battery_ok"), battery_ok, "data {:03x}", data);
            assert_eq!(int_field(&record, "id"), id, "data {:03x}", data);
        }
    }

    #[test]
    fn test_field_extraction_exhaustive() {
        for data in 0u16..512 {
            let record = decode_one(data);
            assert_eq!(int_field(&record, "id"), i64::from(data & 0x0F));
            assert_eq!(
                int_field(&record, "battery_ok"),
                i64::from(1 - ((data >> 4) & 1))
            );
        }
    }

    #[test]
    fn test_preamble_bits_ignored() {
        // Same id/battery under every preamble value
        for preamble in 0u16..16 {
            let record = decode_one((preamble << 5) | 0b00101);
            assert_eq!(int_field(&record, "id"), 5);
            assert_eq!(int_field(&record, "battery_ok"), 1);
        }
    }

    #[test]
    fn test_decode_idempotent() {
        let buffer = buffer_from_data(0b010110110);
        let mut first = VecSink::new();
        let mut second = VecSink::new();
        assert_eq!(decode_fm231(&buffer, &mut first), Ok(1));
        assert_eq!(decode_fm231(&buffer, &mut second), Ok(1));

        assert_eq!(first.records(), second.records());
        assert_eq!(
            serde_json::to_string(&first.records()[0]).unwrap(),
            serde_json::to_string(&second.records()[0]).unwrap()
        );
    }

    #[test]
    fn test_descriptor_fields_match_emitted_keys() {
        let record = decode_one(0);
        assert_eq!(record.field_names(), FM231.fields);
    }

    #[test]
    fn test_descriptor_timing() {
        assert_eq!(FM231.modulation, Modulation::OokPwm);
        assert_eq!(FM231.short_width_us, 650);
        assert_eq!(FM231.long_width_us, 1200);
        assert_eq!(FM231.sync_width_us, 3800);
        assert_eq!(FM231.gap_limit_us, 1100);
        assert_eq!(FM231.reset_limit_us, 1100);
        assert_eq!(FM231.tolerance_us, 200);
    }
}
