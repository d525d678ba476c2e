// Device decoder descriptor and result types

use crate::bitbuffer::BitBuffer;
use crate::output::OutputSink;
use thiserror::Error;

/// Non-fatal reasons a decoder rejects a transmission
///
/// Both mean "not my transmission"; the dispatch loop moves on to the next
/// registered decoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeAbort {
    #[error("transmission shape mismatch (unexpected row count)")]
    Early,

    #[error("transmission length mismatch")]
    Length,
}

/// Number of records emitted on success, or the abort reason
pub type DecodeResult = std::result::Result<usize, DecodeAbort>;

/// Decode entry point: reads a bit buffer, emits records through the sink
pub type DecodeFn = fn(&BitBuffer, &mut dyn OutputSink) -> DecodeResult;

/// Modulation scheme the demodulator must apply for a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulation {
    /// On-off keying with pulse-width encoded bits
    OokPwm,
}

/// Static configuration record for one device decoder
///
/// The timing thresholds are calibration constants in microseconds,
/// consumed by the generic OOK/PWM demodulator to recognize the device's
/// waveform. `fields` must exactly match the keys the decode function
/// emits.
#[derive(Debug, Clone, Copy)]
pub struct DeviceDescriptor {
    pub name: &'static str,
    pub modulation: Modulation,
    pub short_width_us: u32,
    pub long_width_us: u32,
    pub sync_width_us: u32,
    pub gap_limit_us: u32,
    pub reset_limit_us: u32,
    pub tolerance_us: u32,
    pub decode_fn: DecodeFn,
    pub fields: &'static [&'static str],
}

impl DeviceDescriptor {
    pub fn decode(&self, bits: &BitBuffer, sink: &mut dyn OutputSink) -> DecodeResult {
        (self.decode_fn)(bits, sink)
    }
}
