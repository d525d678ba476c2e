// RXDECODE-RS: OOK/PWM device decoding for rtl_433-style bit buffers
// Copyright 2026 - Licensed under GPLv3

pub mod bitbuffer;
pub mod decoders;
pub mod output;

// Re-export commonly used types
pub use bitbuffer::{BitBuffer, BitBufferError};
pub use decoders::{
    fm231::FM231, get_decoder, init_decoders, list_decoders, register_decoder, run_decoders,
    DecodeAbort, DecodeFn, DecodeResult, DeviceDescriptor, Modulation,
};
pub use output::{DataRecord, DataValue, JsonLineSink, OutputSink, VecSink};

/// rxdecode version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
