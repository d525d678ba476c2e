// Device decoder framework
pub mod descriptor;
pub mod registry;

// Decoders
pub mod fm231;

pub use descriptor::{DecodeAbort, DecodeFn, DecodeResult, DeviceDescriptor, Modulation};
pub use registry::{
    get_decoder, init_decoders, list_decoders, register_decoder, run_decoders, RegisteredDecoder,
};
