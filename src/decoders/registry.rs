// Decoder registry for managing device decoders

use std::collections::HashMap;
use std::sync::Mutex;

use super::descriptor::DeviceDescriptor;
use crate::bitbuffer::BitBuffer;
use crate::output::OutputSink;

/// Compile-time submission wrapper for decoder descriptors
///
/// Decoder modules submit their descriptor with `inventory::submit!`;
/// `init_decoders` drains the submissions into the runtime registry.
pub struct RegisteredDecoder(pub &'static DeviceDescriptor);

inventory::collect!(RegisteredDecoder);

/// Global decoder registry
lazy_static::lazy_static! {
    static ref DECODER_REGISTRY: Mutex<HashMap<&'static str, &'static DeviceDescriptor>> =
        Mutex::new(HashMap::new());
}

/// Register a decoder in the global registry
pub fn register_decoder(descriptor: &'static DeviceDescriptor) {
    DECODER_REGISTRY
        .lock()
        .unwrap()
        .insert(descriptor.name, descriptor);
}

/// Get a registered decoder by name
pub fn get_decoder(name: &str) -> Option<&'static DeviceDescriptor> {
    DECODER_REGISTRY.lock().unwrap().get(name).copied()
}

/// List all registered decoders, sorted by name
pub fn list_decoders() -> Vec<&'static DeviceDescriptor> {
    let mut decoders: Vec<_> = DECODER_REGISTRY.lock().unwrap().values().copied().collect();
    decoders.sort_by_key(|d| d.name);
    decoders
}

/// Initialize and register all submitted device decoders
///
/// This function must be called once at application startup to populate
/// the decoder registry. Safe to call more than once.
pub fn init_decoders() {
    for entry in inventory::iter::<RegisteredDecoder> {
        register_decoder(entry.0);
    }
}

/// Run every registered decoder against a bit buffer
///
/// Aborts mean "not my transmission" and are skipped. Returns the total
/// number of records emitted through the sink.
pub fn run_decoders(bits: &BitBuffer, sink: &mut dyn OutputSink) -> usize {
    let mut emitted = 0;
    for decoder in list_decoders() {
        match decoder.decode(bits, sink) {
            Ok(count) => emitted += count,
            Err(abort) => {
                tracing::trace!("{}: {}", decoder.name, abort);
            }
        }
    }
    emitted
}
