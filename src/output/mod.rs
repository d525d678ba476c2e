// Structured decoder output
pub mod data;
pub mod sink;

pub use data::{DataRecord, DataValue};
pub use sink::{JsonLineSink, OutputSink, VecSink};
