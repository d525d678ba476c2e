//! Output sinks for decoded records
//!
//! Decoders emit each record through an `OutputSink`; serialization and
//! transport are the sink's concern, not the decoder's.

use super::data::DataRecord;
use std::io::Write;

/// Destination for decoded records
pub trait OutputSink {
    fn output(&mut self, record: DataRecord);
}

/// Sink that collects records in memory
#[derive(Debug, Default)]
pub struct VecSink {
    records: Vec<DataRecord>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[DataRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DataRecord> {
        self.records
    }
}

impl OutputSink for VecSink {
    fn output(&mut self, record: DataRecord) {
        self.records.push(record);
    }
}

/// Sink that writes one JSON object per line
pub struct JsonLineSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_record(&mut self, record: &DataRecord) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> OutputSink for JsonLineSink<W> {
    fn output(&mut self, record: DataRecord) {
        if let Err(e) = self.write_record(&record) {
            tracing::warn!("Failed to write record: {}", e);
        }
    }
}
