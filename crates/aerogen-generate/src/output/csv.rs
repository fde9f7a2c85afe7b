use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use aerogen_core::record::TableRows;

use crate::errors::GenerationError;
use crate::generator::Dataset;

/// Write one CSV file per entity kind into `dir`, named after the kind
/// key. Returns the total number of bytes written.
pub fn write_dataset_csv(dir: &Path, dataset: &Dataset) -> Result<u64, GenerationError> {
    std::fs::create_dir_all(dir)?;

    let mut bytes = 0_u64;
    for table in dataset.tables() {
        let path = dir.join(format!("{}.csv", table.kind));
        bytes += write_table_csv(&path, &table)?;
    }
    Ok(bytes)
}

fn write_table_csv(path: &Path, table: &TableRows) -> Result<u64, GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(table.header)?;

    for row in &table.rows {
        let record: Vec<&str> = row
            .iter()
            .map(|value| value.as_deref().unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
