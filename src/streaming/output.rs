//! Buffered BED row output.
//!
//! Uses itoa for coordinate formatting to avoid allocating per row.

use crate::error::Result;
use crate::interval::BedInterval;
use crate::vcf::{INFO, REF};
use std::io::{BufWriter, Write};

/// Buffer size for BedWriter (256KB default).
const DEFAULT_BUFFER_SIZE: usize = 256 * 1024;

/// Offset of INFO within the pass-through payload (which starts at REF).
const PAYLOAD_INFO: usize = INFO - REF;

/// Tab-separated BED row writer.
pub struct BedWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> BedWriter<W> {
    /// Create a new BedWriter with default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    /// Create a new BedWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write a full line as-is with newline.
    #[inline]
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write `chrom start end name` followed by the VCF columns from REF
    /// onward, with INFO replaced by `info`.
    pub fn write_row(&mut self, interval: &BedInterval, payload: &[&str], info: &str) -> Result<()> {
        self.writer.write_all(interval.chrom.as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer
            .write_all(self.itoa_buf.format(interval.start).as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer
            .write_all(self.itoa_buf.format(interval.end).as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer.write_all(interval.name.as_bytes())?;

        for (i, &field) in payload.iter().enumerate() {
            self.writer.write_all(b"\t")?;
            let field = if i == PAYLOAD_INFO { info } else { field };
            self.writer.write_all(field.as_bytes())?;
        }

        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line() {
        let mut output = Vec::new();
        {
            let mut writer = BedWriter::new(&mut output);
            writer.write_line("##fileformat=BEDv0.2").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(output, b"##fileformat=BEDv0.2\n");
    }

    #[test]
    fn test_write_row_replaces_info() {
        let mut output = Vec::new();
        let iv = BedInterval::new("chr1", 100, 600, "bnd1");
        let payload = ["N", "[chr1:600[N", "50", "PASS", "SVTYPE=BND", "GT", "0/1"];
        {
            let mut writer = BedWriter::new(&mut output);
            writer
                .write_row(&iv, &payload, "SVTYPE=BND;BND_DETAIL=LOCAL_BND_INV")
                .unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "chr1\t100\t600\tbnd1\tN\t[chr1:600[N\t50\tPASS\tSVTYPE=BND;BND_DETAIL=LOCAL_BND_INV\tGT\t0/1\n"
        );
    }

    #[test]
    fn test_write_row_sites_only() {
        let mut output = Vec::new();
        let iv = BedInterval::new("1", 9, 10, ".");
        let payload = ["A", "T", ".", ".", "AC=1"];
        {
            let mut writer = BedWriter::new(&mut output);
            writer.write_row(&iv, &payload, "AC=1").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(output, b"1\t9\t10\t.\tA\tT\t.\t.\tAC=1\n");
    }
}
